//! Windowed host: owns the window and event loop and drives one
//! `FrameController` from the main thread.

use std::error::Error;

use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::controllers::commands::Command;
use crate::controllers::frame_controller::{FrameController, RenderOutcome};
use crate::core::data::explorer_config::ExplorerConfig;
use crate::input::gui::bindings::{command_for_key, command_for_mouse};
use crate::presenters::pixels::presenter::PixelsPresenter;

type Controller = FrameController<PixelsPresenter>;

fn dispatch(controller: &mut Controller, command: Command, window: &Window, elwt: &EventLoopWindowTarget<()>) {
    if let Err(err) = controller.apply(command) {
        log::warn!("{command:?} rejected: {err}");
    }

    if controller.is_terminated() {
        elwt.exit();
    } else {
        window.request_redraw();
    }
}

fn redraw(controller: &mut Controller, elwt: &EventLoopWindowTarget<()>) {
    match controller.render() {
        Ok(RenderOutcome::Presented { duration }) => {
            log::info!("frame {} rendered in {} ms", controller.frames_presented(), duration.as_millis());
        }
        Ok(RenderOutcome::Skipped) => {
            if let Err(err) = controller.presenter_mut().redisplay() {
                log::error!("redisplay failed: {err}");
                elwt.exit();
            }
        }
        Err(err) => {
            log::error!("render failed: {err}");
            elwt.exit();
        }
    }
}

/// Opens a window of the configured raster size and runs until the user quits.
pub fn run_gui(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let dims = config.dimensions()?;
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(PhysicalSize::new(dims.width(), dims.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, dims)?;
    let mut controller = FrameController::new(config, presenter)?;

    log::info!(
        "exploring {}x{} raster, {} iterations, {} workers",
        dims.width(),
        dims.height(),
        config.max_iterations,
        config.parallelism
    );

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                controller.quit();
                elwt.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(command) = command_for_key(&logical_key) {
                    dispatch(&mut controller, command, window, elwt);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(command) = command_for_mouse(button) {
                    dispatch(&mut controller, command, window, elwt);
                }
            }
            WindowEvent::Resized(size) => {
                // the raster stays fixed; pixels scales it onto the new surface
                if let Err(err) = controller.presenter_mut().resize_surface(size.width, size.height) {
                    log::error!("surface resize failed: {err}");
                    elwt.exit();
                    return;
                }
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => redraw(&mut controller, elwt),
            _ => {}
        }
    })?;

    Ok(())
}
