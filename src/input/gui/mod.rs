//! GUI input adapter for interactive exploration.
//!
//! Uses winit for the window and event loop and pixels for the framebuffer.

mod app;
pub mod bindings;

pub use app::run_gui;
