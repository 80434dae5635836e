use winit::event::MouseButton;
use winit::keyboard::{Key, NamedKey};

use crate::controllers::commands::{Command, PanDirection};

/// Keyboard events the explorer reacts to; everything else is ignored.
pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Command::Quit),
        Key::Named(NamedKey::ArrowUp) => Some(Command::Pan(PanDirection::Up)),
        Key::Named(NamedKey::ArrowDown) => Some(Command::Pan(PanDirection::Down)),
        Key::Named(NamedKey::ArrowLeft) => Some(Command::Pan(PanDirection::Left)),
        Key::Named(NamedKey::ArrowRight) => Some(Command::Pan(PanDirection::Right)),
        Key::Character(text) => text.chars().next().and_then(Command::from_key),
        _ => None,
    }
}

pub fn command_for_mouse(button: MouseButton) -> Option<Command> {
    match button {
        MouseButton::Left => Some(Command::ZoomIn),
        MouseButton::Right => Some(Command::ZoomOut),
        _ => None,
    }
}
