//! Input adapters that turn device events into controller commands.

#[cfg(feature = "gui")]
pub mod gui;
