//! Application layer: the frame controller state machine, the command set
//! it accepts and the ports it presents frames through.

pub mod commands;
pub mod frame_controller;
pub mod ports;
