//! Port definitions for the frame controller.
//!
//! Traits the controller calls out through to reach the display surface.

pub mod presenter;
