//! Input handling module
//!
//! Maps held keys to the per-frame input that drives the camera and the
//! active exercise.

mod input_mapper;

pub use input_mapper::{FrameInput, InputAction, InputMapper, UnknownKey};
