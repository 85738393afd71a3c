//! MT3 exercise host
//!
//! Loads configuration, owns the camera and runs the exercises one frame at a
//! time against any [`mt3_present::DrawSurface`].

pub mod camera;
pub mod config;
pub mod exercises;
pub mod input;
pub mod systems;

pub use camera::{Camera, CameraInput};
pub use config::{AppConfig, ConfigError};
pub use exercises::{Exercise, ExerciseKind, Frame};
pub use input::{FrameInput, InputMapper};
pub use systems::{RenderSystem, SimulationSystem};
