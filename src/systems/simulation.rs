//! Frame simulation system
//!
//! Applies one frame of input to:
//! - The camera
//! - The active exercise

use crate::camera::Camera;
use crate::exercises::Exercise;
use crate::input::FrameInput;

/// Counts and advances simulation frames
#[derive(Debug, Default)]
pub struct SimulationSystem {
    frame: u64,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one simulation frame
    pub fn update(&mut self, camera: &mut Camera, exercise: &mut dyn Exercise, input: &FrameInput) {
        camera.apply(input.camera);
        exercise.update(input);
        self.frame += 1;
        log::trace!("simulated frame {} of '{}'", self.frame, exercise.name());
    }
}
