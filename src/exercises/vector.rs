//! Vector operation table

use mt3_math::{MathError, Vector3};
use mt3_present::{scalar_screen_printf, vector_screen_printf, DrawSurface};

use super::{Exercise, Frame};
use crate::input::FrameInput;

/// Prints every vector operation applied to two fixed vectors
pub struct VectorExercise {
    pub v1: Vector3,
    pub v2: Vector3,
    pub k: f32,
}

impl Default for VectorExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorExercise {
    pub fn new() -> Self {
        Self {
            v1: Vector3::new(1.2, -3.9, 2.5),
            v2: Vector3::new(2.8, 0.4, -1.3),
            k: 4.0,
        }
    }
}

impl Exercise for VectorExercise {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn update(&mut self, _input: &FrameInput) {}

    fn draw(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) -> Result<(), MathError> {
        let layout = frame.labels;
        let (v1, v2) = (self.v1, self.v2);
        let row = |index: i32| index * layout.row_height;

        vector_screen_printf(surface, layout, 0, row(0), &(v1 + v2), " : Add");
        vector_screen_printf(surface, layout, 0, row(1), &(v1 - v2), " : Subtract");
        vector_screen_printf(surface, layout, 0, row(2), &(v1 * self.k), " : Multiply");
        scalar_screen_printf(surface, layout, 0, row(3), v1.dot(v2), " : Dot");
        scalar_screen_printf(surface, layout, 0, row(4), v1.length(), " : Length");
        vector_screen_printf(surface, layout, 0, row(5), &v2.normalize()?, " : Normalize");
        vector_screen_printf(surface, layout, 0, row(6), &v1.cross(v2), " : Cross");
        vector_screen_printf(surface, layout, 0, row(7), &v1.project(v2)?, " : Project");
        vector_screen_printf(surface, layout, 0, row(8), &v1.perpendicular(), " : Perpendicular");
        Ok(())
    }
}
