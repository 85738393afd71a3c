//! Matrix operation table

use mt3_math::{MathError, Matrix4x4, Vector3};
use mt3_present::{matrix_screen_printf, vector_screen_printf, DrawSurface};

use super::{Exercise, Frame};
use crate::input::FrameInput;

/// Prints matrix algebra results for two fixed matrices, plus an affine
/// transform built from a scale, rotation and translation
pub struct MatrixExercise {
    pub m1: Matrix4x4,
    pub m2: Matrix4x4,
    pub scale: Vector3,
    pub rotate: Vector3,
    pub translate: Vector3,
    pub point: Vector3,
}

impl Default for MatrixExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixExercise {
    pub fn new() -> Self {
        Self {
            m1: Matrix4x4::new([
                [3.2, 0.7, 9.6, 4.4],
                [5.5, 1.3, 7.8, 2.1],
                [6.9, 8.0, 2.6, 1.0],
                [0.5, 7.2, 5.1, 3.3],
            ]),
            m2: Matrix4x4::new([
                [4.1, 6.5, 3.3, 2.2],
                [8.8, 0.6, 9.9, 7.7],
                [1.1, 5.5, 6.6, 0.0],
                [3.3, 9.9, 8.8, 2.2],
            ]),
            scale: Vector3::new(1.2, 0.79, -2.1),
            rotate: Vector3::new(0.4, 1.43, -0.8),
            translate: Vector3::new(2.7, -4.15, 1.57),
            point: Vector3::new(1.5, 1.5, 1.5),
        }
    }
}

impl Exercise for MatrixExercise {
    fn name(&self) -> &'static str {
        "matrix"
    }

    /// Movement nudges the translation, spin turns the Y rotation
    fn update(&mut self, input: &FrameInput) {
        self.translate += input.movement;
        self.rotate.y += input.spin;
    }

    fn draw(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) -> Result<(), MathError> {
        let layout = frame.labels;
        let affine = Matrix4x4::make_affine(self.scale, self.rotate, self.translate);

        let tables = [
            (self.m1 + self.m2, "Add"),
            (self.m1 - self.m2, "Subtract"),
            (self.m1 * self.m2, "Multiply"),
            (self.m1.inverse()?, "inverseM1"),
            (self.m2.inverse()?, "inverseM2"),
            (self.m1.transpose(), "transposeM1"),
            (self.m2.transpose(), "transposeM2"),
            (Matrix4x4::IDENTITY, "identity"),
            (affine, "worldMatrix"),
        ];

        // five rows per table, two tables side by side
        let table_width = layout.column_width * 5;
        let table_height = layout.row_height * 5;
        for (index, (matrix, label)) in tables.iter().enumerate() {
            let index = index as i32;
            let x = (index % 2) * table_width;
            let y = (index / 2) * table_height;
            matrix_screen_printf(surface, layout, x, y, matrix, label);
        }

        let transformed = affine.transform_point(self.point)?;
        let y = (tables.len() as i32 + 1) / 2 * table_height;
        vector_screen_printf(surface, layout, 0, y, &transformed, "transformed");
        Ok(())
    }
}
