//! Rendering pipeline exercise
//!
//! A triangle is moved with W/S/A/D and spins about Y. Its local vertices go
//! through world · view · projection, the w divide and the viewport before
//! being drawn as screen-space lines.

use mt3_math::{MathError, Matrix4x4, Triangle, Vector3};
use mt3_present::{draw_triangle, vector_screen_printf, Color, DrawSurface, ScreenProjector};

use super::{Exercise, Frame};
use crate::input::FrameInput;

/// Triangle vertices in local space, clockwise seen from -Z
const LOCAL_VERTICES: [Vector3; 3] = [
    Vector3::new(0.0, 0.5, 0.0),
    Vector3::new(0.5, -0.5, 0.0),
    Vector3::new(-0.5, -0.5, 0.0),
];

/// A spinning triangle pushed through the full transform chain
pub struct PipelineExercise {
    pub rotate: Vector3,
    pub translate: Vector3,
    /// Reference pair printed above the triangle
    cross_inputs: (Vector3, Vector3),
}

impl Default for PipelineExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineExercise {
    pub fn new() -> Self {
        Self {
            rotate: Vector3::ZERO,
            translate: Vector3::ZERO,
            cross_inputs: (Vector3::new(1.2, -3.9, 2.5), Vector3::new(2.8, 0.4, -1.3)),
        }
    }

    /// Object-to-world transform for the current pose
    pub fn world_matrix(&self) -> Matrix4x4 {
        Matrix4x4::make_affine(Vector3::ONE, self.rotate, self.translate)
    }

    /// Prepend the world matrix to a camera projector
    fn object_projector(&self, camera: &ScreenProjector) -> ScreenProjector {
        ScreenProjector::new(self.world_matrix() * camera.view_projection, camera.viewport)
    }

    /// Screen-space vertices for the given camera projector
    pub fn screen_vertices(&self, projector: &ScreenProjector) -> Result<[Vector3; 3], MathError> {
        let wvp = self.object_projector(projector);
        let mut screen = [Vector3::ZERO; 3];
        for (dst, &local) in screen.iter_mut().zip(&LOCAL_VERTICES) {
            *dst = wvp.project(local)?;
        }
        Ok(screen)
    }
}

impl Exercise for PipelineExercise {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn update(&mut self, input: &FrameInput) {
        self.translate += input.movement;
        self.rotate.y += input.spin;
    }

    fn draw(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) -> Result<(), MathError> {
        let (v1, v2) = self.cross_inputs;
        vector_screen_printf(surface, frame.labels, 0, 0, &v1.cross(v2), "Cross");

        let [a, b, c] = LOCAL_VERTICES;
        let object = self.object_projector(&frame.projector);
        draw_triangle(surface, &object, &Triangle::new(a, b, c), Color::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::exercises::flat_projector;
    use mt3_present::{CommandRecorder, DrawCommand, LabelLayout, WireframeStyle};

    fn frame_with<'a>(
        projector: ScreenProjector,
        labels: &'a LabelLayout,
        style: &'a WireframeStyle,
    ) -> Frame<'a> {
        Frame { projector, labels, style }
    }

    #[test]
    fn test_draws_cross_label_and_three_edges() {
        let labels = LabelLayout::default();
        let style = WireframeStyle::default();
        let mut recorder = CommandRecorder::new();
        PipelineExercise::new()
            .draw(&frame_with(flat_projector(), &labels, &style), &mut recorder)
            .unwrap();

        assert_eq!(recorder.texts(), vec!["4.07", "8.56", "11.40", "Cross"]);
        assert_eq!(recorder.line_count(), 3);
    }

    #[test]
    fn test_flat_projection_pixels() {
        let labels = LabelLayout::default();
        let style = WireframeStyle::default();
        let mut recorder = CommandRecorder::new();
        PipelineExercise::new()
            .draw(&frame_with(flat_projector(), &labels, &style), &mut recorder)
            .unwrap();

        // 400px over 8 units: the apex (0, 0.5) lands 25px above the center
        assert_eq!(
            recorder.commands()[4],
            DrawCommand::Line { x1: 200, y1: 175, x2: 225, y2: 225, color: Color::RED }
        );
    }

    #[test]
    fn test_movement_shifts_screen_vertices() {
        let mut exercise = PipelineExercise::new();
        let projector = flat_projector();
        let before = exercise.screen_vertices(&projector).unwrap();

        exercise.update(&FrameInput { movement: Vector3::new(1.0, 0.0, 0.0), ..Default::default() });
        let after = exercise.screen_vertices(&projector).unwrap();

        for (b, a) in before.iter().zip(&after) {
            assert!((a.x - b.x - 50.0).abs() < 1e-3);
            assert!((a.y - b.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_triangle_is_centered_in_front_of_camera() {
        let camera = Camera::new(Vector3::ONE, Vector3::ZERO, Vector3::new(0.0, 0.0, -10.0));
        let vp = camera.view_projection(1280.0 / 720.0, 0.45, 0.1, 100.0).unwrap();
        let viewport = Matrix4x4::make_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);

        let screen = PipelineExercise::new()
            .screen_vertices(&ScreenProjector::new(vp, viewport))
            .unwrap();
        // apex straight above the center, base symmetric about it
        assert!((screen[0].x - 640.0).abs() < 1e-2);
        assert!(screen[0].y < 360.0);
        assert!((screen[1].x - 640.0 + screen[2].x - 640.0).abs() < 1e-2);
    }

    #[test]
    fn test_half_turn_mirrors_x() {
        let mut exercise = PipelineExercise::new();
        exercise.update(&FrameInput { spin: std::f32::consts::PI, ..Default::default() });
        let screen = exercise.screen_vertices(&flat_projector()).unwrap();
        // vertex 1 (0.5, -0.5) swings to x = -0.5
        assert!((screen[1].x - 175.0).abs() < 1e-3);
    }
}
