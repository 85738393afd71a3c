//! Quadratic Bezier exercise

use mt3_math::{MathError, Sphere, Vector3};
use mt3_present::{draw_bezier, draw_grid, draw_sphere, Color, DrawSurface};

use super::{Exercise, Frame};
use crate::input::FrameInput;

/// Radius of the marker drawn at each control point
const CONTROL_POINT_RADIUS: f32 = 0.01;

/// Curve through three control points; movement drags the middle one
pub struct BezierExercise {
    pub control_points: [Vector3; 3],
}

impl Default for BezierExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierExercise {
    pub fn new() -> Self {
        Self {
            control_points: [
                Vector3::new(-0.8, 0.58, 1.0),
                Vector3::new(1.76, 1.0, -0.3),
                Vector3::new(0.94, -0.7, 2.3),
            ],
        }
    }
}

impl Exercise for BezierExercise {
    fn name(&self) -> &'static str {
        "bezier"
    }

    fn update(&mut self, input: &FrameInput) {
        self.control_points[1] += input.movement;
    }

    fn draw(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) -> Result<(), MathError> {
        let projector = &frame.projector;
        let style = frame.style;

        draw_grid(surface, projector, style)?;
        draw_bezier(surface, projector, &self.control_points, style.bezier_segments, Color::BLUE)?;
        for &point in &self.control_points {
            let marker = Sphere::new(point, CONTROL_POINT_RADIUS);
            draw_sphere(surface, projector, &marker, style.sphere_subdivisions, Color::BLACK)?;
        }
        Ok(())
    }
}
