//! The MT3 exercises
//!
//! Each exercise owns a little state, advances it from [`FrameInput`] and
//! draws one frame onto a [`DrawSurface`]. All the math lives in `mt3_math`;
//! the exercises only wire it to labels and wireframes.

mod bezier;
mod collision;
mod matrix;
mod pipeline;
mod vector;

pub use bezier::BezierExercise;
pub use collision::CollisionExercise;
pub use matrix::MatrixExercise;
pub use pipeline::PipelineExercise;
pub use vector::VectorExercise;

use std::fmt;
use std::str::FromStr;

use mt3_math::MathError;
use mt3_present::{DrawSurface, LabelLayout, ScreenProjector, WireframeStyle};

use crate::input::FrameInput;

/// Everything an exercise needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Camera view · projection and viewport
    pub projector: ScreenProjector,
    pub labels: &'a LabelLayout,
    pub style: &'a WireframeStyle,
}

/// A single interactive exercise
pub trait Exercise {
    /// Short name used on the command line
    fn name(&self) -> &'static str;

    /// Advance the exercise state by one frame
    fn update(&mut self, input: &FrameInput);

    /// Draw the current state
    fn draw(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) -> Result<(), MathError>;
}

/// The available exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    Vector,
    Matrix,
    Pipeline,
    Collision,
    Bezier,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 5] = [
        ExerciseKind::Vector,
        ExerciseKind::Matrix,
        ExerciseKind::Pipeline,
        ExerciseKind::Collision,
        ExerciseKind::Bezier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExerciseKind::Vector => "vector",
            ExerciseKind::Matrix => "matrix",
            ExerciseKind::Pipeline => "pipeline",
            ExerciseKind::Collision => "collision",
            ExerciseKind::Bezier => "bezier",
        }
    }

    /// Create the exercise in its starting state
    pub fn build(self) -> Box<dyn Exercise> {
        match self {
            ExerciseKind::Vector => Box::new(VectorExercise::new()),
            ExerciseKind::Matrix => Box::new(MatrixExercise::new()),
            ExerciseKind::Pipeline => Box::new(PipelineExercise::new()),
            ExerciseKind::Collision => Box::new(CollisionExercise::new()),
            ExerciseKind::Bezier => Box::new(BezierExercise::new()),
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name that does not match any exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExercise(pub String);

impl fmt::Display for UnknownExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = ExerciseKind::ALL.iter().map(|k| k.name()).collect();
        write!(f, "Unknown exercise '{}' (expected one of {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownExercise {}

impl FromStr for ExerciseKind {
    type Err = UnknownExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownExercise(s.to_string()))
    }
}

/// Orthographic frame over `[-4, 4]` mapped onto a 400x400 viewport
#[cfg(test)]
pub(crate) fn flat_projector() -> ScreenProjector {
    use mt3_math::Matrix4x4;

    ScreenProjector::new(
        Matrix4x4::make_orthographic(-4.0, 4.0, 4.0, -4.0, -10.0, 10.0),
        Matrix4x4::make_viewport(0.0, 0.0, 400.0, 400.0, 0.0, 1.0),
    )
}
