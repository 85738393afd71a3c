//! Presentation adapters for MT3 math results
//!
//! This crate sits between the math core and whatever owns the window. It
//! turns vectors and matrices into two-decimal text labels and world-space
//! primitives into pixel-space line segments, all through the
//! [`DrawSurface`] trait.
//!
//! ## Modules
//!
//! - [`color`] - packed `0xRRGGBBAA` colors
//! - [`surface`] - the draw surface trait and an in-memory recorder
//! - [`labels`] - vector/matrix/scalar label tables
//! - [`wireframe`] - grid, sphere, plane, triangle, box and curve line emitters

pub mod color;
pub mod labels;
pub mod surface;
pub mod wireframe;

pub use color::Color;
pub use labels::{matrix_screen_printf, scalar_screen_printf, vector_screen_printf, LabelLayout};
pub use surface::{CommandRecorder, DrawCommand, DrawSurface};
pub use wireframe::{
    draw_aabb, draw_bezier, draw_grid, draw_line_3d, draw_obb, draw_plane, draw_segment,
    draw_sphere, draw_triangle, ScreenProjector, WireframeStyle,
};
