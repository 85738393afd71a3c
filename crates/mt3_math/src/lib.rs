//! 3D Mathematics Library
//!
//! Vector, matrix, projection, intersection and curve math for the MT3
//! exercises. Everything here is a pure function over `Copy` value types.
//!
//! ## Conventions
//!
//! [`Matrix4x4`] is row-major and uses row vectors: `v' = v · M`, and
//! `A * B` applies `A` first. Affine transforms compose as
//! scale · rotate · translate and the camera chain as
//! world · view · projection · viewport.
//!
//! ## Core Types
//!
//! - [`Vector3`] - 3D point or direction
//! - [`Matrix4x4`] - 4x4 homogeneous transform
//! - [`MathError`] - degenerate input (singular matrix, zero w, zero length)
//!
//! ## Primitives
//!
//! - [`Segment`], [`Plane`], [`Sphere`], [`Aabb`], [`Obb`], [`Triangle`]

mod error;
mod vector3;
pub mod matrix4x4;
pub mod projection;
pub mod primitives;
pub mod collision;
pub mod curve;

pub use error::MathError;
pub use vector3::Vector3;
pub use matrix4x4::Matrix4x4;
pub use projection::world_to_screen;
pub use primitives::{Aabb, Obb, Plane, Segment, Sphere, Triangle};
pub use collision::{
    aabb_vs_aabb, aabb_vs_sphere, obb_vs_sphere, segment_vs_aabb, segment_vs_obb,
    segment_vs_plane, segment_vs_triangle, sphere_vs_plane, sphere_vs_sphere,
};
pub use curve::{bezier, bezier_points, lerp};
