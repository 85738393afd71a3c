//! Projection and viewport matrices
//!
//! The world → screen chain is
//! `world · view · projection` (then divide by w) `· viewport`,
//! where `view` is the inverse of the camera's world matrix.

use crate::{MathError, Matrix4x4, Vector3};

impl Matrix4x4 {
    /// Perspective projection with a vertical field of view in radians
    ///
    /// Maps view-space depth `near..far` to `0..1` after the w divide; the
    /// perspective term sits at `[2][3]`.
    pub fn make_perspective_fov(fov_y: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Self {
        let cot = 1.0 / (fov_y / 2.0).tan();
        let depth = far_clip / (far_clip - near_clip);

        Self::new([
            [cot / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, cot, 0.0, 0.0],
            [0.0, 0.0, depth, 1.0],
            [0.0, 0.0, -near_clip * depth, 0.0],
        ])
    }

    /// Orthographic projection of the box `left..right`, `bottom..top`, `near..far`
    ///
    /// Maps x and y to `[-1, 1]` and z to `[0, 1]`.
    pub fn make_orthographic(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        Self::new([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far_clip - near_clip), 0.0],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                near_clip / (near_clip - far_clip),
                1.0,
            ],
        ])
    }

    /// Viewport transform from NDC to pixels with a top-left origin
    ///
    /// NDC y = +1 lands on `top`, so the Y scale is negative.
    pub fn make_viewport(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        Self::new([
            [width / 2.0, 0.0, 0.0, 0.0],
            [0.0, -height / 2.0, 0.0, 0.0],
            [0.0, 0.0, max_depth - min_depth, 0.0],
            [left + width / 2.0, top + height / 2.0, min_depth, 1.0],
        ])
    }
}

/// Map a world-space point to screen space
///
/// `view_projection` already includes the world matrix when the point is in
/// local space. The NDC point is divided by w before the viewport is applied.
pub fn world_to_screen(
    point: Vector3,
    view_projection: &Matrix4x4,
    viewport: &Matrix4x4,
) -> Result<Vector3, MathError> {
    let ndc = view_projection.transform_point(point)?;
    viewport.transform_point(ndc)
}
