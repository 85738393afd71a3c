//! Curve evaluation

use crate::Vector3;

/// Default number of segments used when sampling a curve for drawing
pub const DEFAULT_BEZIER_SEGMENTS: u32 = 32;

/// Linear interpolation `a·(1 − t) + b·t`
#[inline]
pub fn lerp(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    a.lerp(b, t)
}

/// Quadratic Bezier curve by de Casteljau reduction
pub fn bezier(p0: Vector3, p1: Vector3, p2: Vector3, t: f32) -> Vector3 {
    let a = lerp(p0, p1, t);
    let b = lerp(p1, p2, t);
    lerp(a, b, t)
}

/// Sample the curve at `segments + 1` uniform parameters from 0 to 1
///
/// Zero segments is treated as one, giving just the two end points.
pub fn bezier_points(p0: Vector3, p1: Vector3, p2: Vector3, segments: u32) -> Vec<Vector3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| bezier(p0, p1, p2, i as f32 / segments as f32))
        .collect()
}
