//! Intersection tests
//!
//! Every test is a pure predicate. Tests that have to invert a matrix or
//! normalize a vector return `Result` so degenerate input is reported instead
//! of silently answering `false`.

use crate::primitives::{Aabb, Obb, Plane, Segment, Sphere, Triangle};
use crate::{MathError, Vector3};

/// Direction components below this are treated as parallel to a slab
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Test sphere vs plane
///
/// Collides when the center is within `radius` of the plane on either side.
pub fn sphere_vs_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(sphere.center).abs() <= sphere.radius
}

/// Test sphere vs sphere (touching counts as colliding)
pub fn sphere_vs_sphere(a: &Sphere, b: &Sphere) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// Test segment vs AABB with the slab method
///
/// The parametric interval starts as `[0, 1]`, so only hits within the
/// segment's own extent count.
pub fn segment_vs_aabb(segment: &Segment, aabb: &Aabb) -> bool {
    let origin = segment.origin.to_array();
    let diff = segment.diff.to_array();
    let min = aabb.min.to_array();
    let max = aabb.max.to_array();

    let mut t_min = 0.0f32;
    let mut t_max = 1.0f32;

    for axis in 0..3 {
        if diff[axis].abs() < PARALLEL_EPSILON {
            // Parallel to this pair of slab planes: must already be between them
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return false;
            }
            continue;
        }

        let mut t1 = (min[axis] - origin[axis]) / diff[axis];
        let mut t2 = (max[axis] - origin[axis]) / diff[axis];
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_min > t_max {
            return false;
        }
    }

    true
}

/// Test segment vs OBB by moving the segment into the box's local frame
///
/// Fails with [`MathError::Singular`] when the OBB axes are degenerate.
pub fn segment_vs_obb(segment: &Segment, obb: &Obb) -> Result<bool, MathError> {
    let to_local = obb.world_matrix().inverse()?;
    let local_origin = to_local.transform_point(segment.origin)?;
    let local_end = to_local.transform_point(segment.end())?;

    let local_segment = Segment::from_points(local_origin, local_end);
    let local_aabb = Aabb::new(-obb.size, obb.size);
    Ok(segment_vs_aabb(&local_segment, &local_aabb))
}

/// Test segment vs plane
///
/// A segment parallel to the plane never collides, even when it lies in it.
pub fn segment_vs_plane(segment: &Segment, plane: &Plane) -> bool {
    plane_hit_parameter(segment, plane).is_some()
}

/// Parameter `t` in `[0, 1]` where the segment crosses the plane
fn plane_hit_parameter(segment: &Segment, plane: &Plane) -> Option<f32> {
    let dot = plane.normal.dot(segment.diff);
    if dot == 0.0 {
        return None;
    }
    let t = (plane.distance - plane.normal.dot(segment.origin)) / dot;
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Test segment vs triangle
///
/// Fails with [`MathError::ZeroLength`] for a degenerate triangle.
pub fn segment_vs_triangle(segment: &Segment, triangle: &Triangle) -> Result<bool, MathError> {
    let plane = triangle.plane()?;
    let Some(t) = plane_hit_parameter(segment, &plane) else {
        return Ok(false);
    };
    let point = segment.point_at(t);

    let [a, b, c] = triangle.vertices;
    let inside = [(a, b), (b, c), (c, a)]
        .iter()
        .all(|&(from, to)| edge_side(from, to, point, plane.normal) >= 0.0);
    Ok(inside)
}

/// Positive when `point` is on the inner side of edge `from → to`
fn edge_side(from: Vector3, to: Vector3, point: Vector3, normal: Vector3) -> f32 {
    (to - from).cross(point - to).dot(normal)
}

/// Test AABB vs AABB (touching faces count as overlap)
pub fn aabb_vs_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x <= b.max.x
        && a.max.x >= b.min.x
        && a.min.y <= b.max.y
        && a.max.y >= b.min.y
        && a.min.z <= b.max.z
        && a.max.z >= b.min.z
}

/// Test AABB vs sphere via the closest point in the box
pub fn aabb_vs_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let closest = aabb.closest_point(sphere.center);
    closest.distance(sphere.center) <= sphere.radius
}

/// Test OBB vs sphere by moving the sphere center into the box's local frame
pub fn obb_vs_sphere(obb: &Obb, sphere: &Sphere) -> Result<bool, MathError> {
    let to_local = obb.world_matrix().inverse()?;
    let local_center = to_local.transform_point(sphere.center)?;
    let local_aabb = Aabb::new(-obb.size, obb.size);
    Ok(aabb_vs_sphere(&local_aabb, &Sphere::new(local_center, sphere.radius)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn unit_box() -> Aabb {
        Aabb::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::ONE)
    }

    #[test]
    fn test_sphere_vs_plane() {
        let sphere = Sphere::new(Vector3::ZERO, 0.5);
        assert!(!sphere_vs_plane(&sphere, &Plane::new(Vector3::Y, 0.6)));
        assert!(sphere_vs_plane(&sphere, &Plane::new(Vector3::Y, 0.4)));
        // below the plane counts too
        assert!(sphere_vs_plane(&sphere, &Plane::new(Vector3::Y, -0.4)));
        // exactly touching
        assert!(sphere_vs_plane(&sphere, &Plane::new(Vector3::Y, 0.5)));
    }

    #[test]
    fn test_sphere_vs_sphere() {
        let a = Sphere::new(Vector3::ZERO, 1.0);
        assert!(sphere_vs_sphere(&a, &Sphere::new(Vector3::new(1.5, 0.0, 0.0), 0.5)));
        assert!(!sphere_vs_sphere(&a, &Sphere::new(Vector3::new(1.6, 0.0, 0.0), 0.5)));
    }

    #[test]
    fn test_segment_vs_aabb_hit_and_miss() {
        let segment = Segment::new(Vector3::new(-2.0, -1.0, 0.0), Vector3::new(3.0, 2.0, 2.0));
        assert!(segment_vs_aabb(&segment, &unit_box()));

        let far = Aabb::new(Vector3::new(10.0, 10.0, 10.0), Vector3::new(11.0, 11.0, 11.0));
        assert!(!segment_vs_aabb(&segment, &far));
    }

    #[test]
    fn test_segment_vs_aabb_stops_at_segment_end() {
        // the infinite line hits the box, the segment ends before it
        let segment = Segment::new(Vector3::new(-5.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
        assert!(!segment_vs_aabb(&segment, &unit_box()));

        // and the box is behind the origin
        let behind = Segment::new(Vector3::new(3.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
        assert!(!segment_vs_aabb(&behind, &unit_box()));
    }

    #[test]
    fn test_segment_vs_aabb_parallel_axes() {
        // parallel to Y and Z slabs, inside them
        let inside = Segment::new(Vector3::new(-3.0, 0.5, 0.5), Vector3::new(6.0, 0.0, 0.0));
        assert!(segment_vs_aabb(&inside, &unit_box()));

        // parallel to the Y slab but above it
        let above = Segment::new(Vector3::new(-3.0, 2.0, 0.0), Vector3::new(6.0, 0.0, 0.0));
        assert!(!segment_vs_aabb(&above, &unit_box()));
    }

    #[test]
    fn test_segment_vs_aabb_fully_inside() {
        let segment = Segment::new(Vector3::new(-0.5, 0.0, 0.0), Vector3::new(0.5, 0.5, 0.0));
        assert!(segment_vs_aabb(&segment, &unit_box()));
    }

    #[test]
    fn test_segment_vs_obb() {
        let obb = Obb::from_rotation(
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, FRAC_PI_4, 0.0),
            Vector3::new(0.5, 0.5, 0.5),
        );
        let hit = Segment::new(Vector3::new(-3.0, 0.0, 0.0), Vector3::new(4.0, 0.0, 0.0));
        assert_eq!(segment_vs_obb(&hit, &obb), Ok(true));

        let miss = Segment::new(Vector3::new(-3.0, 2.0, 0.0), Vector3::new(4.0, 0.0, 0.0));
        assert_eq!(segment_vs_obb(&miss, &obb), Ok(false));
    }

    #[test]
    fn test_segment_vs_obb_uses_rotation() {
        // a thin box rotated 45 degrees about Y: its corner reaches x = 0.5 * sqrt(2)
        let obb = Obb::from_rotation(
            Vector3::ZERO,
            Vector3::new(0.0, FRAC_PI_4, 0.0),
            Vector3::new(0.5, 0.1, 0.5),
        );
        let ray = Segment::new(Vector3::new(0.65, 0.0, -1.0), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(segment_vs_obb(&ray, &obb), Ok(true));
        // the same ray misses the unrotated box
        let axis_aligned = Obb::new(Vector3::ZERO, [Vector3::X, Vector3::Y, Vector3::Z], obb.size);
        assert_eq!(segment_vs_obb(&ray, &axis_aligned), Ok(false));
    }

    #[test]
    fn test_segment_vs_obb_degenerate_axes_fails() {
        let obb = Obb::new(Vector3::ZERO, [Vector3::X, Vector3::X, Vector3::Z], Vector3::ONE);
        let segment = Segment::new(Vector3::ZERO, Vector3::ONE);
        assert!(matches!(segment_vs_obb(&segment, &obb), Err(MathError::Singular { .. })));
    }

    #[test]
    fn test_segment_vs_plane() {
        let plane = Plane::new(Vector3::Y, 1.0);
        let crossing = Segment::new(Vector3::ZERO, Vector3::new(0.0, 2.0, 0.0));
        let short = Segment::new(Vector3::ZERO, Vector3::new(0.0, 0.5, 0.0));
        let parallel = Segment::new(Vector3::new(0.0, 1.0, 0.0), Vector3::X);
        assert!(segment_vs_plane(&crossing, &plane));
        assert!(!segment_vs_plane(&short, &plane));
        assert!(!segment_vs_plane(&parallel, &plane));
    }

    #[test]
    fn test_segment_vs_triangle() {
        let triangle = Triangle::new(
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let through = Segment::new(Vector3::new(0.0, 0.3, -1.0), Vector3::new(0.0, 0.0, 2.0));
        let beside = Segment::new(Vector3::new(0.9, 0.9, -1.0), Vector3::new(0.0, 0.0, 2.0));
        let short = Segment::new(Vector3::new(0.0, 0.3, -1.0), Vector3::new(0.0, 0.0, 0.5));
        assert_eq!(segment_vs_triangle(&through, &triangle), Ok(true));
        assert_eq!(segment_vs_triangle(&beside, &triangle), Ok(false));
        assert_eq!(segment_vs_triangle(&short, &triangle), Ok(false));
    }

    #[test]
    fn test_segment_vs_degenerate_triangle_fails() {
        let triangle = Triangle::new(Vector3::ZERO, Vector3::X, Vector3::X * 2.0);
        let segment = Segment::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(segment_vs_triangle(&segment, &triangle), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_aabb_vs_aabb() {
        let a = unit_box();
        let touching = Aabb::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        let apart = Aabb::new(Vector3::new(1.1, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        assert!(aabb_vs_aabb(&a, &touching));
        assert!(!aabb_vs_aabb(&a, &apart));
    }

    #[test]
    fn test_aabb_vs_sphere() {
        let a = unit_box();
        assert!(aabb_vs_sphere(&a, &Sphere::new(Vector3::new(1.5, 0.0, 0.0), 0.6)));
        assert!(!aabb_vs_sphere(&a, &Sphere::new(Vector3::new(1.5, 1.5, 0.0), 0.6)));
        // center inside the box
        assert!(aabb_vs_sphere(&a, &Sphere::new(Vector3::ZERO, 0.1)));
    }

    #[test]
    fn test_obb_vs_sphere() {
        let obb = Obb::from_rotation(
            Vector3::ZERO,
            Vector3::new(0.0, 0.0, FRAC_PI_4),
            Vector3::new(1.0, 0.2, 1.0),
        );
        // the box's local X points along (1, 1, 0) / sqrt(2)
        let along_axis = Sphere::new(Vector3::new(0.8, 0.8, 0.0), 0.2);
        let off_axis = Sphere::new(Vector3::new(0.8, -0.8, 0.0), 0.2);
        assert_eq!(obb_vs_sphere(&obb, &along_axis), Ok(true));
        assert_eq!(obb_vs_sphere(&obb, &off_axis), Ok(false));
    }
}
