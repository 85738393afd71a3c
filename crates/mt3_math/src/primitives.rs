//! Geometric primitives
//!
//! These are lightweight value types. None of the constructors validate their
//! input: AABB min/max ordering and OBB axis orthonormality are the caller's
//! responsibility, see [`Aabb::normalized`] and [`Obb::from_rotation`].

use serde::{Deserialize, Serialize};

use crate::{MathError, Matrix4x4, Vector3};

/// A line segment from `origin` to `origin + diff`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub origin: Vector3,
    /// Vector from the start point to the end point
    pub diff: Vector3,
}

impl Segment {
    /// Create a segment from an origin and a difference vector
    pub fn new(origin: Vector3, diff: Vector3) -> Self {
        Self { origin, diff }
    }

    /// Create a segment between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Self::new(start, end - start)
    }

    /// End point
    pub fn end(&self) -> Vector3 {
        self.origin + self.diff
    }

    /// Point at parameter `t` (0 = origin, 1 = end)
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.diff * t
    }

    /// Closest point on the segment to `point`
    ///
    /// A zero-length segment returns its origin.
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let len_sq = self.diff.length_squared();
        if len_sq == 0.0 {
            return self.origin;
        }
        let t = ((point - self.origin).dot(self.diff) / len_sq).clamp(0.0, 1.0);
        self.point_at(t)
    }
}

/// An infinite plane `normal · p = distance`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal pointing to the positive side
    pub normal: Vector3,
    /// Signed distance from the origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a unit normal and a distance
    pub fn new(normal: Vector3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through three points, normal from `(b - a) × (c - b)`
    ///
    /// Fails with [`MathError::ZeroLength`] when the points are collinear.
    pub fn from_points(a: Vector3, b: Vector3, c: Vector3) -> Result<Self, MathError> {
        let normal = (b - a).cross(c - b).normalize()?;
        Ok(Self::new(normal, normal.dot(a)))
    }

    /// Signed distance from the plane to a point (positive on the normal side)
    pub fn signed_distance(&self, point: Vector3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Point on the plane nearest to the origin
    pub fn center(&self) -> Vector3 {
        self.normal * self.distance
    }

    /// Four points on the plane at `extent` from its center, in winding order
    ///
    /// Used to draw a finite patch of the plane. Fails only for a zero normal.
    pub fn corner_points(&self, extent: f32) -> Result<[Vector3; 4], MathError> {
        let center = self.center();
        let tangent = self.normal.perpendicular().normalize()?;
        let bitangent = self.normal.cross(tangent);
        Ok([
            center + tangent * extent,
            center + bitangent * extent,
            center - tangent * extent,
            center - bitangent * extent,
        ])
    }
}

/// A sphere
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere
    pub fn new(center: Vector3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vector3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// An axis-aligned bounding box
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vector3,
    /// Maximum corner
    pub max: Vector3,
}

impl Aabb {
    /// Create a new AABB from min and max corners (not reordered)
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vector3, half_extents: Vector3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Swap min and max per axis where they are out of order
    pub fn normalized(&self) -> Self {
        Self::new(
            self.min.min_components(self.max),
            self.min.max_components(self.max),
        )
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vector3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        point.clamp_components(self.min, self.max)
    }

    /// The 8 corners, bit 0 = x, bit 1 = y, bit 2 = z (0 = min, 1 = max)
    pub fn corners(&self) -> [Vector3; 8] {
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}

/// An oriented bounding box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    pub center: Vector3,
    /// Local X, Y and Z axes; must be orthonormal
    pub orientations: [Vector3; 3],
    /// Half-extent along each local axis
    pub size: Vector3,
}

impl Default for Obb {
    fn default() -> Self {
        Self {
            center: Vector3::ZERO,
            orientations: [Vector3::X, Vector3::Y, Vector3::Z],
            size: Vector3::ONE,
        }
    }
}

impl Obb {
    /// Create an OBB from explicit axes
    pub fn new(center: Vector3, orientations: [Vector3; 3], size: Vector3) -> Self {
        Self { center, orientations, size }
    }

    /// Create an OBB whose axes are the rows of an X·Y·Z Euler rotation
    pub fn from_rotation(center: Vector3, rotate: Vector3, size: Vector3) -> Self {
        let r = Matrix4x4::make_rotate(rotate);
        let axis = |row: usize| Vector3::new(r.m[row][0], r.m[row][1], r.m[row][2]);
        Self::new(center, [axis(0), axis(1), axis(2)], size)
    }

    /// Local → world matrix: axes as rows 0..2, center as row 3
    pub fn world_matrix(&self) -> Matrix4x4 {
        let [x, y, z] = self.orientations;
        Matrix4x4::new([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [self.center.x, self.center.y, self.center.z, 1.0],
        ])
    }

    /// The 8 corners in world space, same bit order as [`Aabb::corners`]
    pub fn corners(&self) -> [Vector3; 8] {
        let local = Aabb::new(-self.size, self.size).corners();
        let [x, y, z] = self.orientations;
        local.map(|p| self.center + x * p.x + y * p.y + z * p.z)
    }
}

/// A triangle; edges are 0-1, 1-2, 2-0
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vector3; 3],
}

impl Triangle {
    /// Create a new triangle
    pub fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Supporting plane of the triangle
    ///
    /// Fails with [`MathError::ZeroLength`] for a degenerate triangle.
    pub fn plane(&self) -> Result<Plane, MathError> {
        let [a, b, c] = self.vertices;
        Plane::from_points(a, b, c)
    }
}
