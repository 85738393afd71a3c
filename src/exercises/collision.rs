//! Collision exercise
//!
//! A movable sphere is tested against a plane, and a fixed segment against an
//! AABB and a spinning OBB. Anything that is hit is drawn red.

use mt3_math::{
    segment_vs_aabb, segment_vs_obb, sphere_vs_plane, Aabb, MathError, Obb, Plane, Segment, Sphere,
    Vector3,
};
use mt3_present::{
    draw_aabb, draw_grid, draw_obb, draw_plane, draw_segment, draw_sphere, Color, DrawSurface,
};

use super::{Exercise, Frame};
use crate::input::FrameInput;

fn hit_color(hit: bool) -> Color {
    if hit {
        Color::RED
    } else {
        Color::WHITE
    }
}

/// Sphere vs plane, segment vs AABB and segment vs OBB
pub struct CollisionExercise {
    pub sphere: Sphere,
    pub plane: Plane,
    pub segment: Segment,
    pub aabb: Aabb,
    pub obb_center: Vector3,
    pub obb_rotate: Vector3,
    pub obb_size: Vector3,
}

impl Default for CollisionExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionExercise {
    pub fn new() -> Self {
        Self {
            sphere: Sphere::new(Vector3::ZERO, 0.6),
            plane: Plane::new(Vector3::Y, 1.0),
            segment: Segment::new(Vector3::new(-2.0, 0.1, 0.0), Vector3::new(4.0, 0.0, 0.0)),
            aabb: Aabb::new(Vector3::new(-1.5, -0.5, -0.5), Vector3::new(-0.5, 0.5, 0.5)),
            obb_center: Vector3::new(1.0, 0.5, 0.0),
            obb_rotate: Vector3::ZERO,
            obb_size: Vector3::new(0.6, 0.1, 0.1),
        }
    }

    pub fn obb(&self) -> Obb {
        Obb::from_rotation(self.obb_center, self.obb_rotate, self.obb_size)
    }
}

impl Exercise for CollisionExercise {
    fn name(&self) -> &'static str {
        "collision"
    }

    /// Movement drags the sphere, spin tilts the OBB about Z
    fn update(&mut self, input: &FrameInput) {
        self.sphere.center += input.movement;
        self.obb_rotate.z += input.spin;
    }

    fn draw(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) -> Result<(), MathError> {
        let projector = &frame.projector;
        let style = frame.style;
        // the box may have been edited with min and max crossed
        let aabb = self.aabb.normalized();
        let obb = self.obb();

        let sphere_hit = sphere_vs_plane(&self.sphere, &self.plane);
        let aabb_hit = segment_vs_aabb(&self.segment, &aabb);
        let obb_hit = segment_vs_obb(&self.segment, &obb)?;
        log::trace!(
            "collision: sphere/plane {}, segment/aabb {}, segment/obb {}",
            sphere_hit,
            aabb_hit,
            obb_hit
        );

        draw_grid(surface, projector, style)?;
        draw_plane(surface, projector, &self.plane, style.plane_extent, Color::WHITE)?;
        draw_sphere(surface, projector, &self.sphere, style.sphere_subdivisions, hit_color(sphere_hit))?;
        draw_segment(surface, projector, &self.segment, Color::WHITE)?;
        draw_aabb(surface, projector, &aabb, hit_color(aabb_hit))?;
        draw_obb(surface, projector, &obb, hit_color(obb_hit))
    }
}
