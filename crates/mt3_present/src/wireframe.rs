//! Screen-space wireframes for world primitives
//!
//! Each emitter projects world-space points through a [`ScreenProjector`] and
//! issues `draw_line` calls on a [`DrawSurface`]. A point that cannot be
//! projected (w = 0 on the camera plane) aborts the primitive with the
//! [`MathError`] instead of drawing garbage.

use std::f32::consts::PI;

use mt3_math::{
    bezier_points, world_to_screen, Aabb, MathError, Matrix4x4, Obb, Plane, Segment, Sphere,
    Triangle, Vector3,
};
use serde::{Deserialize, Serialize};

use crate::{Color, DrawSurface};

/// Edges of a box as index pairs into its 8 corners (bit 0 = x, 1 = y, 2 = z)
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7), // along x
    (0, 2), (1, 3), (4, 6), (5, 7), // along y
    (0, 4), (1, 5), (2, 6), (3, 7), // along z
];

/// World → screen mapping for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjector {
    /// World (optional) · view · projection
    pub view_projection: Matrix4x4,
    pub viewport: Matrix4x4,
}

impl ScreenProjector {
    pub fn new(view_projection: Matrix4x4, viewport: Matrix4x4) -> Self {
        Self { view_projection, viewport }
    }

    /// Project a world point to pixels
    pub fn project(&self, point: Vector3) -> Result<Vector3, MathError> {
        world_to_screen(point, &self.view_projection, &self.viewport)
    }
}

/// Sizes used by the wireframe emitters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeStyle {
    /// Half of the grid's side length
    pub grid_half_width: f32,
    /// Number of cells along each grid side, rounded up to an even count so a
    /// line always passes through the origin
    pub grid_subdivisions: u32,
    /// Latitude and longitude bands of a sphere
    pub sphere_subdivisions: u32,
    /// Half side length of the square drawn for a plane
    pub plane_extent: f32,
    /// Line segments per Bezier curve
    pub bezier_segments: u32,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            grid_half_width: 2.0,
            grid_subdivisions: 10,
            sphere_subdivisions: 12,
            plane_extent: 2.0,
            bezier_segments: mt3_math::curve::DEFAULT_BEZIER_SEGMENTS,
        }
    }
}

/// Draw a single world-space line
pub fn draw_line_3d<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    start: Vector3,
    end: Vector3,
    color: Color,
) -> Result<(), MathError> {
    let a = projector.project(start)?;
    let b = projector.project(end)?;
    surface.draw_screen_line(a, b, color);
    Ok(())
}

/// Draw a segment from its origin to its end
pub fn draw_segment<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    segment: &Segment,
    color: Color,
) -> Result<(), MathError> {
    draw_line_3d(surface, projector, segment.origin, segment.end(), color)
}

/// Draw a closed polyline through `points`
fn draw_loop<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    points: &[Vector3],
    color: Color,
) -> Result<(), MathError> {
    let screen = points
        .iter()
        .map(|&p| projector.project(p))
        .collect::<Result<Vec<_>, _>>()?;
    for (i, &start) in screen.iter().enumerate() {
        surface.draw_screen_line(start, screen[(i + 1) % screen.len()], color);
    }
    Ok(())
}

/// Draw the XZ ground grid at y = 0
///
/// Lines through the origin are black, the others gray.
pub fn draw_grid<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    style: &WireframeStyle,
) -> Result<(), MathError> {
    let half = style.grid_half_width;
    let subdivisions = style.grid_subdivisions.max(1).div_ceil(2) * 2;
    let every = half * 2.0 / subdivisions as f32;

    for index in 0..=subdivisions {
        let offset = -half + every * index as f32;
        let color = if index * 2 == subdivisions { Color::BLACK } else { Color::GRAY };
        let along_z = (Vector3::new(offset, 0.0, -half), Vector3::new(offset, 0.0, half));
        let along_x = (Vector3::new(-half, 0.0, offset), Vector3::new(half, 0.0, offset));
        draw_line_3d(surface, projector, along_z.0, along_z.1, color)?;
        draw_line_3d(surface, projector, along_x.0, along_x.1, color)?;
    }

    log::trace!("grid: {} lines", 2 * (subdivisions + 1));
    Ok(())
}

/// Draw a latitude/longitude wireframe sphere
pub fn draw_sphere<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    sphere: &Sphere,
    subdivisions: u32,
    color: Color,
) -> Result<(), MathError> {
    let subdivisions = subdivisions.max(1);
    let lon_every = 2.0 * PI / subdivisions as f32;
    let lat_every = PI / subdivisions as f32;

    let surface_point = |lat: f32, lon: f32| {
        sphere.center
            + Vector3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()) * sphere.radius
    };

    for lat_index in 0..subdivisions {
        let lat = -PI / 2.0 + lat_every * lat_index as f32;
        for lon_index in 0..subdivisions {
            let lon = lon_every * lon_index as f32;
            let a = surface_point(lat, lon);
            let b = surface_point(lat + lat_every, lon);
            let c = surface_point(lat, lon + lon_every);
            draw_line_3d(surface, projector, a, b, color)?;
            draw_line_3d(surface, projector, a, c, color)?;
        }
    }
    Ok(())
}

/// Draw a square patch of a plane centred on its closest point to the origin
pub fn draw_plane<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    plane: &Plane,
    extent: f32,
    color: Color,
) -> Result<(), MathError> {
    let corners = plane.corner_points(extent)?;
    draw_loop(surface, projector, &corners, color)
}

/// Draw the three edges of a triangle
pub fn draw_triangle<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    triangle: &Triangle,
    color: Color,
) -> Result<(), MathError> {
    draw_loop(surface, projector, &triangle.vertices, color)
}

/// Draw the twelve edges of a box given its corners
fn draw_box<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    corners: &[Vector3; 8],
    color: Color,
) -> Result<(), MathError> {
    let mut screen = [Vector3::ZERO; 8];
    for (dst, &corner) in screen.iter_mut().zip(corners) {
        *dst = projector.project(corner)?;
    }
    for &(a, b) in &BOX_EDGES {
        surface.draw_screen_line(screen[a], screen[b], color);
    }
    Ok(())
}

/// Draw an axis-aligned box
pub fn draw_aabb<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    aabb: &Aabb,
    color: Color,
) -> Result<(), MathError> {
    draw_box(surface, projector, &aabb.corners(), color)
}

/// Draw an oriented box
pub fn draw_obb<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    obb: &Obb,
    color: Color,
) -> Result<(), MathError> {
    draw_box(surface, projector, &obb.corners(), color)
}

/// Draw a quadratic Bezier curve as a polyline
pub fn draw_bezier<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: &ScreenProjector,
    control_points: &[Vector3; 3],
    segments: u32,
    color: Color,
) -> Result<(), MathError> {
    let [p0, p1, p2] = *control_points;
    let points = bezier_points(p0, p1, p2, segments)
        .into_iter()
        .map(|p| projector.project(p))
        .collect::<Result<Vec<_>, _>>()?;
    for pair in points.windows(2) {
        surface.draw_screen_line(pair[0], pair[1], color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandRecorder, DrawCommand};

    /// Orthographic-style projector: world x/y map straight to pixels
    fn flat_projector() -> ScreenProjector {
        ScreenProjector::new(
            Matrix4x4::make_orthographic(-10.0, 10.0, 10.0, -10.0, -10.0, 10.0),
            Matrix4x4::make_viewport(0.0, 0.0, 200.0, 200.0, 0.0, 1.0),
        )
    }

    fn perspective_projector() -> ScreenProjector {
        let camera = Matrix4x4::make_affine(
            Vector3::ONE,
            Vector3::new(0.26, 0.0, 0.0),
            Vector3::new(0.0, 1.9, -6.49),
        );
        let view = camera.inverse().unwrap();
        ScreenProjector::new(
            view * Matrix4x4::make_perspective_fov(0.45, 1280.0 / 720.0, 0.1, 100.0),
            Matrix4x4::make_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_projector_maps_origin_to_center() {
        let p = flat_projector().project(Vector3::ZERO).unwrap();
        assert!(p.approx_eq(Vector3::new(100.0, 100.0, 0.5), 0.0001));
    }

    #[test]
    fn test_draw_segment() {
        let mut recorder = CommandRecorder::new();
        let segment = Segment::new(Vector3::new(-10.0, 10.0, 0.0), Vector3::new(20.0, -20.0, 0.0));
        draw_segment(&mut recorder, &flat_projector(), &segment, Color::WHITE).unwrap();
        assert_eq!(
            recorder.commands(),
            &[DrawCommand::Line { x1: 0, y1: 0, x2: 200, y2: 200, color: Color::WHITE }]
        );
    }

    #[test]
    fn test_grid_line_count_and_colors() {
        let mut recorder = CommandRecorder::new();
        let style = WireframeStyle::default();
        draw_grid(&mut recorder, &perspective_projector(), &style).unwrap();

        assert_eq!(recorder.line_count(), 2 * (style.grid_subdivisions as usize + 1));
        let black = recorder
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color: Color::BLACK, .. }))
            .count();
        assert_eq!(black, 2);
    }

    #[test]
    fn test_grid_with_odd_subdivisions_keeps_center_lines() {
        let mut recorder = CommandRecorder::new();
        let style = WireframeStyle { grid_subdivisions: 3, ..WireframeStyle::default() };
        draw_grid(&mut recorder, &perspective_projector(), &style).unwrap();

        // three cells become four
        assert_eq!(recorder.line_count(), 10);
        let black = recorder
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color: Color::BLACK, .. }))
            .count();
        assert_eq!(black, 2);
    }

    #[test]
    fn test_sphere_line_count() {
        let mut recorder = CommandRecorder::new();
        let sphere = Sphere::new(Vector3::ZERO, 0.5);
        draw_sphere(&mut recorder, &perspective_projector(), &sphere, 8, Color::BLACK).unwrap();
        assert_eq!(recorder.line_count(), 2 * 8 * 8);
    }

    #[test]
    fn test_aabb_and_obb_draw_twelve_edges() {
        let mut recorder = CommandRecorder::new();
        let projector = perspective_projector();
        draw_aabb(&mut recorder, &projector, &Aabb::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::ONE), Color::WHITE).unwrap();
        assert_eq!(recorder.line_count(), 12);

        recorder.clear();
        let obb = Obb::from_rotation(Vector3::ZERO, Vector3::new(0.0, 0.5, 0.2), Vector3::new(0.83, 0.26, 0.24));
        draw_obb(&mut recorder, &projector, &obb, Color::WHITE).unwrap();
        assert_eq!(recorder.line_count(), 12);
    }

    #[test]
    fn test_plane_and_triangle_are_closed_loops() {
        let mut recorder = CommandRecorder::new();
        let projector = flat_projector();
        draw_plane(&mut recorder, &projector, &Plane::new(Vector3::Z, 1.0), 2.0, Color::WHITE).unwrap();
        assert_eq!(recorder.line_count(), 4);

        recorder.clear();
        let triangle = Triangle::new(
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        );
        draw_triangle(&mut recorder, &projector, &triangle, Color::RED).unwrap();
        let commands = recorder.commands();
        assert_eq!(commands.len(), 3);
        // last edge returns to the first vertex
        match (&commands[0], &commands[2]) {
            (DrawCommand::Line { x1, y1, .. }, DrawCommand::Line { x2, y2, .. }) => {
                assert_eq!((x1, y1), (x2, y2));
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }

    #[test]
    fn test_bezier_polyline() {
        let mut recorder = CommandRecorder::new();
        let control = [
            Vector3::new(-0.8, 0.58, 1.0),
            Vector3::new(1.76, 1.0, -0.3),
            Vector3::new(0.94, -0.7, 2.3),
        ];
        draw_bezier(&mut recorder, &perspective_projector(), &control, 32, Color::BLUE).unwrap();
        assert_eq!(recorder.line_count(), 32);
    }

    #[test]
    fn test_point_on_camera_plane_fails() {
        let mut recorder = CommandRecorder::new();
        let projector = ScreenProjector::new(
            Matrix4x4::make_perspective_fov(0.45, 1.0, 0.1, 100.0),
            Matrix4x4::make_viewport(0.0, 0.0, 100.0, 100.0, 0.0, 1.0),
        );
        let segment = Segment::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(
            draw_segment(&mut recorder, &projector, &segment, Color::WHITE),
            Err(MathError::ZeroW)
        );
        assert!(recorder.commands().is_empty());
    }
}
