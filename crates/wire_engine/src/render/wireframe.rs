//! Wireframe line generation for the engine's primitives
//!
//! Each generator walks a fixed topology of world-space endpoints, pushes
//! every endpoint through the view-projection and viewport transforms, and
//! emits one screen-space segment per edge to a [`LineSink`]. Generators hold
//! no state and retain no geometry; everything is recomputed per call.

use crate::foundation::math::{Mat4, MathError, Vec3};
use crate::physics::collision::{Aabb, Plane};
use crate::render::color::{self, Color};

/// Half-width of the reference grid in world units
const GRID_HALF_WIDTH: f32 = 2.0;
/// Number of grid cells along each axis
const GRID_SUBDIVISIONS: u32 = 10;
/// Latitude/longitude band count for sphere wireframes
const SPHERE_SUBDIVISIONS: u32 = 20;
/// Half-extent of the quad drawn for an infinite plane
const PLANE_HALF_EXTENT: f32 = 2.0;

/// AABB edge list over the corner order of [`Aabb::corners`]
const AABB_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 5),
    (1, 6),
    (2, 4),
    (2, 5),
    (3, 4),
    (3, 6),
    (4, 7),
    (5, 7),
    (6, 7),
];

/// Receiver for screen-space line segments.
///
/// This is the seam to the host graphics library: the engine calls
/// `draw_line` once per wireframe edge per frame and knows nothing else about
/// rendering.
pub trait LineSink {
    /// Draw a line between two pixel coordinates in the given packed color
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
}

/// A recorded screen-space line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Start pixel X
    pub x0: i32,
    /// Start pixel Y
    pub y0: i32,
    /// End pixel X
    pub x1: i32,
    /// End pixel Y
    pub y1: i32,
    /// Packed RGBA color
    pub color: Color,
}

/// A [`LineSink`] that buffers segments in memory.
///
/// Used by tests and by headless hosts that forward the frame's lines in one
/// batch.
#[derive(Debug, Default)]
pub struct LineBuffer {
    /// Segments recorded since the last [`LineBuffer::clear`]
    pub lines: Vec<Line>,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered segments
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop all buffered segments (call at frame start)
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LineSink for LineBuffer {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.lines.push(Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }
}

/// World point to pixel coordinates through the two-stage pipeline
fn project(point: Vec3, view_projection: &Mat4, viewport: &Mat4) -> Result<Vec3, MathError> {
    viewport.transform_point(view_projection.transform_point(point)?)
}

/// Emit one projected segment
fn emit(sink: &mut dyn LineSink, a: Vec3, b: Vec3, color: Color) {
    sink.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
}

/// Draw the reference grid on the XZ plane.
///
/// `GRID_SUBDIVISIONS + 1` lines per axis inside the fixed half-width; the
/// two lines through the origin are black, the rest gray.
///
/// # Errors
///
/// Propagates [`MathError::DegenerateProjection`] from the transform
/// pipeline.
pub fn draw_grid(
    sink: &mut dyn LineSink,
    view_projection: &Mat4,
    viewport: &Mat4,
) -> Result<(), MathError> {
    let spacing = (GRID_HALF_WIDTH * 2.0) / GRID_SUBDIVISIONS as f32;

    for index in 0..=GRID_SUBDIVISIONS {
        let offset = index as f32 * spacing - GRID_HALF_WIDTH;
        let line_color = if index * 2 == GRID_SUBDIVISIONS {
            color::BLACK
        } else {
            color::GRAY
        };

        // Line along Z at x = offset.
        let a = project(
            Vec3::new(offset, 0.0, GRID_HALF_WIDTH),
            view_projection,
            viewport,
        )?;
        let b = project(
            Vec3::new(offset, 0.0, -GRID_HALF_WIDTH),
            view_projection,
            viewport,
        )?;
        emit(sink, a, b, line_color);

        // Line along X at z = offset.
        let c = project(
            Vec3::new(GRID_HALF_WIDTH, 0.0, offset),
            view_projection,
            viewport,
        )?;
        let d = project(
            Vec3::new(-GRID_HALF_WIDTH, 0.0, offset),
            view_projection,
            viewport,
        )?;
        emit(sink, c, d, line_color);
    }
    Ok(())
}

/// Draw a sphere wireframe as latitude/longitude great-circle segments.
///
/// One generator serves every spherical thing in the engine; callers pass the
/// center and radius of whatever they are visualizing.
///
/// # Errors
///
/// Propagates [`MathError::DegenerateProjection`] from the transform
/// pipeline.
pub fn draw_sphere(
    sink: &mut dyn LineSink,
    center: Vec3,
    radius: f32,
    view_projection: &Mat4,
    viewport: &Mat4,
    color: Color,
) -> Result<(), MathError> {
    let lon_every = 2.0 * std::f32::consts::PI / SPHERE_SUBDIVISIONS as f32;
    let lat_every = std::f32::consts::PI / SPHERE_SUBDIVISIONS as f32;

    let surface_point = |lat: f32, lon: f32| {
        center
            + Vec3::new(
                radius * lat.cos() * lon.cos(),
                radius * lat.sin(),
                radius * lat.cos() * lon.sin(),
            )
    };

    for lat_index in 0..SPHERE_SUBDIVISIONS {
        let lat = -std::f32::consts::FRAC_PI_2 + lat_every * lat_index as f32;
        for lon_index in 0..SPHERE_SUBDIVISIONS {
            let lon = lon_index as f32 * lon_every;

            let a = project(surface_point(lat, lon), view_projection, viewport)?;
            let b = project(
                surface_point(lat + lat_every, lon),
                view_projection,
                viewport,
            )?;
            let c = project(
                surface_point(lat, lon + lon_every),
                view_projection,
                viewport,
            )?;

            emit(sink, a, b, color);
            emit(sink, a, c, color);
        }
    }
    Ok(())
}

/// Draw an infinite plane as a fixed-size quad.
///
/// The quad is centered at `distance * normal` and spanned by two
/// perpendicular unit vectors scaled to the fixed half-extent. Requires a
/// unit-length plane normal.
///
/// # Errors
///
/// Propagates [`MathError::DegenerateProjection`] from the transform
/// pipeline.
pub fn draw_plane(
    sink: &mut dyn LineSink,
    plane: &Plane,
    view_projection: &Mat4,
    viewport: &Mat4,
    color: Color,
) -> Result<(), MathError> {
    let center = plane.normal * plane.distance;

    let u = plane.normal.any_perpendicular().normalize();
    let v = plane.normal.cross(u);
    let spokes = [u, -u, v, -v];

    let mut points = [Vec3::zero(); 4];
    for (point, spoke) in points.iter_mut().zip(spokes) {
        *point = project(center + spoke * PLANE_HALF_EXTENT, view_projection, viewport)?;
    }

    emit(sink, points[0], points[2], color);
    emit(sink, points[2], points[1], color);
    emit(sink, points[1], points[3], color);
    emit(sink, points[3], points[0], color);
    Ok(())
}

/// Draw an axis-aligned box as its 12 edges.
///
/// # Errors
///
/// Propagates [`MathError::DegenerateProjection`] from the transform
/// pipeline.
pub fn draw_aabb(
    sink: &mut dyn LineSink,
    aabb: &Aabb,
    view_projection: &Mat4,
    viewport: &Mat4,
    color: Color,
) -> Result<(), MathError> {
    let mut screen = [Vec3::zero(); 8];
    for (projected, corner) in screen.iter_mut().zip(aabb.corners()) {
        *projected = project(corner, view_projection, viewport)?;
    }

    for (from, to) in AABB_EDGES {
        emit(sink, screen[from], screen[to], color);
    }
    Ok(())
}
