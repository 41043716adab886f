//! Primitive collision shapes and intersection predicates
//!
//! Provides the basic geometric primitives (spheres, planes, segments, boxes,
//! capsules) with boolean overlap tests. Tangency counts as overlap
//! everywhere: every comparison is `<=` against the combined extent.

use crate::foundation::math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A sphere in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center position
    pub center: Vec3,
    /// Radius, expected non-negative
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere from center and radius
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check whether this sphere overlaps another.
    ///
    /// Overlap iff the squared center distance is at most the squared radius
    /// sum, so the test is symmetric and free of square roots.
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).length_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check whether this sphere overlaps a plane.
    ///
    /// Requires `plane.normal` to be unit length; the distance from center to
    /// plane is not meaningful otherwise.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(self.center).abs() <= self.radius
    }
}

/// An infinite plane: the set of points `p` with `dot(normal, p) = distance`.
///
/// Constructors do not normalize; callers are responsible for supplying a
/// unit-length normal wherever a predicate or generator needs one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Plane normal, expected unit length
    pub normal: Vec3,
    /// Signed distance from the origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and a distance from the origin
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Signed distance from a point to the plane (positive on the normal side)
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// A line segment from `origin` to `origin + diff`.
///
/// `diff` is always the displacement to the far endpoint, never an absolute
/// position; use [`Segment::from_endpoints`] when two positions are at hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point
    pub origin: Vec3,
    /// Displacement from start to end
    pub diff: Vec3,
}

impl Segment {
    /// Create a segment from a start point and a displacement
    pub const fn new(origin: Vec3, diff: Vec3) -> Self {
        Self { origin, diff }
    }

    /// Create a segment between two absolute endpoints
    pub fn from_endpoints(start: Vec3, end: Vec3) -> Self {
        Self {
            origin: start,
            diff: end - start,
        }
    }

    /// The far endpoint
    pub fn end(&self) -> Vec3 {
        self.origin + self.diff
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        self.diff.length()
    }

    /// Closest point on this segment to an arbitrary point.
    ///
    /// Projects onto the supporting line and clamps the projection parameter
    /// to the segment. A degenerate zero-length segment yields `origin`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let length = self.diff.length();
        let direction = self.diff.normalize();
        let along = (point - self.origin).dot(direction).clamp(0.0, length);
        self.origin + direction * along
    }

    /// Check whether this segment crosses a plane.
    ///
    /// Solves the parametric intersection `t = (d - origin·n) / (diff·n)` and
    /// reports a crossing iff `t` lies within the segment, `0 <= t <= 1`. A
    /// segment parallel to the plane (zero denominator) never crosses, even
    /// when it lies inside the plane.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let denom = self.diff.dot(plane.normal);
        if denom == 0.0 {
            return false;
        }
        let t = (plane.distance - self.origin.dot(plane.normal)) / denom;
        (0.0..=1.0).contains(&t)
    }
}

/// A triangle given by three vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in counter-clockwise winding
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Create a triangle from three vertices
    pub const fn new(vertices: [Vec3; 3]) -> Self {
        Self { vertices }
    }

    /// Unit normal by the right-hand rule over the winding order
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(edge2).normalize()
    }
}

/// An axis-aligned bounding box.
///
/// Expected invariant (not checked): `min <= max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its extreme corners
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The eight corners, minimum corner first, maximum corner last
    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Closest point inside or on the box to an arbitrary point (per-axis clamp)
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Check whether this box overlaps another.
    ///
    /// Separating-axis test specialized to the coordinate axes: overlap iff
    /// the interval overlap holds on all three independently.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Check whether this box overlaps a sphere.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let closest = self.closest_point(sphere.center);
        (closest - sphere.center).length() <= sphere.radius
    }
}

/// An oriented bounding box: a box with arbitrary orthonormal axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    /// Center position
    pub center: Vec3,
    /// Local axes, expected orthonormal
    pub orientation: [Vec3; 3],
    /// Half-extents along the local axes
    pub size: Vec3,
}

impl Obb {
    /// Create an oriented box from center, orthonormal axes and half-extents
    pub const fn new(center: Vec3, orientation: [Vec3; 3], size: Vec3) -> Self {
        Self {
            center,
            orientation,
            size,
        }
    }

    /// Create an oriented box whose axes are the basis rows of a rotation
    /// matrix.
    pub fn from_rotation(center: Vec3, rotation: &Mat4, size: Vec3) -> Self {
        let row = |r: usize| Vec3::new(rotation.m[r][0], rotation.m[r][1], rotation.m[r][2]);
        Self::new(center, [row(0), row(1), row(2)], size)
    }

    /// The rotation matrix whose rows are this box's axes
    pub fn rotation_matrix(&self) -> Mat4 {
        let mut rotation = Mat4::identity();
        for (row, axis) in self.orientation.iter().enumerate() {
            rotation.m[row][0] = axis.x;
            rotation.m[row][1] = axis.y;
            rotation.m[row][2] = axis.z;
        }
        rotation
    }

    /// Check whether this box overlaps a sphere.
    ///
    /// Maps the sphere center into the box's local frame with the rigid
    /// fast-path inverse (valid because the axes are orthonormal), then
    /// reuses the axis-aligned test against a box centered at the origin.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let world_inverse = Mat4::rigid_inverse(&self.rotation_matrix(), self.center);
        let local_center = world_inverse.transform_affine(sphere.center);
        let local_box = Aabb::new(-self.size, self.size);
        local_box.intersects_sphere(&Sphere::new(local_center, sphere.radius))
    }
}

/// A capsule: the set of points within `radius` of a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Core segment
    pub segment: Segment,
    /// Radius around the segment
    pub radius: f32,
}

impl Capsule {
    /// Create a capsule from a core segment and a radius
    pub const fn new(segment: Segment, radius: f32) -> Self {
        Self { segment, radius }
    }

    /// Check whether this capsule overlaps a sphere.
    ///
    /// Overlap iff the closest point on the core segment to the sphere center
    /// is within the combined radii.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let closest = self.segment.closest_point(sphere.center);
        let radius_sum = self.radius + sphere.radius;
        (sphere.center - closest).length_squared() <= radius_sum * radius_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_sphere_overlap_and_symmetry() {
        let a = Sphere::new(Vec3::zero(), 1.0);
        let b = Sphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let far = Sphere::new(Vec3::new(3.0, 0.0, 0.0), 0.5);

        assert!(a.intersects(&b));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert!(!a.intersects(&far));
        assert_eq!(a.intersects(&far), far.intersects(&a));
    }

    #[test]
    fn test_sphere_sphere_tangency_counts() {
        let a = Sphere::new(Vec3::zero(), 1.0);
        let b = Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_sphere_plane_center_on_plane() {
        let sphere = Sphere::new(Vec3::zero(), 1.0);
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert!(sphere.intersects_plane(&plane));
    }

    #[test]
    fn test_sphere_plane_separation() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert!(Sphere::new(Vec3::new(0.0, 0.9, 0.0), 1.0).intersects_plane(&plane));
        assert!(!Sphere::new(Vec3::new(0.0, 1.1, 0.0), 1.0).intersects_plane(&plane));
        // Tangent from below.
        assert!(Sphere::new(Vec3::new(5.0, -1.0, 2.0), 1.0).intersects_plane(&plane));
    }

    #[test]
    fn test_segment_plane_crossing() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);

        // Drops from y=5 to y=-5: crosses at t = 0.5. The division by
        // diff·n is what makes t parametric; checking the undivided
        // numerator against [0, 1] would wrongly reject this segment.
        let crossing = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -10.0, 0.0));
        assert!(crossing.intersects_plane(&plane));

        // Stops short of the plane.
        let short = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -4.0, 0.0));
        assert!(!short.intersects_plane(&plane));

        // Points away from the plane.
        let away = Segment::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.5, 0.0));
        assert!(!away.intersects_plane(&plane));

        // Parallel, even inside the plane, is a miss by policy.
        let parallel = Segment::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(!parallel.intersects_plane(&plane));
    }

    #[test]
    fn test_segment_closest_point_clamps() {
        let segment = Segment::from_endpoints(Vec3::zero(), Vec3::new(10.0, 0.0, 0.0));

        // Projection inside the segment.
        assert_relative_eq!(
            segment.closest_point(Vec3::new(4.0, 3.0, 0.0)),
            Vec3::new(4.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        // Beyond the far end.
        assert_relative_eq!(
            segment.closest_point(Vec3::new(20.0, 1.0, 0.0)),
            Vec3::new(10.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        // Before the origin.
        assert_relative_eq!(
            segment.closest_point(Vec3::new(-5.0, -2.0, 0.0)),
            Vec3::zero(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_segment_closest_point_degenerate() {
        let point = Segment::new(Vec3::new(1.0, 2.0, 3.0), Vec3::zero());
        assert_eq!(point.closest_point(Vec3::new(9.0, 9.0, 9.0)), point.origin);
    }

    #[test]
    fn test_aabb_aabb_overlap_symmetry_and_self() {
        let a = Aabb::new(Vec3::zero(), Vec3::one());
        let b = Aabb::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(2.0, 2.0, 2.0));
        let apart = Aabb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(4.0, 1.0, 1.0));

        assert!(a.intersects(&b));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert!(!a.intersects(&apart));

        // Any box overlaps itself, degenerate or not.
        assert!(a.intersects(&a));
        let degenerate = Aabb::new(Vec3::one(), Vec3::one());
        assert!(degenerate.intersects(&degenerate));
    }

    #[test]
    fn test_aabb_aabb_face_contact_counts() {
        let a = Aabb::new(Vec3::zero(), Vec3::one());
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_aabb_sphere_beyond_corner() {
        // Closest point to (2,2,2) is the (1,1,1) corner, sqrt(3) away.
        let aabb = Aabb::new(Vec3::zero(), Vec3::one());
        let sphere = Sphere::new(Vec3::new(2.0, 2.0, 2.0), 0.5);
        assert_relative_eq!(aabb.closest_point(sphere.center), Vec3::one());
        assert!(!aabb.intersects_sphere(&sphere));

        // A radius reaching the corner does overlap.
        let reaching = Sphere::new(Vec3::new(2.0, 2.0, 2.0), 3.0_f32.sqrt());
        assert!(aabb.intersects_sphere(&reaching));
    }

    #[test]
    fn test_aabb_sphere_center_inside() {
        let aabb = Aabb::new(-Vec3::one(), Vec3::one());
        let sphere = Sphere::new(Vec3::new(0.2, -0.3, 0.9), 0.01);
        assert!(aabb.intersects_sphere(&sphere));
    }

    #[test]
    fn test_obb_sphere_axis_aligned_miss() {
        // Axis-aligned orientation reduces to the AABB test after the rigid
        // inverse: local center lands at (1, 0, 3), well beyond the box.
        let obb = Obb::new(
            Vec3::new(-1.0, 0.0, 0.0),
            [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            Vec3::new(0.5, 0.5, 0.5),
        );
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
        assert!(!obb.intersects_sphere(&sphere));
    }

    #[test]
    fn test_obb_sphere_orientation_matters() {
        // A long thin box along X misses a sphere above it...
        let flat = Obb::new(
            Vec3::zero(),
            [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            Vec3::new(1.0, 0.2, 0.2),
        );
        let sphere = Sphere::new(Vec3::new(0.0, 1.05, 0.0), 0.1);
        assert!(!flat.intersects_sphere(&sphere));

        // ...but hits once rotated to stand along Y.
        let standing = Obb::from_rotation(
            Vec3::zero(),
            &Mat4::rotation_z(std::f32::consts::FRAC_PI_2),
            Vec3::new(1.0, 0.2, 0.2),
        );
        assert!(standing.intersects_sphere(&sphere));
    }

    #[test]
    fn test_capsule_sphere_overlap() {
        let capsule = Capsule::new(
            Segment::from_endpoints(Vec3::zero(), Vec3::new(0.0, 2.0, 0.0)),
            0.25,
        );
        // Beside the shaft, inside combined radii.
        assert!(capsule.intersects_sphere(&Sphere::new(Vec3::new(0.4, 1.0, 0.0), 0.2)));
        // Past the cap, outside.
        assert!(!capsule.intersects_sphere(&Sphere::new(Vec3::new(0.0, 3.0, 0.0), 0.5)));
        // Touching the cap exactly.
        assert!(capsule.intersects_sphere(&Sphere::new(Vec3::new(0.0, 2.75, 0.0), 0.5)));
    }

    #[test]
    fn test_triangle_normal_right_handed() {
        let triangle = Triangle::new([
            Vec3::zero(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]);
        assert_relative_eq!(triangle.normal(), Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }
}
