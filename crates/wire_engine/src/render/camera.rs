//! Camera pose and projection matrices
//!
//! The camera is a plain pose (translation plus Tait-Bryan rotation) with
//! projection parameters. Matrices are rebuilt from the pose on demand every
//! frame; nothing is cached, so mutating the pose between frames is always
//! safe.

use crate::foundation::math::{Mat4, MathError, Vec3};

/// A perspective camera posed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Position in world space
    pub translate: Vec3,
    /// Tait-Bryan rotation angles in radians, applied X then Y then Z
    pub rotate: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Near clipping distance
    pub near: f32,
    /// Far clipping distance
    pub far: f32,
}

impl Default for Camera {
    /// A pose slightly above and behind the origin, pitched down at the grid.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.9, -6.49), Vec3::new(0.26, 0.0, 0.0))
    }
}

impl Camera {
    /// Create a camera from a pose, with the standard projection parameters
    pub const fn new(translate: Vec3, rotate: Vec3) -> Self {
        Self {
            translate,
            rotate,
            fov_y: 0.45,
            near: 0.1,
            far: 100.0,
        }
    }

    /// The camera's world transform (unit scale, rotate, translate)
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_affine(Vec3::one(), self.rotate, self.translate)
    }

    /// The view matrix: inverse of the world transform.
    ///
    /// # Errors
    ///
    /// Propagates [`MathError::SingularMatrix`], which cannot happen for a
    /// pose built by [`Self::world_matrix`] but is surfaced rather than
    /// unwrapped.
    pub fn view_matrix(&self) -> Result<Mat4, MathError> {
        self.world_matrix().inverse()
    }

    /// The composed view-projection matrix for a given aspect ratio.
    ///
    /// Points transform through the view first, then the projection, per the
    /// row-vector convention.
    ///
    /// # Errors
    ///
    /// Propagates [`MathError::SingularMatrix`] from the view inverse.
    pub fn view_projection(&self, aspect: f32) -> Result<Mat4, MathError> {
        let projection = Mat4::perspective_fov(self.fov_y, aspect, self.near, self.far);
        Ok(self.view_matrix()? * projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_is_world_inverse() {
        let camera = Camera::default();
        let roundtrip = camera.world_matrix() * camera.view_matrix().unwrap();
        assert_relative_eq!(roundtrip, Mat4::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_world_to_screen_roundtrip() {
        let camera = Camera::default();
        let aspect = 1280.0 / 720.0;
        let view_projection = camera.view_projection(aspect).unwrap();
        let viewport = Mat4::viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);

        let world = Vec3::new(0.4, 1.0, 0.3);
        let screen = viewport
            .transform_point(view_projection.transform_point(world).unwrap())
            .unwrap();

        // Screen lands inside the viewport.
        assert!(screen.x > 0.0 && screen.x < 1280.0);
        assert!(screen.y > 0.0 && screen.y < 720.0);

        // Back through the inverse pipeline to the original point.
        let back = view_projection
            .inverse()
            .unwrap()
            .transform_point(viewport.inverse().unwrap().transform_point(screen).unwrap())
            .unwrap();
        assert_relative_eq!(back, world, epsilon = 1e-3);
    }
}
