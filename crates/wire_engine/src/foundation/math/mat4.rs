//! Row-major 4x4 matrix type
//!
//! Points are row vectors and transform as `v' = v * M`; translation lives in
//! row 3 and the homogeneous component in column 3. See the docs on
//! [`crate::foundation::math`] for why the convention is fixed here.

use super::{MathError, Vec3};
use std::ops::Mul;

/// A 4x4 float matrix representing an affine or projective transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    /// Row-major element grid: `m[row][column]`
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity transform
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// The all-zero matrix
    pub const fn zero() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    /// Pure translation: identity with `translate` in row 3
    pub fn translation(translate: Vec3) -> Self {
        let mut result = Self::identity();
        result.m[3][0] = translate.x;
        result.m[3][1] = translate.y;
        result.m[3][2] = translate.z;
        result
    }

    /// Pure non-uniform scale along the coordinate axes
    pub fn scaling(scale: Vec3) -> Self {
        let mut result = Self::identity();
        result.m[0][0] = scale.x;
        result.m[1][1] = scale.y;
        result.m[2][2] = scale.z;
        result
    }

    /// Rotation about the X axis by `radians`
    pub fn rotation_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[1][1] = cos;
        result.m[1][2] = sin;
        result.m[2][1] = -sin;
        result.m[2][2] = cos;
        result
    }

    /// Rotation about the Y axis by `radians`
    pub fn rotation_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[0][0] = cos;
        result.m[0][2] = -sin;
        result.m[2][0] = sin;
        result.m[2][2] = cos;
        result
    }

    /// Rotation about the Z axis by `radians`
    pub fn rotation_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[0][0] = cos;
        result.m[0][1] = sin;
        result.m[1][0] = -sin;
        result.m[1][1] = cos;
        result
    }

    /// Combined intrinsic rotation, X then Y then Z (`Rx * Ry * Rz`),
    /// expanded to closed form.
    pub fn rotation_xyz(rotate: Vec3) -> Self {
        let s = Vec3::new(rotate.x.sin(), rotate.y.sin(), rotate.z.sin());
        let c = Vec3::new(rotate.x.cos(), rotate.y.cos(), rotate.z.cos());
        Self {
            m: [
                [c.y * c.z, c.y * s.z, -s.y, 0.0],
                [
                    s.x * s.y * c.z - c.x * s.z,
                    s.x * s.y * s.z + c.x * c.z,
                    s.x * c.y,
                    0.0,
                ],
                [
                    c.x * s.y * c.z + s.x * s.z,
                    c.x * s.y * s.z - s.x * c.z,
                    c.x * c.y,
                    0.0,
                ],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Scale, then rotate (XYZ order), then translate, composed into one
    /// affine matrix.
    pub fn from_affine(scale: Vec3, rotate: Vec3, translate: Vec3) -> Self {
        let rotation = Self::rotation_xyz(rotate);
        let mut result = Self::identity();
        for col in 0..3 {
            result.m[0][col] = scale.x * rotation.m[0][col];
            result.m[1][col] = scale.y * rotation.m[1][col];
            result.m[2][col] = scale.z * rotation.m[2][col];
        }
        result.m[3][0] = translate.x;
        result.m[3][1] = translate.y;
        result.m[3][2] = translate.z;
        result
    }

    /// Perspective projection from a vertical field of view.
    ///
    /// Cotangent-based with depth mapped to `[0, 1]` via `far / (far - near)`;
    /// the homogeneous component ends up in column 3 so that
    /// [`Self::transform_point`] performs the perspective divide.
    pub fn perspective_fov(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let cot = 1.0 / (fov_y * 0.5).tan();
        let mut result = Self::zero();
        result.m[0][0] = cot / aspect;
        result.m[1][1] = cot;
        result.m[2][2] = far / (far - near);
        result.m[2][3] = 1.0;
        result.m[3][2] = (-near * far) / (far - near);
        result
    }

    /// Viewport transform mapping NDC to pixel coordinates.
    ///
    /// Flips Y so that NDC up becomes screen up with a top-left pixel origin,
    /// and maps NDC depth into `[min_depth, max_depth]`.
    pub fn viewport(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        let mut result = Self::identity();
        result.m[0][0] = width / 2.0;
        result.m[1][1] = -(height / 2.0);
        result.m[2][2] = max_depth - min_depth;
        result.m[3][0] = left + width / 2.0;
        result.m[3][1] = top + height / 2.0;
        result.m[3][2] = min_depth;
        result
    }

    /// Transposed copy of this matrix
    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                result.m[row][col] = self.m[col][row];
            }
        }
        result
    }

    /// Overwrite the translation row, leaving the rest untouched
    pub fn set_translation(&mut self, translate: Vec3) {
        self.m[3][0] = translate.x;
        self.m[3][1] = translate.y;
        self.m[3][2] = translate.z;
    }

    /// 3x3 minor obtained by deleting `row` and `col`
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut sub = [[0.0_f32; 3]; 3];
        let mut sr = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            let mut sc = 0;
            for c in 0..4 {
                if c == col {
                    continue;
                }
                sub[sr][sc] = self.m[r][c];
                sc += 1;
            }
            sr += 1;
        }
        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// Determinant by cofactor expansion along row 0
    pub fn determinant(&self) -> f32 {
        let mut det = 0.0;
        let mut sign = 1.0;
        for col in 0..4 {
            det += sign * self.m[0][col] * self.minor(0, col);
            sign = -sign;
        }
        det
    }

    /// General inverse via the adjugate (full cofactor expansion, no
    /// decomposition).
    ///
    /// # Errors
    ///
    /// [`MathError::SingularMatrix`] if the determinant is exactly zero. The
    /// check guards the division only; ill-conditioned matrices are the
    /// caller's problem. Camera matrices built by this engine are affine with
    /// unit determinant and always invert.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(MathError::SingularMatrix);
        }
        let inv_det = 1.0 / det;
        let mut result = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                // Adjugate: transposed cofactor goes to [col][row].
                result.m[col][row] = sign * self.minor(row, col) * inv_det;
            }
        }
        Ok(result)
    }

    /// Fast inverse of a rigid transform given as a pure rotation matrix and
    /// a translation.
    ///
    /// Exploits orthonormality: the rotation inverts by transposition and the
    /// translation row becomes `-translate * Rᵀ`. Must not be used for scaled
    /// or sheared transforms; use [`Self::inverse`] for those.
    pub fn rigid_inverse(rotation: &Self, translate: Vec3) -> Self {
        let mut rt = rotation.transpose();
        let back = rt.transform_affine(-translate);
        rt.set_translation(back);
        rt
    }

    /// Apply the affine part of this matrix to a point: rotation/scale plus
    /// the translation row, with no perspective divide.
    pub fn transform_affine(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            v.x * self.m[0][0] + v.y * self.m[1][0] + v.z * self.m[2][0] + self.m[3][0],
            v.x * self.m[0][1] + v.y * self.m[1][1] + v.z * self.m[2][1] + self.m[3][1],
            v.x * self.m[0][2] + v.y * self.m[1][2] + v.z * self.m[2][2] + self.m[3][2],
        )
    }

    /// Apply this matrix to a point as a homogeneous transform.
    ///
    /// The input is treated as `(x, y, z, 1)` and the result divided by the
    /// produced `w`.
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateProjection`] if `w` comes out exactly zero,
    /// which happens when a point sits on the projection's focal plane.
    pub fn transform_point(&self, v: Vec3) -> Result<Vec3, MathError> {
        let result = self.transform_affine(v);
        let w = v.x * self.m[0][3] + v.y * self.m[1][3] + v.z * self.m[2][3] + self.m[3][3];
        if w == 0.0 {
            return Err(MathError::DegenerateProjection);
        }
        Ok(result / w)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                for k in 0..4 {
                    result.m[row][col] += self.m[row][k] * other.m[k][col];
                }
            }
        }
        result
    }
}

impl approx::AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        (0..4).all(|r| (0..4).all(|c| f32::abs_diff_eq(&self.m[r][c], &other.m[r][c], epsilon)))
    }
}

impl approx::RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        (0..4).all(|r| {
            (0..4).all(|c| f32::relative_eq(&self.m[r][c], &other.m[r][c], epsilon, max_relative))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_multiply_identity_is_noop() {
        let a = Mat4::from_affine(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.3, -0.2, 0.9),
            Vec3::new(4.0, 5.0, 6.0),
        );
        assert_relative_eq!(a * Mat4::identity(), a);
        assert_relative_eq!(Mat4::identity() * a, a);
    }

    #[test]
    fn test_double_transpose_is_identity_operation() {
        let a = Mat4::perspective_fov(0.45, 16.0 / 9.0, 0.1, 100.0);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_row_vector_rotation_direction() {
        // Positive Z rotation carries +X onto +Y under v * M.
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let v = m.transform_affine(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_xyz_matches_axis_product() {
        let angles = Vec3::new(0.4, -1.1, 2.3);
        let product =
            Mat4::rotation_x(angles.x) * Mat4::rotation_y(angles.y) * Mat4::rotation_z(angles.z);
        assert_relative_eq!(Mat4::rotation_xyz(angles), product, epsilon = 1e-6);
    }

    #[test]
    fn test_from_affine_matches_srt_product() {
        let scale = Vec3::new(2.0, 0.5, 3.0);
        let rotate = Vec3::new(0.1, 0.2, 0.3);
        let translate = Vec3::new(-1.0, 4.0, 2.5);
        let product = Mat4::scaling(scale) * Mat4::rotation_xyz(rotate) * Mat4::translation(translate);
        assert_relative_eq!(
            Mat4::from_affine(scale, rotate, translate),
            product,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_general_inverse_roundtrip() {
        let a = Mat4::from_affine(
            Vec3::one(),
            Vec3::new(0.26, 0.0, 0.0),
            Vec3::new(0.0, 1.9, -6.49),
        );
        let inv = a.inverse().unwrap();
        assert_relative_eq!(a * inv, Mat4::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_inverse_of_singular_matrix_fails() {
        assert_eq!(Mat4::zero().inverse(), Err(MathError::SingularMatrix));

        let mut flat = Mat4::identity();
        flat.m[1][1] = 0.0; // collapses Y, determinant 0
        assert_eq!(flat.inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_rigid_inverse_matches_general_inverse() {
        let rotation = Mat4::rotation_xyz(Vec3::new(0.7, -0.3, 1.2));
        let translate = Vec3::new(3.0, -2.0, 5.0);
        let rigid = rotation * Mat4::translation(translate);

        let fast = Mat4::rigid_inverse(&rotation, translate);
        assert_relative_eq!(rigid * fast, Mat4::identity(), epsilon = 1e-5);
        assert_relative_eq!(fast, rigid.inverse().unwrap(), epsilon = 1e-5);
    }

    #[test]
    fn test_transform_point_applies_translation() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let p = m.transform_point(Vec3::new(0.5, 0.5, 0.5)).unwrap();
        assert_relative_eq!(p, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_transform_point_zero_w_fails() {
        // The zero matrix maps every point to w = 0.
        assert_eq!(
            Mat4::zero().transform_point(Vec3::one()),
            Err(MathError::DegenerateProjection)
        );

        // A point on the projection focal plane (z = 0 for this projection)
        // also degenerates.
        let projection = Mat4::perspective_fov(0.45, 1.0, 0.1, 100.0);
        assert_eq!(
            projection.transform_point(Vec3::new(0.0, 0.0, 0.0)),
            Err(MathError::DegenerateProjection)
        );
    }

    #[test]
    fn test_perspective_divide() {
        let projection = Mat4::perspective_fov(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        // On the optical axis at the near plane: NDC depth 0, centered.
        let p = projection.transform_point(Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(p, Vec3::zero(), epsilon = 1e-6);
        // At the far plane: NDC depth 1.
        let q = projection
            .transform_point(Vec3::new(0.0, 0.0, 100.0))
            .unwrap();
        assert_relative_eq!(q.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_viewport_maps_ndc_corners() {
        let viewport = Mat4::viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        // NDC origin lands at the screen center.
        let center = viewport.transform_point(Vec3::zero()).unwrap();
        assert_relative_eq!(center, Vec3::new(640.0, 360.0, 0.0));
        // NDC (-1, +1) is the top-left pixel: the Y flip.
        let top_left = viewport.transform_point(Vec3::new(-1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(top_left, Vec3::new(0.0, 0.0, 0.0));
    }
}
