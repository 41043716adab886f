//! Math types for 3D geometry and wireframe projection
//!
//! Provides a hand-rolled `Vec3`/`Mat4` pair rather than an external linear
//! algebra crate because the whole engine is built on one specific
//! convention that must hold everywhere:
//!
//! - matrices are **row-major** and points are **row vectors**, so transforms
//!   apply as `v' = v * M`;
//! - translation lives in row 3;
//! - composition reads left to right: `world * view * projection` transforms
//!   a point through world, then view, then projection.
//!
//! Swapping any of this for the column-vector convention silently inverts
//! rotation direction and moves translation into the wrong cells, so the
//! convention is fixed here once and the rest of the engine never restates it.

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;

use thiserror::Error;

/// Failures of the two partial operations in the math kernel.
///
/// Everything else in this module is a total function: `Vec3::normalize` of
/// the zero vector returns the zero vector by policy, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// `Mat4::inverse` was called on a matrix with zero determinant.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// A projective transform produced a zero homogeneous coordinate.
    #[error("transform produced a zero homogeneous coordinate")]
    DegenerateProjection,
}
