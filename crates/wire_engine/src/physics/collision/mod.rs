//! Collision detection between geometric primitives
//!
//! All shapes are plain value structs in world space; tests are exact
//! predicates with tangency counting as overlap. The one coordinate-space
//! trick lives in the OBB test, which maps the sphere into the box's local
//! frame with the rigid fast-path inverse and reuses the axis-aligned test.

pub mod primitives;

pub use primitives::{Aabb, Capsule, Obb, Plane, Segment, Sphere, Triangle};
