//! Physics: collision predicates and point-mass dynamics
//!
//! Narrow-phase boolean overlap tests between the engine's geometric
//! primitives, plus the Euler integration driving the demo entities. There is
//! no broad phase and no contact manifold; predicates answer "are these two
//! shapes overlapping right now" and nothing more.

pub mod collision;
pub mod dynamics;

pub use collision::{Aabb, Capsule, Obb, Plane, Segment, Sphere, Triangle};
pub use dynamics::Ball;
