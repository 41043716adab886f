//! # Wire Engine
//!
//! A small 3D math and collision-geometry engine. Mathematically defined
//! primitives (grids, spheres, planes, boxes) are projected through a
//! row-vector matrix pipeline and emitted as screen-space line segments to a
//! caller-supplied sink. Window creation, rasterization and input polling are
//! the host's job; the engine only needs "draw a line between two screen
//! points" and a snapshot of key states.
//!
//! ## Features
//!
//! - **Math kernel**: `Vec3` and row-major `Mat4` with rotation, affine,
//!   perspective and viewport constructors, cofactor inverse and a rigid
//!   fast-path inverse
//! - **Collision predicates**: sphere, plane, segment, AABB, OBB and capsule
//!   overlap tests
//! - **Wireframe projection**: fixed-topology line generators fed through the
//!   view-projection and viewport transforms
//! - **Deterministic simulation**: an explicit state struct stepped at a
//!   fixed timestep, testable without a window
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wire_engine::prelude::*;
//!
//! let mut sim = SimulationState::default();
//! let mut input = InputState::new();
//! let camera = Camera::default();
//!
//! let mut lines = LineBuffer::new();
//! let view_projection = camera.view_projection(1280.0 / 720.0)?;
//! let viewport = Mat4::viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
//!
//! input.press(KeyCode::Space);
//! sim.step(&input, 1.0 / 60.0);
//!
//! draw_grid(&mut lines, &view_projection, &viewport)?;
//! draw_sphere(&mut lines, sim.ball.position, sim.ball.radius,
//!             &view_projection, &viewport, sim.ball.color)?;
//! # Ok::<(), wire_engine::foundation::math::MathError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod sim;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::{
            math::{Mat4, MathError, Vec3},
            time::Timer,
        },
        input::{InputState, KeyCode},
        physics::{
            collision::{Aabb, Capsule, Obb, Plane, Segment, Sphere, Triangle},
            dynamics::Ball,
        },
        render::{
            camera::Camera,
            color::{self, Color},
            wireframe::{draw_aabb, draw_grid, draw_plane, draw_sphere, LineBuffer, LineSink},
        },
        sim::{SimulationState, FIXED_TIMESTEP},
    };
}
