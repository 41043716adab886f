//! The bouncing-ball simulation
//!
//! All per-frame mutable state lives in one [`SimulationState`] value stepped
//! by a pure-ish function of (state, input, dt), so the whole demo can run
//! and be tested without a window. The loop owning the state runs exactly one
//! fixed-size step per rendered frame.

use crate::foundation::math::Vec3;
use crate::input::{InputState, KeyCode};
use crate::physics::collision::Plane;
use crate::physics::dynamics::Ball;

/// The fixed simulation step, one tick per rendered frame
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Everything the bouncing-ball demo mutates frame to frame.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// The bouncing ball
    pub ball: Ball,
    /// The floor plane the ball bounces off (unit normal)
    pub plane: Plane,
    /// Restitution coefficient applied at each bounce, in `[0, 1]`
    pub restitution: f32,
    /// Whether integration has been started (Space key)
    pub started: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(
            Ball::default(),
            Plane::new(Vec3::new(-0.2, 0.9, -0.3).normalize(), 0.0),
            0.8,
        )
    }
}

impl SimulationState {
    /// Create a simulation over the given ball and plane.
    ///
    /// The plane normal must be unit length; the collision predicate and the
    /// reflection both depend on it.
    pub fn new(ball: Ball, plane: Plane, restitution: f32) -> Self {
        Self {
            ball,
            plane,
            restitution,
            started: false,
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Space edge-triggers the start; until then the ball hangs in place.
    /// After a hit the velocity is reflected about the plane normal and
    /// damped by the restitution coefficient.
    pub fn step(&mut self, input: &InputState, dt: f32) {
        if !self.started && input.just_pressed(KeyCode::Space) {
            self.started = true;
            log::debug!("simulation started");
        }
        if !self.started {
            return;
        }

        self.ball.integrate(dt);

        if self.ball.bounding_sphere().intersects_plane(&self.plane) {
            self.ball.bounce(self.plane.normal, self.restitution);
            log::trace!(
                "bounce at ({:.3}, {:.3}, {:.3})",
                self.ball.position.x,
                self.ball.position.y,
                self.ball.position.z
            );
        }
    }
}
