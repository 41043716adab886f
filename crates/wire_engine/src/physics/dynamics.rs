//! Point-mass dynamics for simulated bodies

use crate::foundation::math::Vec3;
use crate::physics::collision::Sphere;
use crate::render::color::{self, Color};

/// A spherical point mass under constant acceleration.
///
/// Created once at startup and mutated every tick by
/// [`Ball::integrate`]; the demo never destroys it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Position of the center
    pub position: Vec3,
    /// Linear velocity
    pub velocity: Vec3,
    /// Constant acceleration (gravity, typically)
    pub acceleration: Vec3,
    /// Mass (carried for force-based extensions; integration ignores it)
    pub mass: f32,
    /// Collision and display radius
    pub radius: f32,
    /// Wireframe color
    pub color: Color,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.8, 1.2, 0.3),
            velocity: Vec3::zero(),
            acceleration: Vec3::new(0.0, -9.8, 0.0),
            mass: 1.0,
            radius: 0.05,
            color: color::WHITE,
        }
    }
}

impl Ball {
    /// Advance one fixed step of semi-implicit Euler integration:
    /// velocity first, then position from the updated velocity.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Reflect the velocity off a unit surface normal, scaled by the
    /// restitution coefficient.
    pub fn bounce(&mut self, normal: Vec3, restitution: f32) {
        self.velocity = self.velocity.reflect(normal) * restitution;
    }

    /// The ball's bounding sphere for collision tests
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }
}
