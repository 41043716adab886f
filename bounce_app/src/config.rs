//! Demo configuration
//!
//! Loaded from a TOML file next to the binary when present, with defaults
//! matching the classic demo scene otherwise. Every section can be omitted
//! independently.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use wire_engine::prelude::*;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Offending path
        path: String,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window / viewport settings
    pub window: WindowConfig,
    /// Camera pose
    pub camera: CameraConfig,
    /// Initial ball state
    pub ball: BallConfig,
    /// Floor plane
    pub plane: PlaneConfig,
    /// Physics parameters
    pub physics: PhysicsConfig,
}

/// Viewport dimensions
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Camera pose
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in world space
    pub translate: Vec3,
    /// Tait-Bryan rotation in radians
    pub rotate: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            translate: Vec3::new(0.0, 1.9, -6.49),
            rotate: Vec3::new(0.26, 0.0, 0.0),
        }
    }
}

/// Initial ball state
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Starting position
    pub position: Vec3,
    /// Starting velocity
    pub velocity: Vec3,
    /// Constant acceleration
    pub acceleration: Vec3,
    /// Mass
    pub mass: f32,
    /// Radius
    pub radius: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.8, 1.2, 0.3),
            velocity: Vec3::zero(),
            acceleration: Vec3::new(0.0, -9.8, 0.0),
            mass: 1.0,
            radius: 0.05,
        }
    }
}

/// Floor plane
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    /// Plane normal; normalized on conversion, so any direction works here
    pub normal: Vec3,
    /// Distance from the origin along the normal
    pub distance: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            normal: Vec3::new(-0.2, 0.9, -0.3),
            distance: 0.0,
        }
    }
}

/// Physics parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Restitution coefficient applied at each bounce
    pub restitution: f32,
    /// Number of fixed steps the headless demo runs
    pub frames: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            restitution: 0.8,
            frames: 600,
        }
    }
}

impl DemoConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid for this schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load configuration, falling back to defaults when the file is absent
    /// or invalid (a warning is logged for the invalid case).
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// The configured ball
    pub fn ball(&self) -> Ball {
        Ball {
            position: self.ball.position,
            velocity: self.ball.velocity,
            acceleration: self.ball.acceleration,
            mass: self.ball.mass,
            radius: self.ball.radius,
            color: color::WHITE,
        }
    }

    /// The configured floor plane, with the normal normalized
    pub fn plane(&self) -> Plane {
        Plane::new(self.plane.normal.normalize(), self.plane.distance)
    }

    /// The configured camera
    pub fn camera(&self) -> Camera {
        Camera::new(self.camera.translate, self.camera.rotate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_the_classic_scene() {
        let config = DemoConfig::default();
        assert_eq!(config.ball.position, Vec3::new(0.8, 1.2, 0.3));
        assert_eq!(config.physics.restitution, 0.8);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: DemoConfig = toml::from_str(
            r#"
            [physics]
            restitution = 0.5

            [ball]
            radius = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.physics.restitution, 0.5);
        assert_eq!(config.ball.radius, 0.2);
        // Untouched sections keep their defaults.
        assert_eq!(config.window.height, 720);
        assert_eq!(config.physics.frames, 600);
    }

    #[test]
    fn test_plane_normal_is_normalized_on_conversion() {
        let config = DemoConfig::default();
        approx::assert_relative_eq!(config.plane().normal.length(), 1.0, epsilon = 1e-6);
    }
}
