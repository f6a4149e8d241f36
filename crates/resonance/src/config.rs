//! Serializable parameter sets for both models.
//!
//! [`Spring::new`] and [`Projectile::new`] accept anything. When parameters
//! come from a file or a user, `SpringParams`/`ProjectileParams` give them
//! a typed home, a strict [`validate`](SpringParams::validate) step and,
//! with the `config` feature, JSON and TOML loaders.
//!
//! ```rust
//! use resonance::SpringParams;
//!
//! let params = SpringParams {
//!     fps: 30,
//!     ..SpringParams::default()
//! };
//! params.validate().unwrap();
//! let spring = params.build();
//! # let _ = spring;
//! ```

use crate::error::ParamError;
#[cfg(feature = "config")]
use crate::error::ConfigError;
use crate::projectile::{Point, Projectile, TERMINAL_GRAVITY, Vector};
use crate::spring::{Regime, Spring};
use crate::timestep::fps;

/// Frame rate assumed when none is given.
pub const DEFAULT_FPS: u32 = 60;

/// Default angular frequency. Responsive without being snappy.
pub const DEFAULT_FREQUENCY: f64 = 6.0;

/// Default damping ratio. Slightly under-damped for a small, soft bounce.
pub const DEFAULT_DAMPING: f64 = 0.8;

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParamError> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(ParamError::Negative { name, value });
    }
    Ok(())
}

fn check_frame_rate(n: u32) -> Result<(), ParamError> {
    if n == 0 {
        Err(ParamError::ZeroFrameRate)
    } else {
        Ok(())
    }
}

/// Everything needed to build a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringParams {
    /// Frames per second the spring will be stepped at.
    pub fps: u32,
    /// Angular frequency in radians per second.
    pub angular_frequency: f64,
    /// Damping ratio.
    pub damping_ratio: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            angular_frequency: DEFAULT_FREQUENCY,
            damping_ratio: DEFAULT_DAMPING,
        }
    }
}

impl SpringParams {
    /// Parameters for a spring stepped at `fps` frames per second.
    pub const fn new(fps: u32, angular_frequency: f64, damping_ratio: f64) -> Self {
        Self {
            fps,
            angular_frequency,
            damping_ratio,
        }
    }

    /// Rejects zero frame rates and non-finite or negative physics values.
    ///
    /// # Errors
    /// Returns the first offending parameter as a [`ParamError`].
    pub fn validate(&self) -> Result<(), ParamError> {
        check_frame_rate(self.fps)?;
        check_non_negative("angular_frequency", self.angular_frequency)?;
        check_non_negative("damping_ratio", self.damping_ratio)?;
        Ok(())
    }

    /// The regime these parameters fall into.
    pub fn regime(&self) -> Regime {
        Regime::classify(self.angular_frequency, self.damping_ratio)
    }

    /// Derives the spring. Unvalidated values are clamped the same way
    /// [`Spring::new`] clamps them.
    pub fn build(&self) -> Spring {
        Spring::new(fps(self.fps), self.angular_frequency, self.damping_ratio)
    }

    /// Parses and validates parameters from JSON.
    ///
    /// Missing fields take their [`Default`] values.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.checked()
    }

    /// Parses and validates parameters from TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    #[cfg(feature = "config")]
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(toml)?;
        params.checked()
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        if let Err(err) = self.validate() {
            tracing::warn!(config.kind = "spring", error = %err, "Rejected spring parameters");
            return Err(err.into());
        }
        tracing::debug!(
            config.kind = "spring",
            spring.fps = self.fps,
            spring.angular_frequency = self.angular_frequency,
            spring.damping_ratio = self.damping_ratio,
            spring.regime = %self.regime(),
            "Loaded spring parameters"
        );
        Ok(self)
    }
}

/// Everything needed to build a [`Projectile`].
///
/// The default is a body at rest at the origin under
/// [`TERMINAL_GRAVITY`], stepped at 60 fps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectileParams {
    /// Frames per second the projectile will be stepped at.
    pub fps: u32,
    /// Starting position.
    pub position: Point,
    /// Starting velocity.
    pub velocity: Vector,
    /// Constant acceleration.
    pub acceleration: Vector,
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            position: Point::origin(),
            velocity: Vector::zero(),
            acceleration: TERMINAL_GRAVITY,
        }
    }
}

impl ProjectileParams {
    /// Rejects zero frame rates and non-finite components.
    ///
    /// # Errors
    /// Returns the first offending parameter as a [`ParamError`].
    pub fn validate(&self) -> Result<(), ParamError> {
        check_frame_rate(self.fps)?;
        let Point { x, y, z } = self.position;
        check_finite("position.x", x)?;
        check_finite("position.y", y)?;
        check_finite("position.z", z)?;
        let Vector { x, y, z } = self.velocity;
        check_finite("velocity.x", x)?;
        check_finite("velocity.y", y)?;
        check_finite("velocity.z", z)?;
        let Vector { x, y, z } = self.acceleration;
        check_finite("acceleration.x", x)?;
        check_finite("acceleration.y", y)?;
        check_finite("acceleration.z", z)?;
        Ok(())
    }

    /// Creates the projectile.
    pub fn build(&self) -> Projectile {
        Projectile::new(fps(self.fps), self.position, self.velocity, self.acceleration)
    }

    /// Parses and validates parameters from JSON.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.checked()
    }

    /// Parses and validates parameters from TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    #[cfg(feature = "config")]
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(toml)?;
        params.checked()
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        if let Err(err) = self.validate() {
            tracing::warn!(config.kind = "projectile", error = %err, "Rejected projectile parameters");
            return Err(err.into());
        }
        tracing::debug!(
            config.kind = "projectile",
            projectile.fps = self.fps,
            "Loaded projectile parameters"
        );
        Ok(self)
    }
}
