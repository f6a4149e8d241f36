//! Errors raised by the configuration layer.
//!
//! The per-frame API has no error type. These only come out of
//! [`SpringParams::validate`](crate::SpringParams::validate),
//! [`ProjectileParams::validate`](crate::ProjectileParams::validate) and
//! the loaders behind the `config` feature.

use thiserror::Error;

/// A parameter that [`Spring::new`](crate::Spring::new) or
/// [`Projectile::new`](crate::Projectile::new) would accept but that
/// almost certainly isn't what the caller meant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("Frame rate must be at least 1 frame per second")]
    ZeroFrameRate,
}

/// Error loading parameters from text.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[cfg(feature = "config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Invalid(#[from] ParamError),
}
