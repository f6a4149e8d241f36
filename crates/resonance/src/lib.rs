#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Numeric code reads better with these left alone
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::struct_field_names)]

//! # Resonance
//!
//! Two closed-form, per-frame integrators for animation loops:
//!
//! - [`Spring`]: a damped harmonic oscillator. Four coefficients are derived
//!   once from a time step, an angular frequency and a damping ratio; each
//!   frame then advances a `(position, velocity)` pair toward a target in
//!   constant time.
//! - [`Projectile`]: constant-acceleration kinematics in 3D, stepped with
//!   explicit Euler.
//!
//! Neither model owns a clock. The caller decides when a frame happens and
//! calls `update`/`step` once per frame with the time step the model was
//! built for.
//!
//! ## Spring
//!
//! ```rust
//! use resonance::{fps, Spring};
//!
//! let spring = Spring::new(fps(60), 6.0, 0.5);
//!
//! let (mut x, mut x_vel) = (0.0, 0.0);
//! let (mut y, mut y_vel) = (0.0, 0.0);
//!
//! for _ in 0..180 {
//!     spring.step(&mut x, &mut x_vel, 40.0);
//!     (y, y_vel) = spring.update(y, y_vel, -10.0);
//! }
//!
//! assert!((x - 40.0).abs() < 1.0);
//! assert!((y + 10.0).abs() < 1.0);
//! ```
//!
//! ## Projectile
//!
//! ```rust
//! use resonance::{fps, Point, Projectile, Vector, TERMINAL_GRAVITY};
//!
//! let mut spark = Projectile::new(
//!     fps(60),
//!     Point::origin(),
//!     Vector::new(5.0, -8.0, 0.0),
//!     TERMINAL_GRAVITY,
//! );
//!
//! let pos = spark.update();
//! assert!(pos.x > 0.0);
//! ```
//!
//! ## Damping regimes
//!
//! | damping ratio | regime | motion |
//! |---|---|---|
//! | `< 1` | under-damped | overshoots, rings down |
//! | `= 1` | critically damped | fastest settle without overshoot |
//! | `> 1` | over-damped | slow settle without overshoot |
//!
//! Ratios within [`EPSILON`] of 1 are treated as critical.
//!
//! ## Non-finite input
//!
//! Nothing on the per-frame path validates its arguments. NaN or infinite
//! positions, velocities or targets propagate into non-finite output
//! without panicking. Use [`SpringParams::validate`] when parameters come
//! from somewhere untrusted.
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float math.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for value and parameter types.
//! - `config`: JSON and TOML loaders for [`SpringParams`] and
//!   [`ProjectileParams`].
//!
//! The spring derivation follows Ryan Juckett's damped harmonic motion
//! write-up: <https://www.ryanjuckett.com/damped-springs/>

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("resonance needs either the `std` or the `libm` feature for float math");

mod config;
mod error;
mod math;
mod oscillator;
mod projectile;
mod spring;
mod timestep;

pub use config::{
    DEFAULT_DAMPING, DEFAULT_FPS, DEFAULT_FREQUENCY, ProjectileParams, SpringParams,
};
pub use error::{ConfigError, ParamError};
pub use oscillator::Oscillator;
pub use projectile::{GRAVITY, Point, Projectile, TERMINAL_GRAVITY, Vector};
pub use spring::{Regime, Spring};
pub use timestep::{EPSILON, fps, time_delta};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ProjectileParams, SpringParams};
    pub use crate::oscillator::Oscillator;
    pub use crate::projectile::{GRAVITY, Point, Projectile, TERMINAL_GRAVITY, Vector};
    pub use crate::spring::{Regime, Spring};
    pub use crate::timestep::{fps, time_delta};
}
