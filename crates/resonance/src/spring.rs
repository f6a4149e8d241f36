//! Damped harmonic oscillator solved in closed form.
//!
//! For a fixed time step the motion of a damped spring is a linear map on
//! `(x, v)`, where `x` is the displacement from the target. [`Spring`]
//! stores the 2x2 matrix of that map:
//!
//! ```text
//! x' = pos_pos * x + pos_vel * v
//! v' = vel_pos * x + vel_vel * v
//! ```
//!
//! Each damping regime has its own analytic solution, and each of those is
//! singular where it meets the critically damped case, so the regime is
//! chosen with an [`EPSILON`] margin around a damping ratio of 1.
//!
//! The coefficient derivation is a port of Ryan Juckett's simple damped
//! harmonic motion algorithm: <https://www.ryanjuckett.com/damped-springs/>
//!
//! # License
//!
//! ```text
//! Copyright (c) 2008-2012 Ryan Juckett
//! http://www.ryanjuckett.com/
//!
//! This software is provided 'as-is', without any express or implied
//! warranty. In no event will the authors be held liable for any damages
//! arising from the use of this software.
//!
//! Permission is granted to anyone to use this software for any purpose,
//! including commercial applications, and to alter it and redistribute it
//! freely, subject to the following restrictions:
//!
//! 1. The origin of this software must not be misrepresented; you must not
//!    claim that you wrote the original software. If you use this software
//!    in a product, an acknowledgment in the product documentation would be
//!    appreciated but is not required.
//!
//! 2. Altered source versions must be plainly marked as such, and must not be
//!    misrepresented as being the original software.
//!
//! 3. This notice may not be removed or altered from any source
//!    distribution.
//!
//! Ported to Go by Charmbracelet, Inc. in 2021.
//! Ported to Rust by the Resonance contributors in 2026.
//!
//! Altered from the original: regime selection is split into
//! Regime::classify, and the position update is applied as a correction
//! to the current position.
//! ```

use core::fmt;

use tracing::trace;

use crate::math::{exp, sin_cos, sqrt};
use crate::timestep::EPSILON;

/// The qualitative behavior a spring's parameters select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Regime {
    /// No restoring force: position and velocity never change.
    Identity,
    /// Damping ratio above `1 + EPSILON`: two real decay rates, no overshoot.
    OverDamped,
    /// Damping ratio below `1 - EPSILON`: decaying oscillation.
    UnderDamped,
    /// Damping ratio within `EPSILON` of 1: fastest settle without overshoot.
    CriticallyDamped,
}

impl Regime {
    /// Picks the regime for the given parameters.
    ///
    /// Negative inputs are clamped to zero first, exactly as
    /// [`Spring::new`] does, so the result always names the branch that
    /// constructor takes.
    ///
    /// ```rust
    /// use resonance::{Regime, EPSILON};
    ///
    /// assert_eq!(Regime::classify(5.0, 0.3), Regime::UnderDamped);
    /// assert_eq!(Regime::classify(5.0, 1.0 + EPSILON), Regime::CriticallyDamped);
    /// assert_eq!(Regime::classify(-5.0, 0.3), Regime::Identity);
    /// ```
    pub fn classify(angular_frequency: f64, damping_ratio: f64) -> Self {
        let angular_frequency = angular_frequency.max(0.0);
        let damping_ratio = damping_ratio.max(0.0);

        if angular_frequency < EPSILON {
            Regime::Identity
        } else if damping_ratio > 1.0 + EPSILON {
            Regime::OverDamped
        } else if damping_ratio < 1.0 - EPSILON {
            Regime::UnderDamped
        } else {
            Regime::CriticallyDamped
        }
    }

    /// Short lowercase name, used in log fields and fixtures.
    pub const fn as_str(self) -> &'static str {
        match self {
            Regime::Identity => "identity",
            Regime::OverDamped => "over_damped",
            Regime::UnderDamped => "under_damped",
            Regime::CriticallyDamped => "critically_damped",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precomputed one-step motion of a damped spring.
///
/// A `Spring` holds no position, velocity or target. Build one per
/// `(delta_time, angular_frequency, damping_ratio)` triple and use it to
/// advance any number of independent values that share those parameters,
/// such as the X and Y coordinates of the same sprite.
///
/// The coefficients are only correct for the `delta_time` the spring was
/// built with. Stepping it at a different cadence produces motion that is
/// smooth but physically wrong. To change frequency, damping or frame rate,
/// build a new `Spring`.
///
/// ```rust
/// use resonance::{fps, Spring};
///
/// let spring = Spring::new(fps(60), 8.0, 0.3);
///
/// let (mut x, mut x_vel) = (0.0, 0.0);
/// let (mut y, mut y_vel) = (100.0, 0.0);
///
/// // One frame, two values, one set of coefficients.
/// spring.step(&mut x, &mut x_vel, 20.0);
/// spring.step(&mut y, &mut y_vel, 50.0);
///
/// assert!(x > 0.0 && y < 100.0);
/// ```
///
/// With the `serde` feature a `Spring` serializes its coefficients but
/// cannot be deserialized, since coefficients only come from
/// [`Spring::new`]. Persist [`SpringParams`](crate::SpringParams) and
/// rebuild instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spring {
    pos_pos_coef: f64,
    pos_vel_coef: f64,
    vel_pos_coef: f64,
    vel_vel_coef: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::identity()
    }
}

impl Spring {
    /// Derives the coefficients for one step of `delta_time` seconds.
    ///
    /// * `delta_time` - length of a frame in seconds, usually from
    ///   [`fps`](crate::fps).
    /// * `angular_frequency` - stiffness, in radians per second. Negative
    ///   values are treated as 0, which yields a spring that never moves.
    /// * `damping_ratio` - below 1 oscillates, 1 settles fastest, above 1
    ///   settles slowly. Negative values are treated as 0.
    ///
    /// This never fails and never panics.
    ///
    /// ```rust
    /// use resonance::{fps, Spring};
    ///
    /// let wobbly = Spring::new(fps(60), 6.0, 0.15);
    /// let smooth = Spring::new(fps(60), 6.0, 1.0);
    /// let heavy = Spring::new(fps(60), 6.0, 3.0);
    /// # let _ = (wobbly, smooth, heavy);
    /// ```
    pub fn new(delta_time: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let angular_frequency = angular_frequency.max(0.0);
        let damping_ratio = damping_ratio.max(0.0);
        let regime = Regime::classify(angular_frequency, damping_ratio);

        trace!(
            spring.regime = regime.as_str(),
            spring.delta_time = delta_time,
            spring.angular_frequency = angular_frequency,
            spring.damping_ratio = damping_ratio,
            "Spring coefficients derived"
        );

        match regime {
            Regime::Identity => Self::identity(),
            Regime::OverDamped => Self::over_damped(delta_time, angular_frequency, damping_ratio),
            Regime::UnderDamped => Self::under_damped(delta_time, angular_frequency, damping_ratio),
            Regime::CriticallyDamped => Self::critically_damped(delta_time, angular_frequency),
        }
    }

    /// A spring that leaves every position and velocity untouched.
    pub const fn identity() -> Self {
        Self {
            pos_pos_coef: 1.0,
            pos_vel_coef: 0.0,
            vel_pos_coef: 0.0,
            vel_vel_coef: 1.0,
        }
    }

    // Roots of s^2 + 2*zeta*omega*s + omega^2 are za -/+ zb, both real and
    // negative. zb > 0 is guaranteed by the EPSILON margin in `classify`.
    fn over_damped(delta_time: f64, omega: f64, zeta: f64) -> Self {
        let za = -omega * zeta;
        let zb = omega * sqrt(zeta * zeta - 1.0);
        let z1 = za - zb;
        let z2 = za + zb;

        let e1 = exp(z1 * delta_time);
        let e2 = exp(z2 * delta_time);

        // z2 - z1 == 2 * zb
        let inv_gap = 1.0 / (2.0 * zb);
        let e1_gap = e1 * inv_gap;
        let e2_gap = e2 * inv_gap;
        let z1_e1_gap = z1 * e1_gap;
        let z2_e2_gap = z2 * e2_gap;

        Self {
            pos_pos_coef: e1_gap * z2 - z2_e2_gap + e2,
            pos_vel_coef: e2_gap - e1_gap,
            vel_pos_coef: (z1_e1_gap - z2_e2_gap + e2) * z2,
            vel_vel_coef: z2_e2_gap - z1_e1_gap,
        }
    }

    fn under_damped(delta_time: f64, omega: f64, zeta: f64) -> Self {
        let decay = omega * zeta;
        let alpha = omega * sqrt(1.0 - zeta * zeta);

        let envelope = exp(-decay * delta_time);
        let (sin_t, cos_t) = sin_cos(alpha * delta_time);
        let inv_alpha = 1.0 / alpha;

        let env_sin = envelope * sin_t;
        let env_cos = envelope * cos_t;
        let env_decay_sin_over_alpha = envelope * decay * sin_t * inv_alpha;

        Self {
            pos_pos_coef: env_cos + env_decay_sin_over_alpha,
            pos_vel_coef: env_sin * inv_alpha,
            vel_pos_coef: -env_sin * alpha - decay * env_decay_sin_over_alpha,
            vel_vel_coef: env_cos - env_decay_sin_over_alpha,
        }
    }

    fn critically_damped(delta_time: f64, omega: f64) -> Self {
        let envelope = exp(-omega * delta_time);
        let time_env = delta_time * envelope;
        let time_env_omega = time_env * omega;

        Self {
            pos_pos_coef: time_env_omega + envelope,
            pos_vel_coef: time_env,
            vel_pos_coef: -omega * time_env_omega,
            vel_vel_coef: envelope - time_env_omega,
        }
    }

    /// Advances `(pos, vel)` one step toward `target` and returns the result.
    ///
    /// ```rust
    /// use resonance::{fps, Spring};
    ///
    /// let spring = Spring::new(fps(60), 5.0, 1.0);
    /// let (mut pos, mut vel) = (0.0, 0.0);
    /// for _ in 0..300 {
    ///     (pos, vel) = spring.update(pos, vel, 100.0);
    /// }
    /// assert!((pos - 100.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn update(&self, pos: f64, vel: f64, target: f64) -> (f64, f64) {
        let offset = pos - target;

        // offset * pos_pos + vel * pos_vel + target, written as a correction
        // to `pos` so the identity spring returns its input bit for bit.
        let new_pos = pos + (offset * (self.pos_pos_coef - 1.0) + vel * self.pos_vel_coef);
        let new_vel = offset * self.vel_pos_coef + vel * self.vel_vel_coef;

        (new_pos, new_vel)
    }

    /// Advances `pos` and `vel` in place one step toward `target`.
    ///
    /// Same math as [`update`](Self::update), for callers that keep their
    /// state in fields.
    #[inline]
    pub fn step(&self, pos: &mut f64, vel: &mut f64, target: f64) {
        (*pos, *vel) = self.update(*pos, *vel, target);
    }

    /// The four coefficients as `[pos_pos, pos_vel, vel_pos, vel_vel]`.
    pub const fn coefficients(&self) -> [f64; 4] {
        [
            self.pos_pos_coef,
            self.pos_vel_coef,
            self.vel_pos_coef,
            self.vel_vel_coef,
        ]
    }

    /// Whether stepping with this spring changes nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
