//! Position and velocity of one spring-driven value.

use crate::spring::Spring;

/// The state a [`Spring`] evolves: one position and its velocity.
///
/// `Oscillator` owns neither the spring nor the target, so a single spring
/// can drive many oscillators and the target can change every frame.
///
/// ```rust
/// use resonance::{fps, Oscillator, Spring};
///
/// let spring = Spring::new(fps(60), 10.0, 1.0);
/// let mut width = Oscillator::new(0.0);
///
/// while !width.is_settled(80.0, 0.01) {
///     width.step(&spring, 80.0);
/// }
/// width.snap(80.0);
/// assert_eq!(width.position, 80.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oscillator {
    /// Current position.
    pub position: f64,
    /// Current velocity, in position units per second.
    pub velocity: f64,
}

impl Oscillator {
    /// An oscillator at `position`, at rest.
    #[inline]
    pub const fn new(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// An oscillator at `position` moving with `velocity`.
    #[inline]
    pub const fn with_velocity(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Advances one frame toward `target` and returns the new position.
    #[inline]
    pub fn step(&mut self, spring: &Spring, target: f64) -> f64 {
        spring.step(&mut self.position, &mut self.velocity, target);
        self.position
    }

    /// True when both the distance to `target` and the speed are below
    /// `threshold`.
    pub fn is_settled(&self, target: f64, threshold: f64) -> bool {
        (self.position - target).abs() < threshold && self.velocity.abs() < threshold
    }

    /// Jumps to `target` and stops.
    pub fn snap(&mut self, target: f64) {
        self.position = target;
        self.velocity = 0.0;
    }
}

impl From<(f64, f64)> for Oscillator {
    fn from((position, velocity): (f64, f64)) -> Self {
        Self { position, velocity }
    }
}

impl From<Oscillator> for (f64, f64) {
    fn from(osc: Oscillator) -> Self {
        (osc.position, osc.velocity)
    }
}
