//! Frame-rate and time-step helpers shared by both models.

use core::time::Duration;

/// Tolerance used to decide which damping regime a spring falls in.
///
/// This is the gap between 1.0 and the next representable `f64`, so a
/// damping ratio only counts as critical when it is indistinguishable from
/// 1 at the working precision.
pub const EPSILON: f64 = f64::EPSILON;

/// Returns the time step, in seconds, of one frame at `n` frames per second.
///
/// The frame length is first computed as a whole number of nanoseconds
/// (`1s / n`, truncated) and only then converted to floating point, so
/// `fps(60)` is `0.016_666_666` rather than `1.0 / 60.0`. Reference
/// trajectories are captured with this truncation.
///
/// `fps(0)` returns `0.0`: a zero time step, with which every model leaves
/// its state unchanged.
///
/// # Example
///
/// ```rust
/// use resonance::{fps, Spring};
///
/// assert_eq!(fps(60), 0.016_666_666);
/// let spring = Spring::new(fps(60), 6.0, 0.4);
/// # let _ = spring;
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    time_delta(Duration::from_secs(1) / n)
}

/// Returns the length of `frame` in seconds.
///
/// Use this when the host loop already measures its frame length as a
/// [`Duration`], for example a 24 fps cadence of `Duration::from_secs(1) / 24`.
#[inline]
pub fn time_delta(frame: Duration) -> f64 {
    frame.as_secs_f64()
}
