//! Clock abstraction for platform-agnostic timing.

/// Source of the wall-clock timestamp handed to every tick.
///
/// Timestamps are seconds as `f64` and must be monotonically non-decreasing.
/// Most patterns derive their phase directly from this value, so a skipped or
/// late tick simply renders whatever the animation looks like at that time.
pub trait TimeSource {
    /// Returns the current time in seconds.
    fn now(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// `floor(now * rate)` as an integer step count.
///
/// Non-finite input collapses to zero.
#[inline]
pub(crate) fn steps(now: f64, rate: f64) -> i64 {
    let scaled = libm::floor(now * rate);
    if scaled.is_finite() { scaled as i64 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_floors_toward_negative_infinity() {
        assert_eq!(steps(1.99, 1.0), 1);
        assert_eq!(steps(0.5, 20.0), 10);
        assert_eq!(steps(-0.5, 1.0), -1);
    }

    #[test]
    fn steps_ignores_non_finite_values() {
        assert_eq!(steps(f64::NAN, 1.0), 0);
        assert_eq!(steps(f64::INFINITY, 1.0), 0);
    }
}
