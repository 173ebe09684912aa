//! Tap tempo for the tempo-mode oscillator.
//!
//! The caller supplies the clock, so the same type serves a UI button
//! (wall-clock seconds) and a file renderer (sample positions divided by the
//! sample rate).

use crate::error::ControlError;

/// Shortest accepted interval between taps, in seconds (20 Hz).
pub const MIN_TAP_INTERVAL: f64 = 0.05;

/// Longest accepted interval between taps, in seconds (0.05 Hz).
pub const MAX_TAP_INTERVAL: f64 = 20.0;

/// Result of a valid tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapReading {
    /// Seconds since the previous tap.
    pub interval: f64,
    /// Oscillator rate, one cycle per interval.
    pub rate_hz: f32,
    /// Beats per minute, one beat per interval.
    pub bpm: f32,
}

/// Measures the interval between successive taps.
///
/// # Example
///
/// ```rust
/// use wowwah_engine::TapTempo;
///
/// let mut tempo = TapTempo::new();
/// assert_eq!(tempo.tap(0.0), Ok(None));
///
/// let reading = tempo.tap(0.25).unwrap().unwrap();
/// assert_eq!(reading.rate_hz, 4.0);
/// assert_eq!(reading.bpm, 240.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TapTempo {
    last_tap: Option<f64>,
    last_reading: Option<TapReading>,
}

impl TapTempo {
    /// No taps recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tap at `now_secs`.
    ///
    /// Returns `Ok(None)` for the first tap of a measurement and a reading
    /// for every tap after it. An interval outside
    /// [`MIN_TAP_INTERVAL`]..=[`MAX_TAP_INTERVAL`] (including a clock that
    /// went backwards) is rejected and this tap starts a new measurement.
    pub fn tap(&mut self, now_secs: f64) -> Result<Option<TapReading>, ControlError> {
        let Some(previous) = self.last_tap.replace(now_secs) else {
            return Ok(None);
        };

        let interval = now_secs - previous;
        if !(MIN_TAP_INTERVAL..=MAX_TAP_INTERVAL).contains(&interval) {
            self.last_reading = None;
            return Err(ControlError::TapInterval(interval));
        }

        let reading = TapReading {
            interval,
            rate_hz: (1.0 / interval) as f32,
            bpm: (60.0 / interval) as f32,
        };
        self.last_reading = Some(reading);
        Ok(Some(reading))
    }

    /// Most recent valid reading of the current measurement.
    pub fn last_reading(&self) -> Option<TapReading> {
        self.last_reading
    }

    /// Forget all taps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tap_has_no_reading() {
        let mut tempo = TapTempo::new();
        assert_eq!(tempo.tap(3.0), Ok(None));
        assert_eq!(tempo.last_reading(), None);
    }

    #[test]
    fn every_later_tap_reports() {
        let mut tempo = TapTempo::new();
        tempo.tap(0.0).unwrap();
        let a = tempo.tap(1.0).unwrap().unwrap();
        assert_eq!((a.rate_hz, a.bpm), (1.0, 60.0));
        let b = tempo.tap(1.5).unwrap().unwrap();
        assert_eq!((b.rate_hz, b.bpm), (2.0, 120.0));
        assert_eq!(tempo.last_reading(), Some(b));
    }

    #[test]
    fn too_fast_restarts() {
        let mut tempo = TapTempo::new();
        tempo.tap(0.0).unwrap();
        assert!(matches!(tempo.tap(0.01), Err(ControlError::TapInterval(_))));
        // 0.01 became the new first tap
        let reading = tempo.tap(0.51).unwrap().unwrap();
        assert!((reading.interval - 0.5).abs() < 1e-12);
    }

    #[test]
    fn too_slow_and_backwards_rejected() {
        let mut tempo = TapTempo::new();
        tempo.tap(0.0).unwrap();
        assert!(tempo.tap(25.0).is_err());
        assert!(tempo.tap(24.0).is_err());
        assert_eq!(tempo.last_reading(), None);
    }

    #[test]
    fn bounds_inclusive() {
        let mut tempo = TapTempo::new();
        tempo.tap(0.0).unwrap();
        assert!(tempo.tap(20.0).unwrap().is_some());
        tempo.reset();
        tempo.tap(1.0).unwrap();
        assert!(tempo.tap(1.0 + MIN_TAP_INTERVAL).unwrap().is_some());
    }
}
