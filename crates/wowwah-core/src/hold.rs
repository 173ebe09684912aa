//! Asymmetric level hold.
//!
//! [`RiseHold`] follows a stream of readings (typically block levels in dB)
//! with two different behaviours: a reading at or below the held value is
//! taken immediately, a higher one is approached along a straight line that
//! would cover the whole distance in the rise time. The slope is fixed when a
//! new higher reading arrives, so repeating the same reading block after
//! block lands on it exactly after one rise time.
//!
//! ```rust
//! use wowwah_core::RiseHold;
//!
//! let mut hold = RiseHold::new(-100.0);
//! hold.set_rise_time(100.0, 48000.0);
//!
//! // 0 dB arrives: after 10 ms the held value has covered a tenth of the way
//! assert!((hold.feed(0.0, 480) + 90.0).abs() < 0.01);
//!
//! // A quieter reading wins at once
//! assert_eq!(hold.feed(-40.0, 480), -40.0);
//! ```

/// Held value that drops instantly and rises at a constant rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseHold {
    value: f32,
    target: f32,
    slope: f32,
    remaining: u32,
    rise_samples: u32,
}

impl RiseHold {
    /// Hold resting at `initial` with an instant rise.
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            target: initial,
            slope: 0.0,
            remaining: 0,
            rise_samples: 0,
        }
    }

    /// Time for a rise of any size, in milliseconds at `sample_rate`.
    ///
    /// Takes effect on the next higher reading.
    pub fn set_rise_time(&mut self, rise_ms: f32, sample_rate: f32) {
        let samples = rise_ms.max(0.0) * sample_rate / 1000.0;
        self.rise_samples = if samples.is_finite() { samples as u32 } else { 0 };
    }

    /// Rise time in samples.
    pub fn rise_samples(&self) -> u32 {
        self.rise_samples
    }

    /// Fold in `reading`, which covers `elapsed` samples, and return the new
    /// held value.
    pub fn feed(&mut self, reading: f32, elapsed: u32) -> f32 {
        if reading <= self.value {
            self.settle(reading);
            return self.value;
        }
        if reading != self.target {
            self.target = reading;
            if self.rise_samples == 0 {
                self.settle(reading);
                return self.value;
            }
            self.slope = (reading - self.value) / self.rise_samples as f32;
            self.remaining = self.rise_samples;
        }
        if elapsed >= self.remaining {
            self.settle(self.target);
        } else {
            self.value = (self.value + self.slope * elapsed as f32).min(self.target);
            self.remaining -= elapsed;
        }
        self.value
    }

    /// Current held value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True while climbing toward a higher reading.
    #[inline]
    pub fn is_rising(&self) -> bool {
        self.remaining > 0
    }

    /// Jump to `value` and cancel any rise.
    pub fn reset(&mut self, value: f32) {
        self.settle(value);
    }

    fn settle(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.slope = 0.0;
        self.remaining = 0;
    }
}

impl Default for RiseHold {
    fn default() -> Self {
        Self::new(0.0)
    }
}
