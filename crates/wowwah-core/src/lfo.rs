//! Sine oscillator for tempo-mode modulation.
//!
//! The phase is kept in radians and wrapped into `[0, 2π)` after every step,
//! so the oscillator keeps full precision however long the stream runs. It is
//! accumulated in `f64`: at audio rates an `f32` accumulator drifts by a
//! measurable fraction of a cycle within minutes.
//!
//! The rate is not stored. The engine computes one
//! [`phase_increment`](Lfo::phase_increment) per block from the current
//! parameters and feeds it to every channel's oscillator, so a rate change
//! bends the sweep instead of jumping it.

use core::f64::consts::TAU;
use libm::{floor, sin};

/// Phase-accumulating sine oscillator.
///
/// For a constant rate, the `n`-th value equals
/// `sin(2π · rate · n / sample_rate)`.
///
/// # Example
///
/// ```rust
/// use wowwah_core::Lfo;
///
/// let mut lfo = Lfo::new();
/// let inc = Lfo::phase_increment(2.0, 48000.0);
///
/// assert_eq!(lfo.next(inc), 0.0);
/// assert!(lfo.next(inc) > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Lfo {
    /// Current phase in radians, `[0, 2π)`.
    phase: f64,
}

impl Lfo {
    /// Create an oscillator at phase zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Radians to advance per sample for `rate_hz` at `sample_rate`.
    #[inline]
    pub fn phase_increment(rate_hz: f32, sample_rate: f32) -> f64 {
        TAU * f64::from(rate_hz) / f64::from(sample_rate)
    }

    /// Return `sin(phase)` and advance the phase by `increment`.
    #[inline]
    pub fn next(&mut self, increment: f64) -> f32 {
        let value = sin(self.phase) as f32;
        self.phase = wrap(self.phase + increment);
        value
    }

    /// Current phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Set the phase, wrapping into `[0, 2π)`.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = wrap(phase);
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[inline]
fn wrap(phase: f64) -> f64 {
    if (0.0..TAU).contains(&phase) {
        return phase;
    }
    let wrapped = phase - TAU * floor(phase / TAU);
    // Rounding can land exactly on TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
