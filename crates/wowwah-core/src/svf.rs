//! Chamberlin State Variable Filter.
//!
//! A two-pole filter that produces lowpass, bandpass, and highpass outputs
//! from one shared recursive state. The wah engine sweeps its cutoff every
//! sample, so the recursion is exposed as a single step function that takes
//! the frequency coefficient and damping as arguments instead of caching
//! them in the filter.
//!
//! # Topology
//!
//! ```text
//! F    = 2 · sin(π · freq / sample_rate)
//! high = input − low − Q · band
//! band = band + F · high
//! low  = low  + F · band
//! ```
//!
//! `Q` here is the damping term: small values give a sharp resonant peak,
//! `Q = 0` self-oscillates.
//!
//! # Stability
//!
//! The recursion has transition matrix determinant `1 − F·Q` and trace
//! `2 − F·Q − F²`. Applying the Jury criterion gives the stable region
//!
//! ```text
//! 0 < F·Q < 2   and   F² + 2·Q·F < 4
//! ```
//!
//! so the largest usable coefficient is `√(Q² + 4) − Q`, which is always below
//! 2. Nothing here clamps `F`; callers that cannot guarantee their modulation
//! range stays under [`stability_limit`] can run coefficients through
//! [`clamp_coefficient`].
//!
//! # Reference
//!
//! Chamberlin, "Musical Applications of Microprocessors" (1985), §14.4.

use core::f32::consts::PI;
use libm::{sinf, sqrtf};

/// Which of the three simultaneous SVF outputs feeds the output stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SvfTap {
    /// Low-pass output.
    #[default]
    Low,
    /// Band-pass output.
    Band,
    /// High-pass output.
    High,
}

impl SvfTap {
    /// All taps in index order.
    pub const ALL: [SvfTap; 3] = [SvfTap::Low, SvfTap::Band, SvfTap::High];

    /// Tap from its index (0 = low, 1 = band, 2 = high).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(SvfTap::Low),
            1 => Some(SvfTap::Band),
            2 => Some(SvfTap::High),
            _ => None,
        }
    }

    /// Index of this tap (inverse of [`from_index`](Self::from_index)).
    pub const fn index(self) -> u8 {
        match self {
            SvfTap::Low => 0,
            SvfTap::Band => 1,
            SvfTap::High => 2,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            SvfTap::Low => "Low",
            SvfTap::Band => "Band",
            SvfTap::High => "High",
        }
    }
}

/// Filter memory: the three node values carried from sample to sample.
///
/// The triple is the filter's entire state. It starts at zero and must only
/// be cleared when the whole engine is re-prepared; clearing it mid-stream
/// produces an audible click.
///
/// # Example
///
/// ```rust
/// use wowwah_core::{SvfState, svf_coefficient};
///
/// let mut state = SvfState::default();
/// let f = svf_coefficient(800.0, 48000.0);
///
/// let out = state.advance(0.5, f, 0.5);
/// assert_eq!(out, state);
/// assert!(out.low.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SvfState {
    /// Low-pass node.
    pub low: f32,
    /// Band-pass node.
    pub band: f32,
    /// High-pass node.
    pub high: f32,
}

impl SvfState {
    /// Advance the recursion one sample.
    ///
    /// `coeff` is the frequency coefficient from [`svf_coefficient`] and
    /// `q` the damping. Returns the updated triple, which is also the new
    /// state.
    #[inline]
    pub fn advance(&mut self, input: f32, coeff: f32, q: f32) -> SvfState {
        self.high = input - self.low - q * self.band;
        self.band += coeff * self.high;
        self.low += coeff * self.band;
        *self
    }

    /// Read one of the three outputs.
    #[inline]
    pub fn tap(&self, tap: SvfTap) -> f32 {
        match tap {
            SvfTap::Low => self.low,
            SvfTap::Band => self.band,
            SvfTap::High => self.high,
        }
    }

    /// Pairwise mean of two triples.
    ///
    /// Used by the humanizer to blend its two formant filters.
    #[inline]
    pub fn average(&self, other: &SvfState) -> SvfState {
        SvfState {
            low: (self.low + other.low) * 0.5,
            band: (self.band + other.band) * 0.5,
            high: (self.high + other.high) * 0.5,
        }
    }

    /// Zero all three nodes.
    pub fn reset(&mut self) {
        *self = SvfState::default();
    }

    /// True when every node is finite.
    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.band.is_finite() && self.high.is_finite()
    }
}

/// Frequency coefficient `F = 2·sin(π·freq/sample_rate)`.
#[inline]
pub fn svf_coefficient(freq: f32, sample_rate: f32) -> f32 {
    2.0 * sinf(PI * freq / sample_rate)
}

/// Largest frequency coefficient for which the recursion is stable at
/// damping `q`: `√(q² + 4) − q`.
#[inline]
pub fn stability_limit(q: f32) -> f32 {
    sqrtf(q * q + 4.0) - q
}

/// Clamp `coeff` into `[0, limit)`, keeping a small margin below
/// [`stability_limit`].
#[inline]
pub fn clamp_coefficient(coeff: f32, q: f32) -> f32 {
    let limit = stability_limit(q.max(0.0)) * 0.999;
    if coeff > limit {
        limit
    } else if coeff < 0.0 {
        0.0
    } else {
        coeff
    }
}
