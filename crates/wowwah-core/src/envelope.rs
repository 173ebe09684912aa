//! Envelope follower for tracking signal amplitude.
//!
//! Drives the wah's dynamic mode: the tracked level sweeps the filter between
//! its low and high bounds.
//!
//! The smoothing coefficients depend only on the attack/release times and the
//! sample rate, so they live in [`EnvelopeCoefficients`] and are computed once
//! per block. Each channel keeps only its own [`EnvelopeFollower`] level.

use libm::expf;

/// Attack and release smoothing coefficients.
///
/// `α = exp(−1 / (time_secs · sample_rate))`. A time of zero gives `α = 0`
/// (instant response). Negative times produce coefficients above one, which
/// make the follower diverge; range checks belong to whoever sets the times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeCoefficients {
    /// Coefficient used while the rectified input is above the envelope.
    pub attack: f32,
    /// Coefficient used while the rectified input is at or below the envelope.
    pub release: f32,
}

impl EnvelopeCoefficients {
    /// Compute coefficients from attack/release times in seconds.
    pub fn new(attack_secs: f32, release_secs: f32, sample_rate: f32) -> Self {
        Self {
            attack: time_to_coeff(attack_secs, sample_rate),
            release: time_to_coeff(release_secs, sample_rate),
        }
    }
}

#[inline]
fn time_to_coeff(time_secs: f32, sample_rate: f32) -> f32 {
    expf(-1.0 / (time_secs * sample_rate))
}

/// Per-channel envelope level.
///
/// Peak detection with separate attack and release:
///
/// ```text
/// r   = |x|
/// α   = attack if r > env else release
/// env = α·env + (1 − α)·r
/// ```
///
/// # Example
///
/// ```rust
/// use wowwah_core::{EnvelopeCoefficients, EnvelopeFollower};
///
/// let coeffs = EnvelopeCoefficients::new(0.001, 0.01, 48000.0);
/// let mut env = EnvelopeFollower::new();
///
/// let level = env.process(-0.5, &coeffs);
/// assert!(level > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnvelopeFollower {
    level: f32,
}

impl EnvelopeFollower {
    /// Create a follower at level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a sample and return the updated envelope level.
    #[inline]
    pub fn process(&mut self, input: f32, coeffs: &EnvelopeCoefficients) -> f32 {
        let input_abs = input.abs();

        let coeff = if input_abs > self.level {
            coeffs.attack
        } else {
            coeffs.release
        };

        self.level = coeff * self.level + (1.0 - coeff) * input_abs;
        self.level
    }

    /// Current level without processing new input.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Reset the level to zero.
    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}
