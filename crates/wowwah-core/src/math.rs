//! Mathematical utility functions for DSP.
//!
//! Level conversions and block statistics used by the output stage and the
//! level meter. All functions are allocation-free and `no_std`.

use libm::{expf, log10f, sqrtf};

/// Lowest level the meter reports, in dB. Silence maps here.
pub const SILENCE_DB: f32 = -100.0;

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use wowwah_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels, floored at `floor_db`.
///
/// Zero, negative and non-finite-small gains all map to `floor_db`.
///
/// # Example
/// ```rust
/// use wowwah_core::{gain_to_db, SILENCE_DB};
///
/// assert!(gain_to_db(1.0, SILENCE_DB).abs() < 0.001);
/// assert_eq!(gain_to_db(0.0, SILENCE_DB), SILENCE_DB);
/// ```
#[inline]
pub fn gain_to_db(gain: f32, floor_db: f32) -> f32 {
    if gain > 0.0 {
        (20.0 * log10f(gain)).max(floor_db)
    } else {
        floor_db
    }
}

/// Root-mean-square level of a block. Empty blocks are silent.
#[inline]
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    sqrtf(sum / samples.len() as f32)
}

/// Replace NaN and infinities with zero.
#[inline]
pub fn sanitize(x: f32) -> f32 {
    if x.is_finite() { x } else { 0.0 }
}
