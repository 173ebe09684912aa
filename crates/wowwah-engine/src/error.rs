//! Control surface errors.

use thiserror::Error;

/// Errors raised while validating control input.
///
/// The audio path never produces these; they come from [`WahControls`],
/// [`TapTempo`] and the string parsers for vowels, modes and taps.
///
/// [`WahControls`]: crate::WahControls
/// [`TapTempo`]: crate::TapTempo
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// No parameter has this string id.
    #[error("unknown parameter '{0}'")]
    UnknownParam(String),

    /// Value lies outside the parameter's descriptor range.
    #[error("{name} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Parameter string id.
        name: &'static str,
        /// Rejected value.
        value: f32,
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// Not one of the five vowels.
    #[error("invalid vowel '{0}' (expected A, E, I, O or U)")]
    InvalidVowel(String),

    /// Not a valid option for a choice parameter.
    #[error("invalid {param} '{value}'")]
    InvalidChoice {
        /// Parameter string id.
        param: &'static str,
        /// Rejected text or index.
        value: String,
    },

    /// Time between taps outside the accepted window.
    #[error("tap interval {0:.3} s outside 0.05..=20 s")]
    TapInterval(f64),
}
