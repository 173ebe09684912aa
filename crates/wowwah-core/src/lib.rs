//! Wowwah Core - DSP primitives for the wowwah filter effect
//!
//! This crate provides the building blocks the wah engine is assembled from,
//! designed for real-time audio processing with zero allocation in the audio
//! path.
//!
//! # Core Abstractions
//!
//! ## Filter
//!
//! - [`SvfState`] - Chamberlin state variable filter memory with a single
//!   [`advance`](SvfState::advance) step producing lowpass, bandpass and
//!   highpass at once
//! - [`SvfTap`] - Which of the three outputs to read
//! - [`svf_coefficient`], [`stability_limit`], [`clamp_coefficient`] -
//!   Frequency coefficient and its stable range
//!
//! ## Modulation & Dynamics
//!
//! - [`Lfo`] - Sine oscillator with a wrapped phase accumulator
//! - [`EnvelopeFollower`] / [`EnvelopeCoefficients`] - Attack/release
//!   amplitude tracking
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] / [`ParameterInfo`] - Discoverable parameter metadata
//!
//! ## Metering
//!
//! - [`RiseHold`] - Held level that drops instantly and rises at a fixed rate
//!
//! ## Utilities
//!
//! - Level conversions: [`db_to_linear`], [`gain_to_db`], [`rms`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! wowwah-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use wowwah_core::{EnvelopeCoefficients, EnvelopeFollower, SvfState, SvfTap, svf_coefficient};
//!
//! let sample_rate = 48000.0;
//! let coeffs = EnvelopeCoefficients::new(0.001, 0.01, sample_rate);
//! let mut env = EnvelopeFollower::new();
//! let mut filter = SvfState::default();
//!
//! let mut buffer = [0.5_f32; 64];
//! for sample in buffer.iter_mut() {
//!     let level = env.process(*sample, &coeffs);
//!     let freq = 350.0 + 1700.0 * level;
//!     let out = filter.advance(*sample, svf_coefficient(freq, sample_rate), 0.1);
//!     *sample = out.tap(SvfTap::Band);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod envelope;
pub mod hold;
pub mod lfo;
pub mod math;
pub mod param_info;
pub mod svf;

pub use envelope::{EnvelopeCoefficients, EnvelopeFollower};
pub use hold::RiseHold;
pub use lfo::Lfo;
pub use math::{SILENCE_DB, db_to_linear, gain_to_db, rms, sanitize};
pub use param_info::{ParamDescriptor, ParamId, ParamKind, ParamScale, ParamUnit, ParameterInfo};
pub use svf::{SvfState, SvfTap, clamp_coefficient, stability_limit, svf_coefficient};
