//! Wowwah Engine - the WOW WAH filter effect
//!
//! A state variable filter whose cutoff is swept either by a sine oscillator
//! (tempo mode) or by the input's own envelope (dynamic mode), with an
//! optional humanizer that morphs between two vowel formant pairs instead of
//! a single band.
//!
//! - [`WahParams`] - Lock-free parameter store, one atomic per parameter
//! - [`WahEngine`] - Planar or interleaved block processing over any number
//!   of channels
//! - [`WahControls`] - Range-checked control surface with pedal-style actions
//! - [`TapTempo`] - Interval measurement for the tempo-mode rate
//! - [`MeterReader`] - Input level meter readable from any thread
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wowwah_engine::{EngineOptions, ModulationMode, Vowel, WahControls, WahEngine, WahParams};
//!
//! let params = Arc::new(WahParams::default());
//! let controls = WahControls::new(Arc::clone(&params));
//! let mut engine = WahEngine::new(Arc::clone(&params), EngineOptions::default());
//! engine.prepare(44100.0, 1);
//!
//! controls.set_mode(ModulationMode::Dynamic);
//! controls.toggle_humanizer();
//! controls.set_vowels(Vowel::A, Vowel::U);
//!
//! let mut block = vec![0.3_f32; 512];
//! engine.process_planar(&mut [block.as_mut_slice()]);
//!
//! let level = engine.meter_reader().level_db(0);
//! assert!(level.is_some());
//! ```

pub mod channel;
pub mod control;
pub mod engine;
pub mod error;
pub mod formant;
pub mod meter;
pub mod modulation;
pub mod output;
pub mod params;
pub mod tap_tempo;

pub use channel::{BlockContext, ChannelState};
pub use control::{ParamKey, WahControls, parse_tap};
pub use engine::{EngineOptions, WahEngine};
pub use error::ControlError;
pub use formant::{Formants, Vowel};
pub use meter::{DEFAULT_METER_CHANNELS, DEFAULT_RISE_MS, LevelMeter, MeterReader};
pub use modulation::{FrequencyRange, ModulationMode, Sweep};
pub use output::OutputStage;
pub use params::{ParamSnapshot, WahParams};
pub use tap_tempo::{MAX_TAP_INTERVAL, MIN_TAP_INTERVAL, TapReading, TapTempo};
pub use wowwah_core::SvfTap;
