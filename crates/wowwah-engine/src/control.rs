//! Validating control surface over [`WahParams`].
//!
//! [`WahParams`] setters store whatever they are given. [`WahControls`] sits in
//! front of them for UIs, hosts and the command line: every parameter has a
//! [`ParamDescriptor`] with its range, values are clamped (or rejected by the
//! `try_` variants), and the one-button actions of a pedal front panel
//! (humanizer toggle, vowel cycling, mode switch, mix knob) are provided on
//! top.
//!
//! ## Parameter Indices (`ParameterInfo`)
//!
//! | Index | Id | Range | Default |
//! |-------|----|-------|---------|
//! | 0 | `min_freq` | 270–420 Hz | 350 |
//! | 1 | `depth` | 0–5000 Hz | 1700 |
//! | 2 | `resonance` | 0.01–1.0 | 0.1 |
//! | 3 | `attack` | 0.0001–0.01 s | 0.001 |
//! | 4 | `release` | 0.001–1.0 s | 0.01 |
//! | 5 | `gain` | 0–3 | 1.0 |
//! | 6 | `dry` | 0–1 | 0.5 |
//! | 7 | `wet` | 0–1 | 0.5 |
//! | 8 | `rate` | 0.05–20 Hz | 1.0 |
//! | 9 | `mode` | 0–1 (Tempo, Dynamic) | 0 |
//! | 10 | `tap` | 0–2 (Low, Band, High) | 0 |
//! | 11 | `humanizer` | 0–1 | 0 |
//! | 12 | `first_vowel` | 0–4 (A..U) | 0 |
//! | 13 | `second_vowel` | 0–4 (A..U) | 0 |

use core::str::FromStr;
use std::sync::Arc;

use wowwah_core::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo, SvfTap};

use crate::error::ControlError;
use crate::formant::Vowel;
use crate::modulation::ModulationMode;
use crate::params::WahParams;
use crate::tap_tempo::{TapReading, TapTempo};

/// Every user-facing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Lower sweep bound.
    MinFreq,
    /// Sweep width.
    Depth,
    /// Filter damping.
    Resonance,
    /// Envelope attack.
    Attack,
    /// Envelope release.
    Release,
    /// Output gain.
    Gain,
    /// Dry level.
    Dry,
    /// Wet level.
    Wet,
    /// Tempo-mode rate.
    Rate,
    /// Modulation source.
    Mode,
    /// Filter output tap.
    Tap,
    /// Humanizer on/off.
    Humanizer,
    /// Humanizer start vowel.
    FirstVowel,
    /// Humanizer end vowel.
    SecondVowel,
}

const MODE_LABELS: &[&str] = &["Tempo", "Dynamic"];
const TAP_LABELS: &[&str] = &["Low", "Band", "High"];
const SWITCH_LABELS: &[&str] = &["Off", "On"];
const VOWEL_LABELS: &[&str] = &["A", "E", "I", "O", "U"];

const DESCRIPTORS: [ParamDescriptor; 14] = [
    ParamDescriptor::continuous("Start Frequency", ParamUnit::Hertz, 270.0, 420.0, 350.0)
        .with_step(1.0)
        .with_id(ParamId(0), "min_freq"),
    ParamDescriptor::continuous("Depth", ParamUnit::Hertz, 0.0, 5000.0, 1700.0)
        .with_step(10.0)
        .with_id(ParamId(1), "depth"),
    ParamDescriptor::continuous("Resonance", ParamUnit::None, 0.01, 1.0, 0.1)
        .with_id(ParamId(2), "resonance"),
    ParamDescriptor::continuous("Attack", ParamUnit::Seconds, 0.0001, 0.01, 0.001)
        .logarithmic()
        .with_id(ParamId(3), "attack"),
    ParamDescriptor::continuous("Release", ParamUnit::Seconds, 0.001, 1.0, 0.01)
        .logarithmic()
        .with_id(ParamId(4), "release"),
    ParamDescriptor::continuous("Gain", ParamUnit::None, 0.0, 3.0, 1.0)
        .with_id(ParamId(5), "gain"),
    ParamDescriptor::continuous("Dry", ParamUnit::None, 0.0, 1.0, 0.5).with_id(ParamId(6), "dry"),
    ParamDescriptor::continuous("Wet", ParamUnit::None, 0.0, 1.0, 0.5).with_id(ParamId(7), "wet"),
    ParamDescriptor::continuous("Rate", ParamUnit::Hertz, 0.05, 20.0, 1.0)
        .logarithmic()
        .with_id(ParamId(8), "rate"),
    ParamDescriptor::choice("Mode", MODE_LABELS, 0).with_id(ParamId(9), "mode"),
    ParamDescriptor::choice("Filter Tap", TAP_LABELS, 0).with_id(ParamId(10), "tap"),
    ParamDescriptor::choice("Humanizer", SWITCH_LABELS, 0).with_id(ParamId(11), "humanizer"),
    ParamDescriptor::choice("First Vowel", VOWEL_LABELS, 0).with_id(ParamId(12), "first_vowel"),
    ParamDescriptor::choice("Second Vowel", VOWEL_LABELS, 0)
        .with_id(ParamId(13), "second_vowel"),
];

impl ParamKey {
    /// All keys in index order.
    pub const ALL: [ParamKey; 14] = [
        ParamKey::MinFreq,
        ParamKey::Depth,
        ParamKey::Resonance,
        ParamKey::Attack,
        ParamKey::Release,
        ParamKey::Gain,
        ParamKey::Dry,
        ParamKey::Wet,
        ParamKey::Rate,
        ParamKey::Mode,
        ParamKey::Tap,
        ParamKey::Humanizer,
        ParamKey::FirstVowel,
        ParamKey::SecondVowel,
    ];

    /// Key at `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parameter index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Range and display metadata.
    pub const fn descriptor(self) -> ParamDescriptor {
        DESCRIPTORS[self as usize]
    }

    /// Stable string id, e.g. `"rate"`.
    pub const fn id(self) -> &'static str {
        self.descriptor().string_id
    }
}

impl FromStr for ParamKey {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ParamKey::ALL
            .into_iter()
            .find(|k| k.id() == trimmed)
            .ok_or_else(|| ControlError::UnknownParam(trimmed.to_string()))
    }
}

/// Parse a filter tap name (`low`, `band`, `high`).
pub fn parse_tap(s: &str) -> Result<SvfTap, ControlError> {
    let trimmed = s.trim();
    SvfTap::ALL
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ControlError::InvalidChoice {
            param: "tap",
            value: trimmed.to_string(),
        })
}

/// Range-checked front for a shared [`WahParams`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wowwah_engine::{ParamKey, Vowel, WahControls, WahParams};
///
/// let params = Arc::new(WahParams::default());
/// let controls = WahControls::new(Arc::clone(&params));
///
/// controls.set(ParamKey::Gain, 10.0);
/// assert_eq!(params.gain(), 3.0);
///
/// assert!(controls.try_set(ParamKey::Rate, 50.0).is_err());
/// controls.set_by_name("rate", 2.0).unwrap();
/// assert_eq!(params.rate(), 2.0);
///
/// controls.set_mix(0.8);
/// assert!((params.dry() - 0.2).abs() < 1e-6);
///
/// assert_eq!(controls.cycle_second_vowel(), Vowel::E);
/// ```
#[derive(Debug, Clone)]
pub struct WahControls {
    params: Arc<WahParams>,
}

impl WahControls {
    /// Controls writing to `params`.
    pub fn new(params: Arc<WahParams>) -> Self {
        Self { params }
    }

    /// The underlying store.
    pub fn params(&self) -> &Arc<WahParams> {
        &self.params
    }

    /// Descriptors for every parameter, in index order.
    pub fn descriptors() -> impl Iterator<Item = (ParamKey, ParamDescriptor)> {
        ParamKey::ALL.into_iter().map(|k| (k, k.descriptor()))
    }

    /// Current value of `key` as a plain number (choices as their index).
    pub fn get(&self, key: ParamKey) -> f32 {
        let p = &self.params;
        match key {
            ParamKey::MinFreq => p.min_freq(),
            ParamKey::Depth => p.depth(),
            ParamKey::Resonance => p.resonance(),
            ParamKey::Attack => p.attack(),
            ParamKey::Release => p.release(),
            ParamKey::Gain => p.gain(),
            ParamKey::Dry => p.dry(),
            ParamKey::Wet => p.wet(),
            ParamKey::Rate => p.rate(),
            ParamKey::Mode => f32::from(p.mode().index()),
            ParamKey::Tap => f32::from(p.tap().index()),
            ParamKey::Humanizer => f32::from(u8::from(p.humanizer())),
            ParamKey::FirstVowel => f32::from(p.first_vowel().index()),
            ParamKey::SecondVowel => f32::from(p.second_vowel().index()),
        }
    }

    /// Write `value`, clamped into range. Choices round to the nearest
    /// index. NaN writes the default.
    pub fn set(&self, key: ParamKey, value: f32) {
        let desc = key.descriptor();
        let value = if value.is_nan() { desc.default } else { desc.clamp(value) };
        self.write(key, value);
    }

    /// Write `value`, rejecting anything outside the descriptor range.
    pub fn try_set(&self, key: ParamKey, value: f32) -> Result<(), ControlError> {
        let desc = key.descriptor();
        if !desc.contains(value) {
            return Err(ControlError::OutOfRange {
                name: desc.string_id,
                value,
                min: desc.min,
                max: desc.max,
            });
        }
        self.write(key, value);
        Ok(())
    }

    /// [`set`](Self::set) by string id.
    pub fn set_by_name(&self, name: &str, value: f32) -> Result<(), ControlError> {
        self.set(name.parse()?, value);
        Ok(())
    }

    /// [`try_set`](Self::try_set) by string id.
    pub fn try_set_by_name(&self, name: &str, value: f32) -> Result<(), ControlError> {
        self.try_set(name.parse()?, value)
    }

    fn write(&self, key: ParamKey, value: f32) {
        let p = &self.params;
        let index = libm::roundf(value).max(0.0) as u8;
        match key {
            ParamKey::MinFreq => p.set_min_freq(value),
            ParamKey::Depth => p.set_depth(value),
            ParamKey::Resonance => p.set_resonance(value),
            ParamKey::Attack => p.set_attack(value),
            ParamKey::Release => p.set_release(value),
            ParamKey::Gain => p.set_gain(value),
            ParamKey::Dry => p.set_dry(value),
            ParamKey::Wet => p.set_wet(value),
            ParamKey::Rate => p.set_rate(value),
            ParamKey::Mode => p.set_mode(ModulationMode::from_index(index).unwrap_or_default()),
            ParamKey::Tap => p.set_tap(SvfTap::from_index(index).unwrap_or_default()),
            ParamKey::Humanizer => p.set_humanizer(index != 0),
            ParamKey::FirstVowel => p.set_first_vowel(Vowel::from_index(index).unwrap_or_default()),
            ParamKey::SecondVowel => {
                p.set_second_vowel(Vowel::from_index(index).unwrap_or_default());
            }
        }
    }

    /// Single mix knob: `wet = mix`, `dry = 1 − mix`, with `mix` clamped to
    /// `[0, 1]`.
    pub fn set_mix(&self, mix: f32) {
        let mix = mix.clamp(0.0, 1.0);
        self.params.set_wet(mix);
        self.params.set_dry(1.0 - mix);
    }

    /// Set the modulation source.
    pub fn set_mode(&self, mode: ModulationMode) {
        self.params.set_mode(mode);
    }

    /// Switch between tempo and dynamic modulation. Returns the new mode.
    pub fn toggle_mode(&self) -> ModulationMode {
        let mode = self.params.mode().toggled();
        self.params.set_mode(mode);
        mode
    }

    /// Set the filter output tap.
    pub fn set_tap(&self, tap: SvfTap) {
        self.params.set_tap(tap);
    }

    /// Flip the humanizer. Returns the new state.
    pub fn toggle_humanizer(&self) -> bool {
        let enabled = !self.params.humanizer();
        self.params.set_humanizer(enabled);
        enabled
    }

    /// Set both humanizer vowels.
    pub fn set_vowels(&self, first: Vowel, second: Vowel) {
        self.params.set_first_vowel(first);
        self.params.set_second_vowel(second);
    }

    /// Advance the start vowel A → E → I → O → U → A. Returns the new vowel.
    pub fn cycle_first_vowel(&self) -> Vowel {
        let vowel = self.params.first_vowel().next();
        self.params.set_first_vowel(vowel);
        vowel
    }

    /// Advance the end vowel A → E → I → O → U → A. Returns the new vowel.
    pub fn cycle_second_vowel(&self) -> Vowel {
        let vowel = self.params.second_vowel().next();
        self.params.set_second_vowel(vowel);
        vowel
    }

    /// Register a tap at `now_secs` and, once an interval is known, write
    /// the tapped rate.
    pub fn tap_tempo(
        &self,
        tempo: &mut TapTempo,
        now_secs: f64,
    ) -> Result<Option<TapReading>, ControlError> {
        let reading = tempo.tap(now_secs)?;
        if let Some(reading) = reading {
            self.params.set_rate(reading.rate_hz);
        }
        Ok(reading)
    }
}

impl ParameterInfo for WahControls {
    fn param_count(&self) -> usize {
        ParamKey::ALL.len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        ParamKey::from_index(index).map(ParamKey::descriptor)
    }

    fn get_param(&self, index: usize) -> f32 {
        ParamKey::from_index(index).map_or(0.0, |k| self.get(k))
    }

    fn set_param(&self, index: usize, value: f32) {
        if let Some(key) = ParamKey::from_index(index) {
            self.set(key, value);
        }
    }
}
