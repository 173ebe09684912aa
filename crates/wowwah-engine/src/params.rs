//! Lock-free parameter store shared between control and audio threads.
//!
//! Every parameter is its own atomic: `f32` values are bit-cast into
//! [`AtomicU32`], enums are stored as their index in [`AtomicU8`] and the
//! humanizer flag in [`AtomicBool`]. Setters store with `Release`, the audio
//! thread loads with `Acquire` once per block through
//! [`WahParams::snapshot`]. There is no cross-field consistency: a snapshot
//! taken while a control thread is writing may mix old and new values, and
//! the next block picks up the rest.
//!
//! Setters do not validate. Range checks live in [`WahControls`].
//!
//! [`WahControls`]: crate::WahControls

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

use wowwah_core::SvfTap;

use crate::formant::Vowel;
use crate::modulation::{ModulationMode, Sweep};

/// `f32` stored as its bit pattern.
#[derive(Debug)]
struct AtomicF32(AtomicU32);

impl AtomicF32 {
    fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }

    #[inline]
    fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }
}

/// Plain copy of every parameter, as read at the start of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    /// Lower sweep bound in Hz.
    pub min_freq: f32,
    /// Sweep width in Hz; `max_freq = min_freq + depth`.
    pub depth: f32,
    /// Filter damping.
    pub resonance: f32,
    /// Envelope attack time in seconds.
    pub attack: f32,
    /// Envelope release time in seconds.
    pub release: f32,
    /// Output gain, linear.
    pub gain: f32,
    /// Dry level, linear.
    pub dry: f32,
    /// Wet level, linear.
    pub wet: f32,
    /// Tempo-mode oscillator rate in Hz.
    pub rate: f32,
    /// Modulation source.
    pub mode: ModulationMode,
    /// Filter output feeding the output stage.
    pub tap: SvfTap,
    /// Dual-formant mode.
    pub humanizer: bool,
    /// Humanizer start vowel.
    pub first_vowel: Vowel,
    /// Humanizer end vowel.
    pub second_vowel: Vowel,
}

impl ParamSnapshot {
    /// Upper sweep bound, `min_freq + depth`. May be below `min_freq`.
    pub fn max_freq(&self) -> f32 {
        self.min_freq + self.depth
    }

    /// The ranges these parameters sweep.
    pub fn sweep(&self) -> Sweep {
        if self.humanizer {
            Sweep::formant(self.first_vowel, self.second_vowel)
        } else {
            Sweep::standard(self.min_freq, self.depth)
        }
    }
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self {
            min_freq: 350.0,
            depth: 1700.0,
            resonance: 0.1,
            attack: 0.001,
            release: 0.01,
            gain: 1.0,
            dry: 0.5,
            wet: 0.5,
            rate: 1.0,
            mode: ModulationMode::Tempo,
            tap: SvfTap::Low,
            humanizer: false,
            first_vowel: Vowel::A,
            second_vowel: Vowel::A,
        }
    }
}

/// Shared parameter store.
///
/// Wrap in an [`Arc`](std::sync::Arc) and hand one clone to the engine and
/// one to each control surface.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wowwah_engine::{ModulationMode, WahParams};
///
/// let params = Arc::new(WahParams::default());
/// let control = Arc::clone(&params);
///
/// std::thread::spawn(move || control.set_mode(ModulationMode::Dynamic))
///     .join()
///     .unwrap();
///
/// assert_eq!(params.mode(), ModulationMode::Dynamic);
/// ```
#[derive(Debug)]
pub struct WahParams {
    min_freq: AtomicF32,
    depth: AtomicF32,
    resonance: AtomicF32,
    attack: AtomicF32,
    release: AtomicF32,
    gain: AtomicF32,
    dry: AtomicF32,
    wet: AtomicF32,
    rate: AtomicF32,
    mode: AtomicU8,
    tap: AtomicU8,
    humanizer: AtomicBool,
    first_vowel: AtomicU8,
    second_vowel: AtomicU8,
}

impl WahParams {
    /// Store initialised from a snapshot.
    pub fn from_snapshot(values: &ParamSnapshot) -> Self {
        Self {
            min_freq: AtomicF32::new(values.min_freq),
            depth: AtomicF32::new(values.depth),
            resonance: AtomicF32::new(values.resonance),
            attack: AtomicF32::new(values.attack),
            release: AtomicF32::new(values.release),
            gain: AtomicF32::new(values.gain),
            dry: AtomicF32::new(values.dry),
            wet: AtomicF32::new(values.wet),
            rate: AtomicF32::new(values.rate),
            mode: AtomicU8::new(values.mode.index()),
            tap: AtomicU8::new(values.tap.index()),
            humanizer: AtomicBool::new(values.humanizer),
            first_vowel: AtomicU8::new(values.first_vowel.index()),
            second_vowel: AtomicU8::new(values.second_vowel.index()),
        }
    }

    /// Read every parameter.
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            min_freq: self.min_freq(),
            depth: self.depth(),
            resonance: self.resonance(),
            attack: self.attack(),
            release: self.release(),
            gain: self.gain(),
            dry: self.dry(),
            wet: self.wet(),
            rate: self.rate(),
            mode: self.mode(),
            tap: self.tap(),
            humanizer: self.humanizer(),
            first_vowel: self.first_vowel(),
            second_vowel: self.second_vowel(),
        }
    }

    /// Overwrite every parameter.
    pub fn store(&self, values: &ParamSnapshot) {
        self.set_min_freq(values.min_freq);
        self.set_depth(values.depth);
        self.set_resonance(values.resonance);
        self.set_attack(values.attack);
        self.set_release(values.release);
        self.set_gain(values.gain);
        self.set_dry(values.dry);
        self.set_wet(values.wet);
        self.set_rate(values.rate);
        self.set_mode(values.mode);
        self.set_tap(values.tap);
        self.set_humanizer(values.humanizer);
        self.set_first_vowel(values.first_vowel);
        self.set_second_vowel(values.second_vowel);
    }

    /// Set the lower sweep bound in Hz.
    pub fn set_min_freq(&self, hz: f32) {
        self.min_freq.store(hz);
    }

    /// Lower sweep bound in Hz.
    pub fn min_freq(&self) -> f32 {
        self.min_freq.load()
    }

    /// Set the sweep width in Hz.
    pub fn set_depth(&self, hz: f32) {
        self.depth.store(hz);
    }

    /// Sweep width in Hz.
    pub fn depth(&self) -> f32 {
        self.depth.load()
    }

    /// Set the filter damping.
    pub fn set_resonance(&self, q: f32) {
        self.resonance.store(q);
    }

    /// Filter damping.
    pub fn resonance(&self) -> f32 {
        self.resonance.load()
    }

    /// Set the envelope attack time in seconds.
    pub fn set_attack(&self, secs: f32) {
        self.attack.store(secs);
    }

    /// Envelope attack time in seconds.
    pub fn attack(&self) -> f32 {
        self.attack.load()
    }

    /// Set the envelope release time in seconds.
    pub fn set_release(&self, secs: f32) {
        self.release.store(secs);
    }

    /// Envelope release time in seconds.
    pub fn release(&self) -> f32 {
        self.release.load()
    }

    /// Set the output gain.
    pub fn set_gain(&self, gain: f32) {
        self.gain.store(gain);
    }

    /// Output gain.
    pub fn gain(&self) -> f32 {
        self.gain.load()
    }

    /// Set the dry level.
    pub fn set_dry(&self, level: f32) {
        self.dry.store(level);
    }

    /// Dry level.
    pub fn dry(&self) -> f32 {
        self.dry.load()
    }

    /// Set the wet level.
    pub fn set_wet(&self, level: f32) {
        self.wet.store(level);
    }

    /// Wet level.
    pub fn wet(&self) -> f32 {
        self.wet.load()
    }

    /// Set the tempo-mode rate in Hz.
    pub fn set_rate(&self, hz: f32) {
        self.rate.store(hz);
    }

    /// Tempo-mode rate in Hz.
    pub fn rate(&self) -> f32 {
        self.rate.load()
    }

    /// Set the modulation source.
    pub fn set_mode(&self, mode: ModulationMode) {
        self.mode.store(mode.index(), Ordering::Release);
    }

    /// Modulation source.
    pub fn mode(&self) -> ModulationMode {
        ModulationMode::from_index(self.mode.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Set the filter output tap.
    pub fn set_tap(&self, tap: SvfTap) {
        self.tap.store(tap.index(), Ordering::Release);
    }

    /// Filter output tap.
    pub fn tap(&self) -> SvfTap {
        SvfTap::from_index(self.tap.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Enable or disable the humanizer.
    pub fn set_humanizer(&self, enabled: bool) {
        self.humanizer.store(enabled, Ordering::Release);
    }

    /// True when the humanizer is on.
    pub fn humanizer(&self) -> bool {
        self.humanizer.load(Ordering::Acquire)
    }

    /// Set the humanizer start vowel.
    pub fn set_first_vowel(&self, vowel: Vowel) {
        self.first_vowel.store(vowel.index(), Ordering::Release);
    }

    /// Humanizer start vowel.
    pub fn first_vowel(&self) -> Vowel {
        Vowel::from_index(self.first_vowel.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Set the humanizer end vowel.
    pub fn set_second_vowel(&self, vowel: Vowel) {
        self.second_vowel.store(vowel.index(), Ordering::Release);
    }

    /// Humanizer end vowel.
    pub fn second_vowel(&self) -> Vowel {
        Vowel::from_index(self.second_vowel.load(Ordering::Acquire)).unwrap_or_default()
    }
}

impl Default for WahParams {
    fn default() -> Self {
        Self::from_snapshot(&ParamSnapshot::default())
    }
}
