//! Modulation sources and sweep ranges.
//!
//! The filter frequency is always derived from an ordered
//! [`FrequencyRange`]: tempo mode rides a sine around its center, dynamic mode
//! maps the envelope level linearly from `lo` to `hi`. In humanizer mode two
//! ranges are swept in lockstep, one per formant.

use core::fmt;
use core::str::FromStr;

use crate::error::ControlError;
use crate::formant::Vowel;

/// What drives the filter sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModulationMode {
    /// Sine oscillator at the `rate` parameter.
    #[default]
    Tempo,
    /// Input envelope.
    Dynamic,
}

impl ModulationMode {
    /// Both modes in index order.
    pub const ALL: [ModulationMode; 2] = [ModulationMode::Tempo, ModulationMode::Dynamic];

    /// Mode from its index (0 = tempo, 1 = dynamic).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ModulationMode::Tempo),
            1 => Some(ModulationMode::Dynamic),
            _ => None,
        }
    }

    /// Index of this mode.
    pub const fn index(self) -> u8 {
        match self {
            ModulationMode::Tempo => 0,
            ModulationMode::Dynamic => 1,
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            ModulationMode::Tempo => ModulationMode::Dynamic,
            ModulationMode::Dynamic => ModulationMode::Tempo,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ModulationMode::Tempo => "Tempo",
            ModulationMode::Dynamic => "Dynamic",
        }
    }
}

impl fmt::Display for ModulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModulationMode {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ModulationMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ControlError::InvalidChoice {
                param: "mode",
                value: trimmed.to_string(),
            })
    }
}

/// Sweep bounds with `lo <= hi`.
///
/// # Example
///
/// ```rust
/// use wowwah_engine::FrequencyRange;
///
/// let range = FrequencyRange::new(2000.0, 300.0);
/// assert_eq!(range.lo(), 300.0);
/// assert_eq!(range.center(), 1150.0);
/// assert_eq!(range.tempo(1.0), 2000.0);
/// assert_eq!(range.dynamic(0.0), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    lo: f32,
    hi: f32,
}

impl FrequencyRange {
    /// Build a range from two bounds in either order.
    #[inline]
    pub fn new(a: f32, b: f32) -> Self {
        if a > b {
            Self { lo: b, hi: a }
        } else {
            Self { lo: a, hi: b }
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lo(&self) -> f32 {
        self.lo
    }

    /// Upper bound.
    #[inline]
    pub fn hi(&self) -> f32 {
        self.hi
    }

    /// Midpoint.
    #[inline]
    pub fn center(&self) -> f32 {
        (self.lo + self.hi) * 0.5
    }

    /// Half the span.
    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.hi - self.lo) * 0.5
    }

    /// Tempo-mode frequency for an oscillator value in `[-1, 1]`.
    #[inline]
    pub fn tempo(&self, sine: f32) -> f32 {
        self.center() + self.half_width() * sine
    }

    /// Dynamic-mode frequency for an envelope level.
    ///
    /// Not clamped: levels above one extrapolate past `hi`.
    #[inline]
    pub fn dynamic(&self, envelope: f32) -> f32 {
        self.lo + (self.hi - self.lo) * envelope
    }

    /// Frequency for `mode`, given both modulation sources.
    #[inline]
    pub fn at(&self, mode: ModulationMode, sine: f32, envelope: f32) -> f32 {
        match mode {
            ModulationMode::Tempo => self.tempo(sine),
            ModulationMode::Dynamic => self.dynamic(envelope),
        }
    }
}

/// The ranges swept during one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sweep {
    /// One filter between `min_freq` and `min_freq + depth`.
    Single(FrequencyRange),
    /// Humanizer: an F1 range and an F2 range.
    Formant {
        /// Range between the two vowels' first formants.
        f1: FrequencyRange,
        /// Range between the two vowels' second formants.
        f2: FrequencyRange,
    },
}

impl Sweep {
    /// Standard sweep from the `min_freq` and `depth` parameters.
    pub fn standard(min_freq: f32, depth: f32) -> Self {
        Sweep::Single(FrequencyRange::new(min_freq, min_freq + depth))
    }

    /// Humanizer sweep from `first` to `second`.
    pub fn formant(first: Vowel, second: Vowel) -> Self {
        let a = first.formants();
        let b = second.formants();
        Sweep::Formant {
            f1: FrequencyRange::new(a.f1, b.f1),
            f2: FrequencyRange::new(a.f2, b.f2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_orders_bounds() {
        let swapped = FrequencyRange::new(2000.0, 300.0);
        let ordered = FrequencyRange::new(300.0, 2000.0);
        assert_eq!(swapped, ordered);
        assert_eq!(ordered.half_width(), 850.0);
    }

    #[test]
    fn tempo_spans_range() {
        let range = FrequencyRange::new(350.0, 2050.0);
        assert_eq!(range.tempo(-1.0), 350.0);
        assert_eq!(range.tempo(0.0), 1200.0);
        assert_eq!(range.tempo(1.0), 2050.0);
    }

    #[test]
    fn dynamic_is_linear_and_unclamped() {
        let range = FrequencyRange::new(350.0, 2050.0);
        assert_eq!(range.dynamic(0.0), 350.0);
        assert_eq!(range.dynamic(0.5), 1200.0);
        assert_eq!(range.dynamic(1.0), 2050.0);
        assert_eq!(range.dynamic(2.0), 3750.0);
    }

    #[test]
    fn at_selects_source() {
        let range = FrequencyRange::new(100.0, 300.0);
        assert_eq!(range.at(ModulationMode::Tempo, 1.0, 0.0), 300.0);
        assert_eq!(range.at(ModulationMode::Dynamic, 1.0, 0.0), 100.0);
    }

    #[test]
    fn standard_sweep_negative_depth() {
        assert_eq!(
            Sweep::standard(2000.0, -1700.0),
            Sweep::standard(300.0, 1700.0)
        );
    }

    #[test]
    fn formant_sweep_pairs_formants() {
        let Sweep::Formant { f1, f2 } = Sweep::formant(Vowel::A, Vowel::U) else {
            panic!("expected formant sweep");
        };
        assert_eq!((f1.lo(), f1.hi()), (320.0, 1000.0));
        assert_eq!((f2.lo(), f2.hi()), (800.0, 1400.0));
    }

    #[test]
    fn mode_parse_and_toggle() {
        assert_eq!("dynamic".parse::<ModulationMode>(), Ok(ModulationMode::Dynamic));
        assert!("fast".parse::<ModulationMode>().is_err());
        assert_eq!(ModulationMode::Tempo.toggled(), ModulationMode::Dynamic);
        for mode in ModulationMode::ALL {
            assert_eq!(ModulationMode::from_index(mode.index()), Some(mode));
        }
    }
}
