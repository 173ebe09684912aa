//! Parameter metadata for control surfaces.
//!
//! A [`ParamDescriptor`] tells a host, a CLI or a GUI everything it needs to
//! present one parameter: display name, unit, range, default, and either a
//! continuous scale or the labels of a discrete choice. [`ParameterInfo`] is
//! the index-based view a control surface walks.
//!
//! Parameter stores are written from a control thread while the audio thread
//! reads them, so [`ParameterInfo::set_param`] takes `&self`.
//!
//! ```rust
//! use wowwah_core::{ParamDescriptor, ParamId, ParamUnit};
//!
//! const TAPS: &[&str] = &["Low", "Band", "High"];
//! let tap = ParamDescriptor::choice("Filter Tap", TAPS, 1).with_id(ParamId(10), "tap");
//! assert_eq!(tap.max, 2.0);
//! assert_eq!(tap.format_value(2.0), "High");
//!
//! let q = ParamDescriptor::continuous("Resonance", ParamUnit::None, 0.01, 1.0, 0.1);
//! assert_eq!(q.clamp(5.0), 1.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Mapping between a continuous value and the `0..=1` range of a knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// `(value - min) / (max - min)`.
    #[default]
    Linear,
    /// `ln(value / min) / ln(max / min)`. Needs `min > 0`.
    Logarithmic,
}

/// Numeric identifier, fixed once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Continuous value or one of a fixed set of labelled options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Any value in range, with a suggested increment.
    Continuous {
        /// Knob mapping.
        scale: ParamScale,
        /// Suggested increment for sliders and encoders.
        step: f32,
    },
    /// Index into `labels`, stored as `0.0..=(labels.len() - 1)`.
    Choice {
        /// Display label per option.
        labels: &'static [&'static str],
    },
}

/// Unit used when printing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Frequencies and rates.
    Hertz,
    /// Envelope times.
    Seconds,
    /// Gains, mix levels, resonance.
    None,
}

impl ParamUnit {
    /// Suffix appended after the number, with its leading space.
    ///
    /// ```rust
    /// use wowwah_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Seconds.suffix(), " s");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Seconds => " s",
            ParamUnit::None => "",
        }
    }
}

/// Everything a control surface needs to know about one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Display name, e.g. "Start Frequency".
    pub name: &'static str,
    /// Lookup key, e.g. `"min_freq"`.
    pub string_id: &'static str,
    /// Numeric id.
    pub id: ParamId,
    /// Print unit.
    pub unit: ParamUnit,
    /// Lowest accepted value.
    pub min: f32,
    /// Highest accepted value.
    pub max: f32,
    /// Value at startup.
    pub default: f32,
    /// Continuous or choice.
    pub kind: ParamKind,
}

impl ParamDescriptor {
    /// Linear continuous parameter with a step of one hundredth of its range.
    pub const fn continuous(
        name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            string_id: "",
            id: ParamId(0),
            unit,
            min,
            max,
            default,
            kind: ParamKind::Continuous {
                scale: ParamScale::Linear,
                step: (max - min) / 100.0,
            },
        }
    }

    /// Choice among `labels`, starting at option `default`.
    pub const fn choice(
        name: &'static str,
        labels: &'static [&'static str],
        default: usize,
    ) -> Self {
        Self {
            name,
            string_id: "",
            id: ParamId(0),
            unit: ParamUnit::None,
            min: 0.0,
            max: labels.len().saturating_sub(1) as f32,
            default: default as f32,
            kind: ParamKind::Choice { labels },
        }
    }

    /// Attach the numeric and string ids.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Switch a continuous parameter to a logarithmic knob. No effect on
    /// choices.
    pub const fn logarithmic(mut self) -> Self {
        if let ParamKind::Continuous { step, .. } = self.kind {
            self.kind = ParamKind::Continuous {
                scale: ParamScale::Logarithmic,
                step,
            };
        }
        self
    }

    /// Override the suggested increment of a continuous parameter.
    pub const fn with_step(mut self, step: f32) -> Self {
        if let ParamKind::Continuous { scale, .. } = self.kind {
            self.kind = ParamKind::Continuous { scale, step };
        }
        self
    }

    /// Option labels, empty for continuous parameters.
    pub const fn labels(&self) -> &'static [&'static str] {
        match self.kind {
            ParamKind::Choice { labels } => labels,
            ParamKind::Continuous { .. } => &[],
        }
    }

    /// True for choices.
    pub const fn is_choice(&self) -> bool {
        matches!(self.kind, ParamKind::Choice { .. })
    }

    /// Knob mapping. Choices map linearly.
    pub const fn scale(&self) -> ParamScale {
        match self.kind {
            ParamKind::Continuous { scale, .. } => scale,
            ParamKind::Choice { .. } => ParamScale::Linear,
        }
    }

    /// Suggested increment. Choices step by one.
    pub const fn step(&self) -> f32 {
        match self.kind {
            ParamKind::Continuous { step, .. } => step,
            ParamKind::Choice { .. } => 1.0,
        }
    }

    /// True when `value` lies inside `[min, max]`. NaN never does.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Pull `value` into `[min, max]`.
    ///
    /// ```rust
    /// use wowwah_core::{ParamDescriptor, ParamUnit};
    ///
    /// let gain = ParamDescriptor::continuous("Gain", ParamUnit::None, 0.0, 3.0, 1.0);
    /// assert_eq!(gain.clamp(-1.0), 0.0);
    /// assert_eq!(gain.clamp(10.0), 3.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Knob position `0..=1` for a plain value.
    pub fn normalize(&self, value: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        match self.scale() {
            ParamScale::Linear => (value - self.min) / (self.max - self.min),
            ParamScale::Logarithmic if self.min > 0.0 && value > 0.0 => {
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
            ParamScale::Logarithmic => 0.0,
        }
    }

    /// Plain value for a knob position `0..=1`.
    pub fn denormalize(&self, position: f32) -> f32 {
        match self.scale() {
            ParamScale::Logarithmic if self.min > 0.0 => {
                self.min * libm::powf(self.max / self.min, position)
            }
            ParamScale::Logarithmic => self.min,
            ParamScale::Linear => self.min + position * (self.max - self.min),
        }
    }

    /// Label of the option nearest `value`, or `None` for continuous
    /// parameters.
    pub fn label(&self, value: f32) -> Option<&'static str> {
        let labels = self.labels();
        let last = labels.len().checked_sub(1)?;
        let index = libm::roundf(value).max(0.0) as usize;
        Some(labels[index.min(last)])
    }

    /// Value with its unit, or the option label for choices.
    pub fn format_value(&self, value: f32) -> String {
        if let Some(label) = self.label(value) {
            return String::from(label);
        }
        match self.unit {
            ParamUnit::Hertz => format!("{value:.1}{}", self.unit.suffix()),
            ParamUnit::Seconds => format!("{value:.4}{}", self.unit.suffix()),
            ParamUnit::None => format!("{value:.2}"),
        }
    }
}

/// Index-based access to a parameter store.
///
/// Indices run `0..param_count()`. Out-of-range indices read as `0.0` and
/// ignore writes.
pub trait ParameterInfo {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Descriptor at `index`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Store a value, clamped to the descriptor range.
    fn set_param(&self, index: usize, value: f32);

    /// Index of the parameter whose string id is `string_id`.
    fn find_param(&self, string_id: &str) -> Option<usize> {
        (0..self.param_count())
            .find(|&i| self.param_info(i).is_some_and(|d| d.string_id == string_id))
    }
}
