//! Vowel formant table for the humanizer.
//!
//! Each vowel is reduced to its first two formants. The humanizer sweeps one
//! filter between the F1 values of two vowels and a second filter between
//! their F2 values.

use core::fmt;
use core::str::FromStr;

use crate::error::ControlError;

/// First and second formant of a vowel, in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formants {
    /// First formant.
    pub f1: f32,
    /// Second formant.
    pub f2: f32,
}

/// One of the five vowels the humanizer can morph between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Vowel {
    /// "ah"
    #[default]
    A,
    /// "eh"
    E,
    /// "ee"
    I,
    /// "oh"
    O,
    /// "oo"
    U,
}

impl Vowel {
    /// All vowels in index order.
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    /// Vowel from its table index (0 = A .. 4 = U).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Table index of this vowel.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Formant pair for this vowel.
    pub const fn formants(self) -> Formants {
        let (f1, f2) = match self {
            Vowel::A => (1000.0, 1400.0),
            Vowel::E => (500.0, 2300.0),
            Vowel::I => (320.0, 2500.0),
            Vowel::O => (500.0, 1000.0),
            Vowel::U => (320.0, 800.0),
        };
        Formants { f1, f2 }
    }

    /// Next vowel in the cycle A → E → I → O → U → A.
    pub const fn next(self) -> Self {
        match self {
            Vowel::A => Vowel::E,
            Vowel::E => Vowel::I,
            Vowel::I => Vowel::O,
            Vowel::O => Vowel::U,
            Vowel::U => Vowel::A,
        }
    }

    /// Single-letter name.
    pub const fn name(self) -> &'static str {
        match self {
            Vowel::A => "A",
            Vowel::E => "E",
            Vowel::I => "I",
            Vowel::O => "O",
            Vowel::U => "U",
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vowel {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Vowel::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ControlError::InvalidVowel(trimmed.to_string()))
    }
}
