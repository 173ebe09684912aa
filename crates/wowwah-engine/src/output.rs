//! Dry/wet blend and output gain.

use crate::params::ParamSnapshot;

/// `gain · (dry · input + wet · filtered)`, unclamped.
///
/// A leg at level zero contributes nothing, even when its signal is not
/// finite, so `dry = 1, wet = 0, gain = 1` returns the input exactly however
/// the filter behaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputStage {
    /// Dry level.
    pub dry: f32,
    /// Wet level.
    pub wet: f32,
    /// Output gain.
    pub gain: f32,
}

impl OutputStage {
    /// Levels from a parameter snapshot.
    pub fn from_snapshot(snapshot: &ParamSnapshot) -> Self {
        Self {
            dry: snapshot.dry,
            wet: snapshot.wet,
            gain: snapshot.gain,
        }
    }

    /// Combine the unprocessed input with the selected filter tap.
    #[inline]
    pub fn apply(&self, input: f32, filtered: f32) -> f32 {
        self.gain * (leg(self.dry, input) + leg(self.wet, filtered))
    }
}

#[inline]
fn leg(level: f32, signal: f32) -> f32 {
    if level == 0.0 { 0.0 } else { level * signal }
}
