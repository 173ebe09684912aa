//! Per-channel processing state and the per-sample step.
//!
//! Everything that depends only on the parameters and the sample rate is
//! folded into a [`BlockContext`] once per block. [`ChannelState`] holds what
//! must persist between samples on one channel: the envelope level, the
//! oscillator phase and the filter memories.

use wowwah_core::{
    EnvelopeCoefficients, EnvelopeFollower, Lfo, SvfState, SvfTap, clamp_coefficient, sanitize,
    svf_coefficient,
};

use crate::modulation::{ModulationMode, Sweep};
use crate::output::OutputStage;
use crate::params::ParamSnapshot;

/// Per-block constants shared by every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockContext {
    /// Envelope smoothing for this block.
    pub envelope: EnvelopeCoefficients,
    /// Oscillator phase step per sample, radians.
    pub phase_increment: f64,
    /// Ranges being swept.
    pub sweep: Sweep,
    /// Modulation source.
    pub mode: ModulationMode,
    /// Filter damping.
    pub resonance: f32,
    /// Filter output feeding the output stage.
    pub tap: SvfTap,
    /// Dry/wet/gain.
    pub output: OutputStage,
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Clamp coefficients under the stability limit and zero non-finite input.
    pub hardening: bool,
}

impl BlockContext {
    /// Derive the block constants from a parameter snapshot.
    pub fn new(snapshot: &ParamSnapshot, sample_rate: f32, hardening: bool) -> Self {
        Self {
            envelope: EnvelopeCoefficients::new(snapshot.attack, snapshot.release, sample_rate),
            phase_increment: Lfo::phase_increment(snapshot.rate, sample_rate),
            sweep: snapshot.sweep(),
            mode: snapshot.mode,
            resonance: snapshot.resonance,
            tap: snapshot.tap,
            output: OutputStage::from_snapshot(snapshot),
            sample_rate,
            hardening,
        }
    }

    /// Filter coefficient for `freq`, clamped when hardening is on.
    #[inline]
    pub fn coefficient(&self, freq: f32) -> f32 {
        let coeff = svf_coefficient(freq, self.sample_rate);
        if self.hardening {
            clamp_coefficient(coeff, self.resonance)
        } else {
            coeff
        }
    }
}

/// State carried across samples on one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelState {
    envelope: EnvelopeFollower,
    lfo: Lfo,
    primary: SvfState,
    secondary: SvfState,
}

impl ChannelState {
    /// Fresh state: silent envelope, phase zero, empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one sample.
    ///
    /// The envelope follows the input after gain, so gain also widens the
    /// dynamic sweep. The envelope and the oscillator advance in both modes,
    /// so switching mode mid-stream picks up where the other source
    /// currently is.
    #[inline]
    pub fn process(&mut self, input: f32, ctx: &BlockContext) -> f32 {
        let input = if ctx.hardening { sanitize(input) } else { input };

        let level = self.envelope.process(ctx.output.gain * input, &ctx.envelope);
        let sine = self.lfo.next(ctx.phase_increment);

        let filtered = match ctx.sweep {
            Sweep::Single(range) => {
                let coeff = ctx.coefficient(range.at(ctx.mode, sine, level));
                self.primary.advance(input, coeff, ctx.resonance)
            }
            Sweep::Formant { f1, f2 } => {
                let c1 = ctx.coefficient(f1.at(ctx.mode, sine, level));
                let c2 = ctx.coefficient(f2.at(ctx.mode, sine, level));
                let a = self.primary.advance(input, c1, ctx.resonance);
                let b = self.secondary.advance(input, c2, ctx.resonance);
                a.average(&b)
            }
        };

        ctx.output.apply(input, filtered.tap(ctx.tap))
    }

    /// Current envelope level.
    pub fn envelope_level(&self) -> f32 {
        self.envelope.level()
    }

    /// Current oscillator phase in radians.
    pub fn phase(&self) -> f64 {
        self.lfo.phase()
    }

    /// Standard (or F1) filter memory.
    pub fn primary(&self) -> &SvfState {
        &self.primary
    }

    /// F2 filter memory, only advanced in humanizer mode.
    pub fn secondary(&self) -> &SvfState {
        &self.secondary
    }

    /// Return to the freshly prepared state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
