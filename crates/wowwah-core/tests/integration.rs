//! Integration tests for wowwah-core DSP primitives.
//!
//! Verifies filter responses with sine-wave measurements, envelope timing
//! against its time constant, and a hand-assembled envelope-swept filter
//! built only from this crate's pieces.

use wowwah_core::{
    EnvelopeCoefficients, EnvelopeFollower, Lfo, ParamDescriptor, ParamUnit, SvfState, SvfTap,
    svf_coefficient,
};

const SAMPLE_RATE: f32 = 48000.0;
const TAU: f32 = core::f32::consts::TAU;

/// Generate a sine wave buffer at the given frequency and sample rate.
fn generate_sine(freq_hz: f32, sample_rate: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|n| libm::sinf(TAU * freq_hz * n as f32 / sample_rate))
        .collect()
}

/// Peak absolute output of one SVF tap over the second half of the signal.
fn steady_peak(input: &[f32], cutoff: f32, q: f32, tap: SvfTap) -> f32 {
    let coeff = svf_coefficient(cutoff, SAMPLE_RATE);
    let mut state = SvfState::default();
    let outputs: Vec<f32> = input
        .iter()
        .map(|&x| state.advance(x, coeff, q).tap(tap))
        .collect();
    outputs[outputs.len() / 2..]
        .iter()
        .fold(0.0_f32, |m, s| m.max(s.abs()))
}

#[test]
fn lowpass_passes_low_rejects_high() {
    let low = generate_sine(100.0, SAMPLE_RATE, 9600);
    let high = generate_sine(10_000.0, SAMPLE_RATE, 9600);

    let pass = steady_peak(&low, 1000.0, 1.0, SvfTap::Low);
    let stop = steady_peak(&high, 1000.0, 1.0, SvfTap::Low);

    assert!((pass - 1.0).abs() < 0.05, "passband gain {pass}");
    assert!(stop < 0.05, "stopband gain {stop}");
}

#[test]
fn highpass_passes_high_rejects_low() {
    let low = generate_sine(100.0, SAMPLE_RATE, 9600);
    let high = generate_sine(10_000.0, SAMPLE_RATE, 9600);

    let stop = steady_peak(&low, 1000.0, 1.0, SvfTap::High);
    let pass = steady_peak(&high, 1000.0, 1.0, SvfTap::High);

    assert!(stop < 0.05, "stopband gain {stop}");
    assert!(pass > 0.8, "passband gain {pass}");
}

#[test]
fn bandpass_peaks_at_cutoff() {
    let q = 0.2;
    let at = steady_peak(&generate_sine(1000.0, SAMPLE_RATE, 19200), 1000.0, q, SvfTap::Band);
    let below = steady_peak(&generate_sine(250.0, SAMPLE_RATE, 19200), 1000.0, q, SvfTap::Band);
    let above = steady_peak(&generate_sine(4000.0, SAMPLE_RATE, 19200), 1000.0, q, SvfTap::Band);

    // Peak band gain is 1/Q
    assert!((at - 1.0 / q).abs() < 0.5, "peak gain {at}");
    assert!(below < at / 4.0);
    assert!(above < at / 4.0);
}

#[test]
fn envelope_attack_time_constant() {
    let attack = 0.005;
    let coeffs = EnvelopeCoefficients::new(attack, 0.1, SAMPLE_RATE);
    let mut env = EnvelopeFollower::new();

    let tau_samples = (attack * SAMPLE_RATE) as usize;
    for _ in 0..tau_samples {
        env.process(1.0, &coeffs);
    }
    // One time constant reaches 1 - 1/e
    let expected = 1.0 - (-1.0_f32).exp();
    assert!((env.level() - expected).abs() < 0.01, "level {}", env.level());
}

#[test]
fn envelope_release_time_constant() {
    let release = 0.02;
    let coeffs = EnvelopeCoefficients::new(0.0001, release, SAMPLE_RATE);
    let mut env = EnvelopeFollower::new();
    for _ in 0..1000 {
        env.process(1.0, &coeffs);
    }

    let tau_samples = (release * SAMPLE_RATE) as usize;
    for _ in 0..tau_samples {
        env.process(0.0, &coeffs);
    }
    let expected = (-1.0_f32).exp();
    assert!((env.level() - expected).abs() < 0.01, "level {}", env.level());
}

#[test]
fn envelope_swept_filter_chain() {
    // A minimal auto-wah: envelope maps 350..2050 Hz onto the band tap
    let coeffs = EnvelopeCoefficients::new(0.001, 0.01, SAMPLE_RATE);
    let mut env = EnvelopeFollower::new();
    let mut state = SvfState::default();
    let input = generate_sine(220.0, SAMPLE_RATE, 48000);

    let mut peak = 0.0_f32;
    for (n, &x) in input.iter().enumerate() {
        let gate = if (n / 4800) % 2 == 0 { 1.0 } else { 0.1 };
        let x = x * gate;
        let level = env.process(x, &coeffs);
        let freq = 350.0 + 1700.0 * level;
        let out = state.advance(x, svf_coefficient(freq, SAMPLE_RATE), 0.1);
        assert!(out.is_finite(), "sample {n}");
        peak = peak.max(out.tap(SvfTap::Band).abs());
    }
    assert!(peak > 0.1);
}

#[test]
fn lfo_swept_filter_matches_frozen_filter_at_zero_depth() {
    let input = generate_sine(440.0, SAMPLE_RATE, 2048);
    let inc = Lfo::phase_increment(5.0, SAMPLE_RATE);
    let mut lfo = Lfo::new();
    let mut swept = SvfState::default();
    let mut frozen = SvfState::default();
    let coeff = svf_coefficient(800.0, SAMPLE_RATE);

    for &x in &input {
        let freq = 800.0 + 0.0 * lfo.next(inc);
        let a = swept.advance(x, svf_coefficient(freq, SAMPLE_RATE), 0.3);
        let b = frozen.advance(x, coeff, 0.3);
        assert_eq!(a, b);
    }
}

#[test]
fn descriptor_log_scale_roundtrip() {
    let rate =
        ParamDescriptor::continuous("Rate", ParamUnit::Hertz, 0.05, 20.0, 1.0).logarithmic();
    for value in [0.05, 0.5, 1.0, 7.0, 20.0] {
        let back = rate.denormalize(rate.normalize(value));
        assert!((back - value).abs() / value < 1e-4, "{value} -> {back}");
    }
    assert_eq!(rate.format_value(2.0), "2.0 Hz");
}
