//! Property-based tests for wowwah-core DSP primitives.
//!
//! Tests filter stability on both sides of its limit, envelope bounds,
//! oscillator accuracy and level-hold convergence using proptest for
//! randomized input generation.

use proptest::prelude::*;
use wowwah_core::{
    EnvelopeCoefficients, EnvelopeFollower, Lfo, RiseHold, SILENCE_DB, SvfState,
    clamp_coefficient, gain_to_db, stability_limit,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Below the stability limit the SVF stays finite for bounded input.
    #[test]
    fn svf_stable_below_limit(
        q in 0.01f32..=1.0f32,
        fraction in 0.0f32..0.95f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let coeff = stability_limit(q) * fraction;
        let mut state = SvfState::default();

        for _ in 0..64 {
            for &sample in &input {
                let out = state.advance(sample, coeff, q);
                prop_assert!(
                    out.is_finite(),
                    "SVF (F={}, q={}) produced non-finite output {:?}",
                    coeff, q, out
                );
            }
        }
    }

    /// Above the limit an impulse grows without bound.
    #[test]
    fn svf_diverges_above_limit(q in 0.01f32..=1.0f32) {
        let coeff = stability_limit(q) * 1.1;
        let mut state = SvfState::default();
        state.advance(1.0, coeff, q);

        let mut peak = 0.0_f32;
        for _ in 0..2000 {
            let out = state.advance(0.0, coeff, q);
            if !out.is_finite() {
                return Ok(());
            }
            peak = peak.max(out.low.abs());
        }
        prop_assert!(peak > 1.0e3, "F={} q={} peak {}", coeff, q, peak);
    }

    /// Clamped coefficients always land in the stable range.
    #[test]
    fn clamp_stays_under_limit(coeff in -4.0f32..4.0f32, q in 0.0f32..=2.0f32) {
        let clamped = clamp_coefficient(coeff, q);
        prop_assert!(clamped >= 0.0);
        prop_assert!(clamped < stability_limit(q));
    }

    /// The envelope of a signal in [-1, 1] stays in [0, 1].
    #[test]
    fn envelope_bounded(
        attack in 0.0001f32..0.01f32,
        release in 0.001f32..1.0f32,
        input in prop::collection::vec(-1.0f32..=1.0f32, 1..512),
    ) {
        let coeffs = EnvelopeCoefficients::new(attack, release, 44100.0);
        let mut env = EnvelopeFollower::new();
        for &x in &input {
            let level = env.process(x, &coeffs);
            prop_assert!(level >= 0.0 && level <= 1.0 + 1e-6, "level {}", level);
        }
    }

    /// The oscillator tracks sin(2π·rate·n/sr) for any rate and sample rate.
    #[test]
    fn lfo_closed_form(rate in 0.05f32..20.0f32, sr in 8000.0f32..192000.0f32) {
        let inc = Lfo::phase_increment(rate, sr);
        let mut lfo = Lfo::new();
        for n in 0..4096u32 {
            let phase = std::f64::consts::TAU * f64::from(rate) * f64::from(n) / f64::from(sr);
            let expected = phase.sin() as f32;
            let actual = lfo.next(inc);
            prop_assert!((actual - expected).abs() < 1e-5, "n={} {} vs {}", n, actual, expected);
        }
    }

    /// A held level fed the same reading stays between its start and the
    /// reading, and sits on the reading once the rise time has passed.
    #[test]
    fn rise_hold_arrives(
        start in -100.0f32..0.0f32,
        reading in -100.0f32..0.0f32,
        block in 1u32..2048,
    ) {
        let mut hold = RiseHold::new(start);
        hold.set_rise_time(100.0, 48000.0);
        let (lo, hi) = if start < reading { (start, reading) } else { (reading, start) };

        for _ in 0..(4800 / block + 2) {
            let v = hold.feed(reading, block);
            prop_assert!(v >= lo && v <= hi, "{} outside [{}, {}]", v, lo, hi);
        }
        prop_assert!(!hold.is_rising());
        prop_assert_eq!(hold.value(), reading);
    }

    /// Level conversion never reports below the floor.
    #[test]
    fn db_floor(gain in -1.0f32..10.0f32) {
        prop_assert!(gain_to_db(gain, SILENCE_DB) >= SILENCE_DB);
    }
}
