//! Demonstration of driving the wah from a separate control thread
//!
//! The audio loop renders blocks while another thread turns pedal knobs
//! through `WahControls`; the meter is read back after every block.
//!
//! Run with: cargo run -p wowwah-engine --example control_thread_demo

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use wowwah_engine::{
    EngineOptions, ModulationMode, ParamKey, Vowel, WahControls, WahEngine, WahParams,
};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK: usize = 480;

fn main() {
    println!("WOW WAH Control Thread Demo");
    println!("===========================\n");

    let params = Arc::new(WahParams::default());
    let controls = WahControls::new(Arc::clone(&params));
    let mut engine = WahEngine::new(Arc::clone(&params), EngineOptions::default());
    engine.prepare(SAMPLE_RATE, 2);
    let meter = engine.meter_reader();

    let knobs = thread::spawn(move || {
        controls.set(ParamKey::Rate, 4.0);
        thread::sleep(Duration::from_millis(5));
        controls.set_mode(ModulationMode::Dynamic);
        thread::sleep(Duration::from_millis(5));
        controls.toggle_humanizer();
        controls.set_vowels(Vowel::A, Vowel::U);
    });

    let mut phase = 0.0_f32;
    for block in 0..20 {
        let mut left = [0.0_f32; BLOCK];
        let mut right = [0.0_f32; BLOCK];
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let s = (phase * std::f32::consts::TAU).sin() * 0.5;
            phase = (phase + 220.0 / SAMPLE_RATE).fract();
            *l = s;
            *r = -s;
        }

        engine.process_planar(&mut [left.as_mut_slice(), right.as_mut_slice()]);

        let snap = params.snapshot();
        println!(
            "block {block:>2}: mode {:<7} humanizer {:<5} meter L {:>7.2} dB  R {:>7.2} dB",
            snap.mode.name(),
            snap.humanizer,
            meter.level_db(0).unwrap_or_default(),
            meter.level_db(1).unwrap_or_default(),
        );
        thread::sleep(Duration::from_millis(1));
    }

    knobs.join().expect("control thread panicked");
}
