//! Integration tests for the `wowwah` binary.
//!
//! Each test writes a WAV file into a temporary directory, runs the binary
//! on it and inspects the result.

use std::path::Path;
use std::process::Command;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tempfile::TempDir;

/// Helper to get the path to the `wowwah` binary built by cargo.
fn wowwah_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wowwah"))
}

fn write_stereo_sine(path: &Path, frames: usize) {
    let spec = WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for i in 0..frames {
        let t = i as f32 / 44100.0;
        let s = 0.5 * (2.0 * std::f32::consts::PI * 330.0 * t).sin();
        writer.write_sample(s).unwrap();
        writer.write_sample(-s * 0.5).unwrap();
    }
    writer.finalize().unwrap();
}

fn read_samples(path: &Path) -> (hound::WavSpec, Vec<f32>) {
    let reader = WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Float => reader.into_samples::<f32>().map(Result::unwrap).collect(),
        SampleFormat::Int => {
            let max = (1i32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.unwrap() as f32 / max)
                .collect()
        }
    };
    (spec, samples)
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[test]
fn params_lists_every_id() {
    let output = wowwah_bin().arg("params").output().expect("failed to run wowwah params");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "min_freq",
        "depth",
        "resonance",
        "attack",
        "release",
        "gain",
        "dry",
        "wet",
        "rate",
        "mode",
        "tap",
        "humanizer",
        "first_vowel",
        "second_vowel",
    ] {
        assert!(stdout.contains(id), "params listing should contain '{id}'");
    }
    assert!(stdout.contains("1 = Dynamic"));
    assert!(stdout.contains("2 = High"));
}

#[test]
fn vowels_prints_formants() {
    let output = wowwah_bin().arg("vowels").output().expect("failed to run wowwah vowels");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1000"));
    assert!(stdout.contains("2500"));
    assert!(stdout.contains('U'));
}

// ---------------------------------------------------------------------------
// Processing
// ---------------------------------------------------------------------------

#[test]
fn process_keeps_channels_and_rate() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_stereo_sine(&input, 4410);

    let status = wowwah_bin()
        .args(["process"])
        .arg(&input)
        .arg(&output)
        .args(["--mode", "dynamic", "--tap", "band", "--param", "rate=3"])
        .status()
        .unwrap();
    assert!(status.success());

    let (spec, samples) = read_samples(&output);
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(samples.len(), 4410 * 2);
    assert!(samples.iter().all(|s| s.is_finite()));

    let (_, original) = read_samples(&input);
    assert_ne!(samples, original);
}

#[test]
fn process_mix_zero_is_passthrough() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_stereo_sine(&input, 2000);

    let status = wowwah_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--mix", "0", "--block-size", "97"])
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(read_samples(&output).1, read_samples(&input).1);
}

#[test]
fn process_humanizer_and_pcm_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_stereo_sine(&input, 2000);

    let status = wowwah_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--humanizer", "--vowels", "A,U", "--bit-depth", "16"])
        .args(["--tap-times", "0,0.25,0.5", "--harden"])
        .status()
        .unwrap();
    assert!(status.success());

    let (spec, samples) = read_samples(&output);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, SampleFormat::Int);
    assert_eq!(samples.len(), 4000);
}

#[test]
fn process_rejects_out_of_range_param() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_stereo_sine(&input, 100);

    let output = wowwah_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .args(["--param", "gain=10"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
}

#[test]
fn process_rejects_unknown_param_and_vowel() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_stereo_sine(&input, 100);
    let out = dir.path().join("out.wav");

    let unknown = wowwah_bin()
        .arg("process")
        .arg(&input)
        .arg(&out)
        .args(["--param", "cutoff=1000"])
        .output()
        .unwrap();
    assert!(!unknown.status.success());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("unknown parameter"));

    let vowel = wowwah_bin()
        .arg("process")
        .arg(&input)
        .arg(&out)
        .args(["--humanizer", "--vowels", "A,Y"])
        .output()
        .unwrap();
    assert!(!vowel.status.success());
    assert!(!out.exists());
}

#[test]
fn process_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = wowwah_bin()
        .arg("process")
        .arg(dir.path().join("missing.wav"))
        .arg(dir.path().join("out.wav"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading"));
}
