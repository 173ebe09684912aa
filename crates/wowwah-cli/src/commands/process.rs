//! `wowwah process`: render a WAV file through the wah.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use wowwah_core::{SILENCE_DB, gain_to_db, rms};
use wowwah_engine::{
    EngineOptions, ModulationMode, SvfTap, TapTempo, Vowel, WahControls, WahEngine, WahParams,
};

use crate::wav::{WavSpec, read_wav, write_wav};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Tempo,
    Dynamic,
}

impl From<ModeArg> for ModulationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Tempo => ModulationMode::Tempo,
            ModeArg::Dynamic => ModulationMode::Dynamic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TapArg {
    Low,
    Band,
    High,
}

impl From<TapArg> for SvfTap {
    fn from(tap: TapArg) -> Self {
        match tap {
            TapArg::Low => SvfTap::Low,
            TapArg::Band => SvfTap::Band,
            TapArg::High => SvfTap::High,
        }
    }
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Modulation source
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Filter output fed to the mix
    #[arg(long, value_enum)]
    tap: Option<TapArg>,

    /// Parameter override by id (e.g., "rate=2.5"); see `wowwah params`
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, f32)>,

    /// Single mix knob: wet = MIX, dry = 1 - MIX
    #[arg(long)]
    mix: Option<f32>,

    /// Sweep between two vowel formant pairs instead of one band
    #[arg(long)]
    humanizer: bool,

    /// Humanizer vowels, start and end (e.g., "A,U")
    #[arg(long, requires = "humanizer", value_delimiter = ',')]
    vowels: Vec<Vowel>,

    /// Tap times in seconds (e.g., "0,0.5,1.0"); the last interval sets the rate
    #[arg(long, value_delimiter = ',')]
    tap_times: Vec<f64>,

    /// Processing block size
    #[arg(long, default_value = "512", value_parser = clap::value_parser!(u32).range(1..))]
    block_size: u32,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
    bit_depth: u16,

    /// Clamp the filter below its stability limit and zero non-finite input
    #[arg(long)]
    harden: bool,
}

fn parse_key_val(s: &str) -> Result<(String, f32), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid parameter format: '{s}' (expected key=value)"))?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("Invalid value for '{key}': {e}"))?;
    Ok((key.trim().to_string(), value))
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    match s.trim() {
        "16" => Ok(16),
        "24" => Ok(24),
        "32" => Ok(32),
        other => Err(format!("Unsupported bit depth '{other}' (expected 16, 24, or 32)")),
    }
}

/// Apply the command-line settings in a fixed order: raw parameters first,
/// then the dedicated flags, so `--mix` wins over `--param wet=..`.
fn configure(args: &ProcessArgs, controls: &WahControls) -> anyhow::Result<()> {
    for (key, value) in &args.param {
        controls
            .try_set_by_name(key, *value)
            .with_context(|| format!("--param {key}={value}"))?;
    }
    if let Some(mode) = args.mode {
        controls.set_mode(mode.into());
    }
    if let Some(tap) = args.tap {
        controls.set_tap(tap.into());
    }
    if let Some(mix) = args.mix {
        if !(0.0..=1.0).contains(&mix) {
            warn!(mix, "mix outside 0..1, clamping");
        }
        controls.set_mix(mix);
    }
    if args.humanizer {
        controls.params().set_humanizer(true);
    }
    match args.vowels.as_slice() {
        [] => {}
        [first, second] => controls.set_vowels(*first, *second),
        other => anyhow::bail!("--vowels takes two vowels, got {}", other.len()),
    }
    if !args.tap_times.is_empty() {
        if args.tap_times.len() < 2 {
            anyhow::bail!("--tap-times needs at least two taps");
        }
        let mut tempo = TapTempo::new();
        for &t in &args.tap_times {
            if let Err(e) = controls.tap_tempo(&mut tempo, t) {
                warn!("ignoring tap at {t} s: {e}");
            }
        }
        match tempo.last_reading() {
            Some(reading) => info!(rate_hz = reading.rate_hz, bpm = reading.bpm, "tap tempo"),
            None => anyhow::bail!("--tap-times gave no valid interval"),
        }
    }
    Ok(())
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let mut audio = read_wav(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let sample_rate = audio.spec.sample_rate as f32;
    let frames = audio.frames();

    println!(
        "  {} frames x {} channel(s), {} Hz, {:.2}s",
        frames,
        audio.channels.len(),
        audio.spec.sample_rate,
        audio.duration_secs()
    );

    let params = Arc::new(WahParams::default());
    let controls = WahControls::new(Arc::clone(&params));
    configure(&args, &controls)?;

    let snapshot = params.snapshot();
    info!(
        mode = %snapshot.mode,
        tap = snapshot.tap.name(),
        humanizer = snapshot.humanizer,
        min_freq = snapshot.min_freq,
        max_freq = snapshot.max_freq(),
        rate = snapshot.rate,
        "wah settings"
    );
    if snapshot.humanizer {
        info!(
            first = %snapshot.first_vowel,
            second = %snapshot.second_vowel,
            "humanizer vowels"
        );
    }

    let options = EngineOptions {
        hardening: args.harden,
        meter_channels: audio.channels.len(),
        ..EngineOptions::default()
    };
    let mut engine = WahEngine::new(Arc::clone(&params), options);
    engine.prepare(sample_rate, audio.channels.len());
    let meter = engine.meter_reader();

    let input_levels: Vec<f32> = audio.channels.iter().map(|c| rms(c)).collect();

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let block_size = args.block_size as usize;
    let mut start = 0;
    while start < frames {
        let end = (start + block_size).min(frames);
        let mut blocks: Vec<&mut [f32]> = audio
            .channels
            .iter_mut()
            .map(|c| &mut c[start..end])
            .collect();
        engine.process_planar(&mut blocks);
        start = end;
        pb.set_position(start as u64);
    }
    pb.finish_with_message("done");

    for (channel, input_rms) in input_levels.iter().enumerate() {
        let output_rms = rms(&audio.channels[channel]);
        info!(
            channel,
            meter_db = meter.level_db(channel).unwrap_or(SILENCE_DB),
            input_rms_db = gain_to_db(*input_rms, SILENCE_DB),
            output_rms_db = gain_to_db(output_rms, SILENCE_DB),
            "levels"
        );
    }

    let peak = audio
        .channels
        .iter()
        .flatten()
        .fold(0.0_f32, |m, s| m.max(s.abs()));
    if !peak.is_finite() {
        warn!("output contains non-finite samples; the sweep may exceed the filter's stable range (try --harden)");
    } else if peak > 1.0 && args.bit_depth != 32 {
        warn!(peak, "output exceeds full scale and will clip at {} bits", args.bit_depth);
    }

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..audio.spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &audio.channels, out_spec)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Done!");

    Ok(())
}
