//! Per-channel input level meter.
//!
//! Once per block the audio thread measures each channel's input RMS in dB
//! and folds it into a held value: a quieter block replaces the held value at
//! once, a louder one is approached linearly over the rise time. Results are
//! published through atomics and read with a [`MeterReader`] from any thread.
//!
//! The meter never touches the signal path.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use wowwah_core::{RiseHold, SILENCE_DB, db_to_linear, gain_to_db, rms};

/// Default time for the held level to climb to a louder reading.
pub const DEFAULT_RISE_MS: f32 = 100.0;

/// Default number of channel slots in a meter.
pub const DEFAULT_METER_CHANNELS: usize = 32;

/// Published levels, one atomic per channel slot.
///
/// The slot count is fixed at construction so readers handed out earlier
/// stay valid across `prepare`.
#[derive(Debug)]
struct MeterBank {
    levels: Box<[AtomicU32]>,
    channels: AtomicUsize,
}

impl MeterBank {
    fn new(capacity: usize) -> Self {
        Self {
            levels: (0..capacity)
                .map(|_| AtomicU32::new(SILENCE_DB.to_bits()))
                .collect(),
            channels: AtomicUsize::new(0),
        }
    }
}

/// Read-only, cloneable view of the published levels.
///
/// Reads are single atomic loads and never block the audio thread.
#[derive(Debug, Clone)]
pub struct MeterReader {
    bank: Arc<MeterBank>,
}

impl MeterReader {
    /// Number of metered channels.
    pub fn channel_count(&self) -> usize {
        self.bank.channels.load(Ordering::Acquire)
    }

    /// Latest smoothed level of `channel` in dB, or `None` past the metered
    /// channel count.
    pub fn level_db(&self, channel: usize) -> Option<f32> {
        if channel >= self.channel_count() {
            return None;
        }
        Some(f32::from_bits(self.bank.levels[channel].load(Ordering::Acquire)))
    }

    /// Latest smoothed level of `channel` as linear amplitude.
    pub fn level_linear(&self, channel: usize) -> Option<f32> {
        self.level_db(channel).map(db_to_linear)
    }
}

/// Audio-thread side of the meter.
#[derive(Debug)]
pub struct LevelMeter {
    held: Vec<RiseHold>,
    bank: Arc<MeterBank>,
    rise_ms: f32,
}

impl LevelMeter {
    /// Meter with the given rise time and `capacity` channel slots.
    ///
    /// Channels prepared beyond `capacity` are processed but not metered.
    pub fn new(rise_ms: f32, capacity: usize) -> Self {
        Self {
            held: Vec::new(),
            bank: Arc::new(MeterBank::new(capacity)),
            rise_ms,
        }
    }

    /// Number of channel slots.
    pub fn capacity(&self) -> usize {
        self.bank.levels.len()
    }

    /// Handle for display threads.
    pub fn reader(&self) -> MeterReader {
        MeterReader {
            bank: Arc::clone(&self.bank),
        }
    }

    /// Size for `channels` and reset every level to silence. Allocates.
    pub fn prepare(&mut self, sample_rate: f32, channels: usize) {
        let metered = channels.min(self.capacity());
        let mut hold = RiseHold::new(SILENCE_DB);
        hold.set_rise_time(self.rise_ms, sample_rate);
        self.held.clear();
        self.held.resize(metered, hold);
        for level in &self.bank.levels {
            level.store(SILENCE_DB.to_bits(), Ordering::Release);
        }
        self.bank.channels.store(metered, Ordering::Release);
    }

    /// Number of metered channels.
    pub fn channel_count(&self) -> usize {
        self.held.len()
    }

    /// Fold one planar block of `channel` into the meter.
    #[inline]
    pub fn measure(&mut self, channel: usize, block: &[f32]) {
        self.update(channel, rms(block), block.len());
    }

    /// Fold channel `channel` of an interleaved block into the meter.
    pub fn measure_interleaved(&mut self, channel: usize, buffer: &[f32], channels: usize) {
        if channels == 0 {
            return;
        }
        let frames = buffer.len() / channels;
        if frames == 0 {
            self.update(channel, 0.0, 0);
            return;
        }
        let sum: f32 = buffer
            .iter()
            .skip(channel)
            .step_by(channels)
            .take(frames)
            .map(|s| s * s)
            .sum();
        self.update(channel, libm::sqrtf(sum / frames as f32), frames);
    }

    /// Fold a measured RMS amplitude covering `block_len` samples.
    pub fn update(&mut self, channel: usize, rms_level: f32, block_len: usize) {
        let Some(held) = self.held.get_mut(channel) else {
            return;
        };
        let elapsed = u32::try_from(block_len).unwrap_or(u32::MAX);
        let value = held.feed(gain_to_db(rms_level, SILENCE_DB), elapsed);
        self.bank.levels[channel].store(value.to_bits(), Ordering::Release);
    }
}
