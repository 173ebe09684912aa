//! The wah engine: block processing over any number of channels.
//!
//! [`WahEngine`] owns one [`ChannelState`] per channel and the audio side of
//! the level meter. Each `process_*` call takes one parameter snapshot, turns
//! it into a [`BlockContext`], meters the input, then runs every sample of
//! every channel through [`ChannelState::process`].
//!
//! Processing never allocates, locks or fails. Buffers are sized in
//! [`prepare`](WahEngine::prepare); calls before it are no-ops, and channels
//! beyond the prepared count are left untouched.

use std::sync::Arc;

use crate::channel::{BlockContext, ChannelState};
use crate::meter::{DEFAULT_METER_CHANNELS, DEFAULT_RISE_MS, LevelMeter, MeterReader};
use crate::params::WahParams;

/// Construction-time engine options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Clamp filter coefficients just under the stability limit and replace
    /// non-finite input samples with zero.
    pub hardening: bool,
    /// Time for the meter to climb to a louder reading, in milliseconds.
    pub meter_rise_ms: f32,
    /// Channel slots in the meter. Channels prepared beyond this are
    /// processed but not metered.
    pub meter_channels: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            hardening: false,
            meter_rise_ms: DEFAULT_RISE_MS,
            meter_channels: DEFAULT_METER_CHANNELS,
        }
    }
}

/// Multichannel wah processor.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wowwah_engine::{EngineOptions, WahEngine, WahParams};
///
/// let params = Arc::new(WahParams::default());
/// let mut engine = WahEngine::new(Arc::clone(&params), EngineOptions::default());
/// engine.prepare(48000.0, 2);
///
/// let mut left = vec![0.25_f32; 256];
/// let mut right = vec![-0.25_f32; 256];
/// engine.process_planar(&mut [left.as_mut_slice(), right.as_mut_slice()]);
///
/// params.set_dry(1.0);
/// params.set_wet(0.0);
/// let mut frames = vec![0.5_f32; 512];
/// engine.process_interleaved(&mut frames);
/// assert!(frames.iter().all(|&s| s == 0.5));
/// ```
#[derive(Debug)]
pub struct WahEngine {
    params: Arc<WahParams>,
    options: EngineOptions,
    sample_rate: f32,
    channels: Vec<ChannelState>,
    meter: LevelMeter,
}

impl WahEngine {
    /// Create an engine reading from `params`. Call
    /// [`prepare`](Self::prepare) before processing.
    pub fn new(params: Arc<WahParams>, options: EngineOptions) -> Self {
        Self {
            params,
            meter: LevelMeter::new(options.meter_rise_ms, options.meter_channels),
            options,
            sample_rate: 0.0,
            channels: Vec::new(),
        }
    }

    /// (Re)allocate and zero all per-channel state and the meter.
    pub fn prepare(&mut self, sample_rate: f32, channels: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, channels, hardening = self.options.hardening, "wah prepare");

        self.sample_rate = sample_rate;
        self.channels.clear();
        self.channels.resize(channels, ChannelState::new());
        self.meter.prepare(sample_rate, channels);
    }

    /// Turn hardening on or off. Takes effect on the next block.
    pub fn set_hardening(&mut self, enabled: bool) {
        #[cfg(feature = "tracing")]
        tracing::debug!(enabled, "wah hardening");

        self.options.hardening = enabled;
    }

    /// Shared parameter store.
    pub fn params(&self) -> &Arc<WahParams> {
        &self.params
    }

    /// Current options.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Sample rate from the last [`prepare`](Self::prepare), zero before.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of prepared channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// State of one channel.
    pub fn channel_state(&self, channel: usize) -> Option<&ChannelState> {
        self.channels.get(channel)
    }

    /// Reader for the input level meter. Stays valid across `prepare`.
    pub fn meter_reader(&self) -> MeterReader {
        self.meter.reader()
    }

    fn block_context(&self) -> BlockContext {
        BlockContext::new(&self.params.snapshot(), self.sample_rate, self.options.hardening)
    }

    /// Process planar channel buffers in place.
    pub fn process_planar(&mut self, buffers: &mut [&mut [f32]]) {
        if self.channels.is_empty() {
            return;
        }
        let ctx = self.block_context();

        for (index, (state, buffer)) in self.channels.iter_mut().zip(buffers.iter_mut()).enumerate()
        {
            self.meter.measure(index, buffer);
            for sample in buffer.iter_mut() {
                *sample = state.process(*sample, &ctx);
            }
        }
    }

    /// Process planar `inputs` into caller-provided `outputs`.
    ///
    /// Each channel processes `min(input.len(), output.len())` samples.
    pub fn process_planar_into(&mut self, inputs: &[&[f32]], outputs: &mut [&mut [f32]]) {
        if self.channels.is_empty() {
            return;
        }
        let ctx = self.block_context();

        for (index, ((state, input), output)) in self
            .channels
            .iter_mut()
            .zip(inputs.iter())
            .zip(outputs.iter_mut())
            .enumerate()
        {
            let len = input.len().min(output.len());
            self.meter.measure(index, &input[..len]);
            for (out, &x) in output[..len].iter_mut().zip(&input[..len]) {
                *out = state.process(x, &ctx);
            }
        }
    }

    /// Process an interleaved buffer of whole frames in place.
    ///
    /// The frame width is the prepared channel count; a trailing partial
    /// frame is left untouched.
    pub fn process_interleaved(&mut self, buffer: &mut [f32]) {
        let width = self.channels.len();
        if width == 0 {
            return;
        }
        let ctx = self.block_context();
        let whole = buffer.len() - buffer.len() % width;
        let buffer = &mut buffer[..whole];

        for channel in 0..width {
            self.meter.measure_interleaved(channel, buffer, width);
        }
        for frame in buffer.chunks_exact_mut(width) {
            for (state, sample) in self.channels.iter_mut().zip(frame.iter_mut()) {
                *sample = state.process(*sample, &ctx);
            }
        }
    }
}
