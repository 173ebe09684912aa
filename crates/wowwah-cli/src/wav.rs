//! WAV file reading and writing.
//!
//! Audio is held planar, one `Vec<f32>` per channel, which is the layout
//! [`WahEngine::process_planar`](wowwah_engine::WahEngine::process_planar)
//! works on. Every channel of the source file is kept.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use thiserror::Error;

/// Errors from WAV I/O.
#[derive(Debug, Error)]
pub enum WavError {
    /// Underlying WAV encoder/decoder error.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Requested output bit depth is not 16, 24 or 32.
    #[error("unsupported bit depth {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// Channel buffers of different lengths.
    #[error("channel {channel} has {len} samples, expected {expected}")]
    RaggedChannels {
        /// Offending channel.
        channel: usize,
        /// Its length.
        len: usize,
        /// Length of channel 0.
        expected: usize,
    },

    /// Nothing to write.
    #[error("no channels to write")]
    NoChannels,
}

/// Result type for WAV I/O.
pub type Result<T> = std::result::Result<T, WavError>;

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample. 32 is written as float, 16 and 24 as PCM.
    pub bits_per_sample: u16,
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Decoded audio, one buffer per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarAudio {
    /// Channel buffers, all the same length.
    pub channels: Vec<Vec<f32>>,
    /// Format of the source file.
    pub spec: WavSpec,
}

impl PlanarAudio {
    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.spec.sample_rate)
    }
}

/// Read a WAV file into planar `f32` buffers in `[-1, 1)`.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<PlanarAudio> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channels;
    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (buffer, &sample) in planar.iter_mut().zip(frame) {
            buffer.push(sample);
        }
    }

    Ok(PlanarAudio {
        channels: planar,
        spec,
    })
}

/// Write planar buffers as an interleaved WAV file.
///
/// The channel count comes from `channels`; `spec.channels` is ignored.
/// Integer formats clamp to full scale.
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Vec<f32>], spec: WavSpec) -> Result<()> {
    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(WavError::UnsupportedBitDepth(spec.bits_per_sample));
    }
    let Some(first) = channels.first() else {
        return Err(WavError::NoChannels);
    };
    let frames = first.len();
    if let Some((channel, buffer)) = channels.iter().enumerate().find(|(_, c)| c.len() != frames) {
        return Err(WavError::RaggedChannels {
            channel,
            len: buffer.len(),
            expected: frames,
        });
    }

    let spec = WavSpec {
        channels: u16::try_from(channels.len()).unwrap_or(u16::MAX),
        ..spec
    };
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    if spec.bits_per_sample == 32 {
        for frame in 0..frames {
            for buffer in channels {
                writer.write_sample(buffer[frame])?;
            }
        }
    } else {
        let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
        for frame in 0..frames {
            for buffer in channels {
                let int_sample = (buffer[frame] * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(int_sample)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}
