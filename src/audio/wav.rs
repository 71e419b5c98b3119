//! WAV file loading with mono mixdown and resampling.

use crate::error::{DiarscribeError, Result};
use std::io::Read;
use std::path::Path;

/// A fixed-sample-rate mono sample buffer.
///
/// Immutable once loaded; shared read-only across all segment slicing calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl Waveform {
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration of the buffer in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Load a WAV file, mix it down to mono and resample to `target_rate`.
pub fn load_wav(path: &Path, target_rate: u32) -> Result<Waveform> {
    let file = std::fs::File::open(path).map_err(|e| DiarscribeError::AudioLoad {
        file: path.display().to_string(),
        message: e.to_string(),
    })?;
    from_reader(Box::new(file), target_rate).map_err(|e| match e {
        DiarscribeError::AudioLoad { message, .. } => DiarscribeError::AudioLoad {
            file: path.display().to_string(),
            message,
        },
        other => other,
    })
}

/// Load WAV data from any reader (for testing/flexibility).
pub fn from_reader(reader: Box<dyn Read + Send>, target_rate: u32) -> Result<Waveform> {
    let mut wav_reader = hound::WavReader::new(reader).map_err(|e| DiarscribeError::AudioLoad {
        file: "<reader>".to_string(),
        message: format!("Failed to parse WAV file: {}", e),
    })?;

    let spec = wav_reader.spec();
    let source_rate = spec.sample_rate;
    let source_channels = spec.channels as usize;

    let raw_samples: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int => wav_reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| DiarscribeError::AudioLoad {
                file: "<reader>".to_string(),
                message: format!("Failed to read WAV samples: {}", e),
            })?,
        hound::SampleFormat::Float => wav_reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * 32767.0) as i16))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| DiarscribeError::AudioLoad {
                file: "<reader>".to_string(),
                message: format!("Failed to read WAV samples: {}", e),
            })?,
    };

    // Mix all channels down to mono by averaging
    let mono_samples = if source_channels > 1 {
        raw_samples
            .chunks_exact(source_channels)
            .map(|frame| {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                (sum / source_channels as i32) as i16
            })
            .collect()
    } else {
        raw_samples
    };

    let samples = if source_rate != target_rate {
        resample(&mono_samples, source_rate, target_rate)
    } else {
        mono_samples
    };

    Ok(Waveform::new(samples, target_rate))
}

/// Simple linear interpolation resampling.
pub fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx.min(samples.len() - 1)]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
