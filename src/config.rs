use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub stt: SttConfig,
    pub diarization: DiarizationConfig,
    pub output: OutputConfig,
}

/// Audio loading configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Target sample rate all input audio is resampled to.
    pub sample_rate: u32,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    /// Transcription backend: "whisper" or "mock".
    pub backend: String,
    pub model: String,
    pub language: String,
}

/// Diarization and segment-merging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiarizationConfig {
    /// Turns shorter than this (seconds) are discarded before merging.
    pub min_segment_length: f64,
    /// Same-speaker gap (seconds) above which a new segment starts.
    pub min_silence_length: f64,
    /// Extension of the diarization sidecar file looked up next to the audio.
    pub rttm_extension: String,
}

/// Transcript rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Timestamp format: "seconds", "minutes" or "hour-minute-second".
    /// Unrecognized values fall back to "seconds".
    pub timestamp_format: String,
    /// What to do when a single segment fails to transcribe:
    /// "abort" stops the file, "placeholder" marks the segment and continues.
    pub on_segment_error: SegmentErrorPolicy,
}

/// Policy for a single segment's transcription failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SegmentErrorPolicy {
    #[default]
    Abort,
    Placeholder,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
        }
    }
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            backend: "whisper".to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Default for DiarizationConfig {
    fn default() -> Self {
        Self {
            min_segment_length: defaults::MIN_SEGMENT_LENGTH,
            min_silence_length: defaults::MIN_SILENCE_LENGTH,
            rttm_extension: defaults::RTTM_EXTENSION.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp_format: defaults::DEFAULT_TIMESTAMP_FORMAT.to_string(),
            on_segment_error: SegmentErrorPolicy::Abort,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - DIARSCRIBE_MODEL → stt.model
    /// - DIARSCRIBE_LANGUAGE → stt.language
    /// - DIARSCRIBE_TIMESTAMP_FORMAT → output.timestamp_format
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("DIARSCRIBE_MODEL")
            && !model.is_empty()
        {
            self.stt.model = model;
        }

        if let Ok(language) = std::env::var("DIARSCRIBE_LANGUAGE")
            && !language.is_empty()
        {
            self.stt.language = language;
        }

        if let Ok(format) = std::env::var("DIARSCRIBE_TIMESTAMP_FORMAT")
            && !format.is_empty()
        {
            self.output.timestamp_format = format;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/diarscribe/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("diarscribe")
            .join("config.toml")
    }
}
