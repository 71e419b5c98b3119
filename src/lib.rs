//! diarscribe - Batch speaker-attributed transcription for audio files
//!
//! Diarization-driven pipeline: merge speaker turns into speech segments,
//! transcribe each segment, assemble one timestamped transcript per file.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

#[cfg(feature = "cli")]
pub mod app;
pub mod audio;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diarization;
pub mod error;
pub mod pipeline;
pub mod segment;
pub mod stt;
pub mod transcript;

// Capability seams (diarize → merge → transcribe → assemble)
pub use diarization::{DiarizationTurn, Diarizer, MockDiarizer, RttmDiarizer};
pub use stt::transcriber::{MockTranscriber, Transcriber};

// Pipeline
pub use pipeline::{DiarPipeline, DiarPipelineConfig};

// Core data types
pub use audio::Waveform;
pub use segment::Segment;
pub use transcript::TimestampFormat;

// Error handling
pub use error::{DiarscribeError, PipelineStage, Result};

// Config
pub use config::{Config, SegmentErrorPolicy};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
