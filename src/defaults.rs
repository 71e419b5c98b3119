//! Default configuration constants for diarscribe.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default audio sample rate in Hz.
///
/// 16kHz is the standard for speech recognition and provides a good balance
/// between quality and computational efficiency for voice applications.
pub const SAMPLE_RATE: u32 = 16000;

/// Default minimum segment length in seconds.
///
/// Diarization turns shorter than this are discarded before merging.
/// 0.5s filters out spurious micro-turns that carry no transcribable speech.
pub const MIN_SEGMENT_LENGTH: f64 = 0.5;

/// Default minimum silence length in seconds.
///
/// Same-speaker turns separated by a gap longer than this start a new
/// segment instead of extending the previous one. 0.0 means any audible
/// gap splits.
pub const MIN_SILENCE_LENGTH: f64 = 0.0;

/// Default Whisper model name.
///
/// "base" (multilingual) supports auto-detection of any language.
/// Use "base.en" explicitly for English-only optimized transcription.
pub const DEFAULT_MODEL: &str = "base";

/// Default language code for transcription.
///
/// "auto" lets Whisper detect the spoken language automatically.
/// Set to a specific code (e.g., "en", "de") to force a language.
pub const DEFAULT_LANGUAGE: &str = "auto";

/// Language value that triggers automatic language detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// Default timestamp rendering format for transcript lines.
///
/// One of "seconds", "minutes", "hour-minute-second". Unrecognized values
/// silently fall back to "seconds".
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "seconds";

/// File extension of diarization sidecar files read by the RTTM backend.
pub const RTTM_EXTENSION: &str = "rttm";

/// Text stored in a segment when transcription fails and the failure policy
/// is set to continue instead of aborting the file.
pub const TRANSCRIPTION_FAILURE_MARKER: &str = "<transcription failed>";

/// Report the GPU backend compiled into this build.
///
/// Returns a human-readable name based on the compile-time feature flags.
/// Only one GPU backend can be active at a time; if none is enabled, returns "CPU".
pub fn gpu_backend() -> &'static str {
    if cfg!(feature = "cuda") {
        "CUDA"
    } else if cfg!(feature = "vulkan") {
        "Vulkan"
    } else {
        "CPU"
    }
}
