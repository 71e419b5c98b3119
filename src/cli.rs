//! Command-line interface for diarscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Batch speaker-attributed transcription for audio files
#[derive(Parser, Debug)]
#[command(
    name = "diarscribe",
    version,
    about = "Batch speaker-attributed transcription for audio files"
)]
pub struct Cli {
    /// Audio files to transcribe (WAV), processed one at a time
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress output (quiet mode)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: per-stage timing)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Whisper model file (default: base, multilingual)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Language code for transcription (default: auto-detect). Examples: auto, en, de, es, fr
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Transcription backend override (whisper, mock)
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Timestamp format (seconds, minutes, hour-minute-second)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Discard diarization turns shorter than this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub min_segment_length: Option<f64>,

    /// Same-speaker silence gap in seconds above which a new segment starts
    #[arg(long, value_name = "SECONDS")]
    pub min_silence_length: Option<f64>,

    /// Directory to write per-file transcripts into (default: stdout)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}
