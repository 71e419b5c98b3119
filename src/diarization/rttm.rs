//! RTTM sidecar diarization backend.
//!
//! Reads speaker turns from an RTTM file stored next to the audio file
//! (`meeting.wav` → `meeting.rttm`). RTTM is the NIST Rich Transcription
//! exchange format emitted by common diarization toolkits; one record
//! per line:
//!
//! ```text
//! SPEAKER <file-id> <channel> <onset> <duration> <NA> <NA> <speaker> <NA> <NA>
//! ```
//!
//! Only the onset (field 3), duration (field 4) and speaker label (field 7)
//! are consumed.

use crate::defaults;
use crate::diarization::diarizer::{DiarizationTurn, Diarizer};
use crate::error::{DiarscribeError, Result};
use std::path::{Path, PathBuf};

/// Diarizer that reads a pre-computed RTTM sidecar file.
#[derive(Debug, Clone)]
pub struct RttmDiarizer {
    extension: String,
}

impl Default for RttmDiarizer {
    fn default() -> Self {
        Self::new(defaults::RTTM_EXTENSION)
    }
}

impl RttmDiarizer {
    /// Create a diarizer looking up sidecar files with the given extension.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Path of the sidecar file for an audio file.
    pub fn sidecar_path(&self, audio_path: &Path) -> PathBuf {
        audio_path.with_extension(&self.extension)
    }
}

impl Diarizer for RttmDiarizer {
    fn diarize(&self, audio_path: &Path) -> Result<Vec<DiarizationTurn>> {
        let sidecar = self.sidecar_path(audio_path);
        let contents = std::fs::read_to_string(&sidecar).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiarscribeError::DiarizationSidecarNotFound {
                    file: audio_path.display().to_string(),
                    message: format!("expected {}", sidecar.display()),
                }
            } else {
                DiarscribeError::Diarization {
                    file: audio_path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        parse_rttm(&contents).map_err(|message| DiarscribeError::Diarization {
            file: audio_path.display().to_string(),
            message,
        })
    }

    fn name(&self) -> &str {
        "rttm"
    }
}

/// Parse RTTM text into a turn sequence ordered by start time.
///
/// Blank lines and non-SPEAKER records are skipped. Malformed SPEAKER
/// records are an error, not silently dropped.
pub fn parse_rttm(contents: &str) -> std::result::Result<Vec<DiarizationTurn>, String> {
    let mut turns = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields[0] != "SPEAKER" {
            continue;
        }
        if fields.len() < 8 {
            return Err(format!(
                "malformed RTTM line {}: expected at least 8 fields, got {}",
                line_no + 1,
                fields.len()
            ));
        }

        let start: f64 = fields[3]
            .parse()
            .map_err(|_| format!("malformed RTTM line {}: bad onset {:?}", line_no + 1, fields[3]))?;
        let duration: f64 = fields[4].parse().map_err(|_| {
            format!(
                "malformed RTTM line {}: bad duration {:?}",
                line_no + 1,
                fields[4]
            )
        })?;

        turns.push(DiarizationTurn::new(
            start,
            start + duration,
            fields[7].to_string(),
        ));
    }

    // Diarization toolkits usually emit chronologically, but the merge
    // relies on start-time order, so enforce it here.
    turns.sort_by(|a, b| a.start.total_cmp(&b.start));

    Ok(turns)
}
