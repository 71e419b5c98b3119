//! Batch transcription application entry point.
//!
//! Orchestrates the per-file flow for a list of local audio files:
//! diarize → merge → transcribe → assemble → write transcript.

use crate::config::Config;
use crate::diarization::{Diarizer, RttmDiarizer};
use crate::error::{DiarscribeError, Result};
use crate::pipeline::{DiarPipeline, DiarPipelineConfig};
use crate::stt::whisper::{WhisperConfig, WhisperTranscriber};
use crate::stt::{MockTranscriber, Transcriber};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Run the transcribe command over a list of audio files.
///
/// Files are processed strictly one at a time. A failing file is reported
/// and skipped; it never halts the batch. Returns the number of files that
/// failed so the caller can set the exit status.
pub fn run_transcribe_command(
    config: Config,
    files: &[PathBuf],
    output_dir: Option<&Path>,
    quiet: bool,
    verbosity: u8,
) -> anyhow::Result<usize> {
    let diarizer = create_diarizer(&config);
    if !quiet {
        eprintln!("Loading model '{}'...", config.stt.model);
    }
    let transcriber = create_transcriber(&config)?;

    let pipeline_config = DiarPipelineConfig::from_config(&config).with_verbosity(verbosity);
    let pipeline = DiarPipeline::new(diarizer, transcriber, pipeline_config);

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let mut failures = 0usize;
    for file in files {
        if !quiet {
            eprintln!("Transcribing {}...", file.display());
        }

        match pipeline.diar_inference(file) {
            Ok(transcript) => {
                write_transcript(file, &transcript, output_dir)?;
                if !quiet {
                    eprintln!("{} {}", "done".green(), file.display());
                }
            }
            Err(e) => {
                // Report and move on; one bad file must not stop the batch
                failures += 1;
                let stage = e
                    .stage()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "pipeline".to_string());
                eprintln!(
                    "{} {} failed during {}: {}",
                    "error:".red().bold(),
                    file.display(),
                    stage,
                    e
                );
            }
        }
    }

    Ok(failures)
}

/// Write a transcript next to its destination: `<output_dir>/<stem>.txt`,
/// or stdout when no output directory is configured.
fn write_transcript(audio_path: &Path, transcript: &str, output_dir: Option<&Path>) -> Result<()> {
    match output_dir {
        Some(dir) => {
            let stem = audio_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("transcript");
            std::fs::write(dir.join(format!("{}.txt", stem)), transcript)?;
        }
        None => {
            print!("{}", transcript);
        }
    }
    Ok(())
}

fn create_diarizer(config: &Config) -> Box<dyn Diarizer> {
    Box::new(RttmDiarizer::new(
        config.diarization.rttm_extension.clone(),
    ))
}

/// Build the transcription backend named by the configuration.
fn create_transcriber(config: &Config) -> Result<Box<dyn Transcriber>> {
    match config.stt.backend.as_str() {
        "whisper" => {
            let whisper_config = WhisperConfig {
                model_path: model_path_for(&config.stt.model),
                language: config.stt.language.clone(),
                threads: None,
            };
            Ok(Box::new(WhisperTranscriber::new(whisper_config)?))
        }
        "mock" => Ok(Box::new(MockTranscriber::new("mock"))),
        other => Err(DiarscribeError::ConfigInvalidValue {
            key: "stt.backend".to_string(),
            message: format!("unknown backend {:?}, expected \"whisper\" or \"mock\"", other),
        }),
    }
}

/// Resolve a model setting to a file path.
///
/// A value that looks like a path (contains a separator or ends in `.bin`)
/// is used as-is; a bare name like `base` maps to `models/ggml-<name>.bin`.
fn model_path_for(model: &str) -> PathBuf {
    if model.contains(std::path::MAIN_SEPARATOR) || model.ends_with(".bin") {
        PathBuf::from(model)
    } else {
        PathBuf::from("models").join(format!("ggml-{}.bin", model))
    }
}
