//! The diarization-driven inference pipeline.
//!
//! Runs the complete per-file flow: diarize → load audio → merge turns into
//! segments → transcribe each segment → assemble the transcript string.
//! Blocking and single-threaded; files are processed one at a time by the
//! caller.

use crate::audio::wav;
use crate::config::{Config, SegmentErrorPolicy};
use crate::defaults;
use crate::diarization::Diarizer;
use crate::error::Result;
use crate::pipeline::driver;
use crate::segment::merger;
use crate::stt::Transcriber;
use crate::transcript::{TimestampFormat, assemble};
use std::path::Path;
use std::time::Instant;

/// Configuration for the per-file pipeline.
#[derive(Debug, Clone)]
pub struct DiarPipelineConfig {
    /// Sample rate all audio is resampled to before slicing.
    pub sample_rate: u32,
    /// Turns shorter than this (seconds) are discarded before merging.
    pub min_segment_length: f64,
    /// Same-speaker gap (seconds) above which a new segment starts.
    pub min_silence_length: f64,
    /// Timestamp rendering format for the transcript.
    pub timestamp_format: TimestampFormat,
    /// What to do when a single segment fails to transcribe.
    pub on_segment_error: SegmentErrorPolicy,
    /// Verbosity level for timing output (0 = silent).
    pub verbosity: u8,
}

impl Default for DiarPipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
            min_segment_length: defaults::MIN_SEGMENT_LENGTH,
            min_silence_length: defaults::MIN_SILENCE_LENGTH,
            timestamp_format: TimestampFormat::Seconds,
            on_segment_error: SegmentErrorPolicy::Abort,
            verbosity: 0,
        }
    }
}

impl DiarPipelineConfig {
    /// Derive pipeline settings from the application config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            sample_rate: config.audio.sample_rate,
            min_segment_length: config.diarization.min_segment_length,
            min_silence_length: config.diarization.min_silence_length,
            timestamp_format: TimestampFormat::parse(&config.output.timestamp_format),
            on_segment_error: config.output.on_segment_error,
            verbosity: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// The per-file transcription pipeline.
///
/// Owns the diarization and transcription capabilities; both are injected
/// at construction time so backends can be swapped (or mocked) without
/// touching the pipeline logic.
pub struct DiarPipeline {
    diarizer: Box<dyn Diarizer>,
    transcriber: Box<dyn Transcriber>,
    config: DiarPipelineConfig,
}

impl DiarPipeline {
    pub fn new(
        diarizer: Box<dyn Diarizer>,
        transcriber: Box<dyn Transcriber>,
        config: DiarPipelineConfig,
    ) -> Self {
        Self {
            diarizer,
            transcriber,
            config,
        }
    }

    pub fn config(&self) -> &DiarPipelineConfig {
        &self.config
    }

    /// Transcribe one audio file into a speaker-labeled transcript string.
    ///
    /// Missing or silent audio is not an error: no diarization turns (or
    /// none surviving the merge) yield an empty transcript. Capability
    /// failures propagate as typed errors naming the file and stage.
    pub fn diar_inference(&self, filepath: &Path) -> Result<String> {
        let file = filepath.display().to_string();

        let diarize_start = Instant::now();
        let turns = self.diarizer.diarize(filepath)?;
        if self.config.verbosity >= 1 {
            eprintln!(
                "Diarization done: {} turns in {:.1?}",
                turns.len(),
                diarize_start.elapsed()
            );
        }

        let waveform = wav::load_wav(filepath, self.config.sample_rate)?;

        let mut segments = merger::merge(
            &turns,
            self.config.min_segment_length,
            self.config.min_silence_length,
        );
        if self.config.verbosity >= 1 {
            eprintln!("Merged into {} segments", segments.len());
        }

        let transcribe_start = Instant::now();
        driver::transcribe_all(
            &mut segments,
            &waveform,
            self.transcriber.as_ref(),
            self.config.on_segment_error,
            &file,
        )?;
        if self.config.verbosity >= 1 {
            eprintln!("Transcription done in {:.1?}", transcribe_start.elapsed());
        }

        Ok(assemble(&segments, self.config.timestamp_format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diarization::{DiarizationTurn, MockDiarizer};
    use crate::error::DiarscribeError;
    use crate::stt::MockTranscriber;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write a 16kHz mono WAV with `secs` seconds of audio.
    fn write_wav(dir: &TempDir, name: &str, secs: f64) -> PathBuf {
        let path = dir.path().join(name);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..(16000.0 * secs) as usize {
            writer.write_sample((i % 100) as i16).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    fn pipeline(diarizer: MockDiarizer, transcriber: MockTranscriber) -> DiarPipeline {
        DiarPipeline::new(
            Box::new(diarizer),
            Box::new(transcriber),
            DiarPipelineConfig::default(),
        )
    }

    #[test]
    fn end_to_end_two_speakers() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "meeting.wav", 5.0);

        let diarizer = MockDiarizer::new().with_turns(vec![
            DiarizationTurn::new(0.0, 2.0, "speaker_0"),
            DiarizationTurn::new(2.5, 4.5, "speaker_1"),
        ]);
        let transcriber =
            MockTranscriber::new("mock").with_responses(&["hello everyone", "hi there"]);

        let transcript = pipeline(diarizer, transcriber)
            .diar_inference(&audio)
            .unwrap();

        assert_eq!(
            transcript,
            "[0.00 - 2.00] [speaker_0] : hello everyone\n\n\
             [2.50 - 4.50] [speaker_1] : hi there\n\n"
        );
    }

    #[test]
    fn empty_diarization_yields_empty_transcript() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "silence.wav", 1.0);

        let transcript = pipeline(MockDiarizer::new(), MockTranscriber::new("mock"))
            .diar_inference(&audio)
            .unwrap();

        assert_eq!(transcript, "");
    }

    #[test]
    fn diarization_failure_propagates_with_stage() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "meeting.wav", 1.0);

        let result = pipeline(
            MockDiarizer::new().with_failure(),
            MockTranscriber::new("mock"),
        )
        .diar_inference(&audio);

        let err = result.unwrap_err();
        assert_eq!(err.stage(), Some(crate::error::PipelineStage::Diarization));
    }

    #[test]
    fn transcription_failure_aborts_by_default() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "meeting.wav", 3.0);

        let diarizer =
            MockDiarizer::new().with_turns(vec![DiarizationTurn::new(0.0, 2.0, "speaker_0")]);

        let result = pipeline(diarizer, MockTranscriber::new("mock").with_failure())
            .diar_inference(&audio);

        match result {
            Err(DiarscribeError::Transcription { file, .. }) => {
                assert!(file.contains("meeting.wav"));
            }
            _ => panic!("Expected Transcription error"),
        }
    }

    #[test]
    fn transcription_failure_placeholder_policy_yields_full_transcript() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "meeting.wav", 3.0);

        let diarizer =
            MockDiarizer::new().with_turns(vec![DiarizationTurn::new(0.0, 2.0, "speaker_0")]);
        let config = DiarPipelineConfig {
            on_segment_error: SegmentErrorPolicy::Placeholder,
            ..Default::default()
        };

        let transcript = DiarPipeline::new(
            Box::new(diarizer),
            Box::new(MockTranscriber::new("mock").with_failure()),
            config,
        )
        .diar_inference(&audio)
        .unwrap();

        assert!(transcript.contains(defaults::TRANSCRIPTION_FAILURE_MARKER));
    }

    #[test]
    fn missing_audio_file_is_an_audio_load_error() {
        let diarizer =
            MockDiarizer::new().with_turns(vec![DiarizationTurn::new(0.0, 2.0, "speaker_0")]);

        let result = pipeline(diarizer, MockTranscriber::new("mock"))
            .diar_inference(Path::new("/nonexistent/audio.wav"));

        let err = result.unwrap_err();
        assert_eq!(err.stage(), Some(crate::error::PipelineStage::AudioLoad));
    }

    #[test]
    fn sub_minimum_turns_are_dropped_from_transcript() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "meeting.wav", 5.0);

        let diarizer = MockDiarizer::new().with_turns(vec![
            DiarizationTurn::new(0.0, 2.0, "speaker_0"),
            DiarizationTurn::new(2.1, 2.3, "speaker_1"), // below 0.5s minimum
        ]);
        let transcriber = MockTranscriber::new("mock").with_responses(&["kept", "dropped"]);

        let transcript = pipeline(diarizer, transcriber)
            .diar_inference(&audio)
            .unwrap();

        assert!(transcript.contains("kept"));
        assert!(!transcript.contains("dropped"));
        assert!(!transcript.contains("speaker_1"));
    }

    #[test]
    fn hour_minute_second_format_flows_through() {
        let dir = TempDir::new().unwrap();
        let audio = write_wav(&dir, "meeting.wav", 2.0);

        let diarizer =
            MockDiarizer::new().with_turns(vec![DiarizationTurn::new(0.0, 1.5, "speaker_0")]);
        let config = DiarPipelineConfig {
            timestamp_format: TimestampFormat::HourMinuteSecond,
            ..Default::default()
        };

        let transcript = DiarPipeline::new(
            Box::new(diarizer),
            Box::new(MockTranscriber::new("mock").with_response("short")),
            config,
        )
        .diar_inference(&audio)
        .unwrap();

        assert_eq!(transcript, "[00:00:00 - 00:00:01] [speaker_0] : short\n\n");
    }
}
