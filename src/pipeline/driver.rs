//! Sequential per-segment transcription.

use crate::audio::{Waveform, slicer};
use crate::config::SegmentErrorPolicy;
use crate::defaults;
use crate::error::{DiarscribeError, Result};
use crate::segment::Segment;
use crate::stt::Transcriber;

/// Transcribe every segment in chronological order, storing the returned
/// text into the segment.
///
/// Strictly sequential: a later segment's transcription never starts before
/// an earlier one's has finished, which keeps the output deterministic.
/// Segments keep their order; only `text` changes.
///
/// A single segment's failure is handled per `policy`: `Abort` stops the
/// file with a typed error naming it, `Placeholder` writes a failure marker
/// into the segment and continues.
pub fn transcribe_all(
    segments: &mut [Segment],
    waveform: &Waveform,
    transcriber: &dyn Transcriber,
    policy: SegmentErrorPolicy,
    file: &str,
) -> Result<()> {
    for segment in segments.iter_mut() {
        let audio = slicer::slice(waveform, segment.start, segment.end);

        match transcriber.transcribe(audio, waveform.sample_rate) {
            Ok(text) => segment.text = text,
            Err(e) => match policy {
                SegmentErrorPolicy::Abort => {
                    return Err(DiarscribeError::Transcription {
                        file: file.to_string(),
                        message: format!(
                            "segment {:.3}-{:.3} [{}]: {}",
                            segment.start, segment.end, segment.speaker, e
                        ),
                    });
                }
                SegmentErrorPolicy::Placeholder => {
                    segment.text = defaults::TRANSCRIPTION_FAILURE_MARKER.to_string();
                }
            },
        }
    }

    Ok(())
}
