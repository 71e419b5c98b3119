//! Merging raw diarization turns into clean speech segments.
//!
//! The merge walks the turn sequence once, threading explicit accumulator
//! state (last retained speaker and end time) instead of mutable globals:
//!
//! - turns shorter than `min_segment_length` are dropped outright and stay
//!   invisible to the merge (they neither create nor extend a segment, and
//!   do not update the accumulator),
//! - consecutive turns of the same speaker merge into one segment unless
//!   the silence gap between them exceeds `min_silence_length`,
//! - a speaker change always starts a new segment.
//!
//! All times are rounded to millisecond precision before comparison so
//! floating-point jitter cannot produce spurious segment boundaries.

use crate::diarization::DiarizationTurn;
use crate::segment::Segment;

/// Merge state threaded through the fold over the turn sequence.
struct MergeState {
    segments: Vec<Segment>,
    prev_speaker: Option<String>,
    prev_end: f64,
}

/// Merge an ordered turn sequence into a chronological segment list.
///
/// Every returned segment satisfies `start < end` and
/// `duration >= min_segment_length`. An empty turn sequence yields an
/// empty list.
pub fn merge(
    turns: &[DiarizationTurn],
    min_segment_length: f64,
    min_silence_length: f64,
) -> Vec<Segment> {
    let mut state = MergeState {
        segments: Vec::new(),
        prev_speaker: None,
        prev_end: 0.0,
    };

    for turn in turns {
        let start = round_ms(turn.start);
        let end = round_ms(turn.end);

        // Sub-minimum turns are invisible: they do not update the
        // accumulator either, so they cannot split a surrounding merge.
        if end - start < min_segment_length {
            continue;
        }

        let same_speaker = state.prev_speaker.as_deref() == Some(turn.speaker.as_str());

        if same_speaker && start - state.prev_end <= min_silence_length {
            // same_speaker implies at least one retained segment exists
            if let Some(last) = state.segments.last_mut() {
                last.end = end;
            }
        } else {
            state
                .segments
                .push(Segment::new(start, end, turn.speaker.clone()));
        }

        state.prev_speaker = Some(turn.speaker.clone());
        state.prev_end = end;
    }

    state.segments
}

/// Round a time to millisecond precision (3 decimal places).
fn round_ms(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}
