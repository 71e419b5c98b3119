//! Assembling per-segment lines into the final transcript.

use crate::segment::Segment;
use crate::transcript::timestamp::TimestampFormat;

/// Render one transcript line per segment, in segment order.
///
/// Line shape: `[<start> - <end>] [<speaker>] : <text>` followed by a blank
/// line. An empty segment list yields an empty string.
pub fn assemble(segments: &[Segment], format: TimestampFormat) -> String {
    let mut transcript = String::new();

    for segment in segments {
        let (start, end) = format.format_pair(segment.start, segment.end);
        transcript.push_str(&format!(
            "[{} - {}] [{}] : {}\n\n",
            start, end, segment.speaker, segment.text
        ));
    }

    transcript
}
