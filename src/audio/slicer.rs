//! Time-bounded slicing of a loaded waveform.

use crate::audio::Waveform;

/// Extract the sample range corresponding to `[start, end)` seconds.
///
/// Time bounds are converted to sample indices via `floor(t * sample_rate)`
/// and clamped to the buffer. Out-of-range or inverted bounds never panic:
/// if `start >= end` after clamping, the returned slice is empty. No length
/// validation happens here; the transcriber decides what to do with an
/// empty slice.
pub fn slice(waveform: &Waveform, start: f64, end: f64) -> &[i16] {
    let len = waveform.samples.len();
    let start_idx = time_to_index(start, waveform.sample_rate, len);
    let end_idx = time_to_index(end, waveform.sample_rate, len);

    if start_idx >= end_idx {
        return &[];
    }

    &waveform.samples[start_idx..end_idx]
}

fn time_to_index(t: f64, sample_rate: u32, len: usize) -> usize {
    let idx = (t * sample_rate as f64).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(len)
    }
}
