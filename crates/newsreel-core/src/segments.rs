//! Slide segment planning: divide the video duration into per-item time
//! windows, cycling through items when slides outnumber them.

use crate::{
    error::{NewsreelError, Result},
    types::{MAX_SECONDS_PER_SLIDE, MIN_SECONDS_PER_SLIDE, Segment},
};

/// Plan the timed slide segments for a run.
///
/// Every item gets at least one slide and the whole duration is covered:
/// `segment_count = max(items_len, ceil(total / seconds_per_slide))`.
/// Segments are contiguous starting at 0; the final one is clipped to
/// `total_seconds`. Items are reused cyclically via modulo indexing.
pub fn plan(items_len: usize, seconds_per_slide: f64, total_seconds: f64) -> Result<Vec<Segment>> {
    if items_len == 0 {
        return Err(NewsreelError::InvalidInput(
            "cannot plan segments for an empty item list".to_string(),
        ));
    }
    if !(MIN_SECONDS_PER_SLIDE..=MAX_SECONDS_PER_SLIDE).contains(&seconds_per_slide) {
        return Err(NewsreelError::InvalidInput(format!(
            "seconds per slide must be within [{MIN_SECONDS_PER_SLIDE}, {MAX_SECONDS_PER_SLIDE}], got {seconds_per_slide}"
        )));
    }
    if total_seconds <= 0.0 || !total_seconds.is_finite() {
        return Err(NewsreelError::InvalidInput(format!(
            "total duration must be positive and finite, got {total_seconds}"
        )));
    }

    let by_duration = (total_seconds / seconds_per_slide).ceil() as usize;
    let segment_count = items_len.max(by_duration);

    let mut segments = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        // Both bounds clamp to the total so slides past the end of the
        // video collapse to zero width instead of inverting.
        let start = (i as f64 * seconds_per_slide).min(total_seconds);
        let end = (start + seconds_per_slide).min(total_seconds);
        segments.push(Segment {
            item_index: i % items_len,
            start,
            end,
            index: i,
        });
    }

    Ok(segments)
}
