//! Sample-instant planning and frame-rate resolution.
//!
//! Pure helpers shared by the extractor and the compositor: computing the
//! evenly-spaced sample timestamps, resolving a rational frame-rate string,
//! and formatting seconds as `HH:MM:SS` timecodes.

use crate::error::FramesheetError;

/// Frame rate assumed when the container reports none, or reports something
/// unparsable. The rate is only used to map relative timestamps to
/// approximate frame numbers for sampling, so a lenient fallback beats a
/// hard error.
pub const DEFAULT_FRAME_RATE: f64 = 25.0;

/// Fraction of the duration excluded at each end of the video before
/// sampling. Skipping the boundaries avoids slates, studio logos, and
/// fade-to-black frames common at clip edges.
const EDGE_SKIP: f64 = 0.05;

/// Compute `num_frames` evenly-spaced sample timestamps.
///
/// Timestamps are confined to the interior 90% of the video: the first one
/// lands at `duration * 0.05` and subsequent ones advance by
/// `duration * 0.9 / num_frames`, so every instant lies in
/// `[duration * 0.05, duration * 0.95)`.
///
/// # Errors
///
/// Returns [`FramesheetError::InvalidInput`] when `duration` is not positive
/// or `num_frames` is zero.
///
/// # Example
///
/// ```
/// let timestamps = framesheet::sample_timestamps(100.0, 10)?;
/// assert_eq!(timestamps.len(), 10);
/// assert_eq!(timestamps[0], 5.0);
/// # Ok::<(), framesheet::FramesheetError>(())
/// ```
pub fn sample_timestamps(duration: f64, num_frames: usize) -> Result<Vec<f64>, FramesheetError> {
    if duration <= 0.0 {
        return Err(FramesheetError::InvalidInput(format!(
            "video duration must be positive, got {duration}"
        )));
    }
    if num_frames == 0 {
        return Err(FramesheetError::InvalidInput(
            "number of frames must be positive".to_string(),
        ));
    }

    let start = duration * EDGE_SKIP;
    let interval = duration * (1.0 - 2.0 * EDGE_SKIP) / num_frames as f64;

    Ok((0..num_frames)
        .map(|index| start + index as f64 * interval)
        .collect())
}

/// Interval between sample timestamps for the given duration and count.
///
/// Shared between the planner and the ffmpeg select-filter builder so both
/// agree on frame spacing.
pub(crate) fn sample_interval(duration: f64, num_frames: usize) -> f64 {
    duration * (1.0 - 2.0 * EDGE_SKIP) / num_frames as f64
}

/// Offset of the first sample timestamp from the start of the video.
pub(crate) fn sample_start(duration: f64) -> f64 {
    duration * EDGE_SKIP
}

/// Resolve a rational frame-rate string of the form `"num/den"` to a float.
///
/// Empty, malformed, and zero-denominator inputs all fall back to
/// [`DEFAULT_FRAME_RATE`] rather than erroring.
///
/// # Example
///
/// ```
/// assert!((framesheet::parse_frame_rate("30000/1001") - 29.97).abs() < 0.01);
/// assert_eq!(framesheet::parse_frame_rate(""), 25.0);
/// assert_eq!(framesheet::parse_frame_rate("30/0"), 25.0);
/// ```
pub fn parse_frame_rate(rate: &str) -> f64 {
    let Some((numerator, denominator)) = rate.split_once('/') else {
        return DEFAULT_FRAME_RATE;
    };
    match (numerator.parse::<f64>(), denominator.parse::<f64>()) {
        (Ok(num), Ok(den)) if den != 0.0 => num / den,
        _ => DEFAULT_FRAME_RATE,
    }
}

/// Format a duration in seconds as an `HH:MM:SS` timecode.
///
/// Rounds to the nearest whole second. Used for the per-frame overlays and
/// the header metadata line.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
