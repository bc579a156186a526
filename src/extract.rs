//! Frame extraction via a single ffmpeg invocation.
//!
//! Spawning one decoder process per sampled frame is wasteful; instead the
//! extractor asks ffmpeg for every frame at once. A `select` filter picks the
//! sampled frame numbers, `scale` sizes them to the thumbnail dimensions, and
//! `-f image2pipe -c:v mjpeg` concatenates the results on stdout as a bare
//! JPEG stream. The stream is then demuxed on marker bytes and decoded in
//! parallel.
//!
//! stdout is captured whole before demuxing begins; stderr is captured
//! separately and attached to any downstream error for diagnosis.

use std::process::Command;

use image::RgbImage;

use crate::config::SheetOptions;
use crate::decode::decode_frames;
use crate::demux::{MarkerDemux, StreamDemux};
use crate::error::FramesheetError;
use crate::metadata::VideoMetadata;
use crate::timeline::{parse_frame_rate, sample_interval, sample_start, sample_timestamps};

/// Build the full ffmpeg argument list for the single extraction invocation.
///
/// `-ss` is placed before `-i` for fast seeking, so the `select` filter's
/// frame numbers are relative to the seek offset: frame i maps to
/// `(i * interval) * fps` rounded down.
///
/// Exposed so callers can log or inspect the exact command; the CLI prints it
/// under `--verbose`.
pub fn build_extract_args(
    metadata: &VideoMetadata,
    options: &SheetOptions,
    thumb_width: u32,
    thumb_height: u32,
) -> Vec<String> {
    let num_frames = options.frame_count();
    let fps = parse_frame_rate(&metadata.avg_frame_rate);
    let start = sample_start(metadata.duration);
    let interval = sample_interval(metadata.duration, num_frames);

    // The comma inside eq(n,N) must be escaped for ffmpeg's filter parser.
    let select: Vec<String> = (0..num_frames)
        .map(|index| {
            let frame_number = (index as f64 * interval * fps) as i64;
            format!("eq(n\\,{frame_number})")
        })
        .collect();
    let filter = format!(
        "select='{}',scale={}:{}",
        select.join("+"),
        thumb_width,
        thumb_height
    );

    vec![
        "-ss".to_string(),
        format!("{start:.4}"),
        "-i".to_string(),
        metadata.path.display().to_string(),
        "-vf".to_string(),
        filter,
        "-vframes".to_string(),
        num_frames.to_string(),
        "-q:v".to_string(),
        options.jpeg_quality.to_string(),
        "-f".to_string(),
        "image2pipe".to_string(),
        "-c:v".to_string(),
        "mjpeg".to_string(),
        "pipe:1".to_string(),
    ]
}

/// Extract all sampled frames and their timestamps.
///
/// Runs the pipeline's first three stages: plan timestamps, invoke ffmpeg
/// once, demux the captured stream, and decode the slices in parallel.
/// `frames[i]` corresponds to `timestamps[i]`.
///
/// # Errors
///
/// * [`FramesheetError::InvalidInput`]: non-positive duration or empty grid.
/// * [`FramesheetError::ToolInvocation`]: ffmpeg failed to spawn or exited
///   with a non-zero status.
/// * [`FramesheetError::IncompleteStream`]: the stream held fewer complete
///   images than requested (truncated or malformed encoder output).
/// * [`FramesheetError::DecodeFailure`]: a slice failed to decode.
pub fn extract_frames(
    metadata: &VideoMetadata,
    options: &SheetOptions,
    thumb_width: u32,
    thumb_height: u32,
) -> Result<(Vec<RgbImage>, Vec<f64>), FramesheetError> {
    extract_frames_with(&MarkerDemux, metadata, options, thumb_width, thumb_height)
}

/// [`extract_frames`] with an explicit demuxing strategy, for transports
/// whose stream carries its own framing.
pub fn extract_frames_with<D: StreamDemux>(
    demuxer: &D,
    metadata: &VideoMetadata,
    options: &SheetOptions,
    thumb_width: u32,
    thumb_height: u32,
) -> Result<(Vec<RgbImage>, Vec<f64>), FramesheetError> {
    let num_frames = options.frame_count();
    let timestamps = sample_timestamps(metadata.duration, num_frames)?;

    let args = build_extract_args(metadata, options, thumb_width, thumb_height);
    log::debug!(
        "Invoking {} {}",
        options.ffmpeg_path.display(),
        args.join(" ")
    );

    let output = Command::new(&options.ffmpeg_path)
        .args(&args)
        .output()
        .map_err(|error| FramesheetError::ToolInvocation {
            tool: options.ffmpeg_path.display().to_string(),
            reason: error.to_string(),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if !output.status.success() {
        return Err(FramesheetError::ToolInvocation {
            tool: options.ffmpeg_path.display().to_string(),
            reason: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    let mut slices = demuxer.split(&output.stdout);
    log::debug!(
        "Demuxed {} image(s) from a {}-byte stream",
        slices.len(),
        output.stdout.len()
    );

    if slices.len() < num_frames {
        return Err(FramesheetError::IncompleteStream {
            found: slices.len(),
            expected: num_frames,
            stderr,
        });
    }
    slices.truncate(num_frames);

    let frames = decode_frames(&slices)?;
    Ok((frames, timestamps))
}
