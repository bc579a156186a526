//! Video metadata types and ffprobe JSON parsing.
//!
//! [`VideoMetadata`] is the read-only input record for the whole pipeline.
//! It is extracted once per invocation by [`VideoProbe`](crate::VideoProbe)
//! and never mutated afterwards.
//!
//! Numeric container fields (`duration`, `size`) arrive from ffprobe as
//! strings and frequently fail to parse for exotic containers. Parse failures
//! degrade to zero rather than erroring; the only hard invariant is that the
//! video stream reports positive dimensions.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::FramesheetError;

/// Essential metadata for a video file.
///
/// Produced by [`VideoProbe::probe`](crate::VideoProbe::probe) or by
/// [`VideoMetadata::from_ffprobe_json`] when ffprobe output is already at
/// hand. Fields mirror ffprobe's `format` and first-stream records.
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Source path, as reported by the container.
    pub path: PathBuf,
    /// Total duration in seconds. Zero when the container does not report it.
    pub duration: f64,
    /// Frame width in pixels. Always positive.
    pub width: u32,
    /// Frame height in pixels. Always positive.
    pub height: u32,
    /// File size in bytes. Zero when unknown.
    pub file_size: u64,
    /// Video codec short name (e.g. `"h264"`).
    pub video_codec: String,
    /// Audio codec short name of the first audio stream, if any.
    pub audio_codec: Option<String>,
    /// Overall bit rate as reported by ffprobe. Kept as a raw string because
    /// it may be absent or non-numeric; consumers render `"N/A"` on parse
    /// failure instead of crashing.
    pub bit_rate: String,
    /// Average frame rate as a rational string (e.g. `"30000/1001"`).
    pub avg_frame_rate: String,
}

/// Top-level shape of `ffprobe -print_format json` output.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    format: ProbeFormat,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    codec_type: String,
    #[serde(default)]
    codec_name: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    avg_frame_rate: String,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    filename: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    size: String,
    #[serde(default)]
    bit_rate: String,
}

impl VideoMetadata {
    /// Parse ffprobe JSON output into a [`VideoMetadata`] record.
    ///
    /// The first video stream and the first audio stream win; additional
    /// streams are ignored. Unparsable `duration`/`size` fields degrade to
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`FramesheetError::Probe`] if the JSON is malformed or the
    /// video stream reports zero width or height; downstream layout math
    /// cannot work without real dimensions.
    pub fn from_ffprobe_json(json: &str, path: &std::path::Path) -> Result<Self, FramesheetError> {
        let probe: ProbeOutput =
            serde_json::from_str(json).map_err(|error| FramesheetError::Probe {
                path: path.to_path_buf(),
                reason: format!("unparsable ffprobe JSON: {error}"),
            })?;

        let mut metadata = VideoMetadata {
            path: if probe.format.filename.is_empty() {
                path.to_path_buf()
            } else {
                PathBuf::from(&probe.format.filename)
            },
            duration: probe.format.duration.parse().unwrap_or(0.0),
            width: 0,
            height: 0,
            file_size: probe.format.size.parse().unwrap_or(0),
            video_codec: String::new(),
            audio_codec: None,
            bit_rate: probe.format.bit_rate,
            avg_frame_rate: String::new(),
        };

        for stream in &probe.streams {
            match stream.codec_type.as_str() {
                "video" if metadata.video_codec.is_empty() => {
                    metadata.width = stream.width;
                    metadata.height = stream.height;
                    metadata.video_codec = stream.codec_name.clone();
                    metadata.avg_frame_rate = stream.avg_frame_rate.clone();
                }
                "audio" if metadata.audio_codec.is_none() => {
                    metadata.audio_codec = Some(stream.codec_name.clone());
                }
                _ => {}
            }
        }

        if metadata.width == 0 || metadata.height == 0 {
            return Err(FramesheetError::Probe {
                path: path.to_path_buf(),
                reason: "could not determine video dimensions from ffprobe output".to_string(),
            });
        }

        Ok(metadata)
    }
}
