//! Error types for the `framesheet` crate.
//!
//! This module defines [`FramesheetError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry rich context to aid
//! debugging, including file paths, frame indices, and the captured stderr of
//! external tool invocations.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framesheet` operations.
///
/// Every public method that can fail returns `Result<T, FramesheetError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site. There is no retry logic anywhere in
/// the pipeline: the first error a stage produces is propagated upward and
/// the whole operation fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramesheetError {
    /// The media file could not be probed for metadata.
    #[error("Failed to probe media file at {path}: {reason}")]
    Probe {
        /// Path that was passed to [`crate::VideoProbe::probe`].
        path: PathBuf,
        /// Underlying reason the probe failed (spawn error, non-zero exit,
        /// unparsable JSON, or missing video stream).
        reason: String,
    },

    /// An external tool (`ffmpeg` or `ffprobe`) could not be run, or exited
    /// with a non-zero status.
    #[error("Failed to run {tool}: {reason}")]
    ToolInvocation {
        /// Name or path of the tool that failed.
        tool: String,
        /// Spawn error or the tool's captured stderr.
        reason: String,
    },

    /// An input parameter was out of its valid domain (non-positive duration,
    /// zero frame count, zero video height preventing auto thumbnail height).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A color token was neither a known name nor a 6-digit hex string.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The captured frame stream contained fewer complete images than were
    /// requested from the decoder process.
    #[error(
        "Frame stream ended early: recovered {found} of {expected} frames; ffmpeg reported:\n{stderr}"
    )]
    IncompleteStream {
        /// Number of complete images recovered from the stream.
        found: usize,
        /// Number of images that were requested.
        expected: usize,
        /// Diagnostic output captured from the producing process.
        stderr: String,
    },

    /// A specific demuxed slice failed to decode as a JPEG image.
    #[error("Failed to decode frame {index}: {reason}")]
    DecodeFailure {
        /// Index of the frame slice that failed, in stream order.
        index: usize,
        /// Decoder error message.
        reason: String,
    },

    /// A font file could not be loaded or parsed.
    #[error("Failed to load font at {path}: {reason}")]
    FontLoad {
        /// Path to the font file.
        path: PathBuf,
        /// Parser error message.
        reason: String,
    },

    /// The final sheet raster could not be serialized or written.
    #[error("Failed to encode output image: {0}")]
    Encode(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate during decode or compositing.
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}
