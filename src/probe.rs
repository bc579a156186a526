//! Lightweight video file probing.
//!
//! [`VideoProbe`] shells out to `ffprobe` once, captures its JSON output, and
//! parses it into a [`VideoMetadata`] record. The process runs to completion
//! before parsing begins; nothing is streamed.
//!
//! The probe is the only metadata source in the pipeline; the frame
//! extractor and the compositor both consume the record it returns.

use std::path::Path;
use std::process::Command;

use crate::error::FramesheetError;
use crate::metadata::VideoMetadata;

/// Lightweight video file probe.
///
/// Runs `ffprobe` as a subprocess and parses its JSON report. The resulting
/// [`VideoMetadata`] is owned and fully independent of any file handle.
///
/// # Example
///
/// ```no_run
/// use framesheet::VideoProbe;
///
/// let metadata = VideoProbe::probe("input.mp4", "ffprobe")?;
/// println!(
///     "{}x{} @ {} ({:.1}s)",
///     metadata.width, metadata.height, metadata.avg_frame_rate, metadata.duration
/// );
/// # Ok::<(), framesheet::FramesheetError>(())
/// ```
pub struct VideoProbe;

impl VideoProbe {
    /// Probe a video file and return its metadata.
    ///
    /// `ffprobe_path` is the executable to invoke, usually just `"ffprobe"`
    /// resolved through the `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`FramesheetError::ToolInvocation`] if ffprobe cannot be
    /// spawned, and [`FramesheetError::Probe`] if it exits with a non-zero
    /// status, emits unparsable JSON, or reports no usable video stream. The
    /// captured stderr is included in the error message.
    pub fn probe<P: AsRef<Path>>(
        path: P,
        ffprobe_path: impl AsRef<Path>,
    ) -> Result<VideoMetadata, FramesheetError> {
        let path = path.as_ref();
        let ffprobe = ffprobe_path.as_ref();

        log::debug!("Probing {} with {}", path.display(), ffprobe.display());

        let output = Command::new(ffprobe)
            .arg("-v")
            .arg("quiet")
            .arg("-print_format")
            .arg("json")
            .arg("-show_format")
            .arg("-show_streams")
            .arg(path)
            .output()
            .map_err(|error| FramesheetError::ToolInvocation {
                tool: ffprobe.display().to_string(),
                reason: error.to_string(),
            })?;

        if !output.status.success() {
            return Err(FramesheetError::Probe {
                path: path.to_path_buf(),
                reason: format!(
                    "ffprobe exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let json = String::from_utf8_lossy(&output.stdout);
        VideoMetadata::from_ffprobe_json(&json, path)
    }
}
