//! Top-level sheet generation.
//!
//! Ties the pipeline together: probe → resolve thumbnail dimensions →
//! extract frames → compose → encode → write. Every stage fails fast; no
//! output is produced unless the whole pipeline succeeds.

use crate::compose::{SheetLayout, compose_sheet, encode_jpeg, write_output};
use crate::config::SheetOptions;
use crate::error::FramesheetError;
use crate::extract::extract_frames;
use crate::metadata::VideoMetadata;
use crate::probe::VideoProbe;

/// Generate a contact sheet for the configured input.
///
/// Probes the video with ffprobe, then runs the full pipeline and writes the
/// encoded sheet to the configured output target. Blocks until the output is
/// fully written or an error occurs.
///
/// # Errors
///
/// Any stage's error propagates unchanged; see
/// [`FramesheetError`] for the taxonomy.
///
/// # Example
///
/// ```no_run
/// use framesheet::SheetOptions;
///
/// let options = SheetOptions::new("input.mp4").with_grid(4, 4);
/// framesheet::generate(&options)?;
/// # Ok::<(), framesheet::FramesheetError>(())
/// ```
pub fn generate(options: &SheetOptions) -> Result<(), FramesheetError> {
    let metadata = VideoProbe::probe(&options.input, &options.ffprobe_path)?;
    generate_with_metadata(options, &metadata)
}

/// Generate a contact sheet from an already-probed [`VideoMetadata`] record.
///
/// Useful when metadata was obtained elsewhere (e.g. a batch prober) and a
/// second ffprobe invocation would be wasted.
///
/// # Errors
///
/// Same as [`generate`], minus the probe stage.
pub fn generate_with_metadata(
    options: &SheetOptions,
    metadata: &VideoMetadata,
) -> Result<(), FramesheetError> {
    let (thumb_width, thumb_height) = resolve_thumb_dimensions(options, metadata)?;
    log::debug!(
        "Generating {}x{} sheet with {}x{} thumbnails",
        options.columns,
        options.rows,
        thumb_width,
        thumb_height,
    );

    let (frames, timestamps) = extract_frames(metadata, options, thumb_width, thumb_height)?;

    let layout = SheetLayout::new(options, thumb_width, thumb_height);
    let canvas = compose_sheet(&frames, &timestamps, metadata, options, &layout)?;
    let bytes = encode_jpeg(&canvas, options.jpeg_quality)?;
    write_output(&bytes, &options.output)
}

/// Resolve the thumbnail dimensions, deriving the height from the video's
/// aspect ratio when not configured explicitly.
fn resolve_thumb_dimensions(
    options: &SheetOptions,
    metadata: &VideoMetadata,
) -> Result<(u32, u32), FramesheetError> {
    let width = options.thumb_width;
    let height = match options.thumb_height {
        Some(height) if height > 0 => height,
        _ => {
            if metadata.height == 0 {
                return Err(FramesheetError::InvalidInput(
                    "video height is 0, cannot auto-calculate thumbnail height".to_string(),
                ));
            }
            let aspect = metadata.width as f64 / metadata.height as f64;
            (width as f64 / aspect) as u32
        }
    };
    Ok((width, height))
}
