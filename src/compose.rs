//! Grid layout and sheet compositing.
//!
//! [`SheetLayout`] turns grid geometry into canvas dimensions and per-cell
//! origins; [`compose_sheet`] paints the background, thumbnails, borders, and
//! text onto a single RGB canvas; [`encode_jpeg`] and [`write_output`] turn
//! the canvas into bytes on disk or stdout.
//!
//! Text is rendered only when a font file is configured. A missing font is a
//! valid "render no text" configuration, not an error.

use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgba, RgbImage, imageops};

use crate::color::parse_color;
use crate::config::{OutputTarget, SheetOptions};
use crate::error::FramesheetError;
use crate::metadata::VideoMetadata;
use crate::text::SheetFont;
use crate::timeline::format_timecode;

/// Maximum title size in pixels; the shrink-to-fit loop starts here.
const TITLE_MAX_PX: f32 = 40.0;
/// Title size floor. The loop never shrinks below this, even for absurdly
/// long filenames.
const TITLE_MIN_PX: f32 = 10.0;
/// Title shrink step per iteration.
const TITLE_STEP_PX: f32 = 2.0;
/// The title must fit within this fraction of the canvas width.
const TITLE_WIDTH_FRACTION: f32 = 0.9;
/// Metadata line size in pixels.
const META_PX: f32 = 20.0;
/// Per-frame timestamp overlay size in pixels.
const OVERLAY_PX: f32 = 18.0;

/// Computed sheet geometry.
///
/// All placement math lives here so the compositor and the tests agree on
/// where every cell lands.
///
/// # Example
///
/// ```
/// use framesheet::{SheetLayout, SheetOptions};
///
/// let options = SheetOptions::new("input.mp4").with_grid(4, 2);
/// let layout = SheetLayout::new(&options, 640, 360);
/// assert_eq!(layout.total_width(), 4 * 640 + 3 * 5 + 2 * 20);
/// assert_eq!(layout.cell_origin(5), (20 + 645, 150 + 20 + 365));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Thumbnail width in pixels.
    pub thumb_width: u32,
    /// Thumbnail height in pixels (already resolved; never auto here).
    pub thumb_height: u32,
    /// Padding between cells.
    pub padding: u32,
    /// Margin around the grid.
    pub margin: u32,
    /// Header section height.
    pub header_height: u32,
}

impl SheetLayout {
    /// Build a layout from options and resolved thumbnail dimensions.
    pub fn new(options: &SheetOptions, thumb_width: u32, thumb_height: u32) -> Self {
        Self {
            columns: options.columns,
            rows: options.rows,
            thumb_width,
            thumb_height,
            padding: options.padding,
            margin: options.margin,
            header_height: options.header_height,
        }
    }

    /// Width of the thumbnail grid alone.
    pub fn grid_width(&self) -> u32 {
        self.columns * self.thumb_width + self.columns.saturating_sub(1) * self.padding
    }

    /// Height of the thumbnail grid alone.
    pub fn grid_height(&self) -> u32 {
        self.rows * self.thumb_height + self.rows.saturating_sub(1) * self.padding
    }

    /// Total canvas width including margins.
    pub fn total_width(&self) -> u32 {
        self.grid_width() + 2 * self.margin
    }

    /// Total canvas height including margins and the header.
    pub fn total_height(&self) -> u32 {
        self.grid_height() + 2 * self.margin + self.header_height
    }

    /// Top-left corner of the cell holding frame `index`, in row-major order.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let row = index as u32 / self.columns;
        let col = index as u32 % self.columns;
        let x = self.margin + col * (self.thumb_width + self.padding);
        let y = self.header_height + self.margin + row * (self.thumb_height + self.padding);
        (x, y)
    }

    /// Anchor point of the timecode overlay inside the cell holding frame
    /// `index`: 10 px in from the cell's left edge, 15 px up from its bottom.
    ///
    /// Computed in floats so thumbnails shorter than 15 px push the anchor
    /// above the cell instead of underflowing; glyph drawing clips per pixel,
    /// so an off-canvas anchor simply draws nothing.
    pub fn overlay_origin(&self, index: usize) -> (f32, f32) {
        let (x, y) = self.cell_origin(index);
        ((x + 10) as f32, (y + self.thumb_height) as f32 - 15.0)
    }
}

/// Convert ffmpeg's 1–31 quality scale (lower is better) to the encoder's
/// 1–100 scale (higher is better).
///
/// # Example
///
/// ```
/// assert_eq!(framesheet::jpeg_output_quality(1), 100);
/// assert_eq!(framesheet::jpeg_output_quality(2), 97);
/// assert_eq!(framesheet::jpeg_output_quality(31), 1);
/// ```
pub fn jpeg_output_quality(quality31: u8) -> u8 {
    (100 - (quality31 as i32 - 1) * 3).clamp(1, 100) as u8
}

/// Format the two header metadata lines.
///
/// Line one is `WxH | F.FF FPS | B.BB Mbps`; line two is
/// `HH:MM:SS | S.SS MB | VCODEC / ACODEC`. Unparsable frame-rate and
/// bit-rate fields render as `N/A` instead of failing.
pub fn metadata_lines(metadata: &VideoMetadata) -> (String, String) {
    let fps = match metadata.avg_frame_rate.split_once('/') {
        Some((num, den)) => match (num.parse::<f64>(), den.parse::<f64>()) {
            (Ok(num), Ok(den)) if den != 0.0 => format!("{:.2} FPS", num / den),
            _ => "N/A FPS".to_string(),
        },
        None => "N/A FPS".to_string(),
    };
    let bitrate = match metadata.bit_rate.parse::<f64>() {
        Ok(bits_per_second) => format!("{:.2} Mbps", bits_per_second / 1_000_000.0),
        Err(_) => "N/A Mbps".to_string(),
    };
    let line1 = format!("{}x{} | {} | {}", metadata.width, metadata.height, fps, bitrate);

    let size = format!("{:.2} MB", metadata.file_size as f64 / (1024.0 * 1024.0));
    let codecs = match &metadata.audio_codec {
        Some(audio) => format!(
            "{} / {}",
            metadata.video_codec.to_uppercase(),
            audio.to_uppercase()
        ),
        None => metadata.video_codec.to_uppercase(),
    };
    let line2 = format!(
        "{} | {} | {}",
        format_timecode(metadata.duration),
        size,
        codecs
    );

    (line1, line2)
}

/// Composite decoded frames, timestamps, and metadata into the final sheet.
///
/// `frames` and `timestamps` must have the same length and are placed in
/// row-major order. Frames beyond the grid capacity are ignored.
///
/// # Errors
///
/// Returns [`FramesheetError::InvalidColor`] for unparsable color tokens and
/// [`FramesheetError::FontLoad`] when a configured font file is unusable.
pub fn compose_sheet(
    frames: &[RgbImage],
    timestamps: &[f64],
    metadata: &VideoMetadata,
    options: &SheetOptions,
    layout: &SheetLayout,
) -> Result<RgbImage, FramesheetError> {
    let background = parse_color(&options.background_color)?;
    let border = parse_color(&options.border_color)?;
    let font_color = parse_color(&options.font_color)?;
    let shadow_color = parse_color(&options.shadow_color)?;

    let total_width = layout.total_width();
    let total_height = layout.total_height();

    log::debug!(
        "Composing {}x{} sheet ({} frame(s), {}x{} grid)",
        total_width,
        total_height,
        frames.len(),
        layout.columns,
        layout.rows,
    );

    let mut canvas = RgbImage::from_pixel(
        total_width,
        total_height,
        image::Rgb([background.0[0], background.0[1], background.0[2]]),
    );

    let font = match &options.font_file {
        Some(path) => Some(SheetFont::load(path)?),
        None => None,
    };

    if let Some(font) = &font {
        draw_header(&mut canvas, font, metadata, font_color, shadow_color, total_width);
    }

    // Overlay colors are fixed: white text, black shadow, like the header
    // timestamps of every contact-sheet tool.
    let overlay_color = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
    let overlay_shadow = Rgba([0x00, 0x00, 0x00, 0xFF]);

    for (index, (frame, &timestamp)) in frames.iter().zip(timestamps).enumerate() {
        if index >= layout.columns as usize * layout.rows as usize {
            break;
        }
        let (x, y) = layout.cell_origin(index);

        if options.border_thickness > 0 {
            draw_border(&mut canvas, layout, x, y, options.border_thickness, border);
        }

        imageops::replace(&mut canvas, frame, x as i64, y as i64);

        if let Some(font) = &font {
            let timecode = format_timecode(timestamp);
            let (overlay_x, overlay_y) = layout.overlay_origin(index);
            font.draw_shadowed(
                &mut canvas,
                &timecode,
                OVERLAY_PX,
                overlay_color,
                overlay_shadow,
                1.0,
                overlay_x,
                overlay_y,
                (0.0, 0.0),
            );
        }
    }

    Ok(canvas)
}

/// Draw the filename title (shrink-to-fit) and the two metadata lines.
fn draw_header(
    canvas: &mut RgbImage,
    font: &SheetFont,
    metadata: &VideoMetadata,
    font_color: Rgba<u8>,
    shadow_color: Rgba<u8>,
    total_width: u32,
) {
    let filename = metadata
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| metadata.path.display().to_string());

    // Bounded shrink-to-fit: step down from the maximum size until the title
    // fits in 90% of the canvas width or the floor is reached.
    let limit = total_width as f32 * TITLE_WIDTH_FRACTION;
    let mut title_px = TITLE_MAX_PX;
    while title_px > TITLE_MIN_PX {
        let (width, _) = font.measure(&filename, title_px);
        if width < limit {
            break;
        }
        title_px -= TITLE_STEP_PX;
    }

    let center_x = total_width as f32 / 2.0;
    font.draw_shadowed(
        canvas,
        &filename,
        title_px,
        font_color,
        shadow_color,
        2.0,
        center_x,
        30.0,
        (0.5, 0.5),
    );

    // Metadata lines use a fixed lighter color rather than the title color.
    let meta_color = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
    let (line1, line2) = metadata_lines(metadata);
    font.draw_shadowed(
        canvas, &line1, META_PX, meta_color, shadow_color, 1.0, center_x, 80.0, (0.5, 0.5),
    );
    font.draw_shadowed(
        canvas, &line2, META_PX, meta_color, shadow_color, 1.0, center_x, 105.0, (0.5, 0.5),
    );
}

/// Draw a border ring around the thumbnail cell at `(x, y)`, clipped to the
/// canvas.
fn draw_border(
    canvas: &mut RgbImage,
    layout: &SheetLayout,
    x: u32,
    y: u32,
    thickness: u32,
    color: Rgba<u8>,
) {
    let left = x.saturating_sub(thickness);
    let top = y.saturating_sub(thickness);
    let right = (x + layout.thumb_width + thickness).min(canvas.width());
    let bottom = (y + layout.thumb_height + thickness).min(canvas.height());
    let rgb = image::Rgb([color.0[0], color.0[1], color.0[2]]);

    for py in top..bottom {
        for px in left..right {
            let inside = px >= x
                && px < x + layout.thumb_width
                && py >= y
                && py < y + layout.thumb_height;
            if !inside {
                canvas.put_pixel(px, py, rgb);
            }
        }
    }
}

/// Encode the sheet as JPEG bytes at the given 1–31 quality.
///
/// # Errors
///
/// Returns [`FramesheetError::Encode`] when serialization fails.
pub fn encode_jpeg(canvas: &RgbImage, quality31: u8) -> Result<Vec<u8>, FramesheetError> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_output_quality(quality31));
    canvas
        .write_with_encoder(encoder)
        .map_err(|error| FramesheetError::Encode(error.to_string()))?;
    Ok(bytes)
}

/// Write encoded bytes to the output target.
///
/// File targets are written in one call once the full encode is in memory,
/// so no partially-composed sheet is ever left behind by in-core logic.
/// The stdout target writes the bytes verbatim with no framing.
pub fn write_output(bytes: &[u8], target: &OutputTarget) -> Result<(), FramesheetError> {
    match target {
        OutputTarget::File(path) => {
            std::fs::write(path, bytes)?;
        }
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
