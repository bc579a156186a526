//! Font loading and text drawing.
//!
//! [`SheetFont`] wraps a `fontdue` TrueType font and draws anchored,
//! optionally drop-shadowed strings directly onto an RGB canvas. Glyph
//! coverage is alpha-blended over the existing pixels.
//!
//! The drop shadow is a fixed two-pass draw, not a blur: the same string is
//! rendered once in the shadow color at a small pixel offset, then again in
//! the fill color on top.

use std::path::Path;

use fontdue::{Font, FontSettings};
use image::{Rgba, RgbImage};

use crate::error::FramesheetError;

/// A loaded TrueType font plus drawing helpers.
pub struct SheetFont {
    font: Font,
}

impl SheetFont {
    /// Load a font from a `.ttf`/`.otf` file.
    ///
    /// # Errors
    ///
    /// Returns [`FramesheetError::FontLoad`] when the file cannot be read or
    /// parsed as a font.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FramesheetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|error| FramesheetError::FontLoad {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            FramesheetError::FontLoad {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            }
        })?;
        Ok(Self { font })
    }

    /// Measure a string at the given pixel size.
    ///
    /// Returns `(width, height)` of the tight bounding box: the sum of glyph
    /// advances and the maximum ascent plus descent across the string.
    pub fn measure(&self, text: &str, px: f32) -> (f32, f32) {
        let mut width = 0.0_f32;
        let mut max_ascent = 0_i32;
        let mut max_descent = 0_i32;

        for ch in text.chars() {
            let metrics = self.font.metrics(ch, px);
            let ascent = metrics.height as i32 + metrics.ymin;
            let descent = -metrics.ymin;
            max_ascent = max_ascent.max(ascent);
            max_descent = max_descent.max(descent);
            width += metrics.advance_width;
        }

        (width, (max_ascent + max_descent).max(0) as f32)
    }

    /// Draw a string anchored at `(x, y)`.
    ///
    /// `anchor` is the fraction of the text's bounding box placed left/above
    /// the anchor point: `(0.0, 0.0)` puts the top-left corner at `(x, y)`,
    /// `(0.5, 0.5)` centers the string on it, `(0.0, 1.0)` anchors the
    /// bottom-left corner.
    pub fn draw_anchored(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        px: f32,
        color: Rgba<u8>,
        x: f32,
        y: f32,
        anchor: (f32, f32),
    ) {
        let (text_width, text_height) = self.measure(text, px);
        let origin_x = x - text_width * anchor.0;
        let origin_y = y - text_height * anchor.1;

        // Baseline sits max_ascent below the top of the bounding box.
        let mut max_ascent = 0_i32;
        for ch in text.chars() {
            let metrics = self.font.metrics(ch, px);
            max_ascent = max_ascent.max(metrics.height as i32 + metrics.ymin);
        }
        let baseline = origin_y.round() as i32 + max_ascent;

        let mut cursor = origin_x;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, px);
            let glyph_x = cursor.round() as i32 + metrics.xmin;
            let glyph_y = baseline - (metrics.height as i32 + metrics.ymin);

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    if coverage == 0 {
                        continue;
                    }
                    let px_x = glyph_x + col as i32;
                    let px_y = glyph_y + row as i32;
                    if px_x < 0
                        || px_y < 0
                        || px_x >= canvas.width() as i32
                        || px_y >= canvas.height() as i32
                    {
                        continue;
                    }
                    blend_pixel(canvas, px_x as u32, px_y as u32, color, coverage);
                }
            }

            cursor += metrics.advance_width;
        }
    }

    /// Draw a string with a drop shadow: shadow color first at
    /// `(x + offset, y + offset)`, then the fill color at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_shadowed(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        px: f32,
        color: Rgba<u8>,
        shadow: Rgba<u8>,
        offset: f32,
        x: f32,
        y: f32,
        anchor: (f32, f32),
    ) {
        self.draw_anchored(canvas, text, px, shadow, x + offset, y + offset, anchor);
        self.draw_anchored(canvas, text, px, color, x, y, anchor);
    }
}

/// Blend `color` over the canvas pixel using glyph coverage as alpha.
fn blend_pixel(canvas: &mut RgbImage, x: u32, y: u32, color: Rgba<u8>, coverage: u8) {
    let alpha = coverage as f32 / 255.0 * (color.0[3] as f32 / 255.0);
    let pixel = canvas.get_pixel_mut(x, y);
    for channel in 0..3 {
        let existing = pixel.0[channel] as f32;
        let incoming = color.0[channel] as f32;
        pixel.0[channel] = (existing * (1.0 - alpha) + incoming * alpha).round() as u8;
    }
}
