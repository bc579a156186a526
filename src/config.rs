//! Sheet generation configuration.
//!
//! [`SheetOptions`] is a builder that carries the grid geometry, colors,
//! font, JPEG quality, external tool paths, and the output target through the
//! pipeline without polluting every function signature.
//!
//! # Example
//!
//! ```no_run
//! use framesheet::{OutputTarget, SheetOptions};
//!
//! let options = SheetOptions::new("input.mp4")
//!     .with_grid(4, 5)
//!     .with_thumb_width(640)
//!     .with_font_file("DejaVuSans.ttf")
//!     .with_output(OutputTarget::File("input_sheet.jpg".into()));
//! ```

use std::path::{Path, PathBuf};

/// Destination for the encoded sheet.
///
/// `Stdout` writes the raw JPEG bytes to the process's standard output with
/// no additional framing, for piping into other tools. The CLI maps the `-`
/// sentinel to this variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to a file at the given path.
    File(PathBuf),
    /// Write encoded bytes to standard output verbatim.
    Stdout,
}

/// Configuration for contact-sheet generation.
///
/// Defaults match the CLI: a 4×5 grid of 640-pixel-wide thumbnails with
/// auto-computed height, 5 px padding, 20 px margin, a 150 px header, white
/// text with black shadows on a `#222222` background, and ffmpeg quality 2.
///
/// No font file is configured by default, which means no text is rendered at
/// all; that is a valid configuration, not an error.
#[derive(Debug, Clone)]
#[must_use]
pub struct SheetOptions {
    /// Input video path.
    pub input: PathBuf,
    /// Where the encoded sheet is written.
    pub output: OutputTarget,
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Width of each thumbnail in pixels.
    pub thumb_width: u32,
    /// Height of each thumbnail. `None` derives it from the video's aspect
    /// ratio.
    pub thumb_height: Option<u32>,
    /// Padding between grid cells in pixels.
    pub padding: u32,
    /// Margin around the whole grid in pixels.
    pub margin: u32,
    /// Height of the header section above the grid.
    pub header_height: u32,
    /// TrueType font file for text rendering. `None` disables all text.
    pub font_file: Option<PathBuf>,
    /// Color token for the title text.
    pub font_color: String,
    /// Color token for text drop shadows.
    pub shadow_color: String,
    /// Color token for the sheet background.
    pub background_color: String,
    /// Color token for thumbnail borders.
    pub border_color: String,
    /// Border ring thickness around each thumbnail. Zero disables borders.
    pub border_thickness: u32,
    /// JPEG quality on ffmpeg's 1–31 scale (lower is better). Used both for
    /// the extraction stream and, after conversion, for the output encode.
    pub jpeg_quality: u8,
    /// Path to the `ffmpeg` executable.
    pub ffmpeg_path: PathBuf,
    /// Path to the `ffprobe` executable.
    pub ffprobe_path: PathBuf,
}

impl SheetOptions {
    /// Create options for the given input with default settings.
    ///
    /// The default output target is `<input stem>_sheet.jpg` next to the
    /// input file.
    pub fn new<P: AsRef<Path>>(input: P) -> Self {
        let input = input.as_ref().to_path_buf();
        let output = OutputTarget::File(default_output_path(&input));
        Self {
            input,
            output,
            columns: 4,
            rows: 5,
            thumb_width: 640,
            thumb_height: None,
            padding: 5,
            margin: 20,
            header_height: 150,
            font_file: None,
            font_color: "white".to_string(),
            shadow_color: "black".to_string(),
            background_color: "#222222".to_string(),
            border_color: "#111111".to_string(),
            border_thickness: 1,
            jpeg_quality: 2,
            ffmpeg_path: PathBuf::from("ffmpeg"),
            ffprobe_path: PathBuf::from("ffprobe"),
        }
    }

    /// Set the output target.
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Set the grid shape. The sheet samples `columns × rows` frames.
    pub fn with_grid(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set the thumbnail width in pixels.
    pub fn with_thumb_width(mut self, width: u32) -> Self {
        self.thumb_width = width;
        self
    }

    /// Set an explicit thumbnail height, overriding aspect-ratio derivation.
    pub fn with_thumb_height(mut self, height: u32) -> Self {
        self.thumb_height = Some(height);
        self
    }

    /// Set padding between cells and the margin around the grid.
    pub fn with_spacing(mut self, padding: u32, margin: u32) -> Self {
        self.padding = padding;
        self.margin = margin;
        self
    }

    /// Set the header section height.
    pub fn with_header_height(mut self, height: u32) -> Self {
        self.header_height = height;
        self
    }

    /// Set the font file used for all text rendering.
    pub fn with_font_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.font_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the title, shadow, and background color tokens.
    pub fn with_colors(
        mut self,
        font: impl Into<String>,
        shadow: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        self.font_color = font.into();
        self.shadow_color = shadow.into();
        self.background_color = background.into();
        self
    }

    /// Set the thumbnail border thickness and color.
    pub fn with_border(mut self, thickness: u32, color: impl Into<String>) -> Self {
        self.border_thickness = thickness;
        self.border_color = color.into();
        self
    }

    /// Set the JPEG quality on ffmpeg's 1–31 scale (lower is better).
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Override the `ffmpeg` and `ffprobe` executable paths.
    pub fn with_tool_paths<P: AsRef<Path>>(mut self, ffmpeg: P, ffprobe: P) -> Self {
        self.ffmpeg_path = ffmpeg.as_ref().to_path_buf();
        self.ffprobe_path = ffprobe.as_ref().to_path_buf();
        self
    }

    /// Total number of frames the configured grid holds.
    pub fn frame_count(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }
}

/// Derive the default output path: `<stem>_sheet.jpg` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_sheet.jpg"))
}
