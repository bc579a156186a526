//! # framesheet
//!
//! Generate thumbnail contact sheets from video files.
//!
//! `framesheet` samples evenly-spaced frames from a video, arranges them in a
//! grid, and overlays filename and metadata text, producing a single JPEG
//! "contact sheet". It drives `ffprobe` and `ffmpeg` as external processes:
//! one probe invocation for metadata, and exactly one decode invocation that
//! emits every sampled frame as a concatenated MJPEG stream, which is then
//! demultiplexed on JPEG marker bytes and decoded in parallel in-process.
//!
//! ## Quick Start
//!
//! ```no_run
//! use framesheet::SheetOptions;
//!
//! let options = SheetOptions::new("input.mp4");
//! framesheet::generate(&options)?;
//! # Ok::<(), framesheet::FramesheetError>(())
//! ```
//!
//! ### Customizing the grid
//!
//! ```no_run
//! use framesheet::{OutputTarget, SheetOptions};
//!
//! let options = SheetOptions::new("input.mp4")
//!     .with_grid(4, 4)
//!     .with_thumb_width(320)
//!     .with_font_file("DejaVuSans.ttf")
//!     .with_output(OutputTarget::File("sheet.jpg".into()));
//! framesheet::generate(&options)?;
//! # Ok::<(), framesheet::FramesheetError>(())
//! ```
//!
//! ### Reusing probed metadata
//!
//! ```no_run
//! use framesheet::{SheetOptions, VideoProbe};
//!
//! let metadata = VideoProbe::probe("input.mp4", "ffprobe")?;
//! println!("{}x{}, {:.1}s", metadata.width, metadata.height, metadata.duration);
//!
//! let options = SheetOptions::new("input.mp4");
//! framesheet::generate_with_metadata(&options, &metadata)?;
//! # Ok::<(), framesheet::FramesheetError>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Probe**: `ffprobe` runs once; its JSON report becomes
//!    [`VideoMetadata`].
//! 2. **Plan**: [`sample_timestamps`] spreads `columns × rows` instants
//!    across the interior 90% of the duration (the first and last 5% are
//!    skipped to avoid slates and fades).
//! 3. **Extract**: a single `ffmpeg` invocation selects the planned frames,
//!    scales them, and writes them to stdout as a bare concatenation of
//!    JPEGs.
//! 4. **Demux**: [`scan_jpeg_stream`] slices the captured buffer on
//!    start/end-of-image markers.
//! 5. **Decode**: [`decode_frames`] decodes every slice on the rayon pool,
//!    each task writing its own output slot, so frame order is positional
//!    and deterministic.
//! 6. **Compose**: [`compose_sheet`] paints background, thumbnails,
//!    borders, drop-shadowed title (shrink-to-fit), metadata lines, and
//!    per-frame timecodes, then the result is JPEG-encoded to a file or
//!    stdout.
//!
//! ## Requirements
//!
//! `ffmpeg` and `ffprobe` binaries must be available (on `PATH` or via
//! [`SheetOptions::with_tool_paths`]). No FFmpeg development libraries are
//! needed; everything goes through pipes.

pub mod color;
pub mod compose;
pub mod config;
pub mod decode;
pub mod demux;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod probe;
pub mod sheet;
pub mod text;
pub mod timeline;

pub use color::parse_color;
pub use compose::{
    SheetLayout, compose_sheet, encode_jpeg, jpeg_output_quality, metadata_lines, write_output,
};
pub use config::{OutputTarget, SheetOptions, default_output_path};
pub use decode::decode_frames;
pub use demux::{JPEG_EOI, JPEG_SOI, MarkerDemux, StreamDemux, scan_jpeg_stream, split_jpeg_stream};
pub use error::FramesheetError;
pub use extract::{build_extract_args, extract_frames, extract_frames_with};
pub use metadata::VideoMetadata;
pub use probe::VideoProbe;
pub use sheet::{generate, generate_with_metadata};
pub use text::SheetFont;
pub use timeline::{DEFAULT_FRAME_RATE, format_timecode, parse_frame_rate, sample_timestamps};
