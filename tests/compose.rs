//! Layout geometry and compositor tests.

use framesheet::{
    OutputTarget, SheetLayout, SheetOptions, VideoMetadata, compose_sheet, encode_jpeg,
    jpeg_output_quality, metadata_lines, write_output,
};
use image::{Rgb, RgbImage};

fn test_metadata() -> VideoMetadata {
    VideoMetadata {
        path: "/videos/test_movie.mp4".into(),
        duration: 10.0,
        width: 1920,
        height: 1080,
        file_size: 4 * 1024 * 1024,
        video_codec: "h264".to_string(),
        audio_codec: Some("aac".to_string()),
        bit_rate: "2500000".to_string(),
        avg_frame_rate: "30000/1001".to_string(),
    }
}

fn test_options() -> SheetOptions {
    SheetOptions::new("/videos/test_movie.mp4")
        .with_grid(4, 2)
        .with_thumb_width(640)
}

#[test]
fn canvas_dimensions_match_grid_formula() {
    let options = test_options();
    let layout = SheetLayout::new(&options, 640, 360);

    // 4 columns of 640 with 3 gaps of 5, plus 20 margin on each side.
    assert_eq!(layout.total_width(), 4 * 640 + 3 * 5 + 2 * 20);
    // 2 rows of 360 with 1 gap of 5, margins, and the 150 header.
    assert_eq!(layout.total_height(), 2 * 360 + 5 + 2 * 20 + 150);
}

#[test]
fn cells_placed_row_major() {
    let options = test_options();
    let layout = SheetLayout::new(&options, 640, 360);

    assert_eq!(layout.cell_origin(0), (20, 170));
    assert_eq!(layout.cell_origin(1), (20 + 645, 170));
    assert_eq!(layout.cell_origin(3), (20 + 3 * 645, 170));
    // Second row starts after thumb height + padding.
    assert_eq!(layout.cell_origin(4), (20, 170 + 365));
    assert_eq!(layout.cell_origin(7), (20 + 3 * 645, 170 + 365));
}

#[test]
fn single_cell_layout_has_no_padding() {
    let options = SheetOptions::new("in.mp4").with_grid(1, 1);
    let layout = SheetLayout::new(&options, 640, 360);
    assert_eq!(layout.grid_width(), 640);
    assert_eq!(layout.grid_height(), 360);
}

#[test]
fn quality_scale_conversion() {
    assert_eq!(jpeg_output_quality(1), 100);
    assert_eq!(jpeg_output_quality(2), 97);
    assert_eq!(jpeg_output_quality(31), 1);
    // Mid-scale sanity.
    assert_eq!(jpeg_output_quality(11), 70);
}

#[test]
fn sheet_contains_frames_in_row_major_order() {
    let colors: [[u8; 3]; 8] = [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 0],
        [0, 255, 255],
        [255, 0, 255],
        [200, 100, 50],
        [50, 100, 200],
    ];
    let frames: Vec<RgbImage> = colors
        .iter()
        .map(|&color| RgbImage::from_pixel(640, 360, Rgb(color)))
        .collect();
    let timestamps: Vec<f64> = (0..8).map(|index| index as f64).collect();

    let options = test_options();
    let layout = SheetLayout::new(&options, 640, 360);
    let sheet = compose_sheet(&frames, &timestamps, &test_metadata(), &options, &layout)
        .expect("compose without font");

    assert_eq!(sheet.width(), layout.total_width());
    assert_eq!(sheet.height(), layout.total_height());

    // Every frame's center pixel must land at its row-major cell.
    for (index, &color) in colors.iter().enumerate() {
        let (x, y) = layout.cell_origin(index);
        assert_eq!(
            sheet.get_pixel(x + 320, y + 180),
            &Rgb(color),
            "frame {index} misplaced"
        );
    }

    // Margin area keeps the default #222222 background.
    assert_eq!(sheet.get_pixel(0, 0), &Rgb([0x22, 0x22, 0x22]));

    // One-pixel border ring in #111111 hugs each thumbnail.
    let (x0, y0) = layout.cell_origin(0);
    assert_eq!(sheet.get_pixel(x0 - 1, y0), &Rgb([0x11, 0x11, 0x11]));
    assert_eq!(sheet.get_pixel(x0, y0 - 1), &Rgb([0x11, 0x11, 0x11]));
}

#[test]
fn overlay_anchor_survives_tiny_thumbnails() {
    let options = SheetOptions::new("in.mp4")
        .with_grid(2, 1)
        .with_spacing(0, 0)
        .with_header_height(0);
    let layout = SheetLayout::new(&options, 20, 10);

    // 10 px thumbs with no header or margin: the 15 px bottom inset lands
    // above the cell. The anchor must go negative, not wrap around.
    assert_eq!(layout.overlay_origin(0), (10.0, -5.0));
    assert_eq!(layout.overlay_origin(1), (30.0, -5.0));

    let frames = vec![RgbImage::new(20, 10); 2];
    let timestamps = vec![1.0, 2.0];
    compose_sheet(&frames, &timestamps, &test_metadata(), &options, &layout)
        .expect("tiny layout composes");
}

#[test]
fn compose_rejects_bad_background_color() {
    let options = test_options().with_colors("white", "black", "nonsense");
    let layout = SheetLayout::new(&options, 64, 36);
    let frames = vec![RgbImage::new(64, 36); 8];
    let timestamps = vec![0.0; 8];

    assert!(compose_sheet(&frames, &timestamps, &test_metadata(), &options, &layout).is_err());
}

#[test]
fn missing_font_means_no_text_not_an_error() {
    let options = test_options();
    assert!(options.font_file.is_none());

    let layout = SheetLayout::new(&options, 64, 36);
    let frames = vec![RgbImage::from_pixel(64, 36, Rgb([9, 9, 9])); 8];
    let timestamps = vec![1.0; 8];

    compose_sheet(&frames, &timestamps, &test_metadata(), &options, &layout)
        .expect("fontless compose must succeed");
}

#[test]
fn metadata_lines_format() {
    let (line1, line2) = metadata_lines(&test_metadata());
    assert_eq!(line1, "1920x1080 | 29.97 FPS | 2.50 Mbps");
    assert_eq!(line2, "00:00:10 | 4.00 MB | H264 / AAC");
}

#[test]
fn metadata_lines_degrade_to_not_available() {
    let mut metadata = test_metadata();
    metadata.bit_rate = "garbage".to_string();
    metadata.avg_frame_rate = String::new();
    metadata.audio_codec = None;

    let (line1, line2) = metadata_lines(&metadata);
    assert_eq!(line1, "1920x1080 | N/A FPS | N/A Mbps");
    assert!(line2.ends_with("| H264"));
}

#[test]
fn encoded_sheet_round_trips_through_image_crate() {
    let options = test_options();
    let layout = SheetLayout::new(&options, 64, 36);
    let frames = vec![RgbImage::from_pixel(64, 36, Rgb([120, 130, 140])); 8];
    let timestamps = vec![0.0; 8];

    let sheet = compose_sheet(&frames, &timestamps, &test_metadata(), &options, &layout)
        .expect("compose");
    let bytes = encode_jpeg(&sheet, 2).expect("encode");

    let decoded = image::load_from_memory(&bytes).expect("valid JPEG output");
    assert_eq!(decoded.width(), layout.total_width());
    assert_eq!(decoded.height(), layout.total_height());
}

#[test]
fn write_output_to_file() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("sheet.jpg");

    let canvas = RgbImage::from_pixel(32, 32, Rgb([1, 2, 3]));
    let bytes = encode_jpeg(&canvas, 2).expect("encode");
    write_output(&bytes, &OutputTarget::File(path.clone())).expect("write");

    let written = std::fs::read(&path).expect("read back");
    assert_eq!(written, bytes);
}
