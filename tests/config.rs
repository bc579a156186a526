//! Options builder and output-target tests.

use std::path::Path;

use framesheet::{OutputTarget, SheetOptions, default_output_path};

#[test]
fn defaults_match_documented_values() {
    let options = SheetOptions::new("clip.mp4");

    assert_eq!(options.columns, 4);
    assert_eq!(options.rows, 5);
    assert_eq!(options.frame_count(), 20);
    assert_eq!(options.thumb_width, 640);
    assert_eq!(options.thumb_height, None);
    assert_eq!(options.padding, 5);
    assert_eq!(options.margin, 20);
    assert_eq!(options.header_height, 150);
    assert_eq!(options.font_file, None);
    assert_eq!(options.font_color, "white");
    assert_eq!(options.shadow_color, "black");
    assert_eq!(options.background_color, "#222222");
    assert_eq!(options.border_color, "#111111");
    assert_eq!(options.border_thickness, 1);
    assert_eq!(options.jpeg_quality, 2);
    assert_eq!(options.ffmpeg_path, Path::new("ffmpeg"));
    assert_eq!(options.ffprobe_path, Path::new("ffprobe"));
}

#[test]
fn default_output_lands_next_to_input() {
    assert_eq!(
        default_output_path(Path::new("/videos/movie.mp4")),
        Path::new("/videos/movie_sheet.jpg")
    );
    assert_eq!(
        default_output_path(Path::new("clip.mkv")),
        Path::new("clip_sheet.jpg")
    );
}

#[test]
fn builder_methods_compose() {
    let options = SheetOptions::new("clip.mp4")
        .with_grid(3, 3)
        .with_thumb_width(320)
        .with_thumb_height(240)
        .with_spacing(2, 8)
        .with_header_height(100)
        .with_font_file("font.ttf")
        .with_colors("yellow", "navy", "#000000")
        .with_border(0, "red")
        .with_jpeg_quality(5)
        .with_tool_paths("/opt/ffmpeg", "/opt/ffprobe")
        .with_output(OutputTarget::Stdout);

    assert_eq!(options.frame_count(), 9);
    assert_eq!(options.thumb_height, Some(240));
    assert_eq!(options.padding, 2);
    assert_eq!(options.margin, 8);
    assert_eq!(options.header_height, 100);
    assert_eq!(options.font_file.as_deref(), Some(Path::new("font.ttf")));
    assert_eq!(options.font_color, "yellow");
    assert_eq!(options.border_thickness, 0);
    assert_eq!(options.jpeg_quality, 5);
    assert_eq!(options.ffmpeg_path, Path::new("/opt/ffmpeg"));
    assert_eq!(options.output, OutputTarget::Stdout);
}
