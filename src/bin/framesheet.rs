use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use framesheet::{OutputTarget, SheetOptions, VideoProbe, default_output_path};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  framesheet input.mp4\n  framesheet input.mp4 -o sheet.jpg -c 4 -r 4 --font-file DejaVuSans.ttf\n  framesheet input.mp4 -o - | convert - sheet.png\n  framesheet input.mp4 --probe-only --json\n  framesheet --completions zsh > _framesheet";

#[derive(Debug, Parser)]
#[command(
    name = "framesheet",
    version,
    about = "Generate a thumbnail contact sheet for a video file",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input video file.
    #[arg(required_unless_present = "completions")]
    input: Option<PathBuf>,

    /// Output path. Defaults to `<input stem>_sheet.jpg` next to the input;
    /// use '-' to stream JPEG bytes to stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Number of columns in the grid.
    #[arg(short, long, default_value_t = 4)]
    columns: u32,

    /// Number of rows in the grid.
    #[arg(short, long, default_value_t = 5)]
    rows: u32,

    /// Width of each thumbnail in pixels.
    #[arg(long, default_value_t = 640)]
    thumb_width: u32,

    /// Height of each thumbnail. Defaults to auto-scale from the video's
    /// aspect ratio.
    #[arg(long)]
    thumb_height: Option<u32>,

    /// Padding between thumbnails in pixels.
    #[arg(long, default_value_t = 5)]
    padding: u32,

    /// Margin around the grid in pixels.
    #[arg(long, default_value_t = 20)]
    margin: u32,

    /// Height of the header section in pixels.
    #[arg(long = "header", default_value_t = 150)]
    header_height: u32,

    /// Path to a .ttf font file for text rendering. Without it, no text is
    /// rendered at all.
    #[arg(long)]
    font_file: Option<PathBuf>,

    /// Color of the title text.
    #[arg(long, default_value = "white")]
    font_color: String,

    /// Color of text drop shadows.
    #[arg(long, default_value = "black")]
    shadow_color: String,

    /// Background color of the sheet.
    #[arg(long = "bg-color", default_value = "#222222")]
    background_color: String,

    /// JPEG quality for extraction and output (1-31, lower is better).
    #[arg(long, default_value_t = 2)]
    jpeg_quality: u8,

    /// Thickness of the border around each thumbnail (0 disables).
    #[arg(long, default_value_t = 1)]
    border_thickness: u32,

    /// Color of the border around each thumbnail.
    #[arg(long, default_value = "#111111")]
    border_color: String,

    /// Path to the ffmpeg executable.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg_path: PathBuf,

    /// Path to the ffprobe executable.
    #[arg(long, default_value = "ffprobe")]
    ffprobe_path: PathBuf,

    /// Probe the input and print its metadata without generating a sheet.
    #[arg(long)]
    probe_only: bool,

    /// With --probe-only, print metadata as machine-readable JSON.
    #[arg(long)]
    json: bool,

    /// Suppress status output.
    #[arg(short, long)]
    quiet: bool,

    /// Show additional logging output, including the full ffmpeg command.
    #[arg(short, long)]
    verbose: bool,

    /// Show a spinner while frames are being extracted.
    #[arg(long)]
    progress: bool,

    /// Allow overwriting an existing output file.
    #[arg(long)]
    overwrite: bool,

    /// Generate shell completion scripts and exit.
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

fn resolve_output(output: Option<&str>, input: &std::path::Path) -> OutputTarget {
    match output {
        Some("-") => OutputTarget::Stdout,
        Some(path) => OutputTarget::File(PathBuf::from(path)),
        None => OutputTarget::File(default_output_path(input)),
    }
}

fn build_options(cli: &Cli, input: &std::path::Path, output: OutputTarget) -> SheetOptions {
    let mut options = SheetOptions::new(input)
        .with_output(output)
        .with_grid(cli.columns, cli.rows)
        .with_thumb_width(cli.thumb_width)
        .with_spacing(cli.padding, cli.margin)
        .with_header_height(cli.header_height)
        .with_colors(
            cli.font_color.clone(),
            cli.shadow_color.clone(),
            cli.background_color.clone(),
        )
        .with_border(cli.border_thickness, cli.border_color.clone())
        .with_jpeg_quality(cli.jpeg_quality)
        .with_tool_paths(&cli.ffmpeg_path, &cli.ffprobe_path);

    if let Some(height) = cli.thumb_height {
        options = options.with_thumb_height(height);
    }
    if let Some(font_file) = &cli.font_file {
        options = options.with_font_file(font_file);
    }
    options
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    builder.init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "framesheet", &mut std::io::stdout());
        return Ok(());
    }

    if cli.quiet && cli.verbose {
        return Err("flags --quiet and --verbose cannot be used together".into());
    }

    init_logging(&cli);

    let input = cli
        .input
        .clone()
        .ok_or("missing input video file argument")?;
    let output = resolve_output(cli.output.as_deref(), &input);

    // When the sheet itself goes to stdout, status lines must not.
    let stream_to_stdout = output == OutputTarget::Stdout;
    let status = |message: String| {
        if cli.quiet {
            return;
        }
        if stream_to_stdout {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    };

    if let OutputTarget::File(path) = &output {
        if path.exists() {
            if !cli.overwrite {
                return Err(format!(
                    "output already exists: {} (use --overwrite to replace)",
                    path.display()
                )
                .into());
            }
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        }
    }

    status(format!("Analyzing video file: {}", input.display()));
    let metadata = VideoProbe::probe(&input, &cli.ffprobe_path)?;

    if cli.probe_only {
        if cli.json {
            let payload = json!({
                "path": metadata.path.display().to_string(),
                "duration_seconds": metadata.duration,
                "width": metadata.width,
                "height": metadata.height,
                "file_size": metadata.file_size,
                "video_codec": metadata.video_codec,
                "audio_codec": metadata.audio_codec,
                "bit_rate": metadata.bit_rate,
                "avg_frame_rate": metadata.avg_frame_rate,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("Path: {}", metadata.path.display());
            println!("Duration: {:.2}s", metadata.duration);
            println!(
                "Video: {}x{} @ {} [{}]",
                metadata.width, metadata.height, metadata.avg_frame_rate, metadata.video_codec,
            );
            if let Some(audio) = &metadata.audio_codec {
                println!("Audio: [{audio}]");
            }
            println!("Size: {} bytes", metadata.file_size);
        }
        return Ok(());
    }

    status("Video analysis complete. Starting sheet generation...".to_string());

    let options = build_options(&cli, &input, output.clone());

    let spinner = if cli.progress && !cli.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        pb.set_message("extracting and composing frames...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = framesheet::generate_with_metadata(&options, &metadata);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result?;

    match &output {
        OutputTarget::File(path) => status(format!(
            "{} {}",
            "success:".green().bold(),
            format!("Sheet written to {}", path.display()).green()
        )),
        OutputTarget::Stdout => status(format!(
            "{} {}",
            "success:".green().bold(),
            "Sheet streamed to stdout.".green()
        )),
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}
