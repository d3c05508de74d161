use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chessline", version)]
struct Cli {
    /// Log per-move drawing details.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animated GIF.
    Render(RenderArgs),
    /// Render a single frame of the animation as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Board image (PNG or JPEG).
    #[arg(long)]
    image: PathBuf,

    /// Comma-separated moves, e.g. "e2e4,d2d4".
    #[arg(long, allow_hyphen_values = true)]
    moves: String,

    /// Render options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Watermark text (overrides the config file).
    #[arg(long)]
    watermark: Option<String>,

    /// Preferred watermark font file (overrides the config file).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output GIF path; a temporary file is used when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based; the last frame is moves + 1).
    #[arg(long)]
    frame: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_inputs(
    args: &InputArgs,
) -> anyhow::Result<(image::DynamicImage, Vec<chessline::Move>, chessline::RenderOpts)> {
    // Moves first: a bad token should fail before the image is even read.
    let moves = chessline::parse_move_list(&args.moves)?;

    let mut opts = match &args.config {
        Some(path) => chessline::RenderOpts::from_path(path)?,
        None => chessline::RenderOpts::default(),
    };
    if let Some(text) = &args.watermark {
        opts.watermark.text = text.clone();
    }
    if let Some(font) = &args.font {
        opts.watermark.font_path = Some(font.clone());
    }
    opts.validate()?;

    let image = chessline::load_image(&args.image)
        .with_context(|| format!("load board image '{}'", args.image.display()))?;
    Ok((image, moves, opts))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (image, moves, opts) = load_inputs(&args.input)?;

    let rendered = match &args.out {
        Some(out) => chessline::render_gif_to(&image, &moves, &opts, out)?,
        None => chessline::render_gif(&image, &moves, &opts)?,
    };

    eprintln!(
        "wrote {} ({} frames, {}x{}, {} bytes)",
        rendered.path.display(),
        rendered.stats.frames,
        rendered.stats.width,
        rendered.stats.height,
        rendered.bytes.len()
    );
    println!("{}", rendered.path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (image, moves, opts) = load_inputs(&args.input)?;
    let frames = chessline::render_frames(&image, &moves, &opts)?;
    let frame = frames.get(args.frame).with_context(|| {
        format!(
            "frame {} out of range (animation has {} frames)",
            args.frame,
            frames.len()
        )
    })?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    frame
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
