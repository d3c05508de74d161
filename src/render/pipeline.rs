use std::path::{Path, PathBuf};

use crate::{
    assets::decode::decode_image,
    board::moves::{Move, parse_move_list},
    encode::{
        gif::{GifSink, GifSinkOpts},
        sink::InMemorySink,
    },
    foundation::error::{ChesslineError, ChesslineResult},
    render::{
        opts::RenderOpts,
        overlay::{MoveOverlayRenderer, RenderStats},
    },
};

/// A finished animation handed back to the caller.
///
/// The caller owns the file at `path`; it is never deleted by this crate.
#[derive(Clone, Debug)]
pub struct RenderedGif {
    /// Where the GIF was written.
    pub path: PathBuf,
    /// The same GIF, for previews and downloads.
    pub bytes: Vec<u8>,
    /// Frame counters.
    pub stats: RenderStats,
}

/// Render `moves` over `image` into a fresh temporary GIF file.
///
/// This is the primary one-shot API:
/// 1. [`MoveOverlayRenderer::render`] produces the frames;
/// 2. [`GifSink`] encodes and writes them.
pub fn render_gif(
    image: &image::DynamicImage,
    moves: &[Move],
    opts: &RenderOpts,
) -> ChesslineResult<RenderedGif> {
    render_with_sink_opts(image, moves, opts, GifSinkOpts::temp())
}

/// Like [`render_gif`] but writes to `out_path`.
pub fn render_gif_to(
    image: &image::DynamicImage,
    moves: &[Move],
    opts: &RenderOpts,
    out_path: impl AsRef<Path>,
) -> ChesslineResult<RenderedGif> {
    render_with_sink_opts(image, moves, opts, GifSinkOpts::new(out_path.as_ref()))
}

/// Encode the animation in memory only.
pub fn render_gif_bytes(
    image: &image::DynamicImage,
    moves: &[Move],
    opts: &RenderOpts,
) -> ChesslineResult<Vec<u8>> {
    let renderer = MoveOverlayRenderer::new(opts.clone())?;
    let mut sink = GifSink::new(GifSinkOpts {
        speed: opts.gif_speed,
        ..GifSinkOpts::in_memory()
    });
    renderer.render(image, moves, &mut sink)?;
    sink.into_bytes()
        .ok_or_else(|| ChesslineError::encode("gif sink produced no bytes"))
}

/// Render the raw frame sequence without encoding.
pub fn render_frames(
    image: &image::DynamicImage,
    moves: &[Move],
    opts: &RenderOpts,
) -> ChesslineResult<Vec<image::RgbaImage>> {
    let renderer = MoveOverlayRenderer::new(opts.clone())?;
    let mut sink = InMemorySink::new();
    renderer.render(image, moves, &mut sink)?;
    Ok(sink.into_images())
}

/// Entry point for a UI shell: encoded image bytes plus a comma-separated move list.
///
/// Moves are parsed before any pixels are touched, so a bad token never leaves a file behind.
pub fn render_upload(
    image_bytes: &[u8],
    move_list: &str,
    opts: &RenderOpts,
) -> ChesslineResult<RenderedGif> {
    let moves = parse_move_list(move_list)?;
    let image = decode_image(image_bytes)?;
    render_gif(&image, &moves, opts)
}

fn render_with_sink_opts(
    image: &image::DynamicImage,
    moves: &[Move],
    opts: &RenderOpts,
    sink_opts: GifSinkOpts,
) -> ChesslineResult<RenderedGif> {
    let renderer = MoveOverlayRenderer::new(opts.clone())?;
    let mut sink = GifSink::new(GifSinkOpts {
        speed: opts.gif_speed,
        ..sink_opts
    });
    let stats = renderer.render(image, moves, &mut sink)?;

    let path = sink
        .out_path()
        .map(Path::to_path_buf)
        .ok_or_else(|| ChesslineError::encode("gif sink has no output path"))?;
    let bytes = sink
        .into_bytes()
        .ok_or_else(|| ChesslineError::encode("gif sink produced no bytes"))?;
    Ok(RenderedGif { path, bytes, stats })
}
