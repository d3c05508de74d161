use image::imageops::FilterType;

use crate::{
    board::moves::Move,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{Canvas, FrameIndex},
        error::{ChesslineError, ChesslineResult},
    },
    render::{
        arrow::ArrowStyle,
        cpu::{OverlayCanvas, composite_over},
        opts::RenderOpts,
        palette::Palette,
        watermark::apply_watermark,
    },
};

/// Counters for one finished animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink (arrows + 2).
    pub frames: u64,
    /// Arrows drawn.
    pub arrows: u64,
    /// Frame width after downscaling.
    pub width: u32,
    /// Frame height after downscaling.
    pub height: u32,
}

/// Draws one arrow per move on a downscaled board image and streams the frames to a sink.
///
/// Frame layout for `N` moves:
/// - `0`: the clean downscaled image;
/// - `1..=N`: the clean image with arrows for moves `1..=i`;
/// - `N + 1`: the clean image again, so a looping player pauses before restarting.
#[derive(Clone, Debug)]
pub struct MoveOverlayRenderer {
    opts: RenderOpts,
    style: ArrowStyle,
    palette: Palette,
}

impl MoveOverlayRenderer {
    /// Validate `opts` and build a renderer.
    pub fn new(opts: RenderOpts) -> ChesslineResult<Self> {
        opts.validate()?;
        let style = opts.arrow_style();
        let palette = opts.palette()?;
        Ok(Self {
            opts,
            style,
            palette,
        })
    }

    /// Options this renderer was built with.
    pub fn opts(&self) -> &RenderOpts {
        &self.opts
    }

    /// Downscale `image` and stamp the watermark, producing the clean frame.
    pub fn prepare_base(&self, image: &image::DynamicImage) -> ChesslineResult<image::RgbaImage> {
        let mut base = downscale(image, self.opts.scale_divisor)?;
        apply_watermark(&mut base, &self.opts.watermark)?;
        Ok(base)
    }

    /// Render the full frame sequence for `moves` into `sink`.
    #[tracing::instrument(skip_all, fields(moves = moves.len()))]
    pub fn render(
        &self,
        image: &image::DynamicImage,
        moves: &[Move],
        sink: &mut dyn FrameSink,
    ) -> ChesslineResult<RenderStats> {
        let clean = self.prepare_base(image)?;
        let (width, height) = clean.dimensions();
        let canvas = Canvas::new(width, height)?;
        let frame_count = moves.len() as u64 + 2;

        sink.begin(SinkConfig {
            width,
            height,
            frame_delay_ms: self.opts.frame_delay_ms,
            frame_count,
        })?;
        sink.push_frame(FrameIndex(0), &clean)?;

        let mut cumulative = clean.clone();
        for (i, mv) in moves.iter().enumerate() {
            let start = mv.from.center_px(width, height);
            let end = mv.to.center_px(width, height);
            let color = self.palette.color_for(i);
            tracing::debug!(%mv, ?start, ?end, ?color, "drawing arrow");

            let mut overlay = OverlayCanvas::new(canvas)?;
            overlay.stroke_arrow(start.to_point(), end.to_point(), color, &self.style);
            composite_over(&mut cumulative, &overlay.finish())?;

            sink.push_frame(FrameIndex(i as u64 + 1), &cumulative)?;
        }

        sink.push_frame(FrameIndex(frame_count - 1), &clean)?;
        sink.end()?;

        tracing::info!(frames = frame_count, width, height, "rendered move overlay");
        Ok(RenderStats {
            frames: frame_count,
            arrows: moves.len() as u64,
            width,
            height,
        })
    }
}

/// Shrink `image` to `1 / divisor` of its size on both axes with Lanczos3 resampling.
///
/// Integer division is used for the target size; a resulting zero dimension is an error.
pub fn downscale(image: &image::DynamicImage, divisor: u32) -> ChesslineResult<image::RgbaImage> {
    if divisor == 0 {
        return Err(ChesslineError::config("scale divisor must be > 0"));
    }
    let rgba = image.to_rgba8();
    if divisor == 1 {
        return Ok(rgba);
    }

    let (w, h) = rgba.dimensions();
    let (nw, nh) = (w / divisor, h / divisor);
    if nw == 0 || nh == 0 {
        return Err(ChesslineError::image(format!(
            "image {w}x{h} is too small to shrink by {divisor}"
        )));
    }
    Ok(image::imageops::resize(&rgba, nw, nh, FilterType::Lanczos3))
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
