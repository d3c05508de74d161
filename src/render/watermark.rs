use crate::{
    assets::{
        font::resolve_font,
        text::{TextBrushRgba8, TextLayoutEngine},
    },
    foundation::{
        core::{Canvas, Point},
        error::ChesslineResult,
    },
    render::{
        cpu::{OverlayCanvas, composite_over},
        opts::WatermarkOpts,
    },
};

/// Stamp the watermark text into the top-right corner of `img`.
///
/// Returns `Ok(false)` when nothing was drawn: the watermark is disabled, no font could be
/// found, or the text could not be shaped. Missing fonts never fail the render.
pub fn apply_watermark(img: &mut image::RgbaImage, opts: &WatermarkOpts) -> ChesslineResult<bool> {
    if !opts.is_enabled() {
        return Ok(false);
    }

    let Some(font) = resolve_font(opts.font_path.as_deref()) else {
        tracing::warn!("skipping watermark: no usable font");
        return Ok(false);
    };

    let c = opts.color.0;
    let brush = TextBrushRgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    };
    let mut engine = TextLayoutEngine::new();
    let layout = match engine.layout_line(&opts.text, &font.bytes, opts.font_size, brush) {
        Ok(layout) => layout,
        Err(e) => {
            tracing::warn!(error = %e, "skipping watermark: text layout failed");
            return Ok(false);
        }
    };

    let canvas = Canvas::new(img.width(), img.height())?;
    let origin = Point::new(
        f64::from(img.width()) - f64::from(layout.width()) - opts.margin,
        opts.margin,
    );
    tracing::debug!(x = origin.x, y = origin.y, source = ?font.source, "drawing watermark");

    let mut overlay = OverlayCanvas::new(canvas)?;
    overlay.fill_text(&layout, &font, origin);
    composite_over(img, &overlay.finish())?;
    Ok(true)
}
