use crate::{
    assets::{font::WatermarkFont, text::TextBrushRgba8},
    foundation::{
        core::{Canvas, Point, Rgba8},
        error::{ChesslineError, ChesslineResult},
        math::{mul_div255_u8, premultiply, unpremultiply},
    },
    render::arrow::{ArrowStyle, arrow_path},
};

/// Transparent drawing surface rasterized with `vello_cpu`.
///
/// Arrows and text are recorded into the context and rasterized on [`OverlayCanvas::finish`]
/// into premultiplied RGBA8, which is then composited onto a frame with [`composite_over`].
pub struct OverlayCanvas {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl OverlayCanvas {
    /// Create an empty overlay matching `canvas`.
    pub fn new(canvas: Canvas) -> ChesslineResult<Self> {
        let (width, height) = canvas.to_u16()?;
        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Overlay dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Stroke a straight shaft from `start` to `end` plus a "V" arrowhead at `end`.
    pub fn stroke_arrow(&mut self, start: Point, end: Point, color: Rgba8, style: &ArrowStyle) {
        let path = bezpath_to_cpu(&arrow_path(start, end, style));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.line_width));
        self.ctx.stroke_path(&path);
    }

    /// Fill a laid-out text block with its top-left corner at `origin`.
    ///
    /// Glyphs are placed at their line positions, so `y` of each glyph is its baseline.
    pub fn fill_text(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &WatermarkFont,
        origin: Point,
    ) {
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            font.index,
        );
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8 bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

/// Composite premultiplied `overlay` source-over onto a straight-alpha image in place.
///
/// Pixels where the overlay is fully transparent are left untouched.
pub fn composite_over(dst: &mut image::RgbaImage, overlay: &[u8]) -> ChesslineResult<()> {
    let dst_len = dst.as_raw().len();
    if dst_len != overlay.len() {
        return Err(ChesslineError::render(format!(
            "overlay is {} bytes, frame is {dst_len}",
            overlay.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over(premultiply([d[0], d[1], d[2], d[3]]), [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&unpremultiply(out));
    }
    Ok(())
}

fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
