use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    assets::color::ColorSpec,
    foundation::{
        core::Rgba8,
        error::{ChesslineError, ChesslineResult},
    },
    render::{
        arrow::ArrowStyle,
        palette::{DEFAULT_PALETTE, Palette},
    },
};

/// Options controlling how moves are drawn and how the animation is encoded.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOpts {
    /// The input image is shrunk to `1 / scale_divisor` of its size on both axes.
    pub scale_divisor: u32,
    /// Display time of each frame.
    pub frame_delay_ms: u32,
    /// Stroke width of arrow shafts and heads.
    pub line_width: f64,
    /// Length of each arrowhead wing.
    pub head_size: f64,
    /// Angle between shaft and wing, in degrees.
    pub head_angle_deg: f64,
    /// Arrow colors, used in order and repeated.
    pub palette: Vec<ColorSpec>,
    /// NeuQuant speed for GIF quantization (1 = best quality, 30 = fastest).
    pub gif_speed: i32,
    /// Optional text drawn into every frame.
    pub watermark: WatermarkOpts,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            scale_divisor: 2,
            frame_delay_ms: 2000,
            line_width: 4.0,
            head_size: 10.0,
            head_angle_deg: 30.0,
            palette: DEFAULT_PALETTE.iter().map(|(_, c)| ColorSpec(*c)).collect(),
            gif_speed: 10,
            watermark: WatermarkOpts::default(),
        }
    }
}

impl RenderOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChesslineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChesslineError::config(format!("parse render options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChesslineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChesslineError::config(format!("open render options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that every option is usable.
    pub fn validate(&self) -> ChesslineResult<()> {
        if self.scale_divisor == 0 {
            return Err(ChesslineError::config("scale_divisor must be > 0"));
        }
        if self.frame_delay_ms == 0 {
            return Err(ChesslineError::config("frame_delay_ms must be > 0"));
        }
        for (name, v) in [
            ("line_width", self.line_width),
            ("head_size", self.head_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChesslineError::config(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.head_angle_deg.is_finite() {
            return Err(ChesslineError::config("head_angle_deg must be finite"));
        }
        if self.palette.is_empty() {
            return Err(ChesslineError::config("palette must not be empty"));
        }
        if !(1..=30).contains(&self.gif_speed) {
            return Err(ChesslineError::config("gif_speed must be in 1..=30"));
        }
        self.watermark.validate()
    }

    /// Arrow geometry derived from these options.
    pub fn arrow_style(&self) -> ArrowStyle {
        ArrowStyle {
            line_width: self.line_width,
            head_size: self.head_size,
            head_angle_deg: self.head_angle_deg,
        }
    }

    /// Palette derived from these options.
    pub fn palette(&self) -> ChesslineResult<Palette> {
        Palette::new(self.palette.iter().map(|c| c.0).collect())
            .ok_or_else(|| ChesslineError::config("palette must not be empty"))
    }
}

/// Text stamped in the top-right corner of the base image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatermarkOpts {
    /// Text to draw; empty disables the watermark.
    pub text: String,
    /// Font file tried first; a system sans-serif face is used when it cannot be loaded.
    pub font_path: Option<PathBuf>,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color.
    pub color: ColorSpec,
    /// Distance from the top and right edges, in pixels.
    pub margin: f64,
}

impl Default for WatermarkOpts {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_path: Some(PathBuf::from("arial.ttf")),
            font_size: 20.0,
            color: ColorSpec(Rgba8::rgba(255, 255, 255, 128)),
            margin: 10.0,
        }
    }
}

impl WatermarkOpts {
    /// Whether anything will be drawn.
    pub fn is_enabled(&self) -> bool {
        !self.text.is_empty()
    }

    fn validate(&self) -> ChesslineResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChesslineError::config(
                "watermark font_size must be finite and > 0",
            ));
        }
        if !self.margin.is_finite() {
            return Err(ChesslineError::config("watermark margin must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/opts.rs"]
mod tests;
