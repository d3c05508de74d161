//! chessline turns a chessboard image and a list of moves into an animated GIF.
//!
//! Each move (`"e2e4"`) becomes a colored arrow. The animation starts on the clean board, adds
//! one arrow per frame, and ends on the clean board again so a looping player pauses before
//! restarting:
//!
//! - Parse moves with [`parse_move_list`]
//! - Render with [`render_gif`] (temporary file + bytes) or stream frames through a
//!   [`MoveOverlayRenderer`] into any [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image, color and font inputs.
pub mod assets;
/// Squares, moves and board geometry.
pub mod board;
/// Encoding sinks.
pub mod encode;
/// Arrow overlay rendering.
pub mod render;

pub use crate::foundation::core::{Canvas, FrameIndex, PixelPoint, Point, Rgba8, Vec2};
pub use crate::foundation::error::{ChesslineError, ChesslineResult};

pub use crate::assets::decode::{decode_image, load_image};
pub use crate::board::moves::{Move, parse_move_list};
pub use crate::board::square::{Square, square_to_pixel};
pub use crate::encode::gif::{DOWNLOAD_FILE_NAME, GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::arrow::{ArrowStyle, arrowhead_wings};
pub use crate::render::opts::{RenderOpts, WatermarkOpts};
pub use crate::render::overlay::{MoveOverlayRenderer, RenderStats, downscale};
pub use crate::render::palette::Palette;
pub use crate::render::pipeline::{
    RenderedGif, render_frames, render_gif, render_gif_bytes, render_gif_to, render_upload,
};
