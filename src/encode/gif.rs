use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ChesslineError, ChesslineResult};

/// File name offered when the animation is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "output.gif";

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output file, or `None` to keep the GIF in memory only.
    pub out_path: Option<PathBuf>,
    /// NeuQuant speed (1..=30).
    pub speed: i32,
}

impl GifSinkOpts {
    /// Write to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: Some(out_path.into()),
            speed: 10,
        }
    }

    /// Write to a fresh file in the system temporary directory.
    pub fn temp() -> Self {
        Self::new(temp_gif_path())
    }

    /// Encode in memory without touching the filesystem.
    pub fn in_memory() -> Self {
        Self {
            out_path: None,
            speed: 10,
        }
    }
}

/// Sink that encodes every pushed frame into one infinitely looping GIF.
///
/// Frames are buffered until `end`, where they are quantized and encoded in order. The encoded
/// bytes stay available through [`GifSink::bytes`] and are also written to the output path, if any.
pub struct GifSink {
    opts: GifSinkOpts,
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    next_idx: u64,
    bytes: Option<Vec<u8>>,
}

impl GifSink {
    /// Create a new sink.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            cfg: None,
            frames: Vec::new(),
            next_idx: 0,
            bytes: None,
        }
    }

    /// Output file, if the sink writes one.
    pub fn out_path(&self) -> Option<&Path> {
        self.opts.out_path.as_deref()
    }

    /// Encoded GIF bytes, available after `end`.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Take the encoded GIF bytes, available after `end`.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        self.bytes
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> ChesslineResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(ChesslineError::encode(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(ChesslineError::encode(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        if cfg.frame_delay_ms == 0 {
            return Err(ChesslineError::encode("frame delay must be non-zero"));
        }
        if !(1..=30).contains(&self.opts.speed) {
            return Err(ChesslineError::encode("gif speed must be in 1..=30"));
        }

        self.cfg = Some(cfg);
        self.frames.clear();
        self.next_idx = 0;
        self.bytes = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &image::RgbaImage) -> ChesslineResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| ChesslineError::encode("push_frame called before begin"))?;
        if idx.0 != self.next_idx {
            return Err(ChesslineError::encode(format!(
                "frame {} pushed out of order (expected {})",
                idx.0, self.next_idx
            )));
        }
        if frame.dimensions() != (cfg.width, cfg.height) {
            return Err(ChesslineError::encode(format!(
                "frame {} is {}x{}, expected {}x{}",
                idx.0,
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }

        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        self.frames.push(Frame::from_parts(frame.clone(), 0, 0, delay));
        self.next_idx += 1;
        Ok(())
    }

    fn end(&mut self) -> ChesslineResult<()> {
        if self.cfg.is_none() {
            return Err(ChesslineError::encode("end called before begin"));
        }

        let mut bytes = Vec::new();
        {
            let mut enc = GifEncoder::new_with_speed(&mut bytes, self.opts.speed);
            enc.set_repeat(Repeat::Infinite)
                .map_err(|e| ChesslineError::encode(format!("set gif repeat: {e}")))?;
            enc.encode_frames(std::mem::take(&mut self.frames))
                .map_err(|e| ChesslineError::encode(format!("encode gif frames: {e}")))?;
        }

        if let Some(path) = self.opts.out_path.as_deref() {
            ensure_parent_dir(path)?;
            std::fs::write(path, &bytes).map_err(|e| {
                ChesslineError::encode(format!("write gif '{}': {e}", path.display()))
            })?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote gif");
        }

        self.bytes = Some(bytes);
        Ok(())
    }
}

/// Unique path for a new GIF in the system temporary directory.
pub fn temp_gif_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "chessline_{}_{}_{}.gif",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
        TEMP_SEQ.fetch_add(1, Ordering::Relaxed)
    ))
}

fn ensure_parent_dir(path: &Path) -> ChesslineResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ChesslineError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
