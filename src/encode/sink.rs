use crate::foundation::core::FrameIndex;
use crate::foundation::error::ChesslineResult;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Display time of each frame.
    pub frame_delay_ms: u32,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

/// Sink contract for consuming rendered frames in animation order.
///
/// Ordering contract: `push_frame` is called with indices `0, 1, 2, ...` without gaps.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ChesslineResult<()>;
    /// Push one straight-alpha RGBA8 frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &image::RgbaImage) -> ChesslineResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ChesslineResult<()>;
}

/// In-memory sink for tests and single-frame export.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, image::RgbaImage)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, image::RgbaImage)] {
        &self.frames
    }

    /// Take ownership of the captured frame images, in order.
    pub fn into_images(self) -> Vec<image::RgbaImage> {
        self.frames.into_iter().map(|(_, f)| f).collect()
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ChesslineResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &image::RgbaImage) -> ChesslineResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ChesslineResult<()> {
        Ok(())
    }
}
