//! Arrow overlay rendering.

/// Arrow geometry.
pub mod arrow;
/// CPU overlay rasterization and compositing.
pub mod cpu;
/// Render options.
pub mod opts;
/// The move-overlay frame sequence.
pub mod overlay;
/// Arrow color palette.
pub mod palette;
/// One-shot helpers from inputs to GIF output.
pub mod pipeline;
/// Text watermark.
pub mod watermark;
