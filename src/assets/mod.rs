//! Input assets: images, colors, and fonts.

/// Color names and color deserialization.
pub mod color;
/// Image decoding.
pub mod decode;
/// Font acquisition with fallback.
pub mod font;
/// Text shaping.
pub mod text;
