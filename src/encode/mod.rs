//! Encoding sinks.
//!
//! Sinks consume rendered frames in animation order and are fed by the overlay renderer.

/// Animated GIF output.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
