//! Board geometry: squares, move tokens, and the square-to-pixel mapping.

/// Move tokens and comma-separated move lists.
pub mod moves;
/// Squares and their pixel centers.
pub mod square;
