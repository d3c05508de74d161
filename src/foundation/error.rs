/// Result alias used throughout the crate.
pub type ChesslineResult<T> = Result<T, ChesslineError>;

/// Failure while turning an image and a move list into an animation.
///
/// Every variant renders as a single descriptive line so shells can surface it verbatim.
#[derive(thiserror::Error, Debug)]
pub enum ChesslineError {
    /// A move token or square could not be parsed.
    #[error("invalid move: {0}")]
    Move(String),

    /// The input image could not be decoded or resized.
    #[error("image error: {0}")]
    Image(String),

    /// Rasterizing arrows or text failed.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding or writing the animation failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Render options are invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Any other failure, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChesslineError {
    /// Build a [`ChesslineError::Move`].
    pub fn invalid_move(msg: impl Into<String>) -> Self {
        Self::Move(msg.into())
    }

    /// Build a [`ChesslineError::Image`].
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`ChesslineError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChesslineError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ChesslineError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
