use std::{fmt, str::FromStr};

use crate::board::square::Square;
use crate::foundation::error::{ChesslineError, ChesslineResult};

/// A start/end square pair written as a 4-character token such as `e2e4`.
///
/// No legality checks are performed; any two squares form a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Square the arrow starts from.
    pub from: Square,
    /// Square the arrow points at.
    pub to: Square,
}

impl Move {
    /// Create a move from two squares.
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl FromStr for Move {
    type Err = ChesslineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let n = token.chars().count();
        if n != 4 {
            return Err(ChesslineError::invalid_move(format!(
                "'{token}' must be 4 characters like 'e2e4' (got {n})"
            )));
        }
        let mid = token
            .char_indices()
            .nth(2)
            .map_or(token.len(), |(i, _)| i);
        let (from, to) = token.split_at(mid);
        let from = from.parse::<Square>().map_err(|e| in_token(token, e))?;
        let to = to.parse::<Square>().map_err(|e| in_token(token, e))?;
        Ok(Self { from, to })
    }
}

fn in_token(token: &str, err: ChesslineError) -> ChesslineError {
    match err {
        ChesslineError::Move(msg) => ChesslineError::invalid_move(format!("'{token}': {msg}")),
        other => other,
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parse a comma-separated move list such as `"e2e4, d2d4"`.
///
/// Tokens are trimmed. Blank input yields an empty list; an empty token between commas is an
/// error.
pub fn parse_move_list(input: &str) -> ChesslineResult<Vec<Move>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, token)| {
            if token.is_empty() {
                return Err(ChesslineError::invalid_move(format!(
                    "move #{} is empty",
                    i + 1
                )));
            }
            token.parse()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/board/moves.rs"]
mod tests;
