use std::{fmt, str::FromStr};

use crate::foundation::core::PixelPoint;
use crate::foundation::error::{ChesslineError, ChesslineResult};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

/// One of the 64 board cells.
///
/// `file` is 0-based (`a` = 0); `rank` is the printed rank (`1..=8`). The board is assumed to be
/// shown from White's side: rank 8 is the top row and file `a` is the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square from a 0-based file and a 1-based rank.
    pub fn new(file: u8, rank: u8) -> ChesslineResult<Self> {
        if file >= BOARD_SIZE || !(1..=BOARD_SIZE).contains(&rank) {
            return Err(ChesslineError::invalid_move(format!(
                "square out of range (file {file}, rank {rank})"
            )));
        }
        Ok(Self { file, rank })
    }

    /// Iterate all 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }

    /// 0-based file index (`a` = 0).
    pub fn file(self) -> u8 {
        self.file
    }

    /// Printed rank (`1..=8`).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// 0-based column from the left edge of the image.
    pub fn column(self) -> u8 {
        self.file
    }

    /// 0-based row from the top edge of the image.
    pub fn row(self) -> u8 {
        BOARD_SIZE - self.rank
    }

    /// Pixel at the center of this square's cell on a `width` x `height` board image.
    ///
    /// Fractional coordinates are truncated toward zero.
    pub fn center_px(self, width: u32, height: u32) -> PixelPoint {
        let cell = f64::from(BOARD_SIZE);
        let x = (f64::from(self.column()) + 0.5) * f64::from(width) / cell;
        let y = (f64::from(self.row()) + 0.5) * f64::from(height) / cell;
        PixelPoint::new(x as u32, y as u32)
    }
}

impl FromStr for Square {
    type Err = ChesslineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChesslineError::invalid_move(format!(
                "square '{s}' must be exactly two characters"
            )));
        };

        let f = f.to_ascii_lowercase();
        if !('a'..='h').contains(&f) {
            return Err(ChesslineError::invalid_move(format!(
                "square '{s}' has file '{f}', expected a-h"
            )));
        }
        let rank = r.to_digit(10).filter(|d| (1..=8).contains(d)).ok_or_else(|| {
            ChesslineError::invalid_move(format!("square '{s}' has rank '{r}', expected 1-8"))
        })?;

        Ok(Self {
            file: f as u8 - b'a',
            rank: rank as u8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file), self.rank)
    }
}

/// Map a square name such as `"e4"` to the center pixel of its cell.
///
/// Convenience wrapper over [`Square::from_str`] and [`Square::center_px`].
pub fn square_to_pixel(square: &str, width: u32, height: u32) -> ChesslineResult<PixelPoint> {
    let sq: Square = square.parse()?;
    Ok(sq.center_px(width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/board/square.rs"]
mod tests;
