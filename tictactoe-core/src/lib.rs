//! Tic-tac-toe board model, game state and outcome detection.
//!
//! # Layout
//!
//! ```text
//! Coordinates are (row, column), zero-indexed, row-major:
//!   (0,0) (0,1) (0,2)
//!   (1,0) (1,1) (1,2)
//!   (2,0) (2,1) (2,2)
//! ```
//!
//! A [`Board`] is a square grid of optional [`Piece`]s. A [`GameState`] pairs a
//! board with the two competing pieces and derives whose turn it is from
//! occupancy: the piece with fewer placements moves next, and on a tie the
//! configured player piece moves.
//!
//! Both types are immutable values. Producing a successor never touches the
//! original, so search branches can be explored independently.

use std::sync::Arc;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod board;
pub mod error;
pub mod game_state;
pub mod notation;

pub use board::{Board, Line, STANDARD_WIDTH};
pub use error::{ConfigRejection, Error, MoveRejection, Result};
pub use game_state::{GameState, Status};
pub use notation::ParseBoardError;

/// An opaque piece symbol, e.g. `"X"` or `"O"`.
///
/// Pieces carry no numeric meaning; they are only compared for equality (and
/// ordered, so boards can be canonicalised). Cloning is cheap.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, Serialize, Deserialize)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Piece(Arc<str>);

impl Piece {
    /// Create a piece from its symbol.
    pub fn new(symbol: impl AsRef<str>) -> Piece {
        Piece(Arc::from(symbol.as_ref()))
    }

    /// The symbol of this piece.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Piece {
    fn from(symbol: &str) -> Piece {
        Piece::new(symbol)
    }
}

impl From<String> for Piece {
    fn from(symbol: String) -> Piece {
        Piece(Arc::from(symbol))
    }
}

impl From<char> for Piece {
    fn from(symbol: char) -> Piece {
        Piece::new(symbol.encode_utf8(&mut [0; 4]))
    }
}

/// A (row, column) position on the board, zero-indexed.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, Serialize, Deserialize,
)]
#[display("({row}, {column})")]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    /// Create a coordinate from row and column.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Coordinate {
        Coordinate { row, column }
    }

    /// Coordinate of a row-major cell index on a board of the given width.
    #[inline]
    pub const fn from_index(index: usize, width: usize) -> Coordinate {
        Coordinate {
            row: index / width,
            column: index % width,
        }
    }

    /// Row-major cell index on a board of the given width.
    #[inline]
    pub const fn index(self, width: usize) -> usize {
        self.row * width + self.column
    }

    /// Check that both components lie in `[0, width)`.
    #[inline]
    pub const fn is_within(self, width: usize) -> bool {
        self.row < width && self.column < width
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Coordinate {
        Coordinate { row, column }
    }
}
