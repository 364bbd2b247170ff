//! Compact text notation for boards.
//!
//! ```text
//! XX./OO./...
//! ```
//!
//! Rows are separated by `/` and hold one character per cell. `.`, `_` and `-`
//! mark empty cells; any other character is a piece symbol. The width is the
//! number of rows. Pieces with multi-character symbols are written out in full
//! by `Display` and therefore only round-trip when every symbol is one
//! character long.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use crate::{Board, Piece};

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display("board notation is empty")]
    Empty,
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

const EMPTY_MARKERS: [char; 3] = ['.', '_', '-'];

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let rows: Vec<&str> = s.split('/').map(str::trim).collect();
        let width = rows.len();
        let mut cells = Vec::with_capacity(width * width);

        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found,
                    expected: width,
                });
            }
            cells.extend(
                text.chars()
                    .map(|symbol| (!EMPTY_MARKERS.contains(&symbol)).then(|| Piece::from(symbol))),
            );
        }

        Ok(Board::from_cells(width, cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells().iter().enumerate() {
            if i > 0 && i % self.width() == 0 {
                f.write_str("/")?;
            }
            match cell {
                Some(piece) => f.write_str(piece.as_str())?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
