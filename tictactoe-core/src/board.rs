//! Square board holding pieces, with line and draw detection.

use crate::{Coordinate, Error, Piece, Result};

/// Width of the standard tic-tac-toe board.
pub const STANDARD_WIDTH: usize = 3;

/// Number of dihedral symmetries of a square (4 rotations × 2 reflections).
pub const SYMMETRIES: usize = 8;

/// A full row, column or diagonal owned entirely by one piece.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Line {
    pub piece: Piece,
    pub coordinates: Vec<Coordinate>,
}

impl Line {
    /// Check whether the line passes through a coordinate.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }
}

/// A `width × width` grid of optional pieces.
///
/// Cells are stored row-major. A cell, once occupied, is never overwritten.
/// Everything besides placement is a pure query computed on demand.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    width: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board of the given width.
    pub fn new(width: usize) -> Board {
        Board {
            width,
            cells: vec![None; width * width],
        }
    }

    /// Build a board from row-major cells; `cells.len()` must be `width²`.
    pub(crate) fn from_cells(width: usize, cells: Vec<Option<Piece>>) -> Board {
        debug_assert_eq!(cells.len(), width * width);
        Board { width, cells }
    }

    /// Width (and height) of the board.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`width²`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a coordinate lies on the board.
    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.is_within(self.width)
    }

    /// The piece at a coordinate, or `None` if the cell is empty or off the board.
    #[inline]
    pub fn occupant(&self, coordinate: Coordinate) -> Option<&Piece> {
        if !self.contains(coordinate) {
            return None;
        }
        self.cells[coordinate.index(self.width)].as_ref()
    }

    /// Check if a coordinate is on the board and empty.
    #[inline]
    pub fn is_vacant(&self, coordinate: Coordinate) -> bool {
        self.contains(coordinate) && self.cells[coordinate.index(self.width)].is_none()
    }

    // ========== Placement ==========

    /// Place a piece on an empty cell.
    ///
    /// Fails with `InvalidMove` if the coordinate is off the board or already
    /// occupied; the board is left untouched in that case.
    pub fn place(&mut self, coordinate: Coordinate, piece: Piece) -> Result<()> {
        if !self.contains(coordinate) {
            return Err(Error::out_of_range(coordinate));
        }
        let cell = &mut self.cells[coordinate.index(self.width)];
        if cell.is_some() {
            return Err(Error::occupied(coordinate));
        }
        *cell = Some(piece);
        Ok(())
    }

    /// Return a copy of this board with one more piece placed.
    pub fn with_piece(&self, coordinate: Coordinate, piece: Piece) -> Result<Board> {
        let mut next = self.clone();
        next.place(coordinate, piece)?;
        Ok(next)
    }

    // ========== Occupancy ==========

    /// Check if every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check if no cell is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells holding the given piece.
    pub fn count(&self, piece: &Piece) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.as_ref() == Some(piece))
            .count()
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.cells.len()).map(|i| Coordinate::from_index(i, self.width))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Coordinate::from_index(i, self.width))
    }

    /// Occupied cells with their pieces, in row-major order.
    pub fn placements(&self) -> impl Iterator<Item = (Coordinate, &Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref()
                .map(|piece| (Coordinate::from_index(i, self.width), piece))
        })
    }

    /// Cells as a row-major slice.
    #[inline]
    pub fn cells(&self) -> &[Option<Piece>] {
        &self.cells
    }

    /// Owned row-major sequence of all `width²` cells.
    pub fn to_sequence(&self) -> Vec<Option<Piece>> {
        self.cells.clone()
    }

    // ========== Line Detection ==========

    /// Number of candidate lines: every row, every column and both diagonals.
    #[inline]
    pub fn line_count(&self) -> usize {
        2 * self.width + 2
    }

    /// First cell index and stride of candidate line `index`.
    ///
    /// Lines are numbered rows first (top to bottom), then columns (left to
    /// right), then the main diagonal, then the anti-diagonal. Every line has
    /// `width` cells at `start + k * step`.
    #[inline]
    fn line_span(&self, index: usize) -> Option<(usize, usize)> {
        let w = self.width;
        match index {
            i if i < w => Some((i * w, 1)),
            i if i < 2 * w => Some((i - w, w)),
            i if i == 2 * w => Some((0, w + 1)),
            i if i == 2 * w + 1 => Some((w.saturating_sub(1), w.saturating_sub(1))),
            _ => None,
        }
    }

    /// Row-major cell indices of candidate line `index`; empty past the last line.
    fn line_cells(&self, index: usize) -> impl Iterator<Item = usize> {
        let (start, step, len) = match self.line_span(index) {
            Some((start, step)) => (start, step, self.width),
            None => (0, 0, 0),
        };
        (0..len).map(move |k| start + k * step)
    }

    /// Coordinates of candidate line `index`: rows, then columns, then the
    /// main and anti-diagonal. Empty past the last line.
    pub fn line(&self, index: usize) -> Vec<Coordinate> {
        self.line_cells(index)
            .map(|i| Coordinate::from_index(i, self.width))
            .collect()
    }

    /// All candidate lines in numbering order.
    pub fn lines(&self) -> impl Iterator<Item = Vec<Coordinate>> + '_ {
        (0..self.line_count()).map(|i| self.line(i))
    }

    /// The piece owning line `index`, if a single piece fills all of it.
    fn line_owner(&self, index: usize) -> Option<&Piece> {
        let mut cells = self.line_cells(index).map(|i| self.cells[i].as_ref());
        let owner = cells.next()??;
        cells.all(|cell| cell == Some(owner)).then_some(owner)
    }

    /// The first fully-owned line in numbering order, if any.
    ///
    /// Under alternating play at most one piece can own lines, but several
    /// lines may be owned at once (e.g. a row and a diagonal completed by the
    /// same placement); the lowest-numbered one is reported.
    pub fn winning_line(&self) -> Option<Line> {
        (0..self.line_count()).find_map(|i| {
            self.line_owner(i).map(|piece| Line {
                piece: piece.clone(),
                coordinates: self.line(i),
            })
        })
    }

    /// The piece owning a full line, if any.
    pub fn line_winner(&self) -> Option<&Piece> {
        (0..self.line_count()).find_map(|i| self.line_owner(i))
    }

    /// Check if the board is full and nobody owns a line.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.line_winner().is_none()
    }

    // ========== Symmetry & Canonicalization ==========

    /// Source coordinate read by transformation `t` when filling `(row, column)`.
    ///
    /// ```text
    /// 0 identity       4 reflect left-right
    /// 1 rotate 90° cw  5 reflect top-bottom
    /// 2 rotate 180°    6 reflect main diagonal
    /// 3 rotate 270° cw 7 reflect anti-diagonal
    /// ```
    fn transform_source(&self, t: usize, row: usize, column: usize) -> Coordinate {
        let last = self.width - 1;
        let (r, c) = match t {
            0 => (row, column),
            1 => (last - column, row),
            2 => (last - row, last - column),
            3 => (column, last - row),
            4 => (row, last - column),
            5 => (last - row, column),
            6 => (column, row),
            7 => (last - column, last - row),
            _ => unreachable!("transform index {t} out of range"),
        };
        Coordinate::new(r, c)
    }

    /// Apply one of the [`SYMMETRIES`] transformations, returning a new board.
    pub fn transform(&self, t: usize) -> Board {
        debug_assert!(t < SYMMETRIES);
        let cells = self
            .coordinates()
            .map(|c| {
                let source = self.transform_source(t, c.row, c.column);
                self.cells[source.index(self.width)].clone()
            })
            .collect();
        Board {
            width: self.width,
            cells,
        }
    }

    /// The canonical form of this board.
    ///
    /// This is the transformation whose row-major cells compare least, so
    /// symmetric positions map to the same board. Line ownership, fullness and
    /// piece counts are all preserved by the transformations.
    pub fn canonical(&self) -> Board {
        if self.width == 0 {
            return self.clone();
        }
        let mut best = self.clone();
        for t in 1..SYMMETRIES {
            let candidate = self.transform(t);
            if candidate.cells < best.cells {
                best = candidate;
            }
        }
        best
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(STANDARD_WIDTH)
    }
}
