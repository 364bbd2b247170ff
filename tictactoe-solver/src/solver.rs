//! Perfect-play minimax search with a transposition table.

use std::collections::HashMap;

use tictactoe_core::{Board, Coordinate, Error, GameState, Piece, Result};
use tracing::{debug, instrument};

use crate::stats::SearchStats;

/// Outcome values, from the perspective of the piece to move at the root
pub const WIN: i8 = 1;
pub const DRAW: i8 = 0;
pub const LOSS: i8 = -1;

/// Result of searching one position.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The chosen move
    pub coordinate: Coordinate,
    /// Game-theoretic value of the position for the side to move
    pub score: i8,
    pub stats: SearchStats,
}

/// Chooses moves that guarantee the best achievable outcome for the side to
/// move, assuming both sides play perfectly afterwards.
///
/// Scoring has no depth discount: a fast win, a slow win and a win that is
/// merely forced all score [`WIN`]. Among equally scored moves the first one
/// in row-major order is chosen, so results are reproducible.
#[derive(Clone, Copy, Debug)]
pub struct PerfectPlayer {
    /// Key the transposition table by canonical (symmetry-reduced) board
    symmetry: bool,
}

impl PerfectPlayer {
    pub fn new() -> Self {
        Self { symmetry: true }
    }

    /// A player whose transposition table is keyed by the raw board.
    pub fn without_symmetry() -> Self {
        Self { symmetry: false }
    }

    /// Play one move, returning the successor state.
    ///
    /// Fails with `InvalidMove` if the game is already over.
    pub fn take_turn(&self, state: &GameState) -> Result<GameState> {
        let report = self.search(state)?;
        state.apply(report.coordinate)
    }

    /// The move [`take_turn`](Self::take_turn) would play.
    pub fn choose_move(&self, state: &GameState) -> Result<Coordinate> {
        self.search(state).map(|report| report.coordinate)
    }

    /// Search a non-terminal position.
    #[instrument(level = "debug", skip_all, fields(board = %state.board()))]
    pub fn search(&self, state: &GameState) -> Result<SearchReport> {
        if state.over() {
            return Err(Error::game_over());
        }

        let mut search = Search::new(state.piece_to_move().clone(), self.symmetry);
        let mut best: Option<(Coordinate, i8)> = None;

        for coordinate in state.legal_moves() {
            let child = state.apply(coordinate)?;
            let score = search.score(&child, 1)?;
            // Strict comparison keeps the first of equally scored moves
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((coordinate, score));
            }
            if score == WIN {
                break;
            }
        }

        let (coordinate, score) = best.ok_or_else(Error::game_over)?;
        let stats = search.finish();
        debug!(piece = %state.piece_to_move(), %coordinate, score, "perfect move chosen");
        stats.log_summary();

        Ok(SearchReport {
            coordinate,
            score,
            stats,
        })
    }

    /// Game-theoretic value of a position for its piece to move.
    ///
    /// Terminal positions are allowed: a finished game scores [`LOSS`] if the
    /// other side completed a line and [`DRAW`] otherwise.
    pub fn evaluate(&self, state: &GameState) -> Result<i8> {
        let mut search = Search::new(state.piece_to_move().clone(), self.symmetry);
        let score = search.score(state, 0)?;
        search.finish().log_summary();
        Ok(score)
    }
}

impl Default for PerfectPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// State for one recursive minimax run.
struct Search {
    /// The piece whose outcome is maximised
    maximizer: Piece,
    symmetry: bool,
    /// Transposition table: board (canonical if `symmetry`) -> exact score
    table: HashMap<Board, i8>,
    stats: SearchStats,
}

impl Search {
    fn new(maximizer: Piece, symmetry: bool) -> Self {
        Self {
            maximizer,
            symmetry,
            table: HashMap::new(),
            stats: SearchStats::new(),
        }
    }

    fn key(&self, board: &Board) -> Board {
        if self.symmetry {
            board.canonical()
        } else {
            board.clone()
        }
    }

    /// Exact minimax score of `state` for the maximizer.
    ///
    /// Every value stored in the table is exact because nothing is pruned, so
    /// a cached score can be reused from any parent.
    fn score(&mut self, state: &GameState, depth: u64) -> Result<i8> {
        self.stats.record_depth(depth);

        let key = self.key(state.board());
        if let Some(&score) = self.table.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(score);
        }

        let score = if let Some(winner) = state.board().line_winner() {
            let score = if *winner == self.maximizer { WIN } else { LOSS };
            self.stats.record_terminal(score);
            score
        } else if state.board().is_full() {
            self.stats.record_terminal(DRAW);
            DRAW
        } else {
            let maximizing = *state.piece_to_move() == self.maximizer;
            let mut best = if maximizing { i8::MIN } else { i8::MAX };
            for coordinate in state.legal_moves() {
                let child = state.apply(coordinate)?;
                let child_score = self.score(&child, depth + 1)?;
                best = if maximizing {
                    best.max(child_score)
                } else {
                    best.min(child_score)
                };
            }
            self.stats.positions_evaluated += 1;
            best
        };

        self.table.insert(key, score);
        Ok(score)
    }

    fn finish(mut self) -> SearchStats {
        self.stats.finish(self.table.len());
        self.stats
    }
}
