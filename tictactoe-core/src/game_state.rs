//! Game state: a board plus the two competing pieces.

use tracing::trace;

use crate::{Board, ConfigRejection, Coordinate, Error, Piece, Result};

/// Where a game stands.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    /// Moves remain and nobody has won.
    Active,
    /// The board is full and nobody owns a line.
    Draw,
    /// The piece owns a full line.
    Win(Piece),
}

/// A board together with the player and opponent pieces.
///
/// # Turn order
///
/// The piece to move is derived from occupancy alone: whichever piece has
/// fewer placements moves next, and when the counts are equal the configured
/// **player** piece moves. This rule is fixed; the search relies on it to know
/// which side it is playing.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    player: Piece,
    opponent: Piece,
    board: Board,
}

impl GameState {
    /// Start a game on an empty standard board.
    pub fn new(player: Piece, opponent: Piece) -> Result<GameState> {
        GameState::with_board(player, opponent, Board::default())
    }

    /// Wrap an existing board.
    ///
    /// Fails with `InvalidConfiguration` if either piece is blank, if the
    /// pieces are equal, if the board holds a third piece, or if one side has
    /// more than one extra placement.
    pub fn with_board(player: Piece, opponent: Piece, board: Board) -> Result<GameState> {
        if player.as_str().is_empty() || opponent.as_str().is_empty() {
            return Err(Error::InvalidConfiguration {
                reason: ConfigRejection::BlankPiece,
            });
        }

        if player == opponent {
            return Err(Error::InvalidConfiguration {
                reason: ConfigRejection::SamePieces(player),
            });
        }

        if let Some((_, stranger)) = board
            .placements()
            .find(|(_, piece)| **piece != player && **piece != opponent)
        {
            return Err(Error::InvalidConfiguration {
                reason: ConfigRejection::UnexpectedPiece(stranger.clone()),
            });
        }

        let player_count = board.count(&player);
        let opponent_count = board.count(&opponent);
        if player_count.abs_diff(opponent_count) > 1 {
            return Err(Error::InvalidConfiguration {
                reason: ConfigRejection::UnbalancedTurns {
                    player: player_count,
                    opponent: opponent_count,
                },
            });
        }

        Ok(GameState {
            player,
            opponent,
            board,
        })
    }

    /// The configured player piece (moves first on ties).
    #[inline]
    pub fn player(&self) -> &Piece {
        &self.player
    }

    /// The configured opponent piece.
    #[inline]
    pub fn opponent(&self) -> &Piece {
        &self.opponent
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece that moves next.
    pub fn piece_to_move(&self) -> &Piece {
        if self.board.count(&self.opponent) < self.board.count(&self.player) {
            &self.opponent
        } else {
            &self.player
        }
    }

    // ========== Outcome Queries ==========

    /// Check if somebody owns a full line.
    pub fn winner_exists(&self) -> bool {
        self.board.line_winner().is_some()
    }

    /// The winning piece. Fails with `NoWinner` if nobody has won.
    pub fn winner(&self) -> Result<&Piece> {
        self.board.line_winner().ok_or(Error::NoWinner)
    }

    /// Coordinates of the winning line. Fails with `NoWinner` if nobody has won.
    pub fn winning_line(&self) -> Result<Vec<Coordinate>> {
        self.board
            .winning_line()
            .map(|line| line.coordinates)
            .ok_or(Error::NoWinner)
    }

    /// Check if the board is full with no winner.
    pub fn draw(&self) -> bool {
        self.board.is_draw()
    }

    /// Check if play has ended, by a win or a draw.
    pub fn over(&self) -> bool {
        self.winner_exists() || self.board.is_full()
    }

    pub fn status(&self) -> Status {
        match self.board.line_winner() {
            Some(piece) => Status::Win(piece.clone()),
            None if self.board.is_full() => Status::Draw,
            None => Status::Active,
        }
    }

    // ========== Moves ==========

    /// Empty coordinates in row-major order.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        self.board.empty_coordinates().collect()
    }

    /// Place the piece to move at `coordinate`, returning the successor state.
    ///
    /// `self` is not modified. Fails with `InvalidMove` if the coordinate is
    /// occupied or off the board. Must not be called once the game is over;
    /// that precondition is left to the caller.
    pub fn apply(&self, coordinate: Coordinate) -> Result<GameState> {
        let mover = self.piece_to_move();
        trace!(%coordinate, piece = %mover, "applying move");
        let board = self.board.with_piece(coordinate, mover.clone())?;
        Ok(GameState {
            player: self.player.clone(),
            opponent: self.opponent.clone(),
            board,
        })
    }
}
