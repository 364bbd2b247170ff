//! Core error types.
//!
//! Every error is a deterministic function of the input that caused it, so
//! none of them are worth retrying.

use derive_more::{Display, Error};

use crate::{Coordinate, Piece};

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`Board`](crate::Board), [`GameState`](crate::GameState)
/// and anything searching over them.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// A placement that the rules do not allow.
    #[display("invalid move: {reason}")]
    InvalidMove {
        reason: MoveRejection,
    },

    /// The two pieces, or the board handed over with them, do not describe a
    /// game that can be played.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        reason: ConfigRejection,
    },

    /// A winner or winning line was requested from a board that has none.
    #[display("no winner on the board")]
    NoWinner,
}

impl Error {
    pub(crate) fn out_of_range(coordinate: Coordinate) -> Error {
        Error::InvalidMove {
            reason: MoveRejection::OutOfRange(coordinate),
        }
    }

    pub(crate) fn occupied(coordinate: Coordinate) -> Error {
        Error::InvalidMove {
            reason: MoveRejection::Occupied(coordinate),
        }
    }

    /// The game is over, so nobody may move.
    pub fn game_over() -> Error {
        Error::InvalidMove {
            reason: MoveRejection::GameOver,
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveRejection {
    #[display("{_0} is outside the board")]
    OutOfRange(Coordinate),
    #[display("{_0} is already occupied")]
    Occupied(Coordinate),
    #[display("the game is already over")]
    GameOver,
}

/// Why a game configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigRejection {
    #[display("pieces must not be blank")]
    BlankPiece,
    #[display("player and opponent both use the piece {_0}")]
    SamePieces(Piece),
    #[display("the board holds {_0}, which belongs to neither side")]
    UnexpectedPiece(Piece),
    #[display("player has {player} pieces on the board but opponent has {opponent}")]
    UnbalancedTurns { player: usize, opponent: usize },
}
