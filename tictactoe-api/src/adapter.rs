//! Translation between the web board format and the core game types.
//!
//! The web client names cells by row and column labels, e.g. `"top-left"` or
//! `"middle-center"`, and marks empty cells with an empty string. The adapter
//! validates the request shape, builds a [`GameState`], lets the
//! [`PerfectPlayer`] answer unless the game is already over, and reports the
//! resulting board.

use std::collections::HashSet;

use tictactoe_core::{Board, Coordinate, GameState, Piece, Status};
use tictactoe_solver::PerfectPlayer;
use tracing::debug;

use crate::error::AdapterError;
use crate::models::{MoveRequest, MoveResponse, SpaceModel, StatusModel};

/// The web board is always 3x3.
pub const BOARD_WIDTH: usize = 3;

/// Row labels, top to bottom.
pub const ROWS: [&str; BOARD_WIDTH] = ["top", "middle", "bottom"];

/// Column labels, left to right.
pub const COLUMNS: [&str; BOARD_WIDTH] = ["left", "center", "right"];

/// Value of an empty cell.
const EMPTY: &str = "";

/// Convert a cell id such as `"middle-right"` to a coordinate.
pub fn id_to_coordinate(id: &str) -> Option<Coordinate> {
    let (row, column) = id.split_once('-')?;
    let row = ROWS.iter().position(|label| *label == row)?;
    let column = COLUMNS.iter().position(|label| *label == column)?;
    Some(Coordinate::new(row, column))
}

/// Convert a coordinate to its cell id, or `None` if it is off the board.
pub fn coordinate_to_id(coordinate: Coordinate) -> Option<String> {
    let row = ROWS.get(coordinate.row)?;
    let column = COLUMNS.get(coordinate.column)?;
    Some(format!("{}-{}", row, column))
}

/// Every (coordinate, id) pair in row-major order.
fn labelled_cells() -> impl Iterator<Item = (Coordinate, String)> {
    ROWS.iter().enumerate().flat_map(|(r, row)| {
        COLUMNS
            .iter()
            .enumerate()
            .map(move |(c, column)| (Coordinate::new(r, c), format!("{}-{}", row, column)))
    })
}

/// Answers move requests for the 3x3 web board.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeSquaredBoardAdapter {
    player: PerfectPlayer,
}

impl ThreeSquaredBoardAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_width(&self) -> usize {
        BOARD_WIDTH
    }

    /// Validate a request, play the perfect reply if the game is still
    /// running, and describe the resulting position.
    pub fn get_response(&self, request: &MoveRequest) -> Result<MoveResponse, AdapterError> {
        let (player, opponent) = self.validate(request)?;
        let mut state = self.create_game_state(player, opponent, request)?;

        if !state.over() {
            state = self.player.take_turn(&state)?;
        }

        let response = self.create_response(&state);
        debug!(status = ?response.status, board = %state.board(), "move request answered");
        Ok(response)
    }

    /// Check request shape before anything reaches the core.
    fn validate(&self, request: &MoveRequest) -> Result<(Piece, Piece), AdapterError> {
        let (Some(player), Some(opponent)) = (&request.player_piece, &request.opponent_piece)
        else {
            return Err(AdapterError::invalid_input(
                "Both player_piece and opponent_piece are required.",
            ));
        };
        if player.is_empty() || opponent.is_empty() {
            return Err(AdapterError::invalid_input("Provided pieces must not be blank."));
        }
        if player == opponent {
            return Err(AdapterError::invalid_input(
                "Provided pieces need to be different.",
            ));
        }

        let expected = self.board_width() * self.board_width();
        if request.board.len() != expected {
            return Err(AdapterError::invalid_input(format!(
                "Board given contains {} spaces, expected {}.",
                request.board.len(),
                expected
            )));
        }

        for space in &request.board {
            if space.value != *player && space.value != *opponent && space.value != EMPTY {
                return Err(AdapterError::invalid_input(format!(
                    "Pieces in board must be either {}, {} or blank.",
                    player, opponent
                )));
            }
        }

        Ok((Piece::new(player), Piece::new(opponent)))
    }

    fn create_game_state(
        &self,
        player: Piece,
        opponent: Piece,
        request: &MoveRequest,
    ) -> Result<GameState, AdapterError> {
        let mut board = Board::new(self.board_width());
        let mut seen = HashSet::with_capacity(request.board.len());

        for space in &request.board {
            let coordinate = id_to_coordinate(&space.id).ok_or_else(|| {
                AdapterError::invalid_input(format!("Unknown space id {:?}.", space.id))
            })?;
            if !seen.insert(coordinate) {
                return Err(AdapterError::invalid_input(format!(
                    "Space {:?} appears more than once.",
                    space.id
                )));
            }
            if space.value == EMPTY {
                continue;
            }
            let piece = if space.value == player.as_str() {
                player.clone()
            } else {
                opponent.clone()
            };
            board.place(coordinate, piece)?;
        }

        Ok(GameState::with_board(player, opponent, board)?)
    }

    fn create_response(&self, state: &GameState) -> MoveResponse {
        let winning_line = state.winning_line().unwrap_or_default();

        let board = labelled_cells()
            .zip(state.board().cells())
            .map(|((coordinate, id), cell)| SpaceModel {
                winning_space: winning_line.contains(&coordinate),
                id,
                value: cell
                    .as_ref()
                    .map(|piece| piece.as_str().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        let status = match state.status() {
            Status::Active => StatusModel::Active,
            Status::Draw => StatusModel::Draw,
            Status::Win(winner) => StatusModel::Win {
                winner: winner.to_string(),
            },
        };

        MoveResponse {
            player_piece: state.player().to_string(),
            opponent_piece: state.opponent().to_string(),
            board,
            status,
        }
    }
}
