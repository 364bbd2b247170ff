//! JSON request and response models.

use serde::{Deserialize, Serialize};

/// A move request: the two pieces and the board as labelled cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(default)]
    pub player_piece: Option<String>,
    #[serde(default)]
    pub opponent_piece: Option<String>,
    pub board: Vec<SpaceRequest>,
}

/// One labelled cell, e.g. `{"id": "top-left", "value": "X"}`. An empty
/// string marks an empty cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceRequest {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResponse {
    pub player_piece: String,
    pub opponent_piece: String,
    /// All cells in row-major order
    pub board: Vec<SpaceModel>,
    #[serde(flatten)]
    pub status: StatusModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceModel {
    /// Present (and true) only on cells of the winning line
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub winning_space: bool,
    pub id: String,
    pub value: String,
}

/// Serialized as `"status"` plus, on a win, `"winner"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusModel {
    Active,
    Draw,
    Win { winner: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorModel {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct HealthModel {
    pub status: String,
}
