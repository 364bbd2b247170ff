//! Tic-tac-toe Web API
//!
//! Serves the perfect reply for a posted 3x3 board:
//!
//! - `POST /move` takes the board as labelled cells and returns it after the
//!   computer's move, with the game status and the winning line marked
//! - `GET /health` reports liveness

pub mod adapter;
pub mod error;
pub mod models;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::instrument;

pub use adapter::ThreeSquaredBoardAdapter;
pub use error::AdapterError;
use models::{HealthModel, MoveRequest, MoveResponse};

// =============================================================================
// App State
// =============================================================================

struct AppStateInner {
    adapter: ThreeSquaredBoardAdapter,
}

type AppState = Arc<AppStateInner>;

// =============================================================================
// API Endpoints
// =============================================================================

#[instrument(level = "debug", skip_all)]
async fn make_move(
    State(state): State<AppState>,
    request: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, AdapterError> {
    let Json(request) = request?;
    let response = state.adapter.get_response(&request)?;
    Ok(Json(response))
}

async fn health() -> Json<HealthModel> {
    Json(HealthModel {
        status: "ok".to_string(),
    })
}

// =============================================================================
// Router
// =============================================================================

/// Build the application router with permissive CORS.
pub fn router() -> Router {
    let state: AppState = Arc::new(AppStateInner {
        adapter: ThreeSquaredBoardAdapter::new(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/move", post(make_move))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}
