//! HTTP round trips through the full router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

const IDS: [&str; 9] = [
    "top-left",
    "top-center",
    "top-right",
    "middle-left",
    "middle-center",
    "middle-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

/// JSON board from a 9-character row-major layout (`.` for empty).
fn board(layout: &str) -> Value {
    IDS.iter()
        .zip(layout.chars())
        .map(|(id, symbol)| {
            let value = if symbol == '.' {
                String::new()
            } else {
                symbol.to_string()
            };
            json!({"id": id, "value": value})
        })
        .collect()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = tictactoe_api::router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_move(body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_move_completes_winning_line() {
    let (status, body) = post_move(json!({
        "player_piece": "X",
        "opponent_piece": "O",
        "board": board("XX.OO.O..")
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "win");
    assert_eq!(body["winner"], "X");
    assert_eq!(body["player_piece"], "X");
    assert_eq!(body["opponent_piece"], "O");

    let cells = body["board"].as_array().unwrap();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells[2], json!({"winning_space": true, "id": "top-right", "value": "X"}));
    assert_eq!(cells[3], json!({"id": "middle-left", "value": "O"}));
}

#[tokio::test]
async fn test_move_on_empty_board() {
    let (status, body) = post_move(json!({
        "player_piece": "X",
        "opponent_piece": "O",
        "board": board(".........")
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert!(body.get("winner").is_none());
    let placed: Vec<&Value> = body["board"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|cell| cell["value"] == "X")
        .collect();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0]["id"], "top-left");
}

#[tokio::test]
async fn test_invalid_input_is_bad_request() {
    let (status, body) = post_move(json!({
        "player_piece": "X",
        "opponent_piece": "X",
        "board": board(".........")
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Provided pieces need to be different.");

    let (status, _) = post_move(json!({
        "opponent_piece": "O",
        "board": board(".........")
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    // No board at all
    let (status, body) = post_move(json!({
        "player_piece": "X",
        "opponent_piece": "O"
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("board"));

    // A cell value that is not a string
    let mut cells = board(".........");
    cells[0]["value"] = Value::Null;
    let (status, body) = post_move(json!({
        "player_piece": "X",
        "opponent_piece": "O",
        "board": cells
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    // Not JSON
    let request = Request::builder()
        .method("POST")
        .uri("/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_unbalanced_board_is_unprocessable() {
    let (status, body) = post_move(json!({
        "player_piece": "X",
        "opponent_piece": "O",
        "board": board("XXX......")
    }))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("invalid configuration"));
}
