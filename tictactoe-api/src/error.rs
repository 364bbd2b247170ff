//! Adapter error types.

use axum::{
    extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
    response::Response, Json,
};
use derive_more::{Display, Error};

use crate::models::ErrorModel;

/// Errors raised while translating a request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AdapterError {
    /// The request does not have the expected shape or values.
    #[display("invalid input: {message}")]
    InvalidInput { message: String },

    /// The request is well-formed but describes a position the core rejects.
    #[display("{source}")]
    Core { source: tictactoe_core::Error },
}

impl AdapterError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AdapterError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AdapterError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AdapterError::Core { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<tictactoe_core::Error> for AdapterError {
    fn from(source: tictactoe_core::Error) -> Self {
        AdapterError::Core { source }
    }
}

/// A body that is not JSON, or JSON of the wrong shape, is bad input like any
/// other malformed request.
impl From<JsonRejection> for AdapterError {
    fn from(rejection: JsonRejection) -> Self {
        AdapterError::invalid_input(rejection.body_text())
    }
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        let detail = match &self {
            AdapterError::InvalidInput { message } => message.clone(),
            AdapterError::Core { source } => source.to_string(),
        };
        (self.status_code(), Json(ErrorModel { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{ConfigRejection, Piece};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AdapterError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        let core: AdapterError = tictactoe_core::Error::NoWinner.into();
        assert_eq!(core.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_core_error_keeps_source() {
        let err: AdapterError = tictactoe_core::Error::InvalidConfiguration {
            reason: ConfigRejection::SamePieces(Piece::new("X")),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: player and opponent both use the piece X"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
