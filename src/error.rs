use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::ScoringError;

/// Application-level errors
///
/// Generation failures never appear here: the explainer recovers them.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Scoring(ScoringError::EmptyHistory) => StatusCode::BAD_REQUEST,
            AppError::Scoring(ScoringError::UnknownItem(_)) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::from(ScoringError::EmptyHistory), StatusCode::BAD_REQUEST),
            (AppError::from(ScoringError::UnknownItem(ItemId(3))), StatusCode::NOT_FOUND),
            (AppError::InvalidInput("bad".to_string()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_scoring_message_passes_through() {
        let error = AppError::from(ScoringError::UnknownItem(ItemId(42)));
        assert_eq!(error.to_string(), "Unknown catalog item 42");
    }
}
