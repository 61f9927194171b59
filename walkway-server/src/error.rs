use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use walkway_core::Error as CoreError;

/// User-facing API failure with an HTTP status
#[derive(Debug)]
pub enum ApiError {
    /// The optimization problem is infeasible
    NoPath,
    UnknownLocation(String),
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownLocation(location) => ApiError::UnknownLocation(location),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoPath => (
                StatusCode::NOT_FOUND,
                "No path satisfies the given constraints".to_string(),
            ),
            ApiError::UnknownLocation(location) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown location: {location}"),
            ),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
