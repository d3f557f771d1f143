use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::loader::ResourceError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid or missing query parameter
    InvalidQueryParam(String),
    /// Resource name failed validation
    InvalidResourceName(String),
    /// Named resource or static page does not exist
    ResourceNotFound(String),
    /// Unexpected server-side failure
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
            ApiError::InvalidResourceName(name) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Invalid resource name '{}': expected slash-separated segments of letters, digits, '-' or '_'",
                    name
                ),
            ),
            ApiError::ResourceNotFound(name) => {
                (StatusCode::NOT_FOUND, format!("Resource not found: {}", name))
            }
            ApiError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<ResourceError> for ApiError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::InvalidName(name) => ApiError::InvalidResourceName(name),
            ResourceError::NotFound(name) => ApiError::ResourceNotFound(name),
            other => ApiError::Internal(other.into()),
        }
    }
}
