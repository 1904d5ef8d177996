//! HTTP API errors
//!
//! Maps catalog error kinds to transport status codes. `NotFound` on a
//! filtered query is an expected outcome and maps to a plain 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::vehicle::VehicleError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Query parameter failed to parse at the boundary
    #[error("invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// A catalog outcome bubbled up from the core
    #[error("{0}")]
    Vehicle(#[from] VehicleError),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Vehicle(err) => match err {
                VehicleError::FieldRequired { .. }
                | VehicleError::InvalidFieldValue { .. }
                | VehicleError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
                VehicleError::IdAlreadyExists
                | VehicleError::RegistrationAlreadyExists
                | VehicleError::AlreadyExists { .. } => StatusCode::CONFLICT,
                VehicleError::NotFound => StatusCode::NOT_FOUND,
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
