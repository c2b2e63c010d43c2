//! HTTP error responses for the verification API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::VerifyError;

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters: 'name' and 'yob'";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// API error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller left out input it must supply. Not retried.
    BadRequest(String),
    /// Something failed while looking up records. Details stay in the server log.
    InternalError,
}

impl ApiError {
    pub fn missing_parameters() -> Self {
        ApiError::BadRequest(MISSING_PARAMETERS_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message) => message,
            ApiError::InternalError => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status(), self.message())
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        tracing::error!("An error occurred: {}", err);
        ApiError::InternalError
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
