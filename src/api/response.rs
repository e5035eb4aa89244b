//! Response types for the payroll API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the small bodies returned by informational
//! endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::TaxBracket;
use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid input error response.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new("INVALID_INPUT", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::InvalidInput { field, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("Field '{}' must be a decimal amount with at most 2 places", field),
                ),
            ),
            EngineError::NotFound { .. } => {
                ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
            }
            EngineError::ValidationError { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(message),
            ),
            EngineError::Storage { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            ),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the service is serving.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
    /// Engine version.
    pub version: String,
}

impl HealthResponse {
    /// The response for a running service.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Payroll API is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Body of `GET /api/tax-brackets`.
#[derive(Debug, Clone, Serialize)]
pub struct TaxBracketsResponse {
    /// The annual income tax schedule, lowest bracket first.
    pub brackets: &'static [TaxBracket],
}
