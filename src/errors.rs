//! # Rejections for list-query parameters
//!
//! The normalization core is total and never fails. Errors only appear at the
//! HTTP edge, when the query string cannot be decoded or when strict
//! validation is enabled in [`crate::FilterConfig`].
//!
//! Both cases become an [`ApiError`], which renders as a JSON body:
//!
//! ```json
//! {"error": "Validation failed", "details": ["pageSize: Must be at most 100"]}
//! ```
//!
//! Rejections are logged with `tracing` at debug level; install a subscriber
//! in the application to see them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use crate::validation::ValidationErrors;

/// Rejection returned by the [`crate::NormalizedFilter`] extractor
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - The query string could not be decoded
    BadRequest {
        /// User-facing error message
        message: String,
    },

    /// 422 Unprocessable Entity - Strict validation failed
    ValidationFailed {
        /// User-facing validation errors
        errors: Vec<String>,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation_failed(errors: Vec<String>) -> Self {
        Self::ValidationFailed { errors }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// User-facing message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest { message } => message.clone(),
            Self::ValidationFailed { errors } => {
                if errors.len() == 1 {
                    errors[0].clone()
                } else {
                    format!("Validation failed: {}", errors.join(", "))
                }
            }
        }
    }
}

/// Error response sent to clients
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::debug!(
            error = %self.user_message(),
            status = %status,
            "Rejected list query"
        );

        let response = match self {
            Self::ValidationFailed { errors } => ErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(errors),
            },
            Self::BadRequest { message } => ErrorResponse {
                error: message,
                details: None,
            },
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed {
            errors: errors.errors().iter().map(ToString::to_string).collect(),
        }
    }
}
