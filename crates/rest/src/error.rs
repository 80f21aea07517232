//! Error types for the sizing REST API.
//!
//! Calculation failures are not HTTP errors: they travel inside the `200 OK`
//! envelope as a status message. [`RestError`] covers everything else, and renders
//! as a small JSON body:
//!
//! ```json
//! { "error": { "code": "not-found", "message": "Unknown family 'disk'" } }
//! ```
//!
//! # Error Mapping
//!
//! | Variant | HTTP Status | Code |
//! |---------|-------------|------|
//! | NotFound | 404 | not-found |
//! | InternalError | 500 | exception |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The primary error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// Requested item does not exist (HTTP 404).
    #[error("Not found: {what}")]
    NotFound {
        /// What was looked up.
        what: String,
    },

    /// Internal server error (HTTP 500).
    #[error("Internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

/// Result type for REST handlers.
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the short machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not-found",
            RestError::InternalError { .. } => "exception",
        }
    }

    fn details(&self) -> String {
        match self {
            RestError::NotFound { what } => what.clone(),
            RestError::InternalError { message } => message.clone(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = create_error_body(self.code(), &self.details());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Creates the JSON error body.
fn create_error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::InternalError {
            message: format!("Failed to serialize response: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::NotFound {
                what: "family 'disk'".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::InternalError {
                message: "x".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        let err = RestError::NotFound {
            what: "family 'disk'".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: family 'disk'");
    }

    #[test]
    fn test_error_body_shape() {
        let body = create_error_body("not-found", "Unknown family 'disk'");
        assert_eq!(body["error"]["code"], "not-found");
        assert_eq!(body["error"]["message"], "Unknown family 'disk'");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let rest: RestError = err.into();
        assert_eq!(rest.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rest.code(), "exception");
    }

    #[test]
    fn test_into_response_status() {
        let response = RestError::NotFound {
            what: "Unknown family 'disk'".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
