//! Error envelope returned to gateway callers

use http::StatusCode;
use lambda_http::{Body, Error, Response};
use serde::Serialize;

use crate::{media_storage::BucketError, request::RequestError, types::json_response};

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: &'static str,
}

/// Application error: a status code and a caller-safe message
///
/// Causes are logged where the error is created and never reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    /// Generic 500 used when nothing more specific applies
    #[must_use]
    pub const fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// HTTP status this error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Message returned to the caller
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Renders the error as a `{"message": ...}` JSON response
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot be built
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.status, self.message),
            500..=599 => tracing::error!("Server error: {} - {}", self.status, self.message),
            _ => {}
        }

        json_response(
            self.status,
            &ErrorBody {
                message: self.message,
            },
        )
    }
}

/// Convert request routing errors to application errors
impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        tracing::warn!("Rejected request: {err}");
        Self::new(StatusCode::BAD_REQUEST, "Invalid request")
    }
}

/// Convert bucket errors to application errors
impl From<BucketError> for AppError {
    fn from(err: BucketError) -> Self {
        match &err {
            BucketError::InvalidInput(msg) => {
                tracing::warn!("Invalid input: {msg}");
                Self::new(StatusCode::BAD_REQUEST, "Invalid input provided")
            }
            BucketError::ConfigError(msg) => {
                tracing::error!("Configuration error: {msg}");
                Self::internal()
            }
            BucketError::S3Error(msg) => {
                tracing::error!("S3 error: {msg}");
                Self::internal()
            }
        }
    }
}
