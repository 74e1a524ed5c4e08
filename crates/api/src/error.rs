//! Unified error handling for the API.
//!
//! Handlers return [`Result`]; the [`ApiError`] conversion to a response
//! owns the status-code mapping and the JSON error bodies, so every failure
//! leaves the service in the same `{"error": ...}` shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use orderdesk_core::FieldError;

use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed schema validation. Carries every violated
    /// field, not just the first.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// A customer with the submitted email already exists.
    #[error("Email already exists")]
    DuplicateEmail,

    /// A submitted identifier is not a well-formed ObjectId. Carries the
    /// name of the offending field.
    #[error("invalid {0}")]
    InvalidId(&'static str),

    /// The referenced entity does not exist. Carries the client-facing
    /// message verbatim.
    #[error("{0}")]
    NotFound(&'static str),

    /// The document store failed or is unreachable.
    #[error("storage unavailable: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(ref err) = self {
            tracing::error!(error = %err, "store failure while handling request");
        }

        let status = match &self {
            Self::Validation(_) | Self::DuplicateEmail | Self::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = match self {
            Self::Validation(details) => json!({"error": "Validation failed", "details": details}),
            // Backend detail goes to the log, not to the client
            Self::Store(_) => json!({"error": "storage unavailable"}),
            other => json!({"error": other.to_string()}),
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience alias for handler return types.
pub type Result<T> = std::result::Result<T, ApiError>;
