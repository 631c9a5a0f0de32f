//! Typed error handling for the GrubDash API
//!
//! Every request that fails surfaces exactly one [`ApiError`]: the first check
//! in its validation chain that rejected it, or an internal failure. Each
//! variant carries the client-facing message and maps to a fixed HTTP status.
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: missing or malformed payload fields (400)
//! - [`ApiError::Conflict`]: payload disagrees with the stored record or route (400)
//! - [`ApiError::NotFound`]: no record with the requested id (404)
//! - [`ApiError::Immutable`]: edit of a delivered order (404)
//! - [`ApiError::MethodNotAllowed`]: known path, unsupported method (405)
//! - [`ApiError::Internal`]: anything unexpected (500, generic message)
//!
//! # Example
//!
//! ```rust,ignore
//! fn load(store: &InMemoryStore<Dish>, id: &str) -> Result<Dish, ApiError> {
//!     store.get(id)?.ok_or_else(|| ApiError::not_found("Dish", id))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every internal failure. Internals are logged, never sent.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// The error type returned by every validation check and handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// A payload field is missing, empty, or of the wrong shape
    #[error("{0}")]
    Validation(String),

    /// The payload conflicts with the route or with the stored record
    /// (id mismatch, deleting an order that is no longer pending)
    #[error("{0}")]
    Conflict(String),

    /// No record with the requested id exists
    #[error("{0}")]
    NotFound(String),

    /// The record is in a terminal state and rejects every edit.
    ///
    /// Reported as 404 rather than 409/422. Existing clients of this API
    /// depend on that status, so it is kept as is.
    #[error("{0}")]
    Immutable(String),

    /// The path exists but does not accept the request method
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Unexpected failure (poisoned lock, broken invariant)
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// `<Kind> id not found: <id>`
    pub fn not_found(kind: &str, id: &str) -> Self {
        ApiError::NotFound(format!("{kind} id not found: {id}"))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Immutable(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to clients
    pub fn message(&self) -> String {
        match self {
            ApiError::Internal(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = ?err, "request failed with an internal error");
        }
        (status, Json(self.to_response())).into_response()
    }
}
