//! Unified error handling for request handlers.
//!
//! Provides the `AppError` type used by handlers that can fail outside the
//! rendered error-page flow. Handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::CatalogError;

/// Application-level error type for the storefront.
///
/// Not-found flows render the error-page template directly in the handlers;
/// only failures with no page of their own end up here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog document could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with full detail
        tracing::error!(error = %self, "Request error");

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
