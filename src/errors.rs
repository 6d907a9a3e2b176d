/*!
 * Error types for the clozecoach service.
 *
 * This module contains the request-level error taxonomy shared by the
 * engines and the HTTP transport, using the thiserror crate for ergonomic
 * error definitions.
 */

use thiserror::Error;

/// Errors surfaced by API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request rejected before any store access (empty or malformed fields)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Session or word absent when the operation requires it
    #[error("{0}")]
    NotFound(String),

    /// Storage layer failure propagated as an internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Build a validation error from any message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Build a not-found error from any message
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Whether this error maps to a client-side (4xx) failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
