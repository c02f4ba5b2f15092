/**
 * API Error Types
 *
 * This module defines the error taxonomy surfaced by HTTP handlers.
 * Every failure a handler can report is one of these variants. The variant
 * fixes both the HTTP status code and the user-visible message, so handlers
 * never build ad-hoc error responses.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
///
/// Each variant maps to a fixed status code via [`ApiError::status_code`]
/// and serializes to a JSON body of the shape `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(&'static str),

    /// The request carried no session identity.
    ///
    /// Answered with 500 rather than 401. The original service shipped with
    /// that mapping and its clients assert on it, so it is kept as-is.
    #[error("You are not authenticated")]
    Unauthenticated,

    /// Login attempt against an unknown account.
    #[error("User not found")]
    UserNotFound,

    /// Login attempt with a password that does not match.
    #[error("Email or password do not match")]
    CredentialMismatch,

    /// No document matched the requested identifier.
    #[error("{0}")]
    NotFound(&'static str),

    /// The document store rejected the operation.
    #[error("{0}")]
    Persistence(&'static str),

    /// Unexpected failure with no better classification.
    #[error("Server error")]
    Internal,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UserNotFound => StatusCode::BAD_REQUEST,
            Self::CredentialMismatch => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
