//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! ## Error Categories
//!
//! - **[`ApiError`]**: failures of a single remote call (service rejection,
//!   transport failure, undecodable body)
//! - **[`AppError`]**: everything a flow can report to the user, either an
//!   [`ApiError`] or a local validation failure
//!
//! Service rejections carry the message the service sent, and both error
//! types display it verbatim so the user sees exactly what the service said.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use client::core::error::{ApiError, AppError};
//!
//! let rejected = AppError::Api(ApiError::Service("email already in use".to_string()));
//! assert_eq!(rejected.to_string(), "email already in use");
//!
//! let invalid = AppError::Validation("Please upload an avatar!".to_string());
//! assert_eq!(invalid.to_string(), "Please upload an avatar!");
//! ```

use thiserror::Error;

/// Failure of one remote call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service processed the request and rejected it. The payload is the
    /// service's own message, displayed unmodified.
    #[error("{0}")]
    Service(String),

    /// The request never produced a response (connection refused, timeout,
    /// DNS failure).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Application-wide error type for the auth flows.
///
/// `Display` forwards the inner message untouched; whatever text ends up in
/// here is what the notification toast shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// A remote call failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Local input validation failed before any remote call was made.
    #[error("{0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_displays_verbatim() {
        let err = ApiError::Service("password must be at least 6 characters".to_string());
        assert_eq!(err.to_string(), "password must be at least 6 characters");

        let wrapped = AppError::from(err);
        assert_eq!(wrapped.to_string(), "password must be at least 6 characters");
    }

    #[test]
    fn transport_errors_carry_context() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "malformed response: expected value at line 1");
    }
}
