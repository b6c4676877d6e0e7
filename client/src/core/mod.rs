//! # Core Abstractions
//!
//! Foundational traits and error types used throughout the client.
//!
//! - **[`error`]**: Application error types (`ApiError`, `AppError`, `Result<T>`)
//! - **[`service`]**: The `ApiService` trait behind which all remote calls sit,
//!   enabling dependency injection and mocking in tests

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{ApiError, AppError, Result};
pub use service::ApiService;
