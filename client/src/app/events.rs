//! # Application Events
//!
//! Event types for async task communication between background flows and the
//! main thread.

use crate::app::state::Session;
use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Sign-in flow completed
    SignInResult(Result<Session, AppError>),
    /// Registration flow completed
    RegisterResult(Result<Session, AppError>),
}
