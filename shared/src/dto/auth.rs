//! # Authentication Data Transfer Objects
//!
//! Request and response structures for the identity endpoints. Both the
//! register and login endpoints take the same credential pair and mint a
//! session on success.

use serde::{Deserialize, Serialize};

/// Credentials submitted to register or sign in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialRequest {
    pub email: String,
    pub password: String,
}

/// Session minted by the identity service (register/login success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Stable account identifier, used as the key for per-account documents
    pub uid: String,
    /// Bearer token for authorized calls
    pub id_token: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
