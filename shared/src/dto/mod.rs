//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the chat service
//! over its REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Credential submission, session tokens, error envelope
//! - [`documents`] - Documents stored per account: user profile and chat index
//! - [`storage`] - Blob storage upload results
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Timestamps**: RFC 3339 via chrono's serde support
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod auth;
pub mod documents;
pub mod storage;

pub use auth::*;
pub use documents::*;
pub use storage::*;
