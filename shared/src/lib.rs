//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the Banter desktop client
//! and the hosted chat service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Credential submission and session tokens
//!   - **[`dto::documents`]**: User profile and chat index documents
//!   - **[`dto::storage`]**: Blob upload results
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::dto::auth::CredentialRequest;
//!
//! let request = CredentialRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let body = serde_json::to_string(&request).expect("serializable");
//! assert!(body.contains("alice@example.com"));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
