//! # Chat Service API Client Module
//!
//! HTTP client for communicating with the hosted chat service. Handles the
//! identity endpoints, per-account document reads and writes, and avatar
//! uploads.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct and shared response decoding
//! ├── identity.rs   - Identity endpoints (register, login)
//! ├── documents.rs  - Document endpoints (profile, chat index)
//! └── storage.rs    - Blob storage endpoints (avatar upload)
//! ```

pub mod client;
pub mod documents;
pub mod identity;
pub mod storage;

pub use client::ApiClient;
