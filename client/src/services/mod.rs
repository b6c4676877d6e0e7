//! # Services Module
//!
//! External service integrations for the Banter desktop client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/    - HTTP client for the hosted chat service
//!              (identity, documents, avatar storage)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              Banter client              │
//! │                                         │
//! │           ┌──────────────┐              │
//! │           │  ApiClient   │              │
//! │           │  (api/)      │              │
//! │           └──────┬───────┘              │
//! └──────────────────┼──────────────────────┘
//!                    │ HTTP/JSON
//!                    ▼
//!     ┌───────────────────────────────┐
//!     │      Hosted chat service      │
//!     │                               │
//!     │  /api/auth/*       identity   │
//!     │  /api/documents/*  documents  │
//!     │  /api/storage/*    blobs      │
//!     └───────────────────────────────┘
//! ```
//!
//! `ApiClient` wraps one `reqwest::Client` (internally thread-safe, pooled)
//! and can be shared across tasks behind an `Arc`. All methods return
//! [`crate::core::error::ApiError`]; service rejections carry the service's
//! own message so the UI can show it unmodified.

pub mod api;
