//! # Storage Data Transfer Objects
//!
//! Response structures for the blob storage endpoint.

use serde::{Deserialize, Serialize};

/// Result of a successful avatar upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Public URL where the uploaded image is served from
    pub url: String,
}
