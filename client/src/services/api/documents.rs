//! # Document Endpoints
//!
//! Generic reads and writes of per-account JSON documents. Each account owns
//! one profile document in [`USERS_COLLECTION`] and one chat index in
//! [`USER_CHATS_COLLECTION`], both keyed by account id.

use super::client::{error_from, read_json, ApiClient};
use crate::core::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Collection holding one [`shared::UserProfile`] per account.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding one [`shared::ChatIndex`] per account.
pub const USER_CHATS_COLLECTION: &str = "userChats";

/// Write a JSON document, replacing any previous version.
pub async fn put_document<T: Serialize>(
    client: &ApiClient,
    token: &str,
    collection: &str,
    key: &str,
    document: &T,
) -> Result<(), ApiError> {
    let response = client
        .client
        .put(client.url(&format!("/api/documents/{collection}/{key}")))
        .header("Authorization", format!("Bearer {}", token))
        .json(document)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status().is_success() {
        tracing::debug!(collection, key, "Document written");
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

/// Read a JSON document, `None` when it does not exist.
pub async fn get_document<T: DeserializeOwned>(
    client: &ApiClient,
    token: &str,
    collection: &str,
    key: &str,
) -> Result<Option<T>, ApiError> {
    let response = client
        .client
        .get(client.url(&format!("/api/documents/{collection}/{key}")))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        tracing::debug!(collection, key, "Document not found");
        return Ok(None);
    }

    read_json(response).await.map(Some)
}
