//! # Storage Endpoints
//!
//! Avatar uploads to the blob storage service.

use super::client::{read_json, ApiClient};
use crate::core::error::ApiError;
use reqwest::multipart;
use shared::UploadResponse;

/// Upload an avatar image, returning the public URL it is served from.
///
/// The image bytes go up verbatim; the service derives the content type from
/// the file name.
#[tracing::instrument(skip(client, token, bytes), fields(file_name = %file_name, size = bytes.len()))]
pub async fn upload_avatar(
    client: &ApiClient,
    token: &str,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<String, ApiError> {
    let part = multipart::Part::bytes(bytes).file_name(file_name);
    let form = multipart::Form::new().part("file", part);

    let response = client
        .client
        .post(client.url("/api/storage/avatars"))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Avatar upload network error");
            ApiError::Network(e.to_string())
        })?;

    let upload: UploadResponse = read_json(response).await?;
    tracing::info!(url = %upload.url, "Avatar uploaded");
    Ok(upload.url)
}
