//! # Identity Endpoints
//!
//! Account creation and sign-in. Both endpoints take the same credential
//! pair and mint a session on success.

use super::client::{read_json, ApiClient};
use crate::core::error::ApiError;
use shared::{AuthSession, CredentialRequest};

/// Sign in with an existing account's credentials.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_in(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<AuthSession, ApiError> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let request = CredentialRequest { email, password };

    let response = client
        .client
        .post(client.url("/api/auth/login"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Sign-in network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    let result = read_json::<AuthSession>(response).await;
    let duration = start.elapsed();

    match &result {
        Ok(session) => tracing::info!(
            uid = %session.uid,
            duration_ms = duration.as_millis(),
            "Sign-in successful"
        ),
        Err(e) => tracing::warn!(
            status = status.as_u16(),
            error = %e,
            duration_ms = duration.as_millis(),
            "Sign-in failed"
        ),
    }
    result
}

/// Create a new account.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn create_account(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<AuthSession, ApiError> {
    let request = CredentialRequest { email, password };

    let response = client
        .client
        .post(client.url("/api/auth/register"))
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}
