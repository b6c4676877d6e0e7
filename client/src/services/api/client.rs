//! # API Client
//!
//! Main HTTP client for chat service communication.

use crate::core::error::ApiError;
use crate::core::service::ApiService;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{AuthSession, ChatIndex, ErrorResponse, UserProfile};

/// HTTP client for communicating with the hosted chat service.
///
/// This client handles all REST API calls and maintains a connection pool
/// for efficient HTTP/2 multiplexing.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url`.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new(base_url: impl Into<String>) -> Self {
        // Create client with 10 second timeout to prevent freezing
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body as `T`, or a failure body as the service's error
/// envelope.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(error_from(response).await)
    }
}

/// Extract the service's error message from a non-success response.
pub(crate) async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => ApiError::Service(body.error),
        Err(_) => ApiError::Service(format!("service returned status {status}")),
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn create_account(&self, email: String, password: String) -> Result<AuthSession, ApiError> {
        super::identity::create_account(self, email, password).await
    }

    async fn sign_in(&self, email: String, password: String) -> Result<AuthSession, ApiError> {
        super::identity::sign_in(self, email, password).await
    }

    async fn upload_avatar(
        &self,
        token: String,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        super::storage::upload_avatar(self, &token, file_name, bytes).await
    }

    async fn save_user_profile(&self, token: String, profile: UserProfile) -> Result<(), ApiError> {
        let key = profile.id.clone();
        super::documents::put_document(self, &token, super::documents::USERS_COLLECTION, &key, &profile)
            .await
    }

    async fn save_chat_index(
        &self,
        token: String,
        uid: String,
        index: ChatIndex,
    ) -> Result<(), ApiError> {
        super::documents::put_document(
            self,
            &token,
            super::documents::USER_CHATS_COLLECTION,
            &uid,
            &index,
        )
        .await
    }

    async fn fetch_user_profile(
        &self,
        token: String,
        uid: String,
    ) -> Result<Option<UserProfile>, ApiError> {
        super::documents::get_document(self, &token, super::documents::USERS_COLLECTION, &uid).await
    }
}
