//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The auth flows never talk to [`crate::services::api::ApiClient`] directly;
//! they go through [`ApiService`] so tests can substitute a recording double
//! and assert on exactly which remote calls a flow made, in which order.

use crate::core::error::ApiError;
use async_trait::async_trait;
use shared::{AuthSession, ChatIndex, UserProfile};

/// Trait covering every remote operation the client performs.
///
/// This trait allows for dependency injection and mocking in tests. All
/// parameters are owned so the trait stays object-safe behind `Arc<dyn
/// ApiService>` and calls can move into spawned tasks.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Create a new account from an email/password pair
    async fn create_account(&self, email: String, password: String) -> Result<AuthSession, ApiError>;

    /// Sign in with an existing account's credentials
    async fn sign_in(&self, email: String, password: String) -> Result<AuthSession, ApiError>;

    /// Upload an avatar image, returning its public URL
    async fn upload_avatar(
        &self,
        token: String,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError>;

    /// Write the profile document keyed by the profile's own id
    async fn save_user_profile(&self, token: String, profile: UserProfile) -> Result<(), ApiError>;

    /// Write the chat index document for one account
    async fn save_chat_index(
        &self,
        token: String,
        uid: String,
        index: ChatIndex,
    ) -> Result<(), ApiError>;

    /// Read the profile document for one account, `None` if absent
    async fn fetch_user_profile(
        &self,
        token: String,
        uid: String,
    ) -> Result<Option<UserProfile>, ApiError>;
}

/// Recording double used by flow and handler tests.
///
/// Records the name of every call in arrival order, optionally failing one
/// named step, and hands back canned sessions whose tokens differ between
/// `create_account` and `sign_in` so tests can tell which call produced the
/// session the app kept.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use parking_lot::Mutex;

    pub(crate) struct RecordingApi {
        calls: Mutex<Vec<&'static str>>,
        fail_on: Option<&'static str>,
        profile: Mutex<Option<UserProfile>>,
        pub saved_profiles: Mutex<Vec<UserProfile>>,
        pub saved_indexes: Mutex<Vec<(String, ChatIndex)>>,
    }

    impl RecordingApi {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: None,
                profile: Mutex::new(None),
                saved_profiles: Mutex::new(Vec::new()),
                saved_indexes: Mutex::new(Vec::new()),
            }
        }

        /// Fail the named step with a service rejection; everything before
        /// it succeeds.
        pub fn failing(step: &'static str) -> Self {
            Self {
                fail_on: Some(step),
                ..Self::new()
            }
        }

        /// Serve this profile from `fetch_user_profile`.
        pub fn with_profile(profile: UserProfile) -> Self {
            let api = Self::new();
            *api.profile.lock() = Some(profile);
            api
        }

        pub fn recorded(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }

        fn call(&self, name: &'static str) -> Result<(), ApiError> {
            self.calls.lock().push(name);
            if self.fail_on == Some(name) {
                Err(ApiError::Service(format!("{name} rejected")))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ApiService for RecordingApi {
        async fn create_account(
            &self,
            _email: String,
            _password: String,
        ) -> Result<AuthSession, ApiError> {
            self.call("create_account")?;
            Ok(AuthSession {
                uid: "u-1".to_string(),
                id_token: "registration-token".to_string(),
            })
        }

        async fn sign_in(&self, _email: String, _password: String) -> Result<AuthSession, ApiError> {
            self.call("sign_in")?;
            Ok(AuthSession {
                uid: "u-1".to_string(),
                id_token: "session-token".to_string(),
            })
        }

        async fn upload_avatar(
            &self,
            _token: String,
            _file_name: String,
            _bytes: Vec<u8>,
        ) -> Result<String, ApiError> {
            self.call("upload_avatar")?;
            Ok("https://cdn.example.com/avatars/u-1.png".to_string())
        }

        async fn save_user_profile(
            &self,
            _token: String,
            profile: UserProfile,
        ) -> Result<(), ApiError> {
            self.call("save_user_profile")?;
            self.saved_profiles.lock().push(profile);
            Ok(())
        }

        async fn save_chat_index(
            &self,
            _token: String,
            uid: String,
            index: ChatIndex,
        ) -> Result<(), ApiError> {
            self.call("save_chat_index")?;
            self.saved_indexes.lock().push((uid, index));
            Ok(())
        }

        async fn fetch_user_profile(
            &self,
            _token: String,
            _uid: String,
        ) -> Result<Option<UserProfile>, ApiError> {
            self.call("fetch_user_profile")?;
            Ok(self.profile.lock().clone())
        }
    }
}
