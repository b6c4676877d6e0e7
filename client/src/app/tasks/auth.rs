//! # Authentication Flows
//!
//! The multi-step pipelines behind the sign-in and sign-up buttons. Each is
//! a plain async function returning `Result`, so the `?` operator gives the
//! stop-on-first-failure behavior and tests can drive a whole flow against a
//! recording service double. Handlers spawn these onto the runtime and post
//! the result back as an event.

use crate::app::state::{PickedAvatar, Session};
use crate::core::error::{ApiError, AppError};
use crate::core::service::ApiService;
use shared::{ChatIndex, UserProfile};
use std::sync::Arc;

/// Everything the registration flow needs from the sign-up form
#[derive(Debug, Clone)]
pub(crate) struct RegistrationProfile {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: PickedAvatar,
}

/// Sign in and load the account's profile document.
///
/// The profile's `id` field is overwritten with the uid from the identity
/// service; the document key, not the stored field, is authoritative.
pub(crate) async fn run_sign_in(
    api: Arc<dyn ApiService>,
    email: String,
    password: String,
) -> Result<Session, AppError> {
    let auth = api.sign_in(email, password).await?;

    let profile = api
        .fetch_user_profile(auth.id_token.clone(), auth.uid.clone())
        .await?;

    let mut user = profile.ok_or_else(|| {
        ApiError::Service("no user profile exists for this account".to_string())
    })?;
    user.id = auth.uid;

    tracing::info!(uid = %user.id, "Sign-in flow completed");

    Ok(Session {
        user,
        token: auth.id_token,
    })
}

/// Create the account, upload the avatar, write the two account documents,
/// then sign in with the new credentials.
///
/// Steps run strictly in order and the first failure ends the flow. Steps
/// already completed are not rolled back; a failure partway leaves the
/// account in whatever state the completed steps produced.
pub(crate) async fn run_registration(
    api: Arc<dyn ApiService>,
    registration: RegistrationProfile,
) -> Result<Session, AppError> {
    let created = api
        .create_account(registration.email.clone(), registration.password.clone())
        .await?;

    let avatar_url = api
        .upload_avatar(
            created.id_token.clone(),
            registration.avatar.file_name.clone(),
            registration.avatar.bytes.to_vec(),
        )
        .await?;

    let user = UserProfile {
        id: created.uid.clone(),
        username: registration.username.clone(),
        email: registration.email.clone(),
        avatar: avatar_url,
        blocked: Vec::new(),
    };

    api.save_user_profile(created.id_token.clone(), user.clone())
        .await?;

    api.save_chat_index(created.id_token, created.uid, ChatIndex::default())
        .await?;

    // The session handed to the UI comes from a fresh sign-in with the new
    // credentials, not from the token minted at account creation.
    let auth = api
        .sign_in(registration.email, registration.password)
        .await?;

    tracing::info!(uid = %user.id, "Registration flow completed");

    Ok(Session {
        user,
        token: auth.id_token,
    })
}
