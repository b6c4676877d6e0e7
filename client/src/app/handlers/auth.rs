//! # Authentication Handlers
//!
//! Handlers for the sign-in, sign-up, avatar picker, and sign-out actions.
//!
//! The only local validation is the avatar presence check on sign-up; every
//! other credential problem is the service's call and its message is shown
//! as received. Handlers set the form's loading flag before spawning and the
//! event handler clears it when the result arrives, so the flag is true for
//! exactly the lifetime of the flow.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NoticeLevel, Screen};
use crate::app::tasks;
use crate::app::tasks::auth::RegistrationProfile;
use crate::core::error::AppError;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle sign-in button click
///
/// Internal handler function - use [`crate::app::App::handle_sign_in_click`] instead.
pub(crate) fn handle_sign_in_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let api_client = state.read().api_client.clone();
    let Some(api_client) = api_client else {
        state
            .write()
            .push_notice(NoticeLevel::Error, "Service unavailable, try again later.");
        return;
    };

    state.write().auth.sign_in.loading = true;

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = tasks::auth::run_sign_in(api_client, email, password).await;
        let _ = tx.send(AppEvent::SignInResult(result)).await;
    });
}

/// Handle sign-up button click
///
/// Rejects the submission locally when no avatar has been picked; no remote
/// call is made and the loading flag stays untouched.
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    username: String,
    email: String,
    password: String,
) {
    let avatar = state.read().auth.sign_up.avatar.picked.clone();
    let Some(avatar) = avatar else {
        let err = AppError::Validation("Please upload an avatar!".to_string());
        tracing::warn!(error = %err, "Registration rejected locally");
        state
            .write()
            .push_notice(NoticeLevel::Warning, err.to_string());
        return;
    };

    let api_client = state.read().api_client.clone();
    let Some(api_client) = api_client else {
        state
            .write()
            .push_notice(NoticeLevel::Error, "Service unavailable, try again later.");
        return;
    };

    state.write().auth.sign_up.loading = true;

    let registration = RegistrationProfile {
        username,
        email,
        password,
        avatar,
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = tasks::auth::run_registration(api_client, registration).await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Open the native file picker and stage the chosen image for upload.
///
/// Blocks the UI thread while the dialog is open, which is how modal file
/// dialogs behave on the desktop. Nothing after selection is validated:
/// whatever bytes come back are staged, previewed, and later uploaded as-is.
///
/// Internal handler function - use [`crate::app::App::handle_avatar_pick`] instead.
pub(crate) fn handle_avatar_pick(state: Arc<RwLock<AppState>>) {
    let picked = rfd::FileDialog::new()
        .set_title("Choose a profile picture")
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .pick_file();

    let Some(path) = picked else {
        tracing::debug!("Avatar selection cancelled");
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "Failed to read avatar file");
            let mut state = state.write();
            state.push_notice(NoticeLevel::Error, format!("Could not read image: {}", e));
            return;
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string());

    let size = bytes.len();
    let mut state = state.write();
    if let Some(retired) = state.auth.sign_up.avatar.select(file_name, bytes) {
        state.retired_preview_uris.push(retired);
    }
    tracing::info!(size, "Avatar staged for upload");
}

/// Handle sign-out button click
///
/// Internal handler function - use [`crate::app::App::handle_sign_out_click`] instead.
pub(crate) fn handle_sign_out(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.clear_session();
    if let Some(retired) = state.auth.reset() {
        state.retired_preview_uris.push(retired);
    }
    state.current_screen = Screen::Auth;
    state.push_notice(NoticeLevel::Info, "Signed out.");
    tracing::info!("Signed out");
}
