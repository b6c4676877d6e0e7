//! # Application State Types
//!
//! All state-related types for the application: screens, the two auth forms,
//! the staged avatar selection, and the signed-in session.

use crate::core::service::ApiService;
use shared::UserProfile;
use std::sync::Arc;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in and sign-up forms, side by side
    Auth,
    /// Conversation list for the signed-in account
    Chat,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Welcome to Banter",
            Screen::Chat => "Banter",
        }
    }
}

/// Notification severity, mapped onto toast styles by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Sign-in form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    /// True from submit until the flow's result has been applied
    pub loading: bool,
}

/// Sign-up form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: AvatarSelection,
    /// True from submit until the flow's result has been applied
    pub loading: bool,
}

/// File name and raw bytes of a picked avatar image
#[derive(Debug, Clone, PartialEq)]
pub struct PickedAvatar {
    pub file_name: String,
    /// Shared allocation: the preview, the upload task, and state clones all
    /// hold the same bytes
    pub bytes: Arc<[u8]>,
}

/// The avatar image staged for registration, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarSelection {
    pub picked: Option<PickedAvatar>,
    /// URI the preview is registered under in egui's image cache
    pub preview_uri: Option<String>,
    generation: u64,
}

impl AvatarSelection {
    /// Replace the selection, returning the previous preview URI so the
    /// frame loop can evict it from the image cache.
    ///
    /// Each selection gets a fresh URI; re-registering new bytes under the
    /// old URI would keep showing the cached image.
    pub fn select(&mut self, file_name: String, bytes: Vec<u8>) -> Option<String> {
        let retired = self.preview_uri.take();
        self.generation += 1;
        self.preview_uri = Some(format!("bytes://avatar-preview/{}", self.generation));
        self.picked = Some(PickedAvatar {
            file_name,
            bytes: Arc::from(bytes),
        });
        retired
    }
}

/// Both auth forms; they render side by side and submit independently
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthScreenState {
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
}

impl AuthScreenState {
    /// Reset both forms to blank, returning the preview URI that needs
    /// evicting from the image cache.
    pub fn reset(&mut self) -> Option<String> {
        let retired = self.sign_up.avatar.preview_uri.take();
        *self = AuthScreenState::default();
        retired
    }
}

/// A signed-in account
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    /// Bearer token for authorized calls
    pub token: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Auth screen forms
    pub auth: AuthScreenState,
    /// Session of the signed-in account, `None` while signed out
    pub session: Option<Session>,
    /// API client
    pub api_client: Option<Arc<dyn ApiService>>,
    /// Pending notifications to display (level, message)
    pub pending_notices: Vec<(NoticeLevel, String)>,
    /// Preview URIs whose backing selection is gone; the frame loop evicts
    /// them from egui's image cache
    pub retired_preview_uris: Vec<String>,
}

impl AppState {
    /// Check if an account is signed in
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Check if a screen requires authentication
    pub fn requires_auth(screen: Screen) -> bool {
        matches!(screen, Screen::Chat)
    }

    /// Install the session for a signed-in account
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the session, returning to the signed-out state
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Profile of the signed-in account
    pub fn session_user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Queue a toast for the frame loop to display
    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.pending_notices.push((level, message.into()));
    }
}
