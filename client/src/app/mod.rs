//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, the spawned
//! auth flows, and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Main Thread (egui)                   │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  App (orchestrator)                            │  │
//! │  │  - on_tick() - called every frame              │  │
//! │  │  - handle_event() - applies flow results       │  │
//! │  │  - handle_*_click() - user action handlers     │  │
//! │  └───────────┬────────────────────────────────────┘  │
//! │              │                                       │
//! │  ┌───────────▼────────────────────────────────────┐  │
//! │  │  State: Arc<RwLock<AppState>>                  │  │
//! │  │  - Locks held briefly for minimal duration     │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────┬───────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼───────────────────────────────┐
//! │             Async Flow Tasks (Tokio)                 │
//! │  - run_sign_in()      login + profile fetch          │
//! │  - run_registration() account + upload + documents   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers set the submitting form's loading flag and spawn a flow; the
//! flow sends its `Result` back as an [`AppEvent`]; `on_tick()` drains the
//! channel each frame and applies results under a brief write lock. The UI
//! only ever reads a clone of the state.

mod app_trait;
mod event_handler;
mod events;
mod handlers;
pub mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use state::*;

use crate::config::AppConfig;
use crate::core::service::ApiService;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator.
///
/// Owns the shared state and both ends of the event channel. Click handlers
/// spawn flows with a clone of the sender; the frame loop drains the
/// receiver via [`App::on_tick`].
///
/// # Example
///
/// ```rust,no_run
/// use client::app::App;
/// use client::config::AppConfig;
///
/// let mut app = App::new(&AppConfig::default());
///
/// // In the egui update loop (main thread):
/// app.on_tick();
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for rendering (shared lock, multiple readers)
    /// - Use `write()` for updates (exclusive lock, single writer)
    /// - Hold locks for minimal duration to keep the frame loop responsive
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for flow results, polled in `on_tick()` with
    /// `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into spawned flows (internal use).
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance talking to the configured service.
    pub fn new(config: &AppConfig) -> Self {
        let api_client: Arc<dyn ApiService> =
            Arc::new(crate::services::api::ApiClient::new(&config.api_url));
        Self::with_service(api_client)
    }

    /// Build an app around any [`ApiService`] implementation.
    ///
    /// Production code goes through [`App::new`]; tests inject a recording
    /// double here.
    pub fn with_service(api_client: Arc<dyn ApiService>) -> Self {
        let state = AppState {
            current_screen: Screen::Auth,
            auth: AuthScreenState::default(),
            session: None,
            api_client: Some(api_client),
            pending_notices: Vec::new(),
            retired_preview_uris: Vec::new(),
        };

        // Create event channel
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame to process pending flow results.
    ///
    /// Non-blocking: drains everything `try_recv()` can see and returns.
    /// Each event is applied under its own brief write lock.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;

        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed flow results");
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Drain queued toasts for the frame loop to display.
    pub fn take_notices(&mut self) -> Vec<(NoticeLevel, String)> {
        std::mem::take(&mut self.state.write().pending_notices)
    }

    /// Drain preview URIs whose backing selection is gone; the frame loop
    /// evicts each from egui's image cache.
    pub fn take_retired_previews(&mut self) -> Vec<String> {
        std::mem::take(&mut self.state.write().retired_preview_uris)
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle sign-in button click
    pub fn handle_sign_in_click(&mut self, email: String, password: String) {
        handlers::auth::handle_sign_in_click(self.state.clone(), self.event_tx.clone(), email, password);
    }

    /// Handle sign-up button click
    pub fn handle_register_click(&mut self, username: String, email: String, password: String) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.event_tx.clone(),
            username,
            email,
            password,
        );
    }

    /// Handle avatar picker button click
    pub fn handle_avatar_pick(&mut self) {
        handlers::auth::handle_avatar_pick(self.state.clone());
    }

    /// Handle sign-out button click
    pub fn handle_sign_out_click(&mut self) {
        handlers::auth::handle_sign_out(self.state.clone());
    }

    /// Handle screen change
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_sign_in_click(&mut self, email: String, password: String) {
        self.handle_sign_in_click(email, password);
    }

    fn handle_register_click(&mut self, username: String, email: String, password: String) {
        self.handle_register_click(username, email, password);
    }

    fn handle_avatar_pick(&mut self) {
        self.handle_avatar_pick();
    }

    fn handle_sign_out_click(&mut self) {
        self.handle_sign_out_click();
    }

    fn handle_screen_change(&mut self, screen: Screen) {
        self.handle_screen_change(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::tasks::auth::RegistrationProfile;
    use super::*;
    use crate::core::error::{ApiError, AppError};
    use crate::core::service::mock::RecordingApi;
    use shared::UserProfile;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "stale-id".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            avatar: "https://cdn.example.com/avatars/u-1.png".to_string(),
            blocked: Vec::new(),
        }
    }

    fn sample_registration() -> RegistrationProfile {
        RegistrationProfile {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter22".to_string(),
            avatar: PickedAvatar {
                file_name: "me.png".to_string(),
                bytes: std::sync::Arc::from(vec![9u8, 9, 9, 9]),
            },
        }
    }

    fn stage_avatar(app: &App) {
        let mut state = app.state.write();
        state
            .auth
            .sign_up
            .avatar
            .select("me.png".to_string(), vec![1, 2, 3]);
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Auth.title(), "Welcome to Banter");
        assert_eq!(Screen::Chat.title(), "Banter");
    }

    #[test]
    fn test_requires_auth_gates_chat_screen() {
        assert!(AppState::requires_auth(Screen::Chat));
        assert!(!AppState::requires_auth(Screen::Auth));
    }

    // ========== State Tests ==========

    #[test]
    fn test_initial_state_is_signed_out_auth_screen() {
        let app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Auth);
        assert!(!state.is_authenticated());
        assert_eq!(state.auth, AuthScreenState::default());
        assert!(state.pending_notices.is_empty());
        assert!(state.retired_preview_uris.is_empty());
    }

    #[test]
    fn test_avatar_select_stages_file_and_preview() {
        let mut avatar = AvatarSelection::default();

        let retired = avatar.select("me.png".to_string(), vec![1, 2, 3]);

        assert_eq!(retired, None);
        let picked = avatar.picked.expect("selection staged");
        assert_eq!(picked.file_name, "me.png");
        assert_eq!(&*picked.bytes, &[1, 2, 3]);
        let uri = avatar.preview_uri.expect("preview registered");
        assert!(uri.starts_with("bytes://avatar-preview/"));
    }

    #[test]
    fn test_avatar_reselect_retires_previous_preview() {
        let mut avatar = AvatarSelection::default();

        avatar.select("first.png".to_string(), vec![1]);
        let first_uri = avatar.preview_uri.clone().expect("first preview");

        let retired = avatar.select("second.png".to_string(), vec![2]);

        assert_eq!(retired, Some(first_uri.clone()));
        let second_uri = avatar.preview_uri.clone().expect("second preview");
        assert_ne!(first_uri, second_uri);
        assert_eq!(avatar.picked.expect("replaced").file_name, "second.png");
    }

    #[test]
    fn test_auth_reset_clears_forms_and_returns_preview_uri() {
        let mut auth = AuthScreenState::default();
        auth.sign_in.email = "alice@example.com".to_string();
        auth.sign_up.username = "alice".to_string();
        auth.sign_up.loading = true;
        auth.sign_up.avatar.select("me.png".to_string(), vec![1]);

        let retired = auth.reset();

        assert!(retired.is_some());
        assert_eq!(auth, AuthScreenState::default());
    }

    #[test]
    fn test_session_accessors() {
        let app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        let mut state = app.state.write();

        state.set_session(Session {
            user: sample_profile(),
            token: "tok".to_string(),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.session_user().expect("signed in").username, "alice");

        state.clear_session();
        assert!(!state.is_authenticated());
        assert!(state.session_user().is_none());
    }

    // ========== Sign-In Flow Tests ==========

    #[tokio::test]
    async fn test_sign_in_flow_calls_in_order() {
        let api = std::sync::Arc::new(RecordingApi::with_profile(sample_profile()));

        let session = tasks::auth::run_sign_in(
            api.clone(),
            "alice@example.com".to_string(),
            "hunter22".to_string(),
        )
        .await
        .expect("flow succeeds");

        assert_eq!(api.recorded(), vec!["sign_in", "fetch_user_profile"]);
        assert_eq!(session.token, "session-token");
        assert_eq!(session.user.username, "alice");
    }

    #[tokio::test]
    async fn test_sign_in_flow_overwrites_profile_id_with_uid() {
        let api = std::sync::Arc::new(RecordingApi::with_profile(sample_profile()));

        let session = tasks::auth::run_sign_in(
            api,
            "alice@example.com".to_string(),
            "hunter22".to_string(),
        )
        .await
        .expect("flow succeeds");

        // The stored document said "stale-id"; the identity service wins.
        assert_eq!(session.user.id, "u-1");
    }

    #[tokio::test]
    async fn test_sign_in_flow_missing_profile_is_error() {
        let api = std::sync::Arc::new(RecordingApi::new());

        let err = tasks::auth::run_sign_in(
            api.clone(),
            "alice@example.com".to_string(),
            "hunter22".to_string(),
        )
        .await
        .expect_err("no profile document");

        assert_eq!(err.to_string(), "no user profile exists for this account");
        assert_eq!(api.recorded(), vec!["sign_in", "fetch_user_profile"]);
    }

    #[tokio::test]
    async fn test_sign_in_flow_stops_after_rejected_credentials() {
        let api = std::sync::Arc::new(RecordingApi::failing("sign_in"));

        let err = tasks::auth::run_sign_in(
            api.clone(),
            "alice@example.com".to_string(),
            "wrong".to_string(),
        )
        .await
        .expect_err("credentials rejected");

        assert_eq!(err.to_string(), "sign_in rejected");
        assert_eq!(api.recorded(), vec!["sign_in"]);
    }

    // ========== Registration Flow Tests ==========

    #[tokio::test]
    async fn test_registration_flow_calls_in_order() {
        let api = std::sync::Arc::new(RecordingApi::new());

        tasks::auth::run_registration(api.clone(), sample_registration())
            .await
            .expect("flow succeeds");

        assert_eq!(
            api.recorded(),
            vec![
                "create_account",
                "upload_avatar",
                "save_user_profile",
                "save_chat_index",
                "sign_in",
            ]
        );
    }

    #[tokio::test]
    async fn test_registration_saves_profile_with_uploaded_avatar_url() {
        let api = std::sync::Arc::new(RecordingApi::new());

        tasks::auth::run_registration(api.clone(), sample_registration())
            .await
            .expect("flow succeeds");

        let saved = api.saved_profiles.lock();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "u-1");
        assert_eq!(saved[0].username, "alice");
        assert_eq!(saved[0].avatar, "https://cdn.example.com/avatars/u-1.png");
        assert!(saved[0].blocked.is_empty());

        let indexes = api.saved_indexes.lock();
        assert_eq!(indexes.len(), 1);
        assert_eq!(indexes[0].0, "u-1");
        assert!(indexes[0].1.chats.is_empty());
    }

    #[tokio::test]
    async fn test_registration_session_uses_token_from_final_sign_in() {
        let api = std::sync::Arc::new(RecordingApi::new());

        let session = tasks::auth::run_registration(api, sample_registration())
            .await
            .expect("flow succeeds");

        // Not "registration-token": the flow signs in again at the end.
        assert_eq!(session.token, "session-token");
    }

    #[tokio::test]
    async fn test_registration_flow_stops_at_failed_upload() {
        let api = std::sync::Arc::new(RecordingApi::failing("upload_avatar"));

        let err = tasks::auth::run_registration(api.clone(), sample_registration())
            .await
            .expect_err("upload rejected");

        assert_eq!(err.to_string(), "upload_avatar rejected");
        assert_eq!(api.recorded(), vec!["create_account", "upload_avatar"]);
    }

    #[tokio::test]
    async fn test_registration_flow_does_not_roll_back_after_failed_document_write() {
        let api = std::sync::Arc::new(RecordingApi::failing("save_user_profile"));

        tasks::auth::run_registration(api.clone(), sample_registration())
            .await
            .expect_err("document write rejected");

        // The created account and uploaded avatar stay as they are; the flow
        // neither retries nor compensates.
        assert_eq!(
            api.recorded(),
            vec!["create_account", "upload_avatar", "save_user_profile"]
        );
        assert!(api.saved_profiles.lock().is_empty());
    }

    // ========== Click Handler Tests ==========

    #[tokio::test]
    async fn test_sign_in_click_sets_loading_until_result_applied() {
        let api = std::sync::Arc::new(RecordingApi::with_profile(sample_profile()));
        let mut app = App::with_service(api);

        app.handle_sign_in_click("alice@example.com".to_string(), "hunter22".to_string());
        assert!(app.state.read().auth.sign_in.loading);

        let event = app.event_rx.recv().await.expect("flow posts its result");
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.auth.sign_in.loading);
        assert_eq!(state.current_screen, Screen::Chat);
    }

    #[tokio::test]
    async fn test_register_click_without_avatar_makes_no_calls() {
        let api = std::sync::Arc::new(RecordingApi::new());
        let mut app = App::with_service(api.clone());

        app.handle_register_click(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hunter22".to_string(),
        );

        assert!(api.recorded().is_empty());
        assert!(app.event_rx.try_recv().is_err());

        let state = app.state.read();
        assert!(!state.auth.sign_up.loading);
        assert_eq!(state.current_screen, Screen::Auth);
        assert_eq!(
            state.pending_notices,
            vec![(NoticeLevel::Warning, "Please upload an avatar!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_register_click_with_avatar_runs_flow() {
        let api = std::sync::Arc::new(RecordingApi::new());
        let mut app = App::with_service(api.clone());
        stage_avatar(&app);

        app.handle_register_click(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hunter22".to_string(),
        );
        assert!(app.state.read().auth.sign_up.loading);

        let event = app.event_rx.recv().await.expect("flow posts its result");
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.auth.sign_up.loading);
        assert!(state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Chat);
        assert_eq!(api.recorded().len(), 5);
    }

    // ========== Event Handler Tests ==========

    #[test]
    fn test_sign_in_result_error_shows_message_and_stays() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        app.state.write().auth.sign_in.loading = true;

        app.handle_event(AppEvent::SignInResult(Err(AppError::Api(
            ApiError::Service("invalid credentials".to_string()),
        ))));

        let state = app.state.read();
        assert!(!state.auth.sign_in.loading);
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state.session.is_none());
        assert_eq!(
            state.pending_notices,
            vec![(NoticeLevel::Error, "invalid credentials".to_string())]
        );
    }

    #[test]
    fn test_sign_in_result_success_installs_session_and_navigates() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        app.state.write().auth.sign_in.loading = true;

        app.handle_event(AppEvent::SignInResult(Ok(Session {
            user: sample_profile(),
            token: "session-token".to_string(),
        })));

        let state = app.state.read();
        assert!(!state.auth.sign_in.loading);
        assert!(state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Chat);
    }

    #[test]
    fn test_register_result_error_releases_loading_only() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        app.state.write().auth.sign_up.loading = true;

        app.handle_event(AppEvent::RegisterResult(Err(AppError::Api(
            ApiError::Service("email already in use".to_string()),
        ))));

        let state = app.state.read();
        assert!(!state.auth.sign_up.loading);
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state.session.is_none());
        assert_eq!(
            state.pending_notices,
            vec![(NoticeLevel::Error, "email already in use".to_string())]
        );
    }

    #[test]
    fn test_auth_success_resets_forms_and_retires_preview() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        stage_avatar(&app);
        app.state.write().auth.sign_up.username = "alice".to_string();

        app.handle_event(AppEvent::RegisterResult(Ok(Session {
            user: sample_profile(),
            token: "session-token".to_string(),
        })));

        let state = app.state.read();
        assert_eq!(state.auth, AuthScreenState::default());
        assert_eq!(state.retired_preview_uris.len(), 1);
    }

    // ========== Sign-Out and Navigation Tests ==========

    #[test]
    fn test_sign_out_clears_session_and_returns_to_auth() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        {
            let mut state = app.state.write();
            state.set_session(Session {
                user: sample_profile(),
                token: "tok".to_string(),
            });
            state.current_screen = Screen::Chat;
        }

        app.handle_sign_out_click();

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Auth);
        assert_eq!(
            state.pending_notices,
            vec![(NoticeLevel::Info, "Signed out.".to_string())]
        );
    }

    #[test]
    fn test_screen_change_redirects_unauthenticated_to_auth() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));

        app.handle_screen_change(Screen::Chat);
        assert_eq!(app.state.read().current_screen, Screen::Auth);

        app.state.write().set_session(Session {
            user: sample_profile(),
            token: "tok".to_string(),
        });

        app.handle_screen_change(Screen::Chat);
        assert_eq!(app.state.read().current_screen, Screen::Chat);
    }

    // ========== Frame-Loop Drain Tests ==========

    #[test]
    fn test_take_notices_drains_queue() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        {
            let mut state = app.state.write();
            state.push_notice(NoticeLevel::Success, "one");
            state.push_notice(NoticeLevel::Error, "two");
        }

        let drained = app.take_notices();
        assert_eq!(drained.len(), 2);
        assert!(app.take_notices().is_empty());
    }

    #[test]
    fn test_take_retired_previews_drains_queue() {
        let mut app = App::with_service(std::sync::Arc::new(RecordingApi::new()));
        {
            let mut state = app.state.write();
            let retired = state
                .auth
                .sign_up
                .avatar
                .select("first.png".to_string(), vec![1]);
            assert_eq!(retired, None);
            let retired = state
                .auth
                .sign_up
                .avatar
                .select("second.png".to_string(), vec![2]);
            state.retired_preview_uris.extend(retired);
        }

        assert_eq!(app.take_retired_previews().len(), 1);
        assert!(app.take_retired_previews().is_empty());
    }
}
