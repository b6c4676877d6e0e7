//! # Event Handler
//!
//! Handles async event results from background flows, updating application
//! state accordingly.
//!
//! This module processes [`AppEvent`] messages received from spawned flows
//! and applies them in a thread-safe manner: the form's loading flag is
//! released, then either the session is installed and the app navigates to
//! the chat screen, or the error's message is queued as a toast and nothing
//! else changes.

use crate::app::state::{NoticeLevel, Screen, Session};
use crate::app::{App, AppEvent};
use crate::core::error::AppError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event for minimal duration to keep the
    /// frame loop responsive.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SignInResult(result) => {
                self.handle_sign_in_result(result);
            }
            AppEvent::RegisterResult(result) => {
                self.handle_register_result(result);
            }
        }
    }
}

impl App {
    fn handle_sign_in_result(&mut self, result: Result<Session, AppError>) {
        tracing::info!(success = result.is_ok(), "Processing sign-in result");

        let mut state = self.state.write();
        state.auth.sign_in.loading = false;

        match result {
            Ok(session) => {
                let username = session.user.username.clone();
                state.set_session(session);
                if let Some(retired) = state.auth.reset() {
                    state.retired_preview_uris.push(retired);
                }
                state.current_screen = Screen::Chat;
                state.push_notice(NoticeLevel::Success, format!("Welcome back, {}!", username));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-in failed");
                state.push_notice(NoticeLevel::Error, err.to_string());
            }
        }
    }

    fn handle_register_result(&mut self, result: Result<Session, AppError>) {
        tracing::info!(success = result.is_ok(), "Processing registration result");

        let mut state = self.state.write();
        state.auth.sign_up.loading = false;

        match result {
            Ok(session) => {
                state.set_session(session);
                if let Some(retired) = state.auth.reset() {
                    state.retired_preview_uris.push(retired);
                }
                state.current_screen = Screen::Chat;
                state.push_notice(NoticeLevel::Success, "Account created successfully!");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Registration failed");
                state.push_notice(NoticeLevel::Error, err.to_string());
            }
        }
    }
}
