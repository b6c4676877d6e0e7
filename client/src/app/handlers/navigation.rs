//! # Navigation Handlers
//!
//! Handlers for screen navigation.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with authentication guard
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();

    // Check if screen requires authentication
    if AppState::requires_auth(screen) && !state.is_authenticated() {
        tracing::info!(
            "Access denied: {} requires authentication, redirecting to Auth",
            screen.title()
        );
        state.current_screen = Screen::Auth;
    } else {
        state.current_screen = screen;
    }
}
