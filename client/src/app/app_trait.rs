//! # App Trait
//!
//! Narrow surface the screen renderers depend on. Screens take
//! `&mut impl AppLike` rather than the concrete [`App`](crate::app::App), so
//! a renderer only sees the state handle and the click handlers it may
//! invoke.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::{AppState, Screen};

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Auth methods
    fn handle_sign_in_click(&mut self, email: String, password: String);
    fn handle_register_click(&mut self, username: String, email: String, password: String);
    fn handle_avatar_pick(&mut self);
    fn handle_sign_out_click(&mut self);

    // Navigation methods
    fn handle_screen_change(&mut self, screen: Screen);
}
