//! # Background Tasks
//!
//! Async flows spawned from click handlers. Results come back to the main
//! thread as [`crate::app::AppEvent`]s over the app's event channel.

pub mod auth;
