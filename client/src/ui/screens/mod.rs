//! # Screen Renderers
//!
//! One module per [`Screen`](crate::app::Screen) variant:
//!
//! - **auth**: Sign-in and sign-up cards
//! - **chat**: Signed-in landing surface

pub mod auth;
pub mod chat;
