//! # UI Widgets
//!
//! Reusable components shared across screens:
//!
//! - **forms**: Text inputs, buttons, headings, and hints
//! - **notifications**: Toast notifications for operation outcomes

pub mod forms;
pub mod notifications;
