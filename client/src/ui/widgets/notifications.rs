//! # Notifications Widget
//!
//! Toast notification system using egui-notify. Sign-in, registration, and
//! sign-out outcomes all surface here rather than as inline form text.

use egui_notify::Toasts;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification (green, e.g. account created)
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification (red, e.g. rejected credentials)
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Show a warning notification (yellow, e.g. missing avatar)
    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    /// Show an info notification (blue, e.g. signed out)
    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Render queued toasts into the frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
