//! # Chat Screen
//!
//! Landing surface after authentication. Shows the signed-in profile header
//! with sign-out, and the conversation list area (empty until messaging
//! arrives).

use egui;

use crate::app::{AppLike, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the chat screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();

    let Some(user) = state.session_user() else {
        // The caller redirects unauthenticated traffic before we get here.
        return;
    };

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        render_initial_badge(ui, &user.username, &theme);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(user.username.as_str()).size(18.0).strong());
            forms::render_hint(ui, &user.email, &theme);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if forms::render_button(ui, "Sign Out", None, Some(egui::vec2(90.0, 30.0))).clicked() {
                app.handle_sign_out_click();
            }
        });
    });

    ui.add_space(8.0);
    ui.separator();

    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("No conversations yet")
                .size(20.0)
                .color(theme.dim),
        );
        ui.add_space(6.0);
        forms::render_hint(ui, "Chats you start will show up here.", &theme);
    });
}

/// Render the uppercase first letter of the username as an avatar stand-in
fn render_initial_badge(ui: &mut egui::Ui, username: &str, theme: &Theme) {
    let initial = username
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?');

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.add_sized(
            [36.0, 36.0],
            egui::Label::new(
                egui::RichText::new(initial.to_string())
                    .size(20.0)
                    .strong()
                    .color(theme.accent),
            ),
        );
    });
}
