//! # GUI Rendering Framework
//!
//! Orchestrates the per-frame rendering pipeline. Rendering works on a clone
//! of the state taken at the top of the frame, so no lock is held while
//! widgets draw, and all mutation goes back through the click handlers.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, AppState, Screen};

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;

        // Redirect to Auth when a protected screen is requested signed out
        if AppState::requires_auth(current_screen) && !state.is_authenticated() {
            app.handle_screen_change(Screen::Auth);
            screens::auth::render(ui, &state, app);
            return;
        }

        match current_screen {
            Screen::Auth => screens::auth::render(ui, &state, app),
            Screen::Chat => screens::chat::render(ui, &state, app),
        }
    });
}
