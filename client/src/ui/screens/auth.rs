//! # Authentication Screen
//!
//! Side-by-side sign-in and sign-up cards using egui widgets. Both forms are
//! live at the same time; submitting either one drives the matching async
//! flow through the [`AppLike`] click handlers.

use egui;

use crate::app::{AppLike, AppState, SignInForm, SignUpForm};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render authentication screen (sign-in and sign-up)
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();

    ui.add_space(36.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(state.current_screen.title())
                .size(30.0)
                .strong()
                .color(theme.accent),
        );
        forms::render_hint(ui, "Sign in to start chatting", &theme);
    });
    ui.add_space(28.0);

    // Split screen: returning users left, new accounts right
    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui| {
            ui.add_space(16.0);
            render_sign_in_form(ui, &state.auth.sign_in, app, &theme);
        });

        columns[1].vertical_centered(|ui| {
            ui.add_space(16.0);
            render_sign_up_form(ui, &state.auth.sign_up, app, &theme);
        });
    });
}

/// Render the sign-in card
fn render_sign_in_form(
    ui: &mut egui::Ui,
    form: &SignInForm,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Welcome back", theme);

    // Local mutable copies for the text inputs
    let mut email_input = form.email.clone();
    let mut password_input = form.password.clone();

    forms::render_text_input(
        ui,
        "Email:",
        &mut email_input,
        "you@example.com",
        false,
        [260.0, 32.0],
    );

    // Update shared state
    {
        let mut state = app.state().write();
        state.auth.sign_in.email = email_input.clone();
    }

    ui.add_space(8.0);

    let password_response = forms::render_text_input(
        ui,
        "Password:",
        &mut password_input,
        "Enter password",
        true,
        [260.0, 32.0],
    );

    // Enter submits unless a sign-in is already in flight
    let submit = !form.loading
        && password_response.lost_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter));

    // Update shared state
    {
        let mut state = app.state().write();
        state.auth.sign_in.password = password_input.clone();
    }

    ui.add_space(14.0);

    let label = if form.loading { "Signing In..." } else { "Sign In" };
    let clicked = ui
        .add_enabled_ui(!form.loading, |ui| {
            forms::render_button(ui, label, Some(theme.accent), Some(egui::vec2(130.0, 34.0)))
                .clicked()
        })
        .inner;

    if clicked || submit {
        app.handle_sign_in_click(email_input, password_input);
    }

    ui.add_space(8.0);
    forms::render_hint(ui, "Press <Enter> to sign in", theme);
}

/// Render the sign-up card
fn render_sign_up_form(
    ui: &mut egui::Ui,
    form: &SignUpForm,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Create an Account", theme);

    render_avatar_picker(ui, form, app, theme);

    ui.add_space(8.0);

    // Local mutable copies for the text inputs
    let mut username_input = form.username.clone();
    let mut email_input = form.email.clone();
    let mut password_input = form.password.clone();

    forms::render_text_input(
        ui,
        "Username:",
        &mut username_input,
        "Pick a username",
        false,
        [260.0, 32.0],
    );

    // Update shared state
    {
        let mut state = app.state().write();
        state.auth.sign_up.username = username_input.clone();
    }

    ui.add_space(8.0);

    forms::render_text_input(
        ui,
        "Email:",
        &mut email_input,
        "you@example.com",
        false,
        [260.0, 32.0],
    );

    // Update shared state
    {
        let mut state = app.state().write();
        state.auth.sign_up.email = email_input.clone();
    }

    ui.add_space(8.0);

    let password_response = forms::render_text_input(
        ui,
        "Password:",
        &mut password_input,
        "Choose a password",
        true,
        [260.0, 32.0],
    );

    // Enter submits unless a registration is already in flight
    let submit = !form.loading
        && password_response.lost_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter));

    // Update shared state
    {
        let mut state = app.state().write();
        state.auth.sign_up.password = password_input.clone();
    }

    ui.add_space(14.0);

    let label = if form.loading {
        "Creating Account..."
    } else {
        "Sign Up"
    };
    let clicked = ui
        .add_enabled_ui(!form.loading, |ui| {
            forms::render_button(ui, label, Some(theme.accent), Some(egui::vec2(130.0, 34.0)))
                .clicked()
        })
        .inner;

    if clicked || submit {
        app.handle_register_click(username_input, email_input, password_input);
    }
}

/// Render the avatar preview and picker row at the top of the sign-up card
fn render_avatar_picker(
    ui: &mut egui::Ui,
    form: &SignUpForm,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    ui.horizontal(|ui| {
        match (&form.avatar.preview_uri, &form.avatar.picked) {
            (Some(uri), Some(picked)) => {
                // The URI changes on every selection, so egui's image cache
                // never serves bytes from an earlier pick.
                let image = egui::Image::from_bytes(
                    uri.clone(),
                    egui::load::Bytes::Shared(picked.bytes.clone()),
                )
                .fit_to_exact_size(egui::vec2(56.0, 56.0));
                ui.add(image);
            }
            _ => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.add_sized(
                        [44.0, 44.0],
                        egui::Label::new(egui::RichText::new("?").size(24.0).color(theme.dim)),
                    );
                });
            }
        }

        ui.vertical(|ui| {
            if forms::render_button(ui, "Upload an image", None, None).clicked() {
                app.handle_avatar_pick();
            }
            match &form.avatar.picked {
                Some(picked) => forms::render_hint(ui, &picked.file_name, theme),
                None => forms::render_hint(ui, "Shown next to your messages", theme),
            }
        });
    });
}
