//! # Banter Theme
//!
//! Midnight blue palette applied on top of egui's dark visuals. Screens pull
//! individual colors from [`Theme`]; the window-wide visuals are installed
//! once at startup via [`Theme::apply`].

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

/// Runtime color palette used by screen renderers
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background (deep navy)
    pub background: Color32,
    /// Cards and input wells (raised navy)
    pub surface: Color32,
    /// Normal text color
    pub normal: Color32,
    /// Primary accent (Banter blue)
    pub accent: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Border color
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(17, 25, 40),
            surface: Color32::from_rgb(26, 36, 56),
            normal: Color32::from_rgb(230, 234, 242),
            accent: Color32::from_rgb(81, 131, 254),
            dim: Color32::from_rgb(134, 144, 164),
            border: Color32::from_rgb(49, 62, 89),
        }
    }
}

impl Theme {
    /// Build egui visuals from the Banter palette
    pub fn banter_visuals() -> Visuals {
        let theme = Theme::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(theme.normal);

        // Panel and window backgrounds
        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.surface;
        visuals.window_stroke = Stroke::new(1.0, theme.border);
        visuals.faint_bg_color = theme.surface;
        visuals.extreme_bg_color = Color32::from_rgb(12, 18, 30);

        // Non-interactive widgets
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = theme.surface;
        visuals.widgets.inactive.weak_bg_fill = theme.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, theme.border);

        // Hovered widgets pick up the blue accent
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(36, 50, 78);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(33, 45, 70);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent);

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = Color32::from_rgb(45, 62, 98);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(40, 55, 86);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, theme.accent);

        // Text selection
        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(81, 131, 254, 64);
        visuals.selection.stroke = Stroke::new(1.0, theme.accent);

        visuals.hyperlink_color = theme.accent;

        visuals
    }

    /// Apply the Banter theme to an egui context
    pub fn apply(ctx: &Context) {
        let visuals = Self::banter_visuals();

        // Use style_mut_of instead of set_visuals to avoid panic in egui 0.33
        ctx.style_mut_of(EguiTheme::Dark, |style| {
            style.visuals = visuals.clone();
            style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
            style.spacing.button_padding = egui::Vec2::new(14.0, 7.0);
            style.spacing.interact_size = egui::Vec2::new(40.0, 28.0);
        });
    }
}
