//! Banter desktop client entry point
//!
//! Boots logging, enters the global Tokio runtime, and hands the frame loop
//! to eframe. [`ClientApp`] is the thin eframe wrapper around [`App`]: each
//! frame it applies finished flow results, flushes queued notices into
//! toasts, evicts retired avatar previews, and renders the current screen.

use client::app::{App, NoticeLevel};
use client::config::AppConfig;
use client::logging;
use client::ui;
use client::ui::theme::Theme;
use client::ui::widgets::notifications::NotificationManager;
use client::utils::runtime::TOKIO_RT;

/// eframe application wrapper
struct ClientApp {
    app: App,
    notifications: NotificationManager,
}

impl ClientApp {
    fn new(config: &AppConfig) -> Self {
        Self {
            app: App::new(config),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for ClientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply finished flow results so this frame draws fresh state
        self.app.on_tick();

        // Evict preview images whose selection was replaced or cleared
        for uri in self.app.take_retired_previews() {
            ctx.forget_image(&uri);
        }

        // Flush queued notices into toasts
        for (level, message) in self.app.take_notices() {
            match level {
                NoticeLevel::Success => self.notifications.success(message),
                NoticeLevel::Error => self.notifications.error(message),
                NoticeLevel::Warning => self.notifications.warning(message),
                NoticeLevel::Info => self.notifications.info(message),
            }
        }

        ui::render(ctx, &mut self.app);
        self.notifications.show(ctx);

        // Keep draining flow results while the window is idle
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result {
    let config = AppConfig::from_env();
    let _log_guard = logging::init(&config);

    // Click handlers call tokio::spawn from the UI thread; entering the
    // runtime here gives them a reactor for the lifetime of the window.
    let _runtime = TOKIO_RT.enter();

    tracing::info!(api_url = %config.api_url, "Starting Banter client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Banter")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([840.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Banter",
        options,
        Box::new(move |cc| {
            // bytes:// avatar previews decode through egui_extras loaders
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(ClientApp::new(&config)))
        }),
    )
}
