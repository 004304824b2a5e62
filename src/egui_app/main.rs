/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the egui native phonebook application.
 * It wires the frame loop to the application state and kicks off the
 * initial fetch of the person list.
 */
use eframe::egui;
use xfbook::egui_app::{theme, views, AppState};

fn main() -> Result<(), eframe::Error> {
    // Initialize tracing from RUST_LOG, defaulting to info
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "XFBook - Phonebook",
        options,
        Box::new(|cc| {
            theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(PhonebookApp::default()))
        }),
    )
}

/// Main application state
struct PhonebookApp {
    state: AppState,
}

impl Default for PhonebookApp {
    fn default() -> Self {
        let mut state = AppState::new();
        state.start_load();
        Self { state }
    }
}

impl eframe::App for PhonebookApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.check_pending_operations();

        views::render_top_bar(ctx, &mut self.state, frame);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
