use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod phonebook;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, frame: &mut eframe::Frame) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            let _frame = frame;

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📖 XFBook").size(18.0).strong(),
                );

                // Busy indicator while a save or delete is in flight
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.is_busy() {
                        ui.colored_label(colors::TEXT_LIGHT, "Saving...");
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::content_frame())
        .show(ctx, |ui| phonebook::render(ui, state));
}
