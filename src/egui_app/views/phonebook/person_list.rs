//! Person List Component
//!
//! One row per visible entry, name and number plus a delete button, inside
//! a scroll area. Rows are a snapshot of the filtered store, so deleting
//! from inside the loop cannot invalidate what is being drawn.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.store.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No entries yet");
        return;
    }

    let visible = state.filtered_persons();
    if visible.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No matches");
        return;
    }

    let delete_enabled = !state.is_busy() && !state.confirm_open();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for person in &visible {
            styles::row_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.colored_label(
                        colors::TEXT_DARK,
                        egui::RichText::new(person.name.as_str()).strong(),
                    );
                    ui.colored_label(colors::TEXT_DARK, person.number.as_str());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = ui.add_enabled(delete_enabled, egui::Button::new("Delete"));
                        if delete.clicked() {
                            state.request_delete(&person.id);
                        }
                    });
                });
            });
            ui.add_space(4.0);
        }
    });
}
