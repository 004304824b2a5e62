//! Filter Bar Component
//!
//! A text input that narrows the list to names containing the typed text.
//! Filtering is local and case-insensitive; it never touches the backend.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Render the filter input
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, "Filter shown with");

        let _response = ui.add(
            egui::TextEdit::singleline(&mut state.filter_input)
                .hint_text("Search for a name")
                .desired_width(180.0),
        );

        // Clear button
        if !state.filter_input.is_empty() {
            if ui.button("✕").clicked() {
                state.filter_input.clear();
            }
        }
    });
}
