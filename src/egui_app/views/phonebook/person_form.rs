//! Person Form Component
//!
//! Name and number inputs plus the Add button. Submission goes through
//! `AppState::handle_submit`, which validates and routes it to a create or
//! an overwrite confirmation.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Locked while a save is in flight or a dialog is waiting for an answer.
    let enabled = !state.is_busy() && !state.confirm_open();

    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal(|ui| {
            ui.add_sized(
                [60.0, 24.0],
                egui::Label::new(egui::RichText::new("name:").color(colors::TEXT_SECONDARY)),
            );
            ui.add_sized(
                [220.0, 28.0],
                egui::TextEdit::singleline(&mut state.name_input),
            );
        });
        ui.add_space(4.0);

        let number_response = ui
            .horizontal(|ui| {
                ui.add_sized(
                    [60.0, 24.0],
                    egui::Label::new(egui::RichText::new("number:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [220.0, 28.0],
                    egui::TextEdit::singleline(&mut state.number_input),
                )
            })
            .inner;
        ui.add_space(8.0);

        // Submit on Enter from the number field
        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if number_response.lost_focus() && enter_pressed {
            state.handle_submit();
        }

        if ui.button("Add").clicked() {
            state.handle_submit();
        }
    });
}
