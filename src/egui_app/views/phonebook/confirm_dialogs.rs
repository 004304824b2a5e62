//! Confirmation Dialogs
//!
//! Modal windows for the two destructive decisions: overwriting an existing
//! entry's number and deleting an entry. Each dialog renders while its
//! intent is parked on the state and answers through the resolve methods.

use eframe::egui;

use crate::egui_app::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    render_overwrite_dialog(ui, state);
    render_destroy_dialog(ui, state);
}

fn render_overwrite_dialog(ui: &mut egui::Ui, state: &mut AppState) {
    let name = match &state.pending_overwrite {
        Some(person) => person.name.clone(),
        None => return,
    };

    let mut answer: Option<bool> = None;

    egui::Window::new("Update number")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(300.0);

            ui.label(format!(
                "{} is already in the phonebook. Do you want to update their number?",
                name
            ));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
                if ui.button("Update").clicked() {
                    answer = Some(true);
                }
            });
        });

    if let Some(confirmed) = answer {
        state.resolve_overwrite(confirmed);
    }
}

fn render_destroy_dialog(ui: &mut egui::Ui, state: &mut AppState) {
    let name = match &state.pending_destroy {
        Some(person) => person.name.clone(),
        None => return,
    };

    let mut answer: Option<bool> = None;

    egui::Window::new("Delete person")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(300.0);

            ui.label(format!("Are you sure you want to delete {}?", name));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
                if ui.button("Delete").clicked() {
                    answer = Some(true);
                }
            });
        });

    if let Some(confirmed) = answer {
        state.resolve_destroy(confirmed);
    }
}
