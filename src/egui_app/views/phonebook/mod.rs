//! Phonebook View
//!
//! Composes the filter bar, add form, person list and notification banner
//! into the main panel, and hosts the two confirmation dialogs.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod confirm_dialogs;
pub mod filter_bar;
pub mod notification_banner;
pub mod person_form;
pub mod person_list;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.loading {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
        });
        return;
    }

    ui.label(
        egui::RichText::new("Phonebook")
            .size(24.0)
            .strong()
            .color(colors::TEXT_DARK),
    );
    ui.add_space(8.0);

    // The initial fetch never succeeded; nothing below would have data.
    if let Some(ref message) = state.load_error {
        styles::error_banner_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(colors::ERROR, message.as_str());
        });
        return;
    }

    notification_banner::render(ui, state);
    filter_bar::render(ui, state);

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new("Add a new")
            .size(18.0)
            .strong()
            .color(colors::TEXT_DARK),
    );
    ui.add_space(4.0);
    person_form::render(ui, state);

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new("Numbers")
            .size(18.0)
            .strong()
            .color(colors::TEXT_DARK),
    );
    ui.add_space(4.0);
    person_list::render(ui, state);

    confirm_dialogs::render(ui, state);
}
