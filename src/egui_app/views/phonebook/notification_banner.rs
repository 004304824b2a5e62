//! Notification Banner Component
//!
//! Shows the single transient notification while its time-to-live lasts.
//! The expiry check runs here because the banner is drawn every frame.

use std::time::Instant;

use eframe::egui;

use crate::egui_app::notify::Severity;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let now = Instant::now();
    state.notifier.clear_expired(now);

    let notification = match state.notifier.visible(now) {
        Some(notification) => notification.clone(),
        None => return,
    };

    let (frame, color) = match notification.severity {
        Severity::Success => (styles::success_banner_frame(), colors::SUCCESS),
        Severity::Error => (styles::error_banner_frame(), colors::ERROR),
    };

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(color, notification.message.as_str());
    });
    ui.add_space(8.0);
}
