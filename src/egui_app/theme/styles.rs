//! Theme Styling Functions
//!
//! This module provides helper functions for applying the brown color scheme
//! consistently across all UI components.

use super::colors;
use eframe::egui::{self, CornerRadius, Stroke};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::APP_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::ROW_BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::APP_BG;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.hovered.bg_fill = colors::BUTTON_PRIMARY_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the main content area
pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::APP_BG)
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame style for the success notification banner
pub fn success_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SUCCESS_BG)
        .stroke(Stroke::new(1.0, colors::SUCCESS))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::same(8))
}

/// Create a frame style for the error notification banner
pub fn error_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .stroke(Stroke::new(1.0, colors::ERROR))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::same(8))
}

/// Create a frame style for one phonebook list row
pub fn row_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ROW_BG)
        .stroke(Stroke::new(1.0, colors::ROW_BORDER))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(12, 8))
}
