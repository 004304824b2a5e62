//! Color Constants for the Phonebook Theme
//!
//! This module defines all the color constants used throughout the phonebook UI.
//! Colors are based on a warm brown/tan color scheme.

use eframe::egui::Color32;

/// Main application background - Off-white
pub const APP_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Success banner text - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

/// Success banner background - Pale green
pub const SUCCESS_BG: Color32 = Color32::from_rgb(0xDE, 0xF0, 0xD8);

/// Error banner text - Red
pub const ERROR: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

/// Error banner background - Pale red
pub const ERROR_BG: Color32 = Color32::from_rgb(0xF9, 0xDE, 0xDC);

/// List row background - Light tan
pub const ROW_BG: Color32 = Color32::from_rgb(0xEF, 0xE6, 0xDA);

/// List row border - Muted tan
pub const ROW_BORDER: Color32 = Color32::from_rgb(0xC3, 0xA9, 0x90);

/// Input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Input border - Muted tan
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xC3, 0xA9, 0x90);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Button primary hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x6D, 0x4B, 0x3D);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xD0, 0xC0, 0xB0);

/// Accent color for highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);
