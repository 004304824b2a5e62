//! Theme Module
//!
//! This module provides the color scheme and styling for the phonebook
//! application. It includes:
//!
//! - Color constants for the brown/tan theme
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for the banner, form and list row components
//!
//! # Usage
//!
//! ```text
//! use crate::egui_app::theme::{colors, styles};
//!
//! // Apply global theme
//! styles::apply_global_theme(ctx);
//!
//! // Use color constants
//! ui.colored_label(colors::TEXT_SECONDARY, "no matches");
//!
//! // Use frame builders
//! styles::row_frame().show(ui, |ui| {
//!     // Row content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
