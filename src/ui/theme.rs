// Timetable Tool - ui/theme.rs
//
// Colour scheme, status colour mapping, and layout constants.
// No dependencies on business logic.

use crate::app::state::StatusLevel;
use egui::Color32;

/// Foreground colour for the status bar message.
pub fn status_colour(level: StatusLevel, dark_mode: bool) -> Color32 {
    match (level, dark_mode) {
        (StatusLevel::Error, true) => Color32::from_rgb(248, 113, 113), // Red 400
        (StatusLevel::Error, false) => Color32::from_rgb(185, 28, 28),  // Red 700
        (StatusLevel::Warning, true) => Color32::from_rgb(251, 191, 36), // Amber 400
        (StatusLevel::Warning, false) => Color32::from_rgb(180, 83, 9), // Amber 700
        (StatusLevel::Info, true) => Color32::from_rgb(209, 213, 219),  // Gray 300
        (StatusLevel::Info, false) => Color32::from_rgb(55, 65, 81),    // Gray 700
    }
}

/// Colour of the "n / 6" timetable counter: amber once the timetable is full.
pub fn capacity_colour(full: bool, dark_mode: bool) -> Color32 {
    if full {
        status_colour(StatusLevel::Warning, dark_mode)
    } else {
        status_colour(StatusLevel::Info, dark_mode)
    }
}

/// Apply light/dark visuals and the configured body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
            style
                .text_styles
                .insert(text_style, egui::FontId::proportional(font_size));
        }
    });
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const TIMETABLE_PANEL_WIDTH: f32 = 320.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const COMBO_WIDTH: f32 = 160.0;
