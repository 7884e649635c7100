// Timetable Tool - ui/panels/timetable.rs
//
// Right-hand timetable panel: current selection, capacity, Clear and Save.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::{CSV_EXTENSIONS, DEFAULT_EXPORT_FILE_NAME, MAX_TIMETABLE_COURSES};
use crate::util::error::{TimetableToolError, ValidationError};

/// Render the timetable panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Timetable");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let count = state.timetable.len();
            ui.label(
                egui::RichText::new(format!("{count} / {MAX_TIMETABLE_COURSES}")).color(
                    theme::capacity_colour(count >= MAX_TIMETABLE_COURSES, state.dark_mode),
                ),
            );
        });
    });
    ui.separator();

    if state.timetable.is_empty() {
        ui.label(egui::RichText::new("No courses added yet.").weak());
    } else {
        egui::Grid::new("timetable_grid")
            .num_columns(3)
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Code");
                ui.strong("Name");
                ui.strong("Time");
                ui.end_row();
                for course in state.timetable.iter() {
                    ui.label(&course.code);
                    ui.label(&course.name);
                    ui.label(&course.time);
                    ui.end_row();
                }
            });
    }

    ui.add_space(12.0);
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Clear Timetable").clicked() {
            state.clear_timetable();
        }
        if ui.button("Save Timetable\u{2026}").clicked() {
            prompt_and_save(state);
        }
    });
}

/// Ask for a destination and save. The empty-timetable check runs before the
/// dialog opens so the user is not asked for a file that will not be written.
pub fn prompt_and_save(state: &mut AppState) {
    if !state.can_save() {
        state.report("save", &TimetableToolError::from(ValidationError::NothingToSave));
        return;
    }
    if let Some(dest) = rfd::FileDialog::new()
        .add_filter("CSV files", CSV_EXTENSIONS)
        .set_file_name(DEFAULT_EXPORT_FILE_NAME)
        .save_file()
    {
        state.save_timetable(&dest);
    }
}
