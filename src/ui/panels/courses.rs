// Timetable Tool - ui/panels/courses.rs
//
// Central course list. Rows are rendered from the session's side table of
// typed records; clicking a row toggles its display index in the selection.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the filtered course list and the Add button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Courses");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let selected = state.selected.len();
            let add = ui.add_enabled(
                selected > 0,
                egui::Button::new(format!("Add Course ({selected})")),
            );
            if add.clicked() {
                state.add_selected();
            }
        });
    });
    ui.separator();

    let total = state.results.len();
    if total == 0 {
        ui.centered_and_justified(|ui| {
            ui.label("No courses displayed.\nChoose a CSV file, pick a year and/or department, then press Display.");
        });
        return;
    }

    // Toggles are collected and applied after show_rows so `state.results`
    // is not borrowed while the selection is mutated.
    let mut toggled: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, theme::ROW_HEIGHT, total, |ui, row_range| {
            for display_idx in row_range {
                let Some(course) = state.results.get(display_idx) else {
                    continue;
                };
                let already_added = state.timetable.contains(course);
                let mut text = egui::RichText::new(course.display_label());
                if already_added {
                    text = text.weak();
                }

                let response = ui
                    .add_sized(
                        [ui.available_width(), theme::ROW_HEIGHT],
                        egui::SelectableLabel::new(state.is_selected(display_idx), text),
                    )
                    .on_hover_text(if already_added {
                        "Already in your timetable"
                    } else {
                        "Click to select; selected courses are added together"
                    });
                if response.clicked() {
                    toggled = Some(display_idx);
                }
            }
        });

    if let Some(idx) = toggled {
        state.toggle_selection(idx);
    }
}
