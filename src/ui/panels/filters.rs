// Timetable Tool - ui/panels/filters.rs
//
// Source file and filter controls sidebar.

use crate::app::source::ReloadPolicy;
use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::{CSV_EXTENSIONS, DEPARTMENT_CHOICES, YEAR_CHOICES};

/// Render the source file picker, the year/department inputs, and Display.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Course catalog");
    ui.separator();

    ui.label("CSV file:");
    let mut path_text = state
        .source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let path_edit = ui.add(
        egui::TextEdit::singleline(&mut path_text)
            .hint_text("Choose a .csv file")
            .desired_width(f32::INFINITY),
    );
    if path_edit.changed() {
        if path_text.is_empty() {
            state.source_path = None;
        } else {
            state.set_source_path(path_text.into());
        }
    }
    if ui.button("Browse\u{2026}").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", CSV_EXTENSIONS)
            .pick_file()
        {
            state.set_source_path(path);
        }
    }

    ui.separator();

    ui.label("Year:");
    choice_input(ui, "year_choice", &mut state.year_input, YEAR_CHOICES);

    ui.add_space(4.0);
    ui.label("Department:");
    choice_input(
        ui,
        "department_choice",
        &mut state.department_input,
        DEPARTMENT_CHOICES,
    );

    ui.add_space(8.0);
    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new("Display"))
        .clicked()
    {
        state.display_courses();
    }

    // A cached catalog only re-reads the file on request.
    if state.catalog_source.reload_policy() == ReloadPolicy::Cached {
        ui.add_space(4.0);
        if ui
            .button("Reload file")
            .on_hover_text("Re-read the CSV file and display again")
            .clicked()
        {
            state.reload_catalog();
        }
    }
}

/// Editable text field with a drop-down of preset values. Free text is kept
/// as typed; "(any)" clears the field.
fn choice_input(ui: &mut egui::Ui, id: &str, value: &mut String, choices: &[&str]) {
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(value).desired_width(theme::COMBO_WIDTH - 40.0));
        egui::ComboBox::from_id_salt(id)
            .selected_text("")
            .width(24.0)
            .show_ui(ui, |ui| {
                if ui.selectable_label(value.is_empty(), "(any)").clicked() {
                    value.clear();
                }
                for choice in choices {
                    if ui.selectable_label(value.as_str() == *choice, *choice).clicked() {
                        *value = (*choice).to_string();
                    }
                }
            });
    });
}
