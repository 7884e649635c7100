// Timetable Tool - ui/panels/about.rs
//
// About dialog: shown from Help > About.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION, MAX_TIMETABLE_COURSES, WILDCARD_DEPARTMENT};

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(26.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Filter a CSV course catalog by year and department,");
                ui.label(format!(
                    "build a timetable of up to {MAX_TIMETABLE_COURSES} courses, and save it as CSV."
                ));
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Department \"{WILDCARD_DEPARTMENT}\" matches every course."
                    ))
                    .small(),
                );
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MIT License \u{00b7} Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
