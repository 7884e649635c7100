// Timetable Tool - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, status bar, and panels.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants::CSV_EXTENSIONS;

/// The Timetable Tool application.
pub struct TimetableApp {
    pub state: AppState,
}

impl TimetableApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TimetableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open CSV\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV files", CSV_EXTENSIONS)
                            .pick_file()
                        {
                            self.state.set_source_path(path);
                        }
                        ui.close_menu();
                    }
                    // Save is enabled only when there is something to save.
                    let can_save = self.state.can_save();
                    ui.add_enabled_ui(can_save, |ui| {
                        if ui.button("Save Timetable\u{2026}").clicked() {
                            ui::panels::timetable::prompt_and_save(&mut self.state);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar: the single advisory message.
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.state.status {
                    Some(status) => {
                        ui.label(
                            egui::RichText::new(&status.text)
                                .color(ui::theme::status_colour(status.level, self.state.dark_mode)),
                        );
                    }
                    None => {
                        ui.label("Ready.");
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref path) = self.state.source_path {
                        ui.label(egui::RichText::new(path.display().to_string()).weak());
                    }
                });
            });
        });

        // Left sidebar: source file and filters.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::filters::render(ui, &mut self.state);
            });

        // Right panel: the timetable.
        egui::SidePanel::right("timetable")
            .default_width(ui::theme::TIMETABLE_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::timetable::render(ui, &mut self.state);
            });

        // Central panel: filtered courses.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::courses::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
