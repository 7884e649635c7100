// Timetable Tool - app/state.rs
//
// Application state management: the explicit session object. Holds the
// chosen source file, filter inputs, the displayed results, the selection,
// and the timetable. Owned by the eframe::App implementation.
//
// Each user-facing operation has a `try_*` form returning a typed error and
// a plain form that turns any error into the single advisory status message.
// A failed operation never changes results, selection, or timetable.

use crate::app::source::CatalogSource;
use crate::core::catalog::FilterCriteria;
use crate::core::export::export_csv;
use crate::core::model::CourseRecord;
use crate::core::timetable::TimetableSet;
use crate::platform::fs::write_atomic;
use crate::util::error::{ExportError, Result, TimetableToolError, ValidationError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Severity of the advisory message shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// The one advisory message visible to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    /// User-correctable problems are warnings; I/O and format failures are
    /// errors.
    pub fn from_error(err: &TimetableToolError) -> Self {
        let level = match err {
            TimetableToolError::Validation(_) | TimetableToolError::Selection(_) => {
                StatusLevel::Warning
            }
            _ => StatusLevel::Error,
        };
        Self {
            level,
            text: err.to_string(),
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Catalog file chosen via Browse or the CLI.
    pub source_path: Option<PathBuf>,

    /// Year filter input. Empty = no year filter.
    pub year_input: String,

    /// Department filter input. Empty = no department filter.
    pub department_input: String,

    /// Courses currently displayed. Display index N is `results[N]`; selections
    /// resolve through this table, never by re-parsing row labels.
    pub results: Vec<CourseRecord>,

    /// Selected display indices into `results`.
    pub selected: BTreeSet<usize>,

    /// The user's timetable.
    pub timetable: TimetableSet,

    /// Advisory message for the status bar.
    pub status: Option<StatusMessage>,

    /// Catalog loader and its reload policy.
    pub catalog_source: CatalogSource,

    /// Destination of the most recent successful save.
    pub last_saved_path: Option<PathBuf>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark (true) or light (false) theme.
    pub dark_mode: bool,
}

impl AppState {
    /// Create an empty session.
    pub fn new(catalog_source: CatalogSource) -> Self {
        Self {
            source_path: None,
            year_input: String::new(),
            department_input: String::new(),
            results: Vec::new(),
            selected: BTreeSet::new(),
            timetable: TimetableSet::new(),
            status: None,
            catalog_source,
            last_saved_path: None,
            show_about: false,
            dark_mode: true,
        }
    }

    // -------------------------------------------------------------------------
    // Browse
    // -------------------------------------------------------------------------

    /// Choose the catalog file. Nothing is read until the next display.
    ///
    /// Choosing a file (even the same one again) drops any cached catalog so
    /// the next display reads the file as it is now.
    pub fn set_source_path(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "Catalog source selected");
        self.catalog_source.invalidate();
        self.source_path = Some(path);
    }

    /// Force the next display to re-read the catalog file, then display.
    pub fn reload_catalog(&mut self) {
        tracing::info!("Catalog reload requested");
        self.catalog_source.invalidate();
        self.display_courses();
    }

    /// Current filter inputs as criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.year_input, &self.department_input)
    }

    // -------------------------------------------------------------------------
    // Display (filter)
    // -------------------------------------------------------------------------

    /// Filter the catalog and replace the displayed results.
    ///
    /// Returns the number of matching courses. Zero matches is success.
    pub fn try_display_courses(&mut self) -> Result<usize> {
        let path = self
            .source_path
            .clone()
            .ok_or(ValidationError::NoSourceFile)?;
        let criteria = self.criteria();
        criteria.validate()?;

        let outcome = self.catalog_source.filter(&path, &criteria)?;
        let count = outcome.courses.len();

        tracing::info!(
            path = %path.display(),
            year = criteria.year.as_deref().unwrap_or(""),
            department = criteria.department.as_deref().unwrap_or(""),
            matches = count,
            reloaded = outcome.reloaded,
            "Courses filtered"
        );

        self.results = outcome.courses;
        self.selected.clear();
        let skipped = outcome.warnings.len();
        self.status = Some(if count == 0 && skipped > 0 {
            StatusMessage::warning(format!(
                "No matching courses found for year={}, code={}; {skipped} malformed row(s) skipped.",
                self.year_input, self.department_input
            ))
        } else if count == 0 {
            StatusMessage::info(format!(
                "No matching courses found for year={}, code={}",
                self.year_input, self.department_input
            ))
        } else if skipped > 0 {
            StatusMessage::warning(format!(
                "{count} course(s) found; {skipped} malformed row(s) skipped."
            ))
        } else {
            StatusMessage::info(format!("{count} course(s) found."))
        });

        Ok(count)
    }

    /// Display handler for the UI: errors become the status message.
    pub fn display_courses(&mut self) {
        if let Err(e) = self.try_display_courses() {
            self.report("display", &e);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of the displayed row at `index`. Out-of-range indices
    /// are ignored.
    pub fn toggle_selection(&mut self, index: usize) {
        if index >= self.results.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Typed records for the selected rows, in display order.
    pub fn selected_courses(&self) -> Vec<CourseRecord> {
        self.selected
            .iter()
            .filter_map(|&idx| self.results.get(idx))
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Add
    // -------------------------------------------------------------------------

    /// Add the selected rows to the timetable as one batch.
    ///
    /// Returns the number of courses added. The selection is cleared on
    /// success and kept on failure so the user can adjust it.
    pub fn try_add_selected(&mut self) -> Result<usize> {
        let candidates = self.selected_courses();
        if candidates.is_empty() {
            return Err(ValidationError::NoSelection.into());
        }

        self.timetable.add(&candidates)?;
        self.selected.clear();

        tracing::info!(
            added = candidates.len(),
            total = self.timetable.len(),
            "Timetable updated"
        );
        self.status = Some(StatusMessage::info(format!(
            "Added {} course(s); timetable has {} of {}.",
            candidates.len(),
            self.timetable.len(),
            crate::util::constants::MAX_TIMETABLE_COURSES
        )));
        Ok(candidates.len())
    }

    pub fn add_selected(&mut self) {
        if let Err(e) = self.try_add_selected() {
            self.report("add", &e);
        }
    }

    // -------------------------------------------------------------------------
    // Clear
    // -------------------------------------------------------------------------

    /// Empty the timetable, and with it the displayed results and selection.
    pub fn clear_timetable(&mut self) {
        self.timetable.clear();
        self.results.clear();
        self.selected.clear();
        self.status = None;
        tracing::info!("Timetable cleared");
    }

    // -------------------------------------------------------------------------
    // Save
    // -------------------------------------------------------------------------

    /// Whether Save can proceed (the timetable is non-empty).
    pub fn can_save(&self) -> bool {
        !self.timetable.is_empty()
    }

    /// Write the timetable to `dest` as headerless CSV, replacing any
    /// existing file. Returns the number of rows written.
    pub fn try_save_timetable(&mut self, dest: &Path) -> Result<usize> {
        if self.timetable.is_empty() {
            return Err(ValidationError::NothingToSave.into());
        }

        let mut buf = Vec::new();
        let count = export_csv(&self.timetable.contents(), &mut buf, dest)?;
        write_atomic(dest, &buf).map_err(|e| ExportError::Io {
            path: dest.to_path_buf(),
            source: e,
        })?;

        tracing::info!(path = %dest.display(), courses = count, "Timetable saved");
        self.last_saved_path = Some(dest.to_path_buf());
        self.status = Some(StatusMessage::info(format!(
            "Timetable has been saved successfully to '{}'.",
            dest.display()
        )));
        Ok(count)
    }

    pub fn save_timetable(&mut self, dest: &Path) {
        if let Err(e) = self.try_save_timetable(dest) {
            self.report("save", &e);
        }
    }

    // -------------------------------------------------------------------------
    // Boundary
    // -------------------------------------------------------------------------

    /// Log `err` and make it the advisory message.
    pub fn report(&mut self, operation: &'static str, err: &TimetableToolError) {
        let status = StatusMessage::from_error(err);
        match status.level {
            StatusLevel::Error => tracing::error!(operation, error = %err, "Operation failed"),
            _ => tracing::warn!(operation, error = %err, "Operation rejected"),
        }
        self.status = Some(status);
    }
}
