// Timetable Tool - core/mod.rs
//
// Core business logic layer: course records, catalog filtering, the bounded
// timetable set, and CSV export.
// Must NOT depend on: ui, platform, app.

pub mod catalog;
pub mod export;
pub mod model;
pub mod timetable;
