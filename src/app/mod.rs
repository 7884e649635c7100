// Timetable Tool - app/mod.rs
//
// Application layer: session state and the catalog source.
// Dependencies: core layer, platform (config values, file writes).
// Must NOT depend on: ui.

pub mod source;
pub mod state;
