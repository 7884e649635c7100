// Timetable Tool - ui/panels/mod.rs

pub mod about;
pub mod courses;
pub mod filters;
pub mod timetable;
