pub mod auth;
pub mod course;
pub mod dashboard;
pub mod lecturer_report;
pub mod program_report;
pub mod rating;
pub mod search;
pub mod timetable;
