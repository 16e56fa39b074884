pub mod course;
pub mod de;
pub mod lecturer_report;
pub mod program_report;
pub mod rating;
pub mod stats;
pub mod timetable;
pub mod user;
