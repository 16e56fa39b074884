use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_reports: i64,
    pub total_courses: i64,
    pub total_lecturers: i64,
    pub total_students: i64,
    /// Mean of all ratings; 0 when nothing has been rated.
    pub average_rating: f64,
    pub total_program_reports: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}
