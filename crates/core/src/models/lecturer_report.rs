use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;
use crate::errors::{PortalError, PortalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LecturerReport {
    pub id: i32,
    pub faculty_name: String,
    pub class_name: String,
    pub week_of_reporting: String,
    pub date_of_lecture: NaiveDate,
    pub course_name: String,
    pub course_code: String,
    pub lecturer_name: String,
    pub actual_students_present: i32,
    pub total_registered_students: i32,
    pub venue: String,
    pub scheduled_time: String,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: Option<String>,
    pub submitted_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLecturerReportRequest {
    pub faculty_name: String,
    pub class_name: String,
    pub week_of_reporting: String,
    pub date_of_lecture: NaiveDate,
    pub course_name: String,
    pub course_code: String,
    pub lecturer_name: String,
    #[serde(alias = "actualStudents", deserialize_with = "de::int")]
    pub actual_students_present: i32,
    #[serde(alias = "totalRegistered", deserialize_with = "de::int")]
    pub total_registered_students: i32,
    pub venue: String,
    pub scheduled_time: String,
    pub topic_taught: String,
    pub learning_outcomes: String,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub submitted_by: Option<i32>,
}

/// Columns of `lecturer_reports` a caller may change through a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    FacultyName,
    ClassName,
    WeekOfReporting,
    DateOfLecture,
    CourseName,
    CourseCode,
    LecturerName,
    ActualStudentsPresent,
    TotalRegisteredStudents,
    Venue,
    ScheduledTime,
    TopicTaught,
    LearningOutcomes,
    Recommendations,
    SubmittedBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Integer,
    Date,
}

/// Keys echoed back by clients that re-submit a fetched row. Accepted, never written.
const READ_ONLY_KEYS: [&str; 3] = ["id", "createdAt", "created_at"];

impl ReportField {
    pub const ALL: [ReportField; 15] = [
        ReportField::FacultyName,
        ReportField::ClassName,
        ReportField::WeekOfReporting,
        ReportField::DateOfLecture,
        ReportField::CourseName,
        ReportField::CourseCode,
        ReportField::LecturerName,
        ReportField::ActualStudentsPresent,
        ReportField::TotalRegisteredStudents,
        ReportField::Venue,
        ReportField::ScheduledTime,
        ReportField::TopicTaught,
        ReportField::LearningOutcomes,
        ReportField::Recommendations,
        ReportField::SubmittedBy,
    ];

    /// Storage column name.
    pub fn column(self) -> &'static str {
        match self {
            ReportField::FacultyName => "faculty_name",
            ReportField::ClassName => "class_name",
            ReportField::WeekOfReporting => "week_of_reporting",
            ReportField::DateOfLecture => "date_of_lecture",
            ReportField::CourseName => "course_name",
            ReportField::CourseCode => "course_code",
            ReportField::LecturerName => "lecturer_name",
            ReportField::ActualStudentsPresent => "actual_students_present",
            ReportField::TotalRegisteredStudents => "total_registered_students",
            ReportField::Venue => "venue",
            ReportField::ScheduledTime => "scheduled_time",
            ReportField::TopicTaught => "topic_taught",
            ReportField::LearningOutcomes => "learning_outcomes",
            ReportField::Recommendations => "recommendations",
            ReportField::SubmittedBy => "submitted_by",
        }
    }

    /// Payload keys accepted besides the column name itself.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            ReportField::FacultyName => &["facultyName"],
            ReportField::ClassName => &["className"],
            ReportField::WeekOfReporting => &["weekOfReporting"],
            ReportField::DateOfLecture => &["dateOfLecture"],
            ReportField::CourseName => &["courseName"],
            ReportField::CourseCode => &["courseCode"],
            ReportField::LecturerName => &["lecturerName"],
            ReportField::ActualStudentsPresent => &["actualStudentsPresent", "actualStudents"],
            ReportField::TotalRegisteredStudents => {
                &["totalRegisteredStudents", "totalRegistered"]
            }
            ReportField::Venue => &[],
            ReportField::ScheduledTime => &["scheduledTime"],
            ReportField::TopicTaught => &["topicTaught"],
            ReportField::LearningOutcomes => &["learningOutcomes"],
            ReportField::Recommendations => &[],
            ReportField::SubmittedBy => &["submittedBy"],
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            ReportField::DateOfLecture => FieldKind::Date,
            ReportField::ActualStudentsPresent
            | ReportField::TotalRegisteredStudents
            | ReportField::SubmittedBy => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }

    fn nullable(self) -> bool {
        matches!(self, ReportField::Recommendations | ReportField::SubmittedBy)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.column() == key || field.aliases().contains(&key))
    }
}

/// A typed value ready to bind to a column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i32>),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    fn parse(field: ReportField, key: &str, value: Value) -> PortalResult<Self> {
        if value.is_null() {
            if !field.nullable() {
                return Err(PortalError::Validation(format!("{} cannot be null", key)));
            }
            return Ok(match field.kind() {
                FieldKind::Text => FieldValue::Text(None),
                FieldKind::Integer => FieldValue::Integer(None),
                FieldKind::Date => FieldValue::Date(None),
            });
        }

        match field.kind() {
            FieldKind::Text => match value {
                Value::String(s) => Ok(FieldValue::Text(Some(s))),
                Value::Number(n) => Ok(FieldValue::Text(Some(n.to_string()))),
                _ => Err(PortalError::Validation(format!("{} must be a string", key))),
            },
            FieldKind::Integer => de::value_as_i32(&value)
                .map(|n| FieldValue::Integer(Some(n)))
                .ok_or_else(|| PortalError::Validation(format!("{} must be an integer", key))),
            FieldKind::Date => value
                .as_str()
                .and_then(|s| s.parse::<NaiveDate>().ok())
                .map(|d| FieldValue::Date(Some(d)))
                .ok_or_else(|| {
                    PortalError::Validation(format!("{} must be a date (YYYY-MM-DD)", key))
                }),
        }
    }
}

/// Validated partial update of a lecturer report.
///
/// Built from a raw JSON object: every key must name an allow-listed column
/// (camelCase or snake_case), so the update statement only ever contains
/// column names from [`ReportField::column`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPatch {
    changes: Vec<(ReportField, FieldValue)>,
}

impl ReportPatch {
    pub fn from_payload(payload: Map<String, Value>) -> PortalResult<Self> {
        let mut changes: Vec<(ReportField, FieldValue)> = Vec::new();

        for (key, value) in payload {
            if READ_ONLY_KEYS.contains(&key.as_str()) {
                continue;
            }
            let field = ReportField::from_key(&key)
                .ok_or_else(|| PortalError::Validation(format!("Unknown field: {}", key)))?;
            if changes.iter().any(|(existing, _)| *existing == field) {
                return Err(PortalError::Validation(format!(
                    "Field {} supplied more than once",
                    field.column()
                )));
            }
            let value = FieldValue::parse(field, &key, value)?;
            changes.push((field, value));
        }

        if changes.is_empty() {
            return Err(PortalError::Validation(
                "No updatable fields supplied".to_string(),
            ));
        }

        Ok(Self { changes })
    }

    pub fn changes(&self) -> &[(ReportField, FieldValue)] {
        &self.changes
    }
}
