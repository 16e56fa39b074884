use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::de;
use crate::errors::{PortalError, PortalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub course_name: String,
    pub course_code: String,
    pub lecturer_name: Option<String>,
    pub class_name: Option<String>,
    pub date_of_lecture: Option<NaiveDate>,
    pub scheduled_time: Option<String>,
    pub venue: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub course_code: String,
    pub lecturer_name: Option<String>,
    pub class_name: Option<String>,
    pub date_of_lecture: Option<NaiveDate>,
    pub scheduled_time: Option<String>,
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub created_by: Option<i32>,
}

/// Partial course update; absent fields keep their stored value.
///
/// Keys are the camelCase names or the column names. `id`, `createdAt` and
/// `createdBy` are accepted and dropped so a fetched row can be sent back;
/// any other key fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCourseRequest {
    #[serde(default, alias = "course_name")]
    pub course_name: Option<String>,
    #[serde(default, alias = "course_code")]
    pub course_code: Option<String>,
    #[serde(default, alias = "lecturer_name")]
    pub lecturer_name: Option<String>,
    #[serde(default, alias = "class_name")]
    pub class_name: Option<String>,
    #[serde(default, alias = "date_of_lecture")]
    pub date_of_lecture: Option<NaiveDate>,
    #[serde(default, alias = "scheduled_time")]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,

    #[serde(default, skip_serializing)]
    pub id: de::Ignored,
    #[serde(default, alias = "created_at", skip_serializing)]
    pub created_at: de::Ignored,
    #[serde(default, alias = "created_by", skip_serializing)]
    pub created_by: de::Ignored,
}

impl UpdateCourseRequest {
    pub fn has_changes(&self) -> bool {
        self.course_name.is_some()
            || self.course_code.is_some()
            || self.lecturer_name.is_some()
            || self.class_name.is_some()
            || self.date_of_lecture.is_some()
            || self.scheduled_time.is_some()
            || self.venue.is_some()
    }

    pub fn validate(&self) -> PortalResult<()> {
        if !self.has_changes() {
            return Err(PortalError::Validation(
                "No updatable fields supplied".to_string(),
            ));
        }
        Ok(())
    }
}
