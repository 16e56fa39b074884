use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::de;
use crate::errors::{PortalError, PortalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramReport {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub report_date: NaiveDate,
    pub submitted_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramReportRequest {
    pub title: String,
    pub content: String,
    pub report_date: NaiveDate,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub submitted_by: Option<i32>,
}

/// Partial program report update. Same key rules as course updates: `id`,
/// `createdAt` and `submittedBy` are dropped, unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProgramReportRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "report_date")]
    pub report_date: Option<NaiveDate>,

    #[serde(default, skip_serializing)]
    pub id: de::Ignored,
    #[serde(default, alias = "created_at", skip_serializing)]
    pub created_at: de::Ignored,
    #[serde(default, alias = "submitted_by", skip_serializing)]
    pub submitted_by: de::Ignored,
}

impl UpdateProgramReportRequest {
    pub fn validate(&self) -> PortalResult<()> {
        if self.title.is_none() && self.content.is_none() && self.report_date.is_none() {
            return Err(PortalError::Validation(
                "No updatable fields supplied".to_string(),
            ));
        }
        Ok(())
    }
}
