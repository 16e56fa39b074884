use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;
use crate::errors::{PortalError, PortalResult};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i32,
    pub day_of_week: String,
    pub course_name: String,
    pub rating: i32,
    pub rated_by: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRatingRequest {
    pub day_of_week: String,
    pub course_name: String,
    #[serde(deserialize_with = "de::int")]
    pub rating: i32,
    #[serde(deserialize_with = "de::int")]
    pub rated_by: i32,
}

impl SaveRatingRequest {
    pub fn validate(&self) -> PortalResult<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(PortalError::Validation(format!(
                "rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }
        Ok(())
    }
}

/// Result of an upsert keyed by (day_of_week, course_name, rated_by).
#[derive(Debug, Clone, PartialEq)]
pub enum SavedRating {
    Created(Rating),
    Updated(Rating),
}

impl SavedRating {
    pub fn into_inner(self) -> Rating {
        match self {
            SavedRating::Created(rating) | SavedRating::Updated(rating) => rating,
        }
    }
}
