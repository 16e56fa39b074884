use chrono::{DateTime, NaiveDate, Utc};
use eyre::{eyre, Report};
use luct_core::models::{
    course::Course,
    lecturer_report::LecturerReport,
    program_report::ProgramReport,
    rating::Rating,
    timetable::TimetableEntry,
    user::{Credentials, Role, User},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub is_logged_in: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbUser> for Credentials {
    type Error = Report;

    fn try_from(row: DbUser) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|e: String| eyre!(e))?;
        Ok(Credentials {
            password_hash: row.password,
            user: User {
                id: row.id,
                username: row.username,
                email: row.email,
                role,
                full_name: row.full_name,
                phone_number: row.phone_number,
                department: row.department,
                is_logged_in: row.is_logged_in,
                created_at: row.created_at,
            },
        })
    }
}

impl TryFrom<DbUser> for User {
    type Error = Report;

    fn try_from(row: DbUser) -> Result<Self, Self::Error> {
        Credentials::try_from(row).map(|credentials| credentials.user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLecturerReport {
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

impl From<DbLecturerReport> for LecturerReport {
    fn from(row: DbLecturerReport) -> Self {
        LecturerReport {
            id: row.id,
            faculty_name: row.faculty_name,
            class_name: row.class_name,
            week_of_reporting: row.week_of_reporting,
            date_of_lecture: row.date_of_lecture,
            course_name: row.course_name,
            course_code: row.course_code,
            lecturer_name: row.lecturer_name,
            actual_students_present: row.actual_students_present,
            total_registered_students: row.total_registered_students,
            venue: row.venue,
            scheduled_time: row.scheduled_time,
            topic_taught: row.topic_taught,
            learning_outcomes: row.learning_outcomes,
            recommendations: row.recommendations,
            submitted_by: row.submitted_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourse {
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

impl From<DbCourse> for Course {
    fn from(row: DbCourse) -> Self {
        Course {
            id: row.id,
            course_name: row.course_name,
            course_code: row.course_code,
            lecturer_name: row.lecturer_name,
            class_name: row.class_name,
            date_of_lecture: row.date_of_lecture,
            scheduled_time: row.scheduled_time,
            venue: row.venue,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProgramReport {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub report_date: NaiveDate,
    pub submitted_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<DbProgramReport> for ProgramReport {
    fn from(row: DbProgramReport) -> Self {
        ProgramReport {
            id: row.id,
            title: row.title,
            content: row.content,
            report_date: row.report_date,
            submitted_by: row.submitted_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRating {
    pub id: i32,
    pub day_of_week: String,
    pub course_name: String,
    pub rating: i32,
    pub rated_by: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbRating> for Rating {
    fn from(row: DbRating) -> Self {
        Rating {
            id: row.id,
            day_of_week: row.day_of_week,
            course_name: row.course_name,
            rating: row.rating,
            rated_by: row.rated_by,
            created_at: row.created_at,
        }
    }
}

/// Row returned by the rating upsert; `inserted` is false when an existing
/// (day, course, rater) row was overwritten.
#[derive(Debug, Clone, FromRow)]
pub struct DbSavedRating {
    #[sqlx(flatten)]
    pub rating: DbRating,
    pub inserted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetableEntry {
    pub id: i32,
    pub day: String,
    pub course: String,
    pub time_slot: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbTimetableEntry> for TimetableEntry {
    fn from(row: DbTimetableEntry) -> Self {
        TimetableEntry {
            id: row.id,
            day: row.day,
            course: row.course,
            time_slot: row.time_slot,
            created_at: row.created_at,
        }
    }
}
