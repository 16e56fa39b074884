use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use luct_api::{build_router, ApiState};
use luct_core::models::{
    course::Course,
    lecturer_report::LecturerReport,
    user::{Role, User},
};
use luct_db::mock::repositories::MockStore;

/// Router backed by the given mock store.
pub fn server(store: MockStore) -> TestServer {
    let state = Arc::new(ApiState::new(store));
    TestServer::new(build_router(state)).expect("failed to start test server")
}

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
}

pub fn lecture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

pub fn sample_user(id: i32, username: &str, role: Role) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{}@luct.ac.ls", username),
        role,
        full_name: None,
        phone_number: None,
        department: Some("FICT".to_string()),
        is_logged_in: false,
        created_at: timestamp(),
    }
}

pub fn sample_report(id: i32, submitted_by: Option<i32>) -> LecturerReport {
    LecturerReport {
        id,
        faculty_name: "FICT".to_string(),
        class_name: "BSCIT Y2".to_string(),
        week_of_reporting: "Week 6".to_string(),
        date_of_lecture: lecture_date(),
        course_name: "DB101".to_string(),
        course_code: "DB101".to_string(),
        lecturer_name: "alice".to_string(),
        actual_students_present: 31,
        total_registered_students: 40,
        venue: "Hall 2".to_string(),
        scheduled_time: "08:30".to_string(),
        topic_taught: "Normalisation".to_string(),
        learning_outcomes: "Students can normalise to 3NF".to_string(),
        recommendations: None,
        submitted_by,
        created_at: timestamp(),
    }
}

pub fn sample_course(id: i32, code: &str) -> Course {
    Course {
        id,
        course_name: "Databases".to_string(),
        course_code: code.to_string(),
        lecturer_name: Some("alice".to_string()),
        class_name: Some("BSCIT Y2".to_string()),
        date_of_lecture: None,
        scheduled_time: None,
        venue: Some("Hall 2".to_string()),
        created_by: None,
        created_at: timestamp(),
    }
}
