use axum::http::StatusCode;
use luct_core::{
    errors::PortalError,
    models::{
        course::{CreateCourseRequest, UpdateCourseRequest},
        program_report::{CreateProgramReportRequest, ProgramReport},
        timetable::{CreateTimetableEntryRequest, TimetableEntry},
    },
};
use luct_db::mock::repositories::MockStore;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{lecture_date, sample_course, server, timestamp};

#[tokio::test]
async fn create_course_returns_201() {
    let mut store = MockStore::new();
    store
        .expect_create_course()
        .withf(|course: &CreateCourseRequest| {
            course.course_code == "DB101" && course.created_by == Some(3)
        })
        .returning(|course| Ok(sample_course(1, &course.course_code)));

    let response = server(store)
        .post("/api/courses")
        .json(&json!({
            "courseName": "Databases",
            "courseCode": "DB101",
            "lecturerName": "alice",
            "createdBy": "3"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["course_code"], "DB101");
}

#[tokio::test]
async fn duplicate_course_code_is_a_bad_request() {
    let mut store = MockStore::new();
    store
        .expect_create_course()
        .returning(|_| Err(PortalError::Conflict("Course code already exists".to_string())));

    let response = server(store)
        .post("/api/courses")
        .json(&json!({ "courseName": "Databases", "courseCode": "DB101" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Course code already exists" }));
}

#[tokio::test]
async fn course_update_forwards_only_supplied_fields() {
    let mut store = MockStore::new();
    store
        .expect_update_course()
        .with(
            eq(4),
            eq(UpdateCourseRequest {
                venue: Some("Hall 9".to_string()),
                ..Default::default()
            }),
        )
        .returning(|id, changes| {
            let mut course = sample_course(id, "DB101");
            course.venue = changes.venue;
            Ok(Some(course))
        });

    let response = server(store)
        .put("/api/courses/4")
        .json(&json!({ "venue": "Hall 9" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["venue"], "Hall 9");
    assert_eq!(body["course_name"], "Databases");
}

#[tokio::test]
async fn missing_course_is_404() {
    let mut store = MockStore::new();
    store.expect_get_course().returning(|_| Ok(None));
    store.expect_delete_course().returning(|_| Ok(None));
    let server = server(store);

    let response = server.get("/api/courses/8").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Course not found" }));

    server
        .delete("/api/courses/8")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

fn program_report(id: i32, request: CreateProgramReportRequest) -> ProgramReport {
    ProgramReport {
        id,
        title: request.title,
        content: request.content,
        report_date: request.report_date,
        submitted_by: request.submitted_by,
        created_at: timestamp(),
    }
}

#[tokio::test]
async fn program_report_create_and_fetch() {
    let mut store = MockStore::new();
    store
        .expect_create_program_report()
        .returning(|request| Ok(program_report(2, request)));
    store.expect_get_program_report().with(eq(2)).returning(|id| {
        Ok(Some(ProgramReport {
            id,
            title: "Semester review".to_string(),
            content: "All modules on track".to_string(),
            report_date: lecture_date(),
            submitted_by: None,
            created_at: timestamp(),
        }))
    });
    let server = server(store);

    let created = server
        .post("/api/program-reports")
        .json(&json!({
            "title": "Semester review",
            "content": "All modules on track",
            "reportDate": "2024-03-04"
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["report_date"], "2024-03-04");

    let fetched: Value = server.get("/api/program-reports/2").await.json();
    assert_eq!(fetched["title"], "Semester review");
}

#[tokio::test]
async fn missing_program_report_is_404() {
    let mut store = MockStore::new();
    store.expect_update_program_report().returning(|_, _| Ok(None));

    let response = server(store)
        .put("/api/program-reports/11")
        .json(&json!({ "title": "Revised" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Program report not found" }));
}

#[tokio::test]
async fn timetable_create_and_list() {
    let mut store = MockStore::new();
    store
        .expect_create_timetable_entry()
        .withf(|entry: &CreateTimetableEntryRequest| entry.time_slot == "08:30-10:30")
        .returning(|entry| {
            Ok(TimetableEntry {
                id: 1,
                day: entry.day,
                course: entry.course,
                time_slot: entry.time_slot,
                created_at: timestamp(),
            })
        });
    store.expect_list_timetable().returning(|| Ok(vec![]));
    let server = server(store);

    let created = server
        .post("/api/timetable")
        .json(&json!({ "day": "Monday", "course": "DB101", "timeSlot": "08:30-10:30" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["time_slot"], "08:30-10:30");

    server.get("/api/timetable").await.assert_json(&json!([]));
}

#[tokio::test]
async fn course_update_rejects_misspelled_keys() {
    let mut store = MockStore::new();
    store.expect_update_course().never();

    let response = server(store)
        .put("/api/courses/1")
        .json(&json!({ "venu": "Hall 9" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.contains("unknown field `venu`"), "{}", message);
}

#[tokio::test]
async fn empty_course_update_is_rejected() {
    let mut store = MockStore::new();
    store.expect_update_course().never();

    let response = server(store).put("/api/courses/1").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No updatable fields supplied" }));
}

#[tokio::test]
async fn course_update_accepts_a_fetched_row() {
    let mut store = MockStore::new();
    store
        .expect_update_course()
        .withf(|_, changes: &UpdateCourseRequest| {
            changes.venue.as_deref() == Some("Hall 9")
                && changes.course_code.as_deref() == Some("DB101")
        })
        .returning(|id, _| Ok(Some(sample_course(id, "DB101"))));

    let mut row = serde_json::to_value(sample_course(1, "DB101")).unwrap();
    row["venue"] = json!("Hall 9");

    let response = server(store).put("/api/courses/1").json(&row).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn program_report_update_rejects_misspelled_keys() {
    let mut store = MockStore::new();
    store.expect_update_program_report().never();

    let response = server(store)
        .put("/api/program-reports/1")
        .json(&json!({ "titel": "x" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.contains("unknown field `titel`"), "{}", message);
}

#[tokio::test]
async fn empty_program_report_update_is_rejected() {
    let mut store = MockStore::new();
    store.expect_update_program_report().never();

    let response = server(store)
        .put("/api/program-reports/1")
        .json(&json!({ "id": 1, "createdAt": "2024-03-04T09:00:00Z" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No updatable fields supplied" }));
}
