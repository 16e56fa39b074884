use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use luct_core::models::lecturer_report::{
    CreateLecturerReportRequest, FieldValue, LecturerReport, ReportField, ReportPatch,
};
use luct_db::mock::repositories::MockStore;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{sample_report, server, timestamp};

fn new_report_payload(submitted_by: i32) -> Value {
    json!({
        "facultyName": "FICT",
        "className": "BSCIT Y2",
        "weekOfReporting": "Week 6",
        "dateOfLecture": "2024-03-04",
        "courseName": "DB101",
        "courseCode": "DB101",
        "lecturerName": "alice",
        "actualStudents": "31",
        "totalRegistered": 40,
        "venue": "Hall 2",
        "scheduledTime": "08:30",
        "topicTaught": "Normalisation",
        "learningOutcomes": "Students can normalise to 3NF",
        "submittedBy": submitted_by
    })
}

fn report_from(id: i32, request: CreateLecturerReportRequest) -> LecturerReport {
    LecturerReport {
        id,
        faculty_name: request.faculty_name,
        class_name: request.class_name,
        week_of_reporting: request.week_of_reporting,
        date_of_lecture: request.date_of_lecture,
        course_name: request.course_name,
        course_code: request.course_code,
        lecturer_name: request.lecturer_name,
        actual_students_present: request.actual_students_present,
        total_registered_students: request.total_registered_students,
        venue: request.venue,
        scheduled_time: request.scheduled_time,
        topic_taught: request.topic_taught,
        learning_outcomes: request.learning_outcomes,
        recommendations: request.recommendations,
        submitted_by: request.submitted_by,
        created_at: timestamp(),
    }
}

fn apply(report: &mut LecturerReport, patch: &ReportPatch) {
    for (field, value) in patch.changes() {
        match (field, value) {
            (ReportField::TopicTaught, FieldValue::Text(Some(text))) => {
                report.topic_taught = text.clone()
            }
            other => panic!("unexpected change in test: {:?}", other),
        }
    }
}

/// In-memory stand-in for the reports table, shared by the mock expectations.
type Table = Arc<Mutex<Vec<LecturerReport>>>;

fn store_over(table: &Table) -> MockStore {
    let mut store = MockStore::new();

    let t = table.clone();
    store.expect_create_lecturer_report().returning(move |request| {
        let mut rows = t.lock().unwrap();
        let report = report_from(rows.len() as i32 + 1, request);
        rows.push(report.clone());
        Ok(report)
    });

    let t = table.clone();
    store
        .expect_list_lecturer_reports()
        .returning(move || Ok(t.lock().unwrap().clone()));

    let t = table.clone();
    store.expect_get_lecturer_report().returning(move |id| {
        Ok(t.lock().unwrap().iter().find(|r| r.id == id).cloned())
    });

    let t = table.clone();
    store
        .expect_update_lecturer_report()
        .returning(move |id, patch| {
            let mut rows = t.lock().unwrap();
            Ok(rows.iter_mut().find(|r| r.id == id).map(|report| {
                apply(report, &patch);
                report.clone()
            }))
        });

    let t = table.clone();
    store.expect_delete_lecturer_report().returning(move |id| {
        let mut rows = t.lock().unwrap();
        let position = rows.iter().position(|r| r.id == id);
        Ok(position.map(|index| rows.remove(index)))
    });

    store
}

#[tokio::test]
async fn report_lifecycle_for_alice() {
    let table: Table = Arc::default();
    let server = server(store_over(&table));
    let alice_id = 3;

    let created = server
        .post("/api/lecturer-reports")
        .json(&new_report_payload(alice_id))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["actual_students_present"], 31);
    assert_eq!(created["submitted_by"], alice_id);

    let listed: Value = server.get("/api/lecturer-reports").await.json();
    let rows = listed.as_array().unwrap();
    assert!(rows.iter().any(|row| row["course_name"] == "DB101"));

    let updated = server
        .put(&format!("/api/lecturer-reports/{}", id))
        .json(&json!({ "topicTaught": "Joins" }))
        .await;
    updated.assert_status_ok();
    let updated: Value = updated.json();
    assert_eq!(updated["topic_taught"], "Joins");
    assert_eq!(updated["venue"], created["venue"]);
    assert_eq!(updated["learning_outcomes"], created["learning_outcomes"]);

    server
        .delete(&format!("/api/lecturer-reports/{}", id))
        .await
        .assert_status_ok();

    let missing = server.get(&format!("/api/lecturer-reports/{}", id)).await;
    missing.assert_status(StatusCode::NOT_FOUND);
    missing.assert_json(&json!({ "error": "Report not found" }));
}

#[tokio::test]
async fn update_rejects_unknown_fields() {
    let mut store = MockStore::new();
    store.expect_update_lecturer_report().never();

    let response = server(store)
        .put("/api/lecturer-reports/1")
        .json(&json!({ "topicTaught": "Joins", "is_admin": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Unknown field: is_admin" }));
}

#[tokio::test]
async fn update_with_only_read_only_fields_is_rejected() {
    let mut store = MockStore::new();
    store.expect_update_lecturer_report().never();

    let response = server(store)
        .put("/api/lecturer-reports/1")
        .json(&json!({ "id": 9, "createdAt": "2024-01-01" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No updatable fields supplied" }));
}

#[tokio::test]
async fn update_of_missing_report_is_404() {
    let mut store = MockStore::new();
    store
        .expect_update_lecturer_report()
        .with(eq(42), mockall::predicate::always())
        .returning(|_, _| Ok(None));

    let response = server(store)
        .put("/api/lecturer-reports/42")
        .json(&json!({ "venue": "Hall 9" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_requires_all_mandatory_fields() {
    let mut store = MockStore::new();
    store.expect_create_lecturer_report().never();

    let mut payload = new_report_payload(1);
    payload.as_object_mut().unwrap().remove("courseCode");

    let response = server(store)
        .post("/api/lecturer-reports")
        .json(&payload)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_path_id_is_a_bad_request() {
    let response = server(MockStore::new())
        .get("/api/lecturer-reports/abc")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_report_by_id() {
    let mut store = MockStore::new();
    store
        .expect_get_lecturer_report()
        .with(eq(5))
        .returning(|id| Ok(Some(sample_report(id, None))));

    let response = server(store).get("/api/lecturer-reports/5").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 5);
    assert_eq!(body["date_of_lecture"], "2024-03-04");
}
