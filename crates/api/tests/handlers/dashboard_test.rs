use luct_core::models::stats::DashboardStats;
use luct_db::mock::repositories::MockStore;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{sample_course, sample_report, server};

#[tokio::test]
async fn empty_portal_reports_zeros() {
    let mut store = MockStore::new();
    store
        .expect_dashboard_stats()
        .returning(|| Ok(DashboardStats::default()));

    let response = server(store).get("/api/dashboard-stats").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "totalReports": 0,
        "totalCourses": 0,
        "totalLecturers": 0,
        "totalStudents": 0,
        "averageRating": 0.0,
        "totalProgramReports": 0
    }));
}

#[tokio::test]
async fn stats_are_serialized_in_camel_case() {
    let mut store = MockStore::new();
    store.expect_dashboard_stats().returning(|| {
        Ok(DashboardStats {
            total_reports: 2,
            total_courses: 1,
            total_lecturers: 1,
            total_students: 12,
            average_rating: 4.5,
            total_program_reports: 0,
        })
    });

    let body: Value = server(store).get("/api/dashboard-stats").await.json();

    assert_eq!(body["totalStudents"], 12);
    assert_eq!(body["averageRating"], 4.5);
}

#[tokio::test]
async fn search_passes_the_query_through() {
    let mut store = MockStore::new();
    store
        .expect_search_lecturer_reports()
        .with(eq("db".to_string()))
        .returning(|_| Ok(vec![sample_report(1, None)]));

    let response = server(store)
        .get("/api/search/lecturer-reports")
        .add_query_param("query", "db")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body[0]["course_name"], "DB101");
}

#[tokio::test]
async fn search_without_query_matches_everything() {
    let mut store = MockStore::new();
    store
        .expect_search_courses()
        .with(eq(String::new()))
        .returning(|_| Ok(vec![sample_course(1, "DB101"), sample_course(2, "OS201")]));

    let body: Value = server(store).get("/api/search/courses").await.json();

    assert_eq!(body.as_array().map(Vec::len), Some(2));
}
