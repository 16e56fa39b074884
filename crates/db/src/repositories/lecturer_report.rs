use crate::models::DbLecturerReport;
use eyre::Result;
use luct_core::models::lecturer_report::{CreateLecturerReportRequest, FieldValue, ReportPatch};
use sqlx::{Pool, Postgres, QueryBuilder};

pub(crate) const REPORT_COLUMNS: &str = "id, faculty_name, class_name, week_of_reporting, \
    date_of_lecture, course_name, course_code, lecturer_name, actual_students_present, \
    total_registered_students, venue, scheduled_time, topic_taught, learning_outcomes, \
    recommendations, submitted_by, created_at";

pub async fn list_lecturer_reports(pool: &Pool<Postgres>) -> Result<Vec<DbLecturerReport>> {
    let reports = sqlx::query_as::<_, DbLecturerReport>(&format!(
        "SELECT {REPORT_COLUMNS} FROM lecturer_reports ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(reports)
}

pub async fn get_lecturer_report_by_id(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbLecturerReport>> {
    let report = sqlx::query_as::<_, DbLecturerReport>(&format!(
        "SELECT {REPORT_COLUMNS} FROM lecturer_reports WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(report)
}

pub async fn create_lecturer_report(
    pool: &Pool<Postgres>,
    report: &CreateLecturerReportRequest,
) -> Result<DbLecturerReport> {
    tracing::debug!(
        "Creating lecturer report: course_code={}, submitted_by={:?}",
        report.course_code, report.submitted_by
    );

    let created = sqlx::query_as::<_, DbLecturerReport>(&format!(
        r#"
        INSERT INTO lecturer_reports
            (faculty_name, class_name, week_of_reporting, date_of_lecture,
             course_name, course_code, lecturer_name, actual_students_present,
             total_registered_students, venue, scheduled_time, topic_taught,
             learning_outcomes, recommendations, submitted_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING {REPORT_COLUMNS}
        "#
    ))
    .bind(&report.faculty_name)
    .bind(&report.class_name)
    .bind(&report.week_of_reporting)
    .bind(report.date_of_lecture)
    .bind(&report.course_name)
    .bind(&report.course_code)
    .bind(&report.lecturer_name)
    .bind(report.actual_students_present)
    .bind(report.total_registered_students)
    .bind(&report.venue)
    .bind(&report.scheduled_time)
    .bind(&report.topic_taught)
    .bind(&report.learning_outcomes)
    .bind(&report.recommendations)
    .bind(report.submitted_by)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Applies a validated patch. Column names come only from the patch's
/// allow-listed fields; every value is a bound parameter.
pub async fn update_lecturer_report(
    pool: &Pool<Postgres>,
    id: i32,
    patch: &ReportPatch,
) -> Result<Option<DbLecturerReport>> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE lecturer_reports SET ");

    let mut assignments = builder.separated(", ");
    for (field, value) in patch.changes() {
        assignments.push(field.column());
        assignments.push_unseparated(" = ");
        match value {
            FieldValue::Text(text) => assignments.push_bind_unseparated(text.clone()),
            FieldValue::Integer(number) => assignments.push_bind_unseparated(*number),
            FieldValue::Date(date) => assignments.push_bind_unseparated(*date),
        };
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING ");
    builder.push(REPORT_COLUMNS);

    tracing::debug!("Updating lecturer report {}: {}", id, builder.sql());

    let updated = builder
        .build_query_as::<DbLecturerReport>()
        .fetch_optional(pool)
        .await?;

    Ok(updated)
}

pub async fn delete_lecturer_report(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbLecturerReport>> {
    let deleted = sqlx::query_as::<_, DbLecturerReport>(&format!(
        "DELETE FROM lecturer_reports WHERE id = $1 RETURNING {REPORT_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(deleted)
}
