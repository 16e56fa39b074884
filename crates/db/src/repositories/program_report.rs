use crate::models::DbProgramReport;
use eyre::Result;
use luct_core::models::program_report::{CreateProgramReportRequest, UpdateProgramReportRequest};
use sqlx::{Pool, Postgres};

const PROGRAM_REPORT_COLUMNS: &str = "id, title, content, report_date, submitted_by, created_at";

pub async fn list_program_reports(pool: &Pool<Postgres>) -> Result<Vec<DbProgramReport>> {
    let reports = sqlx::query_as::<_, DbProgramReport>(&format!(
        "SELECT {PROGRAM_REPORT_COLUMNS} FROM program_reports ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(reports)
}

pub async fn get_program_report_by_id(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbProgramReport>> {
    let report = sqlx::query_as::<_, DbProgramReport>(&format!(
        "SELECT {PROGRAM_REPORT_COLUMNS} FROM program_reports WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(report)
}

pub async fn create_program_report(
    pool: &Pool<Postgres>,
    report: &CreateProgramReportRequest,
) -> Result<DbProgramReport> {
    let created = sqlx::query_as::<_, DbProgramReport>(&format!(
        r#"
        INSERT INTO program_reports (title, content, report_date, submitted_by)
        VALUES ($1, $2, $3, $4)
        RETURNING {PROGRAM_REPORT_COLUMNS}
        "#
    ))
    .bind(&report.title)
    .bind(&report.content)
    .bind(report.report_date)
    .bind(report.submitted_by)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn update_program_report(
    pool: &Pool<Postgres>,
    id: i32,
    changes: &UpdateProgramReportRequest,
) -> Result<Option<DbProgramReport>> {
    let updated = sqlx::query_as::<_, DbProgramReport>(&format!(
        r#"
        UPDATE program_reports SET
            title = COALESCE($2, title),
            content = COALESCE($3, content),
            report_date = COALESCE($4, report_date)
        WHERE id = $1
        RETURNING {PROGRAM_REPORT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&changes.title)
    .bind(&changes.content)
    .bind(changes.report_date)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub async fn delete_program_report(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbProgramReport>> {
    let deleted = sqlx::query_as::<_, DbProgramReport>(&format!(
        "DELETE FROM program_reports WHERE id = $1 RETURNING {PROGRAM_REPORT_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(deleted)
}
