use crate::models::{DbCourse, DbLecturerReport};
use crate::repositories::{course::COURSE_COLUMNS, lecturer_report::REPORT_COLUMNS};
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Builds an ILIKE pattern matching `query` as a literal substring.
/// An empty query yields `%%`, which matches every value.
pub fn substring_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn search_lecturer_reports(
    pool: &Pool<Postgres>,
    query: &str,
) -> Result<Vec<DbLecturerReport>> {
    let reports = sqlx::query_as::<_, DbLecturerReport>(&format!(
        r#"
        SELECT {REPORT_COLUMNS} FROM lecturer_reports
        WHERE course_name ILIKE $1
           OR lecturer_name ILIKE $1
           OR faculty_name ILIKE $1
           OR class_name ILIKE $1
        ORDER BY created_at DESC, id DESC
        "#
    ))
    .bind(substring_pattern(query))
    .fetch_all(pool)
    .await?;

    Ok(reports)
}

pub async fn search_courses(pool: &Pool<Postgres>, query: &str) -> Result<Vec<DbCourse>> {
    let courses = sqlx::query_as::<_, DbCourse>(&format!(
        r#"
        SELECT {COURSE_COLUMNS} FROM courses
        WHERE course_name ILIKE $1
           OR lecturer_name ILIKE $1
           OR course_code ILIKE $1
           OR class_name ILIKE $1
        ORDER BY created_at DESC, id DESC
        "#
    ))
    .bind(substring_pattern(query))
    .fetch_all(pool)
    .await?;

    Ok(courses)
}
