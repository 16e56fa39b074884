use eyre::Result;
use luct_core::models::{stats::DashboardStats, user::Role};
use sqlx::{Pool, Postgres};

/// Runs the six dashboard reads concurrently over the pool.
pub async fn dashboard_stats(pool: &Pool<Postgres>) -> Result<DashboardStats> {
    let (
        total_reports,
        total_courses,
        total_lecturers,
        total_students,
        average_rating,
        total_program_reports,
    ) = tokio::try_join!(
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lecturer_reports").fetch_one(pool),
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses").fetch_one(pool),
        sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT username) FROM users WHERE role = $1")
            .bind(Role::Lecturer.as_str())
            .fetch_one(pool),
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(Role::Student.as_str())
            .fetch_one(pool),
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(rating)::FLOAT8 FROM ratings WHERE rating IS NOT NULL"
        )
        .fetch_one(pool),
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM program_reports").fetch_one(pool),
    )?;

    Ok(DashboardStats {
        total_reports,
        total_courses,
        total_lecturers,
        total_students,
        average_rating: average_rating.unwrap_or(0.0),
        total_program_reports,
    })
}
