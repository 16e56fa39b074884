use crate::models::DbTimetableEntry;
use eyre::Result;
use luct_core::models::timetable::CreateTimetableEntryRequest;
use sqlx::{Pool, Postgres};

pub async fn list_timetable(pool: &Pool<Postgres>) -> Result<Vec<DbTimetableEntry>> {
    let entries = sqlx::query_as::<_, DbTimetableEntry>(
        r#"
        SELECT id, day, course, time_slot, created_at
        FROM timetable
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn create_timetable_entry(
    pool: &Pool<Postgres>,
    entry: &CreateTimetableEntryRequest,
) -> Result<DbTimetableEntry> {
    let created = sqlx::query_as::<_, DbTimetableEntry>(
        r#"
        INSERT INTO timetable (day, course, time_slot)
        VALUES ($1, $2, $3)
        RETURNING id, day, course, time_slot, created_at
        "#,
    )
    .bind(&entry.day)
    .bind(&entry.course)
    .bind(&entry.time_slot)
    .fetch_one(pool)
    .await?;

    Ok(created)
}
