use crate::models::{DbRating, DbSavedRating};
use eyre::Result;
use luct_core::models::rating::SaveRatingRequest;
use sqlx::{Pool, Postgres};

const RATING_COLUMNS: &str = "id, day_of_week, course_name, rating, rated_by, created_at";

pub async fn list_ratings(pool: &Pool<Postgres>) -> Result<Vec<DbRating>> {
    let ratings = sqlx::query_as::<_, DbRating>(&format!(
        "SELECT {RATING_COLUMNS} FROM ratings ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(ratings)
}

pub async fn list_ratings_by_user(pool: &Pool<Postgres>, user_id: i32) -> Result<Vec<DbRating>> {
    let ratings = sqlx::query_as::<_, DbRating>(&format!(
        "SELECT {RATING_COLUMNS} FROM ratings WHERE rated_by = $1 ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(ratings)
}

/// Inserts or overwrites the rating for (day_of_week, course_name, rated_by)
/// in one statement. The unique index on that key serializes concurrent
/// writers, so the key never holds more than one row.
pub async fn save_rating(pool: &Pool<Postgres>, rating: &SaveRatingRequest) -> Result<DbSavedRating> {
    let saved = sqlx::query_as::<_, DbSavedRating>(&format!(
        r#"
        INSERT INTO ratings (day_of_week, course_name, rating, rated_by)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (day_of_week, course_name, rated_by)
        DO UPDATE SET rating = EXCLUDED.rating, created_at = NOW()
        RETURNING {RATING_COLUMNS}, (xmax = 0) AS inserted
        "#
    ))
    .bind(&rating.day_of_week)
    .bind(&rating.course_name)
    .bind(rating.rating)
    .bind(rating.rated_by)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Saved rating: id={}, inserted={}",
        saved.rating.id, saved.inserted
    );
    Ok(saved)
}
