use crate::models::DbUser;
use eyre::Result;
use luct_core::models::user::NewUser;
use sqlx::{Pool, Postgres};

const USER_COLUMNS: &str = "id, username, email, password, role, full_name, phone_number, \
                            department, is_logged_in, created_at";

/// Inserts a new account. Username and email uniqueness is left to the table
/// constraints so concurrent registrations cannot both succeed.
pub async fn create_user(pool: &Pool<Postgres>, user: &NewUser) -> Result<DbUser> {
    tracing::debug!(
        "Creating user: username={}, role={}",
        user.username, user.role
    );

    let row = sqlx::query_as::<_, DbUser>(&format!(
        r#"
        INSERT INTO users (username, email, password, role, full_name, phone_number, department)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(&user.full_name)
    .bind(&user.phone_number)
    .bind(&user.department)
    .fetch_one(pool)
    .await?;

    tracing::debug!("User created: id={}", row.id);
    Ok(row)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbUser>> {
    let row = sqlx::query_as::<_, DbUser>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_user_by_username_and_role(
    pool: &Pool<Postgres>,
    username: &str,
    role: &str,
) -> Result<Option<DbUser>> {
    let row = sqlx::query_as::<_, DbUser>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1 AND role = $2"
    ))
    .bind(username)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn set_logged_in(pool: &Pool<Postgres>, id: i32, logged_in: bool) -> Result<()> {
    sqlx::query("UPDATE users SET is_logged_in = $2 WHERE id = $1")
        .bind(id)
        .bind(logged_in)
        .execute(pool)
        .await?;

    Ok(())
}

/// Clears the login flag. Returns the number of matching accounts, which may be zero.
pub async fn logout(pool: &Pool<Postgres>, username: &str, role: &str) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE users SET is_logged_in = FALSE WHERE username = $1 AND role = $2",
    )
    .bind(username)
    .bind(role)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
