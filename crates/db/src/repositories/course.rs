use crate::models::DbCourse;
use eyre::Result;
use luct_core::models::course::{CreateCourseRequest, UpdateCourseRequest};
use sqlx::{Pool, Postgres};

pub(crate) const COURSE_COLUMNS: &str = "id, course_name, course_code, lecturer_name, class_name, \
    date_of_lecture, scheduled_time, venue, created_by, created_at";

pub async fn list_courses(pool: &Pool<Postgres>) -> Result<Vec<DbCourse>> {
    let courses = sqlx::query_as::<_, DbCourse>(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

pub async fn get_course_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbCourse>> {
    let course = sqlx::query_as::<_, DbCourse>(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(course)
}

pub async fn create_course(pool: &Pool<Postgres>, course: &CreateCourseRequest) -> Result<DbCourse> {
    let created = sqlx::query_as::<_, DbCourse>(&format!(
        r#"
        INSERT INTO courses
            (course_name, course_code, lecturer_name, class_name,
             date_of_lecture, scheduled_time, venue, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {COURSE_COLUMNS}
        "#
    ))
    .bind(&course.course_name)
    .bind(&course.course_code)
    .bind(&course.lecturer_name)
    .bind(&course.class_name)
    .bind(course.date_of_lecture)
    .bind(&course.scheduled_time)
    .bind(&course.venue)
    .bind(course.created_by)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Fields left as `None` keep their stored value.
pub async fn update_course(
    pool: &Pool<Postgres>,
    id: i32,
    changes: &UpdateCourseRequest,
) -> Result<Option<DbCourse>> {
    let updated = sqlx::query_as::<_, DbCourse>(&format!(
        r#"
        UPDATE courses SET
            course_name = COALESCE($2, course_name),
            course_code = COALESCE($3, course_code),
            lecturer_name = COALESCE($4, lecturer_name),
            class_name = COALESCE($5, class_name),
            date_of_lecture = COALESCE($6, date_of_lecture),
            scheduled_time = COALESCE($7, scheduled_time),
            venue = COALESCE($8, venue)
        WHERE id = $1
        RETURNING {COURSE_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&changes.course_name)
    .bind(&changes.course_code)
    .bind(&changes.lecturer_name)
    .bind(&changes.class_name)
    .bind(changes.date_of_lecture)
    .bind(&changes.scheduled_time)
    .bind(&changes.venue)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub async fn delete_course(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbCourse>> {
    let deleted = sqlx::query_as::<_, DbCourse>(&format!(
        "DELETE FROM courses WHERE id = $1 RETURNING {COURSE_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(deleted)
}
