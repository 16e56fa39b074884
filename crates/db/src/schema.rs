use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(100) NOT NULL UNIQUE,
        email VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        role VARCHAR(32) NOT NULL
            CHECK (role IN ('Student', 'Lecturer', 'PrincipalLecture', 'ProgramLeader')),
        full_name VARCHAR(255),
        phone_number VARCHAR(50),
        department VARCHAR(255),
        is_logged_in BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS lecturer_reports (
        id SERIAL PRIMARY KEY,
        faculty_name VARCHAR(255) NOT NULL,
        class_name VARCHAR(255) NOT NULL,
        week_of_reporting VARCHAR(50) NOT NULL,
        date_of_lecture DATE NOT NULL,
        course_name VARCHAR(255) NOT NULL,
        course_code VARCHAR(50) NOT NULL,
        lecturer_name VARCHAR(255) NOT NULL,
        actual_students_present INTEGER NOT NULL,
        total_registered_students INTEGER NOT NULL,
        venue VARCHAR(255) NOT NULL,
        scheduled_time VARCHAR(50) NOT NULL,
        topic_taught TEXT NOT NULL,
        learning_outcomes TEXT NOT NULL,
        recommendations TEXT,
        submitted_by INTEGER REFERENCES users(id),
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS courses (
        id SERIAL PRIMARY KEY,
        course_name VARCHAR(255) NOT NULL,
        course_code VARCHAR(50) NOT NULL UNIQUE,
        lecturer_name VARCHAR(255),
        class_name VARCHAR(255),
        date_of_lecture DATE,
        scheduled_time VARCHAR(50),
        venue VARCHAR(255),
        created_by INTEGER REFERENCES users(id),
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS program_reports (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        content TEXT NOT NULL,
        report_date DATE NOT NULL,
        submitted_by INTEGER REFERENCES users(id),
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS timetable (
        id SERIAL PRIMARY KEY,
        day VARCHAR(20) NOT NULL,
        course VARCHAR(255) NOT NULL,
        time_slot VARCHAR(50) NOT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ratings (
        id SERIAL PRIMARY KEY,
        day_of_week VARCHAR(20) NOT NULL,
        course_name VARCHAR(255) NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        rated_by INTEGER NOT NULL REFERENCES users(id),
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    )
    "#,
    // Older databases may hold duplicate ratings from before the unique index
    // existed; keep the newest row of each (day, course, rater) so it can be built.
    r#"
    DELETE FROM ratings older
    USING ratings newer
    WHERE older.day_of_week = newer.day_of_week
      AND older.course_name = newer.course_name
      AND older.rated_by = newer.rated_by
      AND (older.created_at, older.id) < (newer.created_at, newer.id)
    "#,
    // Index form so databases created before the constraint existed pick it up too.
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_ratings_day_course_rater ON ratings(day_of_week, course_name, rated_by)",
    "CREATE INDEX IF NOT EXISTS idx_users_username_role ON users(username, role)",
    "CREATE INDEX IF NOT EXISTS idx_lecturer_reports_created_at ON lecturer_reports(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_courses_created_at ON courses(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_program_reports_created_at ON program_reports(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_ratings_rated_by ON ratings(rated_by)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
