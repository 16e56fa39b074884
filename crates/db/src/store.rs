//! The store seam the API talks to.
//!
//! [`PortalStore`] lists every storage operation the portal needs in terms of
//! domain types. [`PgStore`] implements it over the repository functions and a
//! shared connection pool; tests substitute [`crate::mock::repositories::MockStore`].

use async_trait::async_trait;
use luct_core::{
    errors::{PortalError, PortalResult},
    models::{
        course::{Course, CreateCourseRequest, UpdateCourseRequest},
        lecturer_report::{CreateLecturerReportRequest, LecturerReport, ReportPatch},
        program_report::{CreateProgramReportRequest, ProgramReport, UpdateProgramReportRequest},
        rating::{Rating, SaveRatingRequest, SavedRating},
        stats::DashboardStats,
        timetable::{CreateTimetableEntryRequest, TimetableEntry},
        user::{Credentials, NewUser, User},
    },
};

use crate::{
    error::classify,
    repositories::{course, dashboard, lecturer_report, program_report, rating, search, timetable, user},
    DbPool,
};

const USER_CONFLICT: &str = "Username or email already exists";
const COURSE_CONFLICT: &str = "Course code already exists";
const RECORD_CONFLICT: &str = "Record already exists";

#[async_trait]
pub trait PortalStore: Send + Sync {
    /// Round-trips a trivial query to prove the store is reachable.
    async fn ping(&self) -> PortalResult<()>;

    async fn create_user(&self, user: NewUser) -> PortalResult<User>;
    async fn find_credentials(&self, username: String, role: String) -> PortalResult<Option<Credentials>>;
    async fn set_logged_in(&self, id: i32, logged_in: bool) -> PortalResult<()>;
    async fn logout(&self, username: String, role: String) -> PortalResult<u64>;
    async fn get_user(&self, id: i32) -> PortalResult<Option<User>>;

    async fn list_lecturer_reports(&self) -> PortalResult<Vec<LecturerReport>>;
    async fn get_lecturer_report(&self, id: i32) -> PortalResult<Option<LecturerReport>>;
    async fn create_lecturer_report(&self, report: CreateLecturerReportRequest) -> PortalResult<LecturerReport>;
    async fn update_lecturer_report(&self, id: i32, patch: ReportPatch) -> PortalResult<Option<LecturerReport>>;
    async fn delete_lecturer_report(&self, id: i32) -> PortalResult<Option<LecturerReport>>;

    async fn list_courses(&self) -> PortalResult<Vec<Course>>;
    async fn get_course(&self, id: i32) -> PortalResult<Option<Course>>;
    async fn create_course(&self, course: CreateCourseRequest) -> PortalResult<Course>;
    async fn update_course(&self, id: i32, changes: UpdateCourseRequest) -> PortalResult<Option<Course>>;
    async fn delete_course(&self, id: i32) -> PortalResult<Option<Course>>;

    async fn list_program_reports(&self) -> PortalResult<Vec<ProgramReport>>;
    async fn get_program_report(&self, id: i32) -> PortalResult<Option<ProgramReport>>;
    async fn create_program_report(&self, report: CreateProgramReportRequest) -> PortalResult<ProgramReport>;
    async fn update_program_report(&self, id: i32, changes: UpdateProgramReportRequest) -> PortalResult<Option<ProgramReport>>;
    async fn delete_program_report(&self, id: i32) -> PortalResult<Option<ProgramReport>>;

    async fn list_ratings(&self) -> PortalResult<Vec<Rating>>;
    async fn list_ratings_by_user(&self, user_id: i32) -> PortalResult<Vec<Rating>>;
    async fn save_rating(&self, rating: SaveRatingRequest) -> PortalResult<SavedRating>;

    async fn list_timetable(&self) -> PortalResult<Vec<TimetableEntry>>;
    async fn create_timetable_entry(&self, entry: CreateTimetableEntryRequest) -> PortalResult<TimetableEntry>;

    async fn dashboard_stats(&self) -> PortalResult<DashboardStats>;

    async fn search_lecturer_reports(&self, query: String) -> PortalResult<Vec<LecturerReport>>;
    async fn search_courses(&self, query: String) -> PortalResult<Vec<Course>>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn db_err(err: eyre::Report) -> PortalError {
    classify(err, RECORD_CONFLICT)
}

fn into_all<R, T: From<R>>(rows: Vec<R>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

#[async_trait]
impl PortalStore for PgStore {
    async fn ping(&self) -> PortalResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| PortalError::Database(e.into()))?;
        Ok(())
    }

    async fn create_user(&self, new_user: NewUser) -> PortalResult<User> {
        let row = user::create_user(&self.pool, &new_user)
            .await
            .map_err(|e| classify(e, USER_CONFLICT))?;
        Ok(User::try_from(row)?)
    }

    async fn find_credentials(&self, username: String, role: String) -> PortalResult<Option<Credentials>> {
        let row = user::get_user_by_username_and_role(&self.pool, &username, &role)
            .await
            .map_err(db_err)?;
        Ok(row.map(Credentials::try_from).transpose()?)
    }

    async fn set_logged_in(&self, id: i32, logged_in: bool) -> PortalResult<()> {
        user::set_logged_in(&self.pool, id, logged_in).await.map_err(db_err)
    }

    async fn logout(&self, username: String, role: String) -> PortalResult<u64> {
        user::logout(&self.pool, &username, &role).await.map_err(db_err)
    }

    async fn get_user(&self, id: i32) -> PortalResult<Option<User>> {
        let row = user::get_user_by_id(&self.pool, id).await.map_err(db_err)?;
        Ok(row.map(User::try_from).transpose()?)
    }

    async fn list_lecturer_reports(&self) -> PortalResult<Vec<LecturerReport>> {
        let rows = lecturer_report::list_lecturer_reports(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn get_lecturer_report(&self, id: i32) -> PortalResult<Option<LecturerReport>> {
        let row = lecturer_report::get_lecturer_report_by_id(&self.pool, id)
            .await
            .map_err(db_err)?;
        Ok(row.map(LecturerReport::from))
    }

    async fn create_lecturer_report(&self, report: CreateLecturerReportRequest) -> PortalResult<LecturerReport> {
        let row = lecturer_report::create_lecturer_report(&self.pool, &report)
            .await
            .map_err(db_err)?;
        Ok(row.into())
    }

    async fn update_lecturer_report(&self, id: i32, patch: ReportPatch) -> PortalResult<Option<LecturerReport>> {
        let row = lecturer_report::update_lecturer_report(&self.pool, id, &patch)
            .await
            .map_err(db_err)?;
        Ok(row.map(LecturerReport::from))
    }

    async fn delete_lecturer_report(&self, id: i32) -> PortalResult<Option<LecturerReport>> {
        let row = lecturer_report::delete_lecturer_report(&self.pool, id)
            .await
            .map_err(db_err)?;
        Ok(row.map(LecturerReport::from))
    }

    async fn list_courses(&self) -> PortalResult<Vec<Course>> {
        let rows = course::list_courses(&self.pool).await.map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn get_course(&self, id: i32) -> PortalResult<Option<Course>> {
        let row = course::get_course_by_id(&self.pool, id).await.map_err(db_err)?;
        Ok(row.map(Course::from))
    }

    async fn create_course(&self, new_course: CreateCourseRequest) -> PortalResult<Course> {
        let row = course::create_course(&self.pool, &new_course)
            .await
            .map_err(|e| classify(e, COURSE_CONFLICT))?;
        Ok(row.into())
    }

    async fn update_course(&self, id: i32, changes: UpdateCourseRequest) -> PortalResult<Option<Course>> {
        let row = course::update_course(&self.pool, id, &changes)
            .await
            .map_err(|e| classify(e, COURSE_CONFLICT))?;
        Ok(row.map(Course::from))
    }

    async fn delete_course(&self, id: i32) -> PortalResult<Option<Course>> {
        let row = course::delete_course(&self.pool, id).await.map_err(db_err)?;
        Ok(row.map(Course::from))
    }

    async fn list_program_reports(&self) -> PortalResult<Vec<ProgramReport>> {
        let rows = program_report::list_program_reports(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn get_program_report(&self, id: i32) -> PortalResult<Option<ProgramReport>> {
        let row = program_report::get_program_report_by_id(&self.pool, id)
            .await
            .map_err(db_err)?;
        Ok(row.map(ProgramReport::from))
    }

    async fn create_program_report(&self, report: CreateProgramReportRequest) -> PortalResult<ProgramReport> {
        let row = program_report::create_program_report(&self.pool, &report)
            .await
            .map_err(db_err)?;
        Ok(row.into())
    }

    async fn update_program_report(&self, id: i32, changes: UpdateProgramReportRequest) -> PortalResult<Option<ProgramReport>> {
        let row = program_report::update_program_report(&self.pool, id, &changes)
            .await
            .map_err(db_err)?;
        Ok(row.map(ProgramReport::from))
    }

    async fn delete_program_report(&self, id: i32) -> PortalResult<Option<ProgramReport>> {
        let row = program_report::delete_program_report(&self.pool, id)
            .await
            .map_err(db_err)?;
        Ok(row.map(ProgramReport::from))
    }

    async fn list_ratings(&self) -> PortalResult<Vec<Rating>> {
        let rows = rating::list_ratings(&self.pool).await.map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn list_ratings_by_user(&self, user_id: i32) -> PortalResult<Vec<Rating>> {
        let rows = rating::list_ratings_by_user(&self.pool, user_id)
            .await
            .map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn save_rating(&self, request: SaveRatingRequest) -> PortalResult<SavedRating> {
        let saved = rating::save_rating(&self.pool, &request)
            .await
            .map_err(db_err)?;
        let row = Rating::from(saved.rating);
        Ok(if saved.inserted {
            SavedRating::Created(row)
        } else {
            SavedRating::Updated(row)
        })
    }

    async fn list_timetable(&self) -> PortalResult<Vec<TimetableEntry>> {
        let rows = timetable::list_timetable(&self.pool).await.map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn create_timetable_entry(&self, entry: CreateTimetableEntryRequest) -> PortalResult<TimetableEntry> {
        let row = timetable::create_timetable_entry(&self.pool, &entry)
            .await
            .map_err(db_err)?;
        Ok(row.into())
    }

    async fn dashboard_stats(&self) -> PortalResult<DashboardStats> {
        dashboard::dashboard_stats(&self.pool).await.map_err(db_err)
    }

    async fn search_lecturer_reports(&self, query: String) -> PortalResult<Vec<LecturerReport>> {
        let rows = search::search_lecturer_reports(&self.pool, &query)
            .await
            .map_err(db_err)?;
        Ok(into_all(rows))
    }

    async fn search_courses(&self, query: String) -> PortalResult<Vec<Course>> {
        let rows = search::search_courses(&self.pool, &query)
            .await
            .map_err(db_err)?;
        Ok(into_all(rows))
    }
}
