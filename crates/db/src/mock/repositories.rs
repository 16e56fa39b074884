use async_trait::async_trait;
use luct_core::{
    errors::PortalResult,
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
use mockall::mock;

use crate::store::PortalStore;

// Mock store for handler tests
mock! {
    pub Store {}

    #[async_trait]
    impl PortalStore for Store {
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
}
