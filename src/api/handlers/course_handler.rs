//! Course and enrollment handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::domain::{Course, CreateCourse, Student, UpdateCourse};
use crate::errors::{AppError, AppResult, Entity};
use crate::types::{default_limit, default_page, Created, NoContent, PaginationParams};

/// Query parameters for the course list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseListQuery {
    /// Substring filter on course title
    pub title: Option<String>,
    /// Substring filter on teacher name
    pub teacher: Option<String>,
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl CourseListQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Course list response
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    /// The requested page of courses
    pub courses: Vec<Course>,
    /// Total number of courses matching the filters
    pub total: usize,
}

/// Single course response with its enrolled students
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    pub course: Course,
    /// Students enrolled in the course
    pub students: Vec<Student>,
}

/// Enrollment confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub student_id: u64,
    pub course_id: u64,
}

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/:course_id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/:course_id/students/:student_id", post(enroll_student))
}

/// List courses with optional filters and pagination
#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Filtered page of courses", body = CourseListResponse)
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Json<CourseListResponse> {
    let store = state.store.lock().await;

    let filtered: Vec<Course> = store
        .courses()
        .iter()
        .filter(|c| query.title.as_deref().map_or(true, |t| c.title.contains(t)))
        .filter(|c| {
            query
                .teacher
                .as_deref()
                .map_or(true, |t| c.teacher.contains(t))
        })
        .cloned()
        .collect();

    let total = filtered.len();
    let courses = query.pagination().slice(&filtered).to_vec();

    Json(CourseListResponse { courses, total })
}

/// Get a course and its enrolled students
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = "Courses",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<CourseDetailResponse>> {
    let store = state.store.lock().await;

    let course = store
        .course(id)
        .cloned()
        .ok_or(AppError::NotFound(Entity::Course))?;
    let students = store.students_in_course(id);

    Ok(Json(CourseDetailResponse { course, students }))
}

/// Create a new course
#[utoipa::path(
    post,
    path = "/courses",
    tag = "Courses",
    request_body = CreateCourse,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Missing field or duplicate title")
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourse>,
) -> AppResult<Created<Course>> {
    let mut store = state.store.lock().await;
    let course = store.create_course(payload)?;

    tracing::debug!(id = course.id, "course created");
    Ok(Created(course))
}

/// Partially update a course
#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    tag = "Courses",
    params(("course_id" = u64, Path, description = "Course id")),
    request_body = UpdateCourse,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "Title already in use"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let mut store = state.store.lock().await;
    let course = store.update_course(id, payload)?;

    Ok(Json(course))
}

/// Delete a course with no enrolled students
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = "Courses",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 400, description = "Course still has enrolled students"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<NoContent> {
    let mut store = state.store.lock().await;
    store.remove_course(id)?;

    tracing::debug!(id, "course deleted");
    Ok(NoContent)
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/students/{student_id}",
    tag = "Courses",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("student_id" = u64, Path, description = "Student id")
    ),
    responses(
        (status = 201, description = "Student enrolled", body = EnrollmentResponse),
        (status = 400, description = "Course is full"),
        (status = 404, description = "Student or course not found")
    )
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path((course_id, student_id)): Path<(u64, u64)>,
) -> AppResult<Created<EnrollmentResponse>> {
    let mut store = state.store.lock().await;
    store.enroll(student_id, course_id)?;

    tracing::debug!(student_id, course_id, "student enrolled");
    Ok(Created(EnrollmentResponse {
        student_id,
        course_id,
    }))
}
