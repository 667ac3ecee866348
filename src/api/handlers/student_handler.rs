//! Student handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::domain::{Course, CreateStudent, Student, UpdateStudent};
use crate::errors::{AppError, AppResult, Entity};
use crate::types::{default_limit, default_page, Created, NoContent, PaginationParams};

/// Query parameters for the student list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentListQuery {
    /// Substring filter on student name
    pub name: Option<String>,
    /// Substring filter on student email
    pub email: Option<String>,
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl StudentListQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Student list response
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    /// The requested page of students
    pub students: Vec<Student>,
    /// Total number of students matching the filters
    pub total: usize,
}

/// Single student response with its enrollments
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDetailResponse {
    pub student: Student,
    /// Courses the student is enrolled in
    pub courses: Vec<Course>,
}

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

/// List students with optional filters and pagination
#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    params(StudentListQuery),
    responses(
        (status = 200, description = "Filtered page of students", body = StudentListResponse)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Json<StudentListResponse> {
    let store = state.store.lock().await;

    let filtered: Vec<Student> = store
        .students()
        .iter()
        .filter(|s| query.name.as_deref().map_or(true, |n| s.name.contains(n)))
        .filter(|s| query.email.as_deref().map_or(true, |e| s.email.contains(e)))
        .cloned()
        .collect();

    let total = filtered.len();
    let students = query.pagination().slice(&filtered).to_vec();

    Json(StudentListResponse { students, total })
}

/// Get a student and the courses it is enrolled in
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = StudentDetailResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<StudentDetailResponse>> {
    let store = state.store.lock().await;

    let student = store
        .student(id)
        .cloned()
        .ok_or(AppError::NotFound(Entity::Student))?;
    let courses = store.courses_for_student(id);

    Ok(Json(StudentDetailResponse { student, courses }))
}

/// Create a new student
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Missing field or duplicate email")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudent>,
) -> AppResult<Created<Student>> {
    let mut store = state.store.lock().await;
    let student = store.create_student(payload)?;

    tracing::debug!(id = student.id, "student created");
    Ok(Created(student))
}

/// Partially update a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Email already in use"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let mut store = state.store.lock().await;
    let student = store.update_student(id, payload)?;

    Ok(Json(student))
}

/// Delete a student with no active enrollments
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Student still enrolled in a course"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<NoContent> {
    let mut store = state.store.lock().await;
    store.remove_student(id)?;

    tracing::debug!(id, "student deleted");
    Ok(NoContent)
}
