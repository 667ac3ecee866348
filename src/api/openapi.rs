//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{course_handler, student_handler};
use crate::domain::{Course, CreateCourse, CreateStudent, Student, UpdateCourse, UpdateStudent};

/// OpenAPI documentation for the Campus API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus API",
        version = "0.1.0",
        description = "Student/course REST API backed by an in-memory entity store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Student endpoints
        student_handler::list_students,
        student_handler::get_student,
        student_handler::create_student,
        student_handler::update_student,
        student_handler::delete_student,
        // Course endpoints
        course_handler::list_courses,
        course_handler::get_course,
        course_handler::create_course,
        course_handler::update_course,
        course_handler::delete_course,
        course_handler::enroll_student,
    ),
    components(
        schemas(
            // Domain types
            Student,
            CreateStudent,
            UpdateStudent,
            Course,
            CreateCourse,
            UpdateCourse,
            // Handler response types
            student_handler::StudentListResponse,
            student_handler::StudentDetailResponse,
            course_handler::CourseListResponse,
            course_handler::CourseDetailResponse,
            course_handler::EnrollmentResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student management operations"),
        (name = "Courses", description = "Course management and enrollment")
    )
)]
pub struct ApiDoc;
