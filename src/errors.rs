//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The two entity kinds managed by the store.
///
/// Carried inside [`AppError`] variants so callers can tell which side of
/// the relation an outcome refers to without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Student,
    Course,
}

/// Conventional message for a create call missing a required field
fn required_fields(entity: &Entity) -> &'static str {
    match entity {
        Entity::Student => "name and email required",
        Entity::Course => "title and teacher required",
    }
}

/// Conventional message for a delete rejected by an active enrollment
fn blocked_message(entity: &Entity) -> &'static str {
    match entity {
        Entity::Student => "Student is enrolled in a course",
        Entity::Course => "Course has enrolled students",
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Student => write!(f, "Student"),
            Entity::Course => write!(f, "Course"),
        }
    }
}

/// Application error types.
///
/// Every store operation that can fail returns one of these as a structured
/// outcome; the HTTP layer maps each variant to a status code without
/// inspecting message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required field was absent or empty on create
    #[error("{}", required_fields(.0))]
    MissingField(Entity),

    /// Another student already uses this exact email
    #[error("Email must be unique")]
    DuplicateEmail,

    /// Another course already uses this exact title
    #[error("Course title must be unique")]
    DuplicateTitle,

    /// No entity with the given id
    #[error("{0} not found")]
    NotFound(Entity),

    /// Delete rejected because an enrollment still references the entity
    #[error("{}", blocked_message(.0))]
    Blocked(Entity),

    /// Enroll rejected because the course is at capacity
    #[error("Course is full")]
    CourseFull,
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_)
            | AppError::DuplicateEmail
            | AppError::DuplicateTitle
            | AppError::Blocked(_)
            | AppError::CourseFull => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
