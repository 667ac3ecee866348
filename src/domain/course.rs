//! Course domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Course domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    /// Unique course identifier, assigned by the store
    #[schema(example = 1)]
    pub id: u64,
    /// Course title, unique across all courses
    #[schema(example = "Math")]
    pub title: String,
    /// Name of the teacher giving the course
    #[schema(example = "Mr. Smith")]
    pub teacher: String,
}

impl Course {
    /// Create a new course entity
    pub fn new(id: u64, title: String, teacher: String) -> Self {
        Self { id, title, teacher }
    }
}

/// Course creation data transfer object.
///
/// Both fields are optional at the wire level so the store can report a
/// missing field as a validation outcome rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCourse {
    /// Course title
    #[schema(example = "Philosophy")]
    pub title: Option<String>,
    /// Name of the teacher giving the course
    #[schema(example = "Socrates")]
    pub teacher: Option<String>,
}

/// Course partial-update data transfer object.
///
/// Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCourse {
    /// New course title
    #[schema(example = "Advanced Math")]
    pub title: Option<String>,
    /// New teacher name
    #[schema(example = "Ms. Jones")]
    pub teacher: Option<String>,
}
