//! Student domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    /// Unique student identifier, assigned by the store
    #[schema(example = 1)]
    pub id: u64,
    /// Student display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Student email address, unique across all students
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl Student {
    /// Create a new student entity
    pub fn new(id: u64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Student creation data transfer object.
///
/// Both fields are optional at the wire level so the store can report a
/// missing field as a validation outcome rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateStudent {
    /// Student display name
    #[schema(example = "David")]
    pub name: Option<String>,
    /// Student email address
    #[schema(example = "david@example.com")]
    pub email: Option<String>,
}

/// Student partial-update data transfer object.
///
/// Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateStudent {
    /// New display name
    #[schema(example = "Alice Updated")]
    pub name: Option<String>,
    /// New email address
    #[schema(example = "alice.updated@example.com")]
    pub email: Option<String>,
}
