use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted task as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Payload for creating a task.
///
/// `title` and `description` are optional at the serde level so that a missing field is
/// reported as a validation error for that field rather than a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskDto {
    #[schema(max_length = 100)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for replacing every mutable field of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskDto {
    #[schema(max_length = 100)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for a partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatchTaskDto {
    #[schema(max_length = 100)]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
