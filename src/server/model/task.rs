//! Task domain models and parameters.
//!
//! Provides the domain `Task` returned from the data layer along with the parameter
//! types for create, full update, partial update and save operations. Parameters are
//! built from request DTOs at the controller boundary, where field validation happens,
//! so the service and data layers only ever see well-formed values.

use std::collections::BTreeMap;

use crate::{
    model::task::{CreateTaskDto, PatchTaskDto, TaskDto, UpdateTaskDto},
    server::{error::AppError, util::validate},
};

/// A persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Server-generated primary key.
    pub id: i32,
    /// Title, at most 100 characters.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl Task {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            completed: entity.completed,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }

    /// Applies a partial update in place.
    ///
    /// Title and description are overwritten only when present. `completed` is written
    /// only when present and different from the current value.
    pub fn apply_patch(&mut self, patch: PatchTaskParam) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            if completed != self.completed {
                self.completed = completed;
            }
        }
    }
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskParam {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl CreateTaskParam {
    /// Validates a create payload and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(CreateTaskParam)` - Title and description are present, non-blank and the
    ///   title fits the length limit
    /// - `Err(AppError::Validation)` - Map of field name to message for every violation
    pub fn from_dto(dto: CreateTaskDto) -> Result<Self, AppError> {
        let mut errors = BTreeMap::new();
        validate::required_title(dto.title.as_deref(), &mut errors);
        validate::required_description(dto.description.as_deref(), &mut errors);

        match (dto.title, dto.description) {
            (Some(title), Some(description)) if errors.is_empty() => Ok(Self {
                title,
                description,
                completed: dto.completed,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Parameters for replacing every mutable field of an existing task.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTaskParam {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl UpdateTaskParam {
    /// Validates a full update payload with the same rules as creation.
    pub fn from_dto(dto: UpdateTaskDto) -> Result<Self, AppError> {
        let param = CreateTaskParam::from_dto(CreateTaskDto {
            title: dto.title,
            description: dto.description,
            completed: dto.completed,
        })?;

        Ok(Self {
            title: param.title,
            description: param.description,
            completed: param.completed,
        })
    }
}

/// Parameters for a partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchTaskParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl PatchTaskParam {
    /// Validates the fields present in a partial update payload.
    ///
    /// Absent fields are accepted. Present fields must satisfy the same rules as on
    /// creation.
    pub fn from_dto(dto: PatchTaskDto) -> Result<Self, AppError> {
        let mut errors = BTreeMap::new();
        if let Some(title) = dto.title.as_deref() {
            validate::required_title(Some(title), &mut errors);
        }
        if let Some(description) = dto.description.as_deref() {
            validate::required_description(Some(description), &mut errors);
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            title: dto.title,
            description: dto.description,
            completed: dto.completed,
        })
    }
}

/// Row written by `TaskRepository::save`.
///
/// A `None` id inserts a new row; `Some(id)` overwrites the row with that id.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTaskParam {
    pub id: Option<i32>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl From<CreateTaskParam> for SaveTaskParam {
    fn from(param: CreateTaskParam) -> Self {
        Self {
            id: None,
            title: param.title,
            description: param.description,
            completed: param.completed,
        }
    }
}

impl From<Task> for SaveTaskParam {
    fn from(task: Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.title,
            description: task.description,
            completed: task.completed,
        }
    }
}
