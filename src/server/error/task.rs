use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors raised by the task service.
#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    /// A task with the requested title was already created.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Task with title '{title}' already exists.")]
    AlreadyExists { title: String },

    /// No task exists with the id passed to a lookup or delete.
    ///
    /// Results in a 404 Not Found response. The delete route rewrites this to
    /// 400 Bad Request.
    #[error("Task with id {id} does not exist.")]
    DoesNotExist { id: i32 },

    /// No task exists with the id passed to a full or partial update.
    ///
    /// Results in a 404 Not Found response.
    #[error("Task with id {id} not found.")]
    NotFound { id: i32 },
}

impl TaskError {
    /// Status code a route reports for this error unless it overrides the mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
            Self::DoesNotExist { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

/// Converts task errors into HTTP responses carrying the error message.
///
/// # Returns
/// - 400 Bad Request - For `AlreadyExists`
/// - 404 Not Found - For `DoesNotExist` and `NotFound`
impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
