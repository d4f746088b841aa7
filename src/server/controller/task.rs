use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, PatchTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::{task::TaskError, AppError},
        model::task::{CreateTaskParam, PatchTaskParam, Task, UpdateTaskParam},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

fn into_dtos(tasks: Vec<Task>) -> Vec<TaskDto> {
    tasks.into_iter().map(Task::into_dto).collect()
}

/// Get all tasks.
///
/// # Returns
/// - `200 OK` - Every stored task
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/TaskAPI",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db).get_all_tasks().await?;

    Ok((StatusCode::OK, Json(into_dtos(tasks))))
}

/// Create a new task.
///
/// Validates that the title is non-blank and at most 100 characters and that the
/// description is non-blank before the service is called. Validation failures return a
/// map of field name to message.
///
/// # Returns
/// - `201 Created` - Successfully created task
/// - `400 Bad Request` - Validation failure, malformed body, or duplicate title
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/TaskAPI",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Successfully created task", body = TaskDto),
        (status = 400, description = "Invalid task data or duplicate title"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateTaskParam::from_dto(payload)?;

    let task = TaskService::new(&state.db).create_task(param).await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Get a task by ID.
///
/// # Returns
/// - `200 OK` - The task
/// - `404 Not Found` - No task with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/TaskAPI/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved task", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db).get_task_by_id(id).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Replace a task.
///
/// Overwrites title, description and completion flag. The body is validated with the
/// same rules as creation.
///
/// # Returns
/// - `200 OK` - Successfully updated task
/// - `400 Bad Request` - Validation failure or malformed body
/// - `404 Not Found` - No task with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/TaskAPI/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Successfully updated task", body = TaskDto),
        (status = 400, description = "Invalid task data"),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = UpdateTaskParam::from_dto(payload)?;

    let task = TaskService::new(&state.db).update_task(id, param).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Partially update a task.
///
/// Only fields present in the body are written.
///
/// # Returns
/// - `200 OK` - Successfully updated task
/// - `400 Bad Request` - A present field is invalid, or malformed body
/// - `404 Not Found` - No task with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/TaskAPI/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = PatchTaskDto,
    responses(
        (status = 200, description = "Successfully updated task", body = TaskDto),
        (status = 400, description = "Invalid task data"),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<PatchTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = PatchTaskParam::from_dto(payload)?;

    let task = TaskService::new(&state.db).patch_task(id, param).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete a task.
///
/// Unlike lookups, deleting a missing task is reported as a bad request.
///
/// # Returns
/// - `200 OK` - Task deleted, empty body
/// - `400 Bad Request` - No task with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/TaskAPI/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted task"),
        (status = 400, description = "Task does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match TaskService::new(&state.db).delete_task(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(AppError::TaskErr(err @ TaskError::DoesNotExist { .. })) => {
            Err(AppError::BadRequest(err.to_string()))
        }
        Err(err) => Err(err),
    }
}

/// Get tasks by completion status.
#[utoipa::path(
    get,
    path = "/TaskAPI/completed/{completed}",
    tag = TASK_TAG,
    params(
        ("completed" = bool, Path, description = "Completion flag to match")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks_by_completion_status(
    State(state): State<AppState>,
    Path(completed): Path<bool>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db)
        .get_tasks_by_completion_status(completed)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(tasks))))
}

/// Get tasks whose title matches exactly.
#[utoipa::path(
    get,
    path = "/TaskAPI/title/{title}",
    tag = TASK_TAG,
    params(
        ("title" = String, Path, description = "Exact title to match")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db)
        .get_tasks_by_title(&title)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(tasks))))
}

/// Get tasks whose description contains a keyword.
#[utoipa::path(
    get,
    path = "/TaskAPI/description/{keyword}",
    tag = TASK_TAG,
    params(
        ("keyword" = String, Path, description = "Substring to search for")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks_by_description_containing(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db)
        .get_tasks_by_description_containing(&keyword)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(tasks))))
}

/// Get tasks with IDs in an inclusive range.
#[utoipa::path(
    get,
    path = "/TaskAPI/id-range/{startId}/{endId}",
    tag = TASK_TAG,
    params(
        ("startId" = i32, Path, description = "Lowest ID to include"),
        ("endId" = i32, Path, description = "Highest ID to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks_by_id_range(
    State(state): State<AppState>,
    Path((start_id, end_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db)
        .get_tasks_by_id_range(start_id, end_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(tasks))))
}

/// Get tasks whose title or description contains a keyword.
#[utoipa::path(
    get,
    path = "/TaskAPI/keyword/{keyword}",
    tag = TASK_TAG,
    params(
        ("keyword" = String, Path, description = "Substring to search for")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks_by_title_or_description(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db)
        .get_tasks_by_title_or_description(&keyword)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(tasks))))
}
