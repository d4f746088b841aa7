use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, PatchTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        controller::task::{
            self, create_task, delete_task, get_all_tasks, get_task_by_id,
            get_tasks_by_completion_status, get_tasks_by_description_containing,
            get_tasks_by_id_range, get_tasks_by_title, get_tasks_by_title_or_description,
            patch_task, update_task,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Task API", description = "CRUD backend for task records"),
    paths(
        task::get_all_tasks,
        task::create_task,
        task::get_task_by_id,
        task::update_task,
        task::patch_task,
        task::delete_task,
        task::get_tasks_by_completion_status,
        task::get_tasks_by_title,
        task::get_tasks_by_description_containing,
        task::get_tasks_by_id_range,
        task::get_tasks_by_title_or_description,
    ),
    components(schemas(TaskDto, CreateTaskDto, UpdateTaskDto, PatchTaskDto, ErrorDto)),
    tags((name = "task", description = "Task management"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/TaskAPI", get(get_all_tasks).post(create_task))
        .route(
            "/TaskAPI/{id}",
            get(get_task_by_id)
                .put(update_task)
                .patch(patch_task)
                .delete(delete_task),
        )
        .route(
            "/TaskAPI/completed/{completed}",
            get(get_tasks_by_completion_status),
        )
        .route("/TaskAPI/title/{title}", get(get_tasks_by_title))
        .route(
            "/TaskAPI/description/{keyword}",
            get(get_tasks_by_description_containing),
        )
        .route(
            "/TaskAPI/id-range/{startId}/{endId}",
            get(get_tasks_by_id_range),
        )
        .route(
            "/TaskAPI/keyword/{keyword}",
            get(get_tasks_by_title_or_description),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
