//! Handlers for the `/tasks` resource, including project assignment.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use taskhub_core::error::CoreError;
use taskhub_core::pagination::Page;
use taskhub_core::types::DbId;
use taskhub_core::validate::validate_entity_name;
use taskhub_db::models::task::{CreateTask, Task, UpdateTask};
use taskhub_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// Query parameters for `GET /tasks/{id}`.
#[derive(Debug, Deserialize)]
pub struct GetTaskParams {
    /// Eager-load the owning project, if any.
    #[serde(default)]
    pub include_project: bool,
}

/// POST /api/v1/tasks
///
/// When `project_id` is supplied, the referenced project must exist; the
/// request is rejected otherwise.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_entity_name(&input.name)?;

    if let Some(project_id) = input.project_id {
        if ProjectRepo::find_by_id(&state.pool, project_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Project does not exist".into()));
        }
    }

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = task.id, name = %task.name, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Task>>> {
    let page = params.page()?;
    let tasks = TaskRepo::list_page(&state.pool, params.include_deleted, &page).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<GetTaskParams>,
) -> AppResult<Response> {
    if params.include_project {
        let task = TaskRepo::find_by_id_with_project(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
        return Ok(Json(task).into_response());
    }

    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task).into_response())
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    if let Some(name) = &input.name {
        validate_entity_name(name)?;
    }

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
///
/// Soft delete. Deleting a missing or already-deleted task is a 404.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// PUT /api/v1/tasks/{id}/project/{project_id}
///
/// Assign a task to a project. Both sides must exist; the 404 names
/// whichever one is missing.
pub async fn assign(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let task = TaskRepo::assign(&state.pool, id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    tracing::info!(task_id = id, project_id, "Task assigned to project");
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}/project
///
/// Clear a task's project reference. Idempotent: unassigning a task with no
/// project succeeds.
pub async fn unassign(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::unassign(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}
