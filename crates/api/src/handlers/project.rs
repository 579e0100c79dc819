//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use taskhub_core::error::CoreError;
use taskhub_core::pagination::Page;
use taskhub_core::types::DbId;
use taskhub_core::validate::validate_entity_name;
use taskhub_db::models::project::{CreateProject, Project, UpdateProject};
use taskhub_db::models::task::Task;
use taskhub_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// Query parameters for `GET /projects/{id}`.
#[derive(Debug, Deserialize)]
pub struct GetProjectParams {
    /// Eager-load the tasks referencing this project.
    #[serde(default)]
    pub include_tasks: bool,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_entity_name(&input.name)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Project>>> {
    let page = params.page()?;
    let projects = ProjectRepo::list_page(&state.pool, params.include_deleted, &page).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<GetProjectParams>,
) -> AppResult<Response> {
    if params.include_tasks {
        let project = ProjectRepo::find_by_id_with_tasks(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            }))?;
        return Ok(Json(project).into_response());
    }

    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project).into_response())
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(name) = &input.name {
        validate_entity_name(name)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Unassigns every task referencing the project and soft-deletes the
/// project, as one atomic commit. Deleting a missing or already-deleted
/// project is a 404.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::soft_delete_with_tasks(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project soft-deleted, tasks unassigned");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/v1/projects/{id}/tasks
///
/// Paginated listing of the tasks referencing a project. 404 when the
/// project itself does not exist.
pub async fn list_tasks(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Task>>> {
    let page = params.page()?;

    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let tasks =
        TaskRepo::list_by_project_page(&state.pool, id, params.include_deleted, &page).await?;
    Ok(Json(tasks))
}
