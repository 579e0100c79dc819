//! Route definitions for the `/tasks` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id (?include_project=true)
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete (soft)
/// PUT    /{id}/project/{project_id} -> assign
/// DELETE /{id}/project              -> unassign (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/project/{project_id}", put(task::assign))
        .route("/{id}/project", delete(task::unassign))
}
