//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id (?include_tasks=true)
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete (cascade-unassign + soft delete)
/// GET    /{id}/tasks   -> list_tasks (paginated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/tasks", get(project::list_tasks))
}
