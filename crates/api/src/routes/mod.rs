pub mod auth;
pub mod health;
pub mod project;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/me                             current user (requires auth)
///
/// /projects                            list, create
/// /projects/{id}                       get, update, delete (soft + cascade)
/// /projects/{id}/tasks                 paginated task listing
///
/// /tasks                               list, create
/// /tasks/{id}                          get, update, delete (soft)
/// /tasks/{id}/project/{project_id}     assign (PUT)
/// /tasks/{id}/project                  unassign (DELETE)
///
/// /users                               list (admin only)
/// /users/search                        lookup by username
/// /users/{id}                          get, update, delete (hard)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/users", user::router())
}
