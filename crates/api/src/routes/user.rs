//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /         -> list (admin only)
/// GET    /search   -> search by username
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete (hard)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/search", get(user::search))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}
