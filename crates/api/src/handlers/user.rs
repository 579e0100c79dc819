//! Handlers for the `/users` resource.
//!
//! Users are hard-deleted: unlike projects and tasks there is no
//! `is_deleted` flag on the row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskhub_core::error::CoreError;
use taskhub_core::pagination::Page;
use taskhub_core::types::DbId;
use taskhub_db::models::user::{UpdateUser, UserResponse};
use taskhub_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageQuery;
use crate::state::AppState;

/// Query parameters for `GET /users/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub username: String,
}

/// GET /api/v1/users
///
/// Paginated listing of all users. Admin only.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Page<UserResponse>>> {
    let params = query.into_params()?;
    let users = UserRepo::list_page(&state.pool, &params).await?;
    Ok(Json(users.map(UserResponse::from)))
}

/// GET /api/v1/users/search?username=
pub async fn search(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<UserResponse>> {
    if params.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".into()));
    }

    let user = UserRepo::find_by_username(&state.pool, &params.username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", params.username)))?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/v1/users/{id}
///
/// Update profile fields (username, name, email). Credentials are managed
/// through the auth flows, never here.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let updated = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(updated)))
}

/// DELETE /api/v1/users/{id}
///
/// Hard delete: removes the row.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
