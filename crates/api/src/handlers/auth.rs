//! Handlers for the `/auth` resource (register, login, refresh, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use taskhub_core::error::CoreError;
use taskhub_core::roles::ROLE_USER;
use taskhub_core::types::DbId;
use taskhub_core::validate::validate_username;
use taskhub_db::models::user::{CreateUser, User, UserResponse};
use taskhub_db::repositories::UserRepo;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
///
/// The refresh token is opaque to the client, so the request also carries
/// the user id it was issued to.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub user_id: DbId,
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new account with the default role. The username must not be
/// taken; uniqueness is a lookup-time check, not a stored constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_username(&input.username)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LEN)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        password_hash,
        name: input.name.unwrap_or_default(),
        email: input.email.unwrap_or_default(),
        role: ROLE_USER.to_string(),
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh
/// tokens. Unknown username and wrong password yield the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let response = create_auth_response(&state, &user).await?;
    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The
/// stored token is rotated, so a replayed refresh token fails.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid refresh token".into())))?;

    let presented_hash = hash_refresh_token(&input.refresh_token);
    let stored_hash = user.refresh_token_hash.as_deref();
    let expires_at = user.refresh_token_expires_at;

    let valid = stored_hash == Some(presented_hash.as_str())
        && expires_at.is_some_and(|at| at > Utc::now());

    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid refresh token".into(),
        )));
    }

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(response))
}

/// GET /api/v1/auth/me
///
/// Return the authenticated user's own record.
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist the rotated refresh token hash
/// on the user row, and build the response.
async fn create_auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.username, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    UserRepo::set_refresh_token(&state.pool, user.id, &refresh_hash, expires_at).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        },
    })
}
