//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash and refresh token hash -- NEVER serialize
/// this to API responses directly. Use [`UserResponse`] for external-facing
/// output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub refresh_token_hash: Option<String>,
    pub refresh_token_expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no credential material).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user. The password is hashed before this is built.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// DTO for updating a user's profile fields. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}
