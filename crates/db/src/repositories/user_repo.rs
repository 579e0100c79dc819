//! Repository for the `users` table.
//!
//! Users have no soft-delete flag; deleting a user removes the row.

use sqlx::PgPool;
use taskhub_core::pagination::{Page, PageParams};
use taskhub_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, name, email, role, \
                        refresh_token_hash, refresh_token_expires_at, created_at, updated_at";

/// Provides CRUD and credential operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, name, email, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (store's default collation, i.e.
    /// case-sensitive equality).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of users with the unpaged total, ordered by ID.
    pub async fn list_page(pool: &PgPool, params: &PageParams) -> Result<Page<User>, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, User>(&query)
            .bind(params.page_size)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, count.0, params))
    }

    /// Update a user's profile fields. Only non-`None` fields in `input`
    /// are applied, and `updated_at` is stamped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a rotated refresh token hash and its expiry on the user row.
    pub async fn set_refresh_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                refresh_token_hash = $2,
                refresh_token_expires_at = $3,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Permanently delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
