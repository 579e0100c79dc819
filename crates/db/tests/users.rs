//! Integration tests for the user repository.
//!
//! Users have no soft-delete flag: deletion removes the row. Username
//! uniqueness is a lookup-time concern, so the repository itself accepts
//! duplicates -- the API layer owns the check.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use taskhub_db::models::user::{CreateUser, UpdateUser};
use taskhub_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$placeholder".to_string(),
        name: "Test User".to_string(),
        email: format!("{username}@test.com"),
        role: "user".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_by_username(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    assert_eq!(created.username, "alice");
    assert_eq!(created.role, "user");
    assert!(created.refresh_token_hash.is_none());
    assert_eq!(created.created_at, created.updated_at);

    let found = UserRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("alice should be found");
    assert_eq!(found.id, created.id);

    // Default collation is case-sensitive equality.
    let miss = UserRepo::find_by_username(&pool, "Alice").await.unwrap();
    assert!(miss.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_username_returns_none(pool: PgPool) {
    let miss = UserRepo::find_by_username(&pool, "nobody").await.unwrap();
    assert!(miss.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_partial(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("bob")).await.unwrap();

    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            username: None,
            name: Some("Robert".to_string()),
            email: None,
        },
    )
    .await
    .unwrap()
    .expect("bob should exist");

    assert_eq!(updated.username, "bob");
    assert_eq!(updated.name, "Robert");
    assert_eq!(updated.email, "bob@test.com");
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_refresh_token_round_trip(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol")).await.unwrap();

    let expires_at = Utc::now() + Duration::days(7);
    UserRepo::set_refresh_token(&pool, user.id, "deadbeef", expires_at)
        .await
        .unwrap();

    let reloaded = UserRepo::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .expect("carol should exist");
    assert_eq!(reloaded.refresh_token_hash.as_deref(), Some("deadbeef"));
    let stored_expiry = reloaded
        .refresh_token_expires_at
        .expect("expiry should be set");
    assert!((stored_expiry - expires_at).num_seconds().abs() < 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_password(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave")).await.unwrap();

    let updated = UserRepo::update_password(&pool, user.id, "$argon2id$new").await.unwrap();
    assert!(updated);

    let reloaded = UserRepo::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.password_hash, "$argon2id$new");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("erin")).await.unwrap();

    let deleted = UserRepo::delete(&pool, user.id).await.unwrap();
    assert!(deleted, "delete should return true");

    let found = UserRepo::find_by_id(&pool, user.id).await.unwrap();
    assert!(found.is_none(), "the row is really gone");

    let again = UserRepo::delete(&pool, user.id).await.unwrap();
    assert!(!again, "second delete should return false");
}
