//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.
//!
//! Visibility policy: `find_by_id` and `list` return rows regardless of
//! `is_deleted`; callers that want the active set only use the `_active`
//! variants or the `include_deleted` flag on paged queries. The repository
//! does not decide visibility for its callers.

pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
