//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `taskhub_db` and
//! map errors via [`crate::error::AppError`].

pub mod auth;
pub mod project;
pub mod task;
pub mod user;
