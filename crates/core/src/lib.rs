//! Shared domain primitives for the taskhub backend.
//!
//! Everything here is pure: no I/O, no database access. The `db` and `api`
//! crates build on these types.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;
pub mod validate;
