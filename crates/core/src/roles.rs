//! Role name constants stored in the `users.role` column and embedded in
//! JWT claims.

/// Full administrative access, including user management.
pub const ROLE_ADMIN: &str = "admin";

/// Default role for newly registered accounts.
pub const ROLE_USER: &str = "user";
