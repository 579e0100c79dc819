//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

use crate::models::task::Task;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its eagerly loaded tasks (every task whose
/// `project_id` points at it, soft-deleted ones included).
#[derive(Debug, Serialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    /// Defaults to an empty string if omitted.
    pub description: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}
