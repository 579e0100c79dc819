//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

use crate::models::project::Project;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    /// Owning project, or `None` while the task is unassigned.
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task together with its eagerly loaded project (if assigned).
#[derive(Debug, Serialize)]
pub struct TaskWithProject {
    #[serde(flatten)]
    pub task: Task,
    pub project: Option<Project>,
}

/// DTO for creating a new task.
///
/// When `project_id` is supplied the handler verifies the project exists
/// before the insert; the repository itself does not re-check.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub name: String,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
}

/// DTO for updating an existing task. All fields are optional; assignment
/// changes go through the dedicated assign/unassign operations instead.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
}
