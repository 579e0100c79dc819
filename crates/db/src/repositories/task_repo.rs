//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskhub_core::pagination::{Page, PageParams};
use taskhub_core::types::DbId;

use crate::models::project::Project;
use crate::models::task::{CreateTask, Task, TaskWithProject, UpdateTask};

/// Column list shared across queries to avoid repetition. Also used by the
/// project repository when eager-loading the reverse relation.
pub(crate) const TASK_COLUMNS: &str =
    "id, name, description, is_deleted, project_id, created_at, updated_at";

/// Provides CRUD and assignment operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Project existence for a non-null `project_id` is the caller's
    /// responsibility; the insert itself only enforces the FK.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (name, description, project_id)
             VALUES ($1, COALESCE($2, ''), $3)
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    ///
    /// Returns soft-deleted rows too; filtering by `is_deleted` is the
    /// caller's contract.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a task by ID, eagerly loading its owning project when assigned.
    pub async fn find_by_id_with_project(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskWithProject>, sqlx::Error> {
        let Some(task) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let project = match task.project_id {
            Some(project_id) => {
                sqlx::query_as::<_, Project>(
                    "SELECT id, name, description, is_deleted, created_at, updated_at
                     FROM projects WHERE id = $1",
                )
                .bind(project_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };
        Ok(Some(TaskWithProject { task, project }))
    }

    /// List all tasks, soft-deleted rows included, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List tasks that are not soft-deleted, ordered by ID.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE is_deleted = FALSE ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Fetch one page of tasks with the unpaged total, ordered by ID.
    pub async fn list_page(
        pool: &PgPool,
        include_deleted: bool,
        params: &PageParams,
    ) -> Result<Page<Task>, sqlx::Error> {
        let filter = if include_deleted {
            ""
        } else {
            "WHERE is_deleted = FALSE"
        };

        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM tasks {filter}"))
            .fetch_one(pool)
            .await?;

        let query =
            format!("SELECT {TASK_COLUMNS} FROM tasks {filter} ORDER BY id LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, Task>(&query)
            .bind(params.page_size)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, count.0, params))
    }

    /// Fetch one page of the tasks referencing a given project, ordered by ID.
    pub async fn list_by_project_page(
        pool: &PgPool,
        project_id: DbId,
        include_deleted: bool,
        params: &PageParams,
    ) -> Result<Page<Task>, sqlx::Error> {
        let filter = if include_deleted {
            ""
        } else {
            "AND is_deleted = FALSE"
        };

        let count: (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM tasks WHERE project_id = $1 {filter}"
        ))
        .bind(project_id)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = $1 {filter}
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(params.page_size)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, count.0, params))
    }

    /// Update a task. Only non-`None` fields in `input` are applied, and
    /// `updated_at` is stamped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a task: flip `is_deleted` and stamp `updated_at`.
    ///
    /// Returns `true` if a row was marked deleted; an already-deleted row
    /// is left untouched and yields `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET is_deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Point a task at a project. The caller must have verified the project
    /// exists.
    ///
    /// Returns the updated row, or `None` if the task does not exist.
    pub async fn assign(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET project_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Clear a task's project reference. Idempotent: a task that is already
    /// unassigned is stamped and returned unchanged otherwise.
    ///
    /// Returns the updated row, or `None` if the task does not exist.
    pub async fn unassign(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET project_id = NULL, updated_at = NOW()
             WHERE id = $1
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
