//! Repository for the `projects` table.

use sqlx::PgPool;
use taskhub_core::pagination::{Page, PageParams};
use taskhub_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use crate::models::task::Task;
use crate::repositories::task_repo::TASK_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_deleted, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `created_at` and `updated_at` both default to the transaction
    /// timestamp, so a fresh row always has `created_at == updated_at`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description)
             VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    ///
    /// Returns soft-deleted rows too; filtering by `is_deleted` is the
    /// caller's contract.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, eagerly loading every task referencing it.
    pub async fn find_by_id_with_tasks(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithTasks>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(Some(ProjectWithTasks { project, tasks }))
    }

    /// List all projects, soft-deleted rows included, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List projects that are not soft-deleted, ordered by ID.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE is_deleted = FALSE ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Fetch one page of projects with the unpaged total.
    ///
    /// Ordered by ID so repeated calls slice the set consistently.
    pub async fn list_page(
        pool: &PgPool,
        include_deleted: bool,
        params: &PageParams,
    ) -> Result<Page<Project>, sqlx::Error> {
        let filter = if include_deleted {
            ""
        } else {
            "WHERE is_deleted = FALSE"
        };

        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM projects {filter}"))
            .fetch_one(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM projects {filter} ORDER BY id LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, Project>(&query)
            .bind(params.page_size)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, count.0, params))
    }

    /// Update a project. Only non-`None` fields in `input` are applied, and
    /// `updated_at` is stamped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a project: flip `is_deleted` and stamp `updated_at`.
    ///
    /// Returns `true` if a row was marked deleted; an already-deleted row
    /// is left untouched and yields `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET is_deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a project and unassign every task referencing it, as one
    /// atomic commit.
    ///
    /// Both statements run in a single transaction: either the project is
    /// marked deleted and all its tasks are cleared, or nothing changes.
    /// `NOW()` is the transaction timestamp, so the project row and every
    /// unassigned task receive the identical `updated_at`.
    ///
    /// Returns `false` (after rolling back) when the project does not exist
    /// or is already soft-deleted.
    pub async fn soft_delete_with_tasks(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE tasks SET project_id = NULL, updated_at = NOW()
             WHERE project_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query(
            "UPDATE projects SET is_deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the task unassignment.
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
