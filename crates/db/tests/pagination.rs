//! Integration tests for paginated repository queries.
//!
//! Verifies the slice arithmetic against a real backing table, the
//! active-only filter interaction, and the stable id ordering that keeps
//! repeated page reads consistent.

use sqlx::PgPool;
use taskhub_core::pagination::PageParams;
use taskhub_db::models::project::CreateProject;
use taskhub_db::models::task::CreateTask;
use taskhub_db::repositories::{ProjectRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_projects(pool: &PgPool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let project = ProjectRepo::create(
            pool,
            &CreateProject {
                name: format!("Project {i:02}"),
                description: None,
            },
        )
        .await
        .unwrap();
        ids.push(project.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Test: 23 items, page size 10 -> pages of 10/10/3, total_pages 3
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_slicing_23_items(pool: PgPool) {
    seed_projects(&pool, 23).await;

    let page1 = ProjectRepo::list_page(&pool, false, &PageParams::new(1, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(page1.items.len(), 10);
    assert_eq!(page1.total_count, 23);
    assert_eq!(page1.total_pages, 3);

    let page3 = ProjectRepo::list_page(&pool, false, &PageParams::new(3, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(page3.items.len(), 3);
    assert_eq!(page3.total_count, 23);
    assert_eq!(page3.total_pages, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_beyond_end_is_empty(pool: PgPool) {
    seed_projects(&pool, 5).await;

    let page = ProjectRepo::list_page(&pool, false, &PageParams::new(4, 10).unwrap())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 1);
}

// ---------------------------------------------------------------------------
// Test: pages are disjoint and ordered by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pages_are_disjoint_and_ordered(pool: PgPool) {
    let ids = seed_projects(&pool, 15).await;

    let page1 = ProjectRepo::list_page(&pool, false, &PageParams::new(1, 10).unwrap())
        .await
        .unwrap();
    let page2 = ProjectRepo::list_page(&pool, false, &PageParams::new(2, 10).unwrap())
        .await
        .unwrap();

    let got: Vec<i64> = page1
        .items
        .iter()
        .chain(page2.items.iter())
        .map(|p| p.id)
        .collect();
    assert_eq!(got, ids, "pages concatenate to the id-ordered full set");
}

// ---------------------------------------------------------------------------
// Test: the active-only filter shapes the count, not just the slice
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_rows_counted_only_when_included(pool: PgPool) {
    let ids = seed_projects(&pool, 4).await;
    ProjectRepo::soft_delete(&pool, ids[0]).await.unwrap();

    let active = ProjectRepo::list_page(&pool, false, &PageParams::new(1, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(active.total_count, 3);
    assert!(active.items.iter().all(|p| !p.is_deleted));

    let all = ProjectRepo::list_page(&pool, true, &PageParams::new(1, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(all.total_count, 4);
}

// ---------------------------------------------------------------------------
// Test: the nested project task collection pages the same way
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tasks_by_project_paged(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Busy".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    for i in 0..12 {
        TaskRepo::create(
            &pool,
            &CreateTask {
                name: format!("Task {i:02}"),
                description: None,
                project_id: Some(project.id),
            },
        )
        .await
        .unwrap();
    }
    // Noise on another project must not count.
    let other = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Quiet".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    TaskRepo::create(
        &pool,
        &CreateTask {
            name: "Unrelated".to_string(),
            description: None,
            project_id: Some(other.id),
        },
    )
    .await
    .unwrap();

    let page1 = TaskRepo::list_by_project_page(
        &pool,
        project.id,
        false,
        &PageParams::new(1, 10).unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(page1.items.len(), 10);
    assert_eq!(page1.total_count, 12);
    assert_eq!(page1.total_pages, 2);

    let page2 = TaskRepo::list_by_project_page(
        &pool,
        project.id,
        false,
        &PageParams::new(2, 10).unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(page2.items.len(), 2);
    assert!(page2
        .items
        .iter()
        .all(|t| t.project_id == Some(project.id)));
}
