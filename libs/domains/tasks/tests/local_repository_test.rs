//! Integration tests for the local task repository
//!
//! These run the real repository against a temp data directory: seeding,
//! persistence round-trips, and the store-boundary error contract.

use domain_tasks::local::TASKS_KEY;
use domain_tasks::{
    CreateTask, LocalTaskRepository, Task, TaskError, TaskPriority, TaskService, UpdateTask,
};
use storage::local::{JsonStore, LocalStoreConfig};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonStore {
    JsonStore::new(LocalStoreConfig::new(dir.path()))
}

/// A service over an explicitly empty persisted collection, so tests are
/// not entangled with the seed fixture
fn empty_service(dir: &TempDir) -> TaskService<LocalTaskRepository> {
    let store = store_in(dir);
    store.save(TASKS_KEY, &Vec::<Task>::new()).unwrap();
    TaskService::new(LocalTaskRepository::new(store))
}

fn create_input(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        category: None,
        priority: TaskPriority::default(),
        due_date: None,
    }
}

#[tokio::test]
async fn test_first_run_seeds_from_bundled_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let service = TaskService::new(LocalTaskRepository::new(store_in(&dir)));

    let tasks = service.list_tasks().await;
    assert!(!tasks.is_empty());

    // Seeding persisted the collection, so a reopened store sees it too
    let reopened = TaskService::new(LocalTaskRepository::new(store_in(&dir)));
    assert_eq!(reopened.list_tasks().await.len(), tasks.len());
}

#[tokio::test]
async fn test_corrupt_blob_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{TASKS_KEY}.json")), "{broken").unwrap();

    let service = TaskService::new(LocalTaskRepository::new(store_in(&dir)));
    assert!(!service.list_tasks().await.is_empty());
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service.create_task(create_input("x")).await.unwrap();
    let fetched = service.get_task(&created.id).await.unwrap();

    assert_eq!(fetched.category, "general");
    assert_eq!(fetched.priority, TaskPriority::Medium);
    assert!(!fetched.completed);
    assert!(fetched.due_date.is_none());
    assert!(fetched.completed_at.is_none());
}

#[tokio::test]
async fn test_create_inserts_most_recent_first() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    service.create_task(create_input("first")).await.unwrap();
    service.create_task(create_input("second")).await.unwrap();

    let pending = service.pending_tasks().await;
    assert_eq!(pending[0].title, "second");
    assert_eq!(pending[1].title, "first");
}

#[tokio::test]
async fn test_list_tasks_orders_incomplete_before_completed() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let a = service.create_task(create_input("a")).await.unwrap();
    let b = service.create_task(create_input("b")).await.unwrap();
    let c = service.create_task(create_input("c")).await.unwrap();
    service.complete_task(&b.id).await.unwrap();

    let tasks = service.list_tasks().await;
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    // Incomplete first (newest first), the completed task last
    assert_eq!(ids, vec![c.id.as_str(), a.id.as_str(), b.id.as_str()]);
}

#[tokio::test]
async fn test_update_merges_only_supplied_fields() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let mut input = create_input("Buy milk");
    input.category = Some("home".to_string());
    input.priority = TaskPriority::High;
    let created = service.create_task(input).await.unwrap();

    let updated = service
        .update_task(
            &created.id,
            UpdateTask {
                title: Some("Buy oat milk".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Buy oat milk");
    assert_eq!(updated.category, "home");
    assert_eq!(updated.priority, TaskPriority::High);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_complete_then_reopen_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service.create_task(create_input("x")).await.unwrap();

    let completed = service.complete_task(&created.id).await.unwrap();
    assert!(completed.completed);
    assert!(completed.completed_at.is_some());

    let reopened = service.reopen_task(&created.id).await.unwrap();
    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());
}

#[tokio::test]
async fn test_update_missing_task_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let result = service
        .update_task(
            "absent",
            UpdateTask {
                title: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(TaskError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service.create_task(create_input("x")).await.unwrap();

    service.delete_task(&created.id).await.unwrap();
    assert!(matches!(
        service.get_task(&created.id).await,
        Err(TaskError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_task(&created.id).await,
        Err(TaskError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_created_task_survives_a_store_reload() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let service = empty_service(&dir);
        let mut input = create_input("Persisted task");
        input.category = Some("work".to_string());
        input.due_date = Some("2026-09-01".parse().unwrap());
        service.create_task(input).await.unwrap()
    };

    // Reload the store from the persisted blob
    let reloaded = TaskService::new(LocalTaskRepository::new(store_in(&dir)));
    let fetched = reloaded.get_task(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_filtered_reads() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let mut home = create_input("Buy milk");
    home.category = Some("home".to_string());
    service.create_task(home).await.unwrap();

    let mut work = create_input("Write report");
    work.category = Some("work".to_string());
    let work = service.create_task(work).await.unwrap();
    service.complete_task(&work.id).await.unwrap();

    let by_category = service.tasks_by_category("work").await;
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "Write report");

    let completed = service.completed_tasks().await;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Write report");

    let pending = service.pending_tasks().await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].title, "Buy milk");
}

#[tokio::test]
async fn test_snapshots_are_defensive_copies() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service.create_task(create_input("x")).await.unwrap();

    let mut snapshot = service.get_task(&created.id).await.unwrap();
    snapshot.title = "mutated by caller".to_string();

    let fetched = service.get_task(&created.id).await.unwrap();
    assert_eq!(fetched.title, "x");
}
