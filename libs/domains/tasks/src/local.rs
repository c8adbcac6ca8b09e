//! Local implementation of TaskRepository
//!
//! Holds the authoritative collection in memory and rewrites the whole
//! persisted blob after every mutation. The first run (or a corrupt blob)
//! seeds the collection from the bundled fixture.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use storage::local::JsonStore;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask};
use crate::repository::TaskRepository;

/// Fixed key the task collection is persisted under
pub const TASKS_KEY: &str = "taskflow_tasks";

const SEED_TASKS: &str = include_str!("../fixtures/tasks.json");

/// Local implementation of the TaskRepository
pub struct LocalTaskRepository {
    store: JsonStore,
    tasks: RwLock<Vec<Task>>,
}

impl LocalTaskRepository {
    /// Open the repository, loading the persisted collection or falling
    /// back to the bundled seed fixture when none exists (or the blob is
    /// unreadable).
    pub fn new(store: JsonStore) -> Self {
        let tasks = match store.load::<Task>(TASKS_KEY) {
            Some(tasks) => tasks,
            None => {
                let seeded = seed_tasks();
                info!(count = seeded.len(), "Seeding task collection from bundled fixture");
                if let Err(err) = store.save(TASKS_KEY, &seeded) {
                    warn!(error = %err, "Failed to persist seeded task collection");
                }
                seeded
            }
        };

        Self {
            store,
            tasks: RwLock::new(tasks),
        }
    }

    /// Rewrite the persisted blob. In-memory state stays authoritative even
    /// when the write fails, so failures are logged and swallowed.
    fn persist(&self, tasks: &[Task]) {
        if let Err(err) = self.store.save(TASKS_KEY, tasks) {
            warn!(error = %err, "Failed to persist task collection");
        }
    }
}

fn seed_tasks() -> Vec<Task> {
    serde_json::from_str(SEED_TASKS).unwrap_or_else(|err| {
        warn!(error = %err, "Bundled task fixture is unparsable, starting empty");
        Vec::new()
    })
}

#[async_trait]
impl TaskRepository for LocalTaskRepository {
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let task = Task::new(input);

        let mut tasks = self.tasks.write().await;
        // Most-recent-first
        tasks.insert(0, task.clone());
        self.persist(&tasks);

        info!(task_id = %task.id, "Task created");
        Ok(task)
    }

    async fn get_by_id(&self, id: &str) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| t.matches(&filter))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, input), fields(task_id = %id))]
    async fn update(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        task.apply_update(input);
        let updated = task.clone();
        self.persist(&tasks);

        info!(task_id = %id, "Task updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn delete(&self, id: &str) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;
        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        tasks.remove(index);
        self.persist(&tasks);

        info!(task_id = %id, "Task deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixture_parses() {
        let seeded = seed_tasks();
        assert!(!seeded.is_empty());

        // The fixture has to satisfy the completion invariant
        for task in &seeded {
            assert_eq!(task.completed, task.completed_at.is_some());
            assert!(!task.title.is_empty());
        }
    }
}
