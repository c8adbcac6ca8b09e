use std::sync::Arc;

use chrono::Utc;
use tracing::{instrument, warn};
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{self, CreateTask, Task, TaskFilter, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// The single public contract of the task store: validation, the display
/// ordering guarantee, and the read-failure policy live here, independent of
/// which backend strategy the injected repository runs on. Construct one
/// instance at process start and hand it to consumers.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, mut input: CreateTask) -> TaskResult<Task> {
        input.title = input.title.trim().to_string();
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a task by ID
    ///
    /// A backend failure on this single-record read surfaces as `NotFound`:
    /// reads never expose backend errors, and the empty result of a
    /// single-record read is "no such task".
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        match self.repository.get_by_id(id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => Err(TaskError::NotFound(id.to_string())),
            Err(err) => {
                warn!(error = %err, "Backend failure reading task");
                Err(TaskError::NotFound(id.to_string()))
            }
        }
    }

    /// Snapshot of all tasks: incomplete before completed, newest first
    /// within each group. The underlying collection order is untouched.
    pub async fn list_tasks(&self) -> Vec<Task> {
        let mut tasks = self.read_collection(TaskFilter::default()).await;
        models::sort_for_display(&mut tasks);
        tasks
    }

    /// Tasks in the given category, stable relative order
    pub async fn tasks_by_category(&self, category: &str) -> Vec<Task> {
        self.read_collection(TaskFilter {
            category: Some(category.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Completed tasks, stable relative order
    pub async fn completed_tasks(&self) -> Vec<Task> {
        self.read_collection(TaskFilter {
            completed: Some(true),
            ..Default::default()
        })
        .await
    }

    /// Pending (incomplete) tasks, stable relative order
    pub async fn pending_tasks(&self) -> Vec<Task> {
        self.read_collection(TaskFilter {
            completed: Some(false),
            ..Default::default()
        })
        .await
    }

    /// Update a task
    ///
    /// The store does not derive `completed_at` from `completed`; the caller
    /// supplies the pair and the pairing is verified here.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;
        verify_completion_pairing(&input)?;

        if let Some(ref title) = input.title {
            if title.trim().is_empty() {
                return Err(TaskError::Validation(
                    "title must not be empty".to_string(),
                ));
            }
        }

        self.repository.update(id, input).await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: &str) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Mark a task as completed, stamping the completion time
    pub async fn complete_task(&self, id: &str) -> TaskResult<Task> {
        self.update_task(
            id,
            UpdateTask {
                completed: Some(true),
                completed_at: Some(Some(Utc::now())),
                ..Default::default()
            },
        )
        .await
    }

    /// Mark a task as incomplete again, clearing the completion time
    pub async fn reopen_task(&self, id: &str) -> TaskResult<Task> {
        self.update_task(
            id,
            UpdateTask {
                completed: Some(false),
                completed_at: Some(None),
                ..Default::default()
            },
        )
        .await
    }

    /// Collection reads swallow backend failures into an empty snapshot so
    /// the caller always has a renderable, if stale, list.
    async fn read_collection(&self, filter: TaskFilter) -> Vec<Task> {
        match self.repository.list(filter).await {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "Backend failure listing tasks, returning empty collection");
                Vec::new()
            }
        }
    }
}

/// Reject partial updates that would break the `completed`/`completed_at`
/// invariant: completing requires a timestamp, reopening requires clearing
/// it, and the timestamp never changes on its own.
fn verify_completion_pairing(input: &UpdateTask) -> TaskResult<()> {
    match (input.completed, &input.completed_at) {
        (None, None) => Ok(()),
        (Some(true), Some(Some(_))) => Ok(()),
        (Some(false), Some(None)) => Ok(()),
        (Some(true), _) => Err(TaskError::Validation(
            "completing a task requires a completed_at timestamp".to_string(),
        )),
        (Some(false), _) => Err(TaskError::Validation(
            "reopening a task requires clearing completed_at".to_string(),
        )),
        (None, Some(_)) => Err(TaskError::Validation(
            "completed_at cannot change without completed".to_string(),
        )),
    }
}
