use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask};

/// Repository trait for Task persistence
///
/// This trait is the backend strategy seam: implementations persist the
/// collection to different backends (local JSON storage, the hosted record
/// store) behind one interface, chosen at construction time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task, assigning its id and creation timestamp
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: &str) -> TaskResult<Option<Task>>;

    /// List tasks with optional filters, preserving the collection's
    /// relative order
    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>>;

    /// Shallow-merge a partial update into an existing task
    async fn update(&self, id: &str, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID; `false` when no such task exists
    async fn delete(&self, id: &str) -> TaskResult<bool>;
}
