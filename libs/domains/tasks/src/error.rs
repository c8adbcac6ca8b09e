use storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Backend error: {0}")]
    Backend(StorageError),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Field-level rejections from the storage tier surface to the caller as
/// validation failures; every other storage error is a backend failure.
impl From<StorageError> for TaskError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Rejected(message) => TaskError::Validation(message),
            other => TaskError::Backend(other),
        }
    }
}
