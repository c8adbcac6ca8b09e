use storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Backend error: {0}")]
    Backend(StorageError),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

/// Field-level rejections from the storage tier surface to the caller as
/// validation failures; every other storage error is a backend failure.
impl From<StorageError> for CategoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Rejected(message) => CategoryError::Validation(message),
            other => CategoryError::Backend(other),
        }
    }
}
