/// Unified storage error type for both persistence strategies
///
/// This provides a consistent error interface across the local JSON-blob
/// store and the remote record-store API.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Transport-level failure or an overall-failure response from the
    /// backend
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The storage tier rejected every submitted record; carries the
    /// field-level validation messages it returned
    #[error("Records rejected by storage tier: {0}")]
    Rejected(String),

    /// A batch where some records succeeded and some failed. The call as a
    /// whole is failed; the succeeded records are not rolled back.
    #[error("Partial batch failure ({succeeded} succeeded, {failed} failed): {message}")]
    PartialFailure {
        succeeded: usize,
        failed: usize,
        message: String,
    },

    /// Local filesystem error while persisting a collection blob
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection blob or wire payload could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "remote")]
impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

impl From<core_config::ConfigError> for StorageError {
    fn from(err: core_config::ConfigError) -> Self {
        StorageError::Config(err.to_string())
    }
}
