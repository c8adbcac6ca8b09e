//! Common types shared across both storage strategies

pub mod error;

pub use error::{StorageError, StorageResult};
