//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, validation, ordering
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Backend strategy (trait + local/remote implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::{FromEnv, StorageBackend};
//! use domain_tasks::{LocalTaskRepository, RemoteTaskRepository, TaskService};
//! use storage::local::{JsonStore, LocalStoreConfig};
//! use storage::remote::{RecordStoreClient, RecordStoreConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Pick the backend strategy once at process start
//! match StorageBackend::from_env() {
//!     StorageBackend::Local => {
//!         let store = JsonStore::new(LocalStoreConfig::from_env()?);
//!         let service = TaskService::new(LocalTaskRepository::new(store));
//!         // hand `service` to the UI layer
//!     }
//!     StorageBackend::Remote => {
//!         let client = RecordStoreClient::new(RecordStoreConfig::from_env()?);
//!         let service = TaskService::new(RemoteTaskRepository::new(client));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod local;
pub mod models;
pub mod query;
pub mod remote;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use local::LocalTaskRepository;
pub use models::{
    CreateTask, Task, TaskFilter, TaskPriority, UpdateTask, DEFAULT_CATEGORY,
};
pub use query::{category_task_counts, visible_tasks, CategoryFilter};
pub use remote::RemoteTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
