//! Storage library providing the two persistence strategies behind the
//! TaskFlow stores: on-device JSON-blob storage and a hosted tabular
//! record-store API.
//!
//! Each store owns its collection through a repository; the repository is
//! built on exactly one of the strategies in this crate, selected at
//! construction time.
//!
//! # Features
//!
//! - `local` (default) - file-backed JSON-blob persistence
//! - `remote` (default) - hosted record-store API client
//!
//! # Examples
//!
//! ## Local
//!
//! ```ignore
//! use storage::local::{JsonStore, LocalStoreConfig};
//! use core_config::FromEnv;
//!
//! let store = JsonStore::new(LocalStoreConfig::from_env()?);
//! store.save("taskflow_tasks", &tasks)?;
//! let tasks: Option<Vec<Task>> = store.load("taskflow_tasks");
//! ```
//!
//! ## Remote
//!
//! ```ignore
//! use storage::remote::{RecordQuery, RecordStoreClient, RecordStoreConfig};
//! use core_config::FromEnv;
//!
//! let client = RecordStoreClient::new(RecordStoreConfig::from_env()?);
//! let query = RecordQuery::select(["Id", "Name"]).order_desc("CreatedOn");
//! let records = client.query("task", &query).await?;
//! ```

// Always available modules
pub mod common;

// Strategy-specific modules (conditional based on features)
#[cfg(feature = "local")]
pub mod local;

#[cfg(feature = "remote")]
pub mod remote;

// Re-exports for convenience
pub use common::{StorageError, StorageResult};
