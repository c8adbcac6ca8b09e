//! Categories Domain
//!
//! Domain implementation for managing the category labels tasks reference.
//! Cut from the same pattern as the tasks domain: entity + DTOs, a
//! repository trait as the backend strategy seam, a local and a remote
//! implementation, and a service carrying the public contract.
//!
//! Unlike tasks there is no display ordering: `list_categories` returns the
//! collection in its original order.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::{CategoryService, LocalCategoryRepository};
//! use storage::local::{JsonStore, LocalStoreConfig};
//!
//! let store = JsonStore::new(LocalStoreConfig::new("data"));
//! let service = CategoryService::new(LocalCategoryRepository::new(store));
//! // hand `service` to the UI layer
//! ```

pub mod error;
pub mod local;
pub mod models;
pub mod remote;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CategoryError, CategoryResult};
pub use local::LocalCategoryRepository;
pub use models::{Category, CreateCategory, UpdateCategory, DEFAULT_COLOR};
pub use remote::RemoteCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
