use async_trait::async_trait;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};

/// Repository trait for Category persistence
///
/// The backend strategy seam for categories, mirroring the task
/// repository: one interface, one implementation per backend, chosen at
/// construction time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category, assigning its id
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Get a category by ID
    async fn get_by_id(&self, id: &str) -> CategoryResult<Option<Category>>;

    /// List all categories in original collection order
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    /// Shallow-merge a partial update into an existing category
    async fn update(&self, id: &str, input: UpdateCategory) -> CategoryResult<Category>;

    /// Delete a category by ID; `false` when no such category exists
    async fn delete(&self, id: &str) -> CategoryResult<bool>;
}
