use std::sync::Arc;

use tracing::{instrument, warn};
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
///
/// The single public contract of the category store. Unlike tasks there is
/// no ordering guarantee: `list_categories` preserves the collection order.
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new category with validation
    #[instrument(skip(self, input), fields(category_name = %input.name))]
    pub async fn create_category(&self, mut input: CreateCategory) -> CategoryResult<Category> {
        input.name = input.name.trim().to_string();
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a category by ID
    ///
    /// Backend failures on this single-record read surface as `NotFound`,
    /// matching the task store's read policy.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn get_category(&self, id: &str) -> CategoryResult<Category> {
        match self.repository.get_by_id(id).await {
            Ok(Some(category)) => Ok(category),
            Ok(None) => Err(CategoryError::NotFound(id.to_string())),
            Err(err) => {
                warn!(error = %err, "Backend failure reading category");
                Err(CategoryError::NotFound(id.to_string()))
            }
        }
    }

    /// Snapshot of all categories in original collection order. Backend
    /// failures are swallowed into an empty snapshot.
    pub async fn list_categories(&self) -> Vec<Category> {
        match self.repository.list().await {
            Ok(categories) => categories,
            Err(err) => {
                warn!(error = %err, "Backend failure listing categories, returning empty collection");
                Vec::new()
            }
        }
    }

    /// Update a category
    #[instrument(skip(self, input), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: &str,
        input: UpdateCategory,
    ) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        if let Some(ref name) = input.name {
            if name.trim().is_empty() {
                return Err(CategoryError::Validation(
                    "name must not be empty".to_string(),
                ));
            }
        }

        self.repository.update(id, input).await
    }

    /// Delete a category
    ///
    /// Referencing tasks are left untouched; the task→category link is
    /// lookup-only.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: &str) -> CategoryResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CategoryError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
