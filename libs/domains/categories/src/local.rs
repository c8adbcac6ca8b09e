//! Local implementation of CategoryRepository
//!
//! Same shape as the local task repository: authoritative in-memory
//! collection, full-blob rewrites, seed fixture on first run.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use storage::local::JsonStore;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Fixed key the category collection is persisted under
pub const CATEGORIES_KEY: &str = "taskflow_categories";

const SEED_CATEGORIES: &str = include_str!("../fixtures/categories.json");

/// Local implementation of the CategoryRepository
pub struct LocalCategoryRepository {
    store: JsonStore,
    categories: RwLock<Vec<Category>>,
}

impl LocalCategoryRepository {
    /// Open the repository, loading the persisted collection or falling
    /// back to the bundled seed fixture when none exists (or the blob is
    /// unreadable).
    pub fn new(store: JsonStore) -> Self {
        let categories = match store.load::<Category>(CATEGORIES_KEY) {
            Some(categories) => categories,
            None => {
                let seeded = seed_categories();
                info!(count = seeded.len(), "Seeding category collection from bundled fixture");
                if let Err(err) = store.save(CATEGORIES_KEY, &seeded) {
                    warn!(error = %err, "Failed to persist seeded category collection");
                }
                seeded
            }
        };

        Self {
            store,
            categories: RwLock::new(categories),
        }
    }

    fn persist(&self, categories: &[Category]) {
        if let Err(err) = self.store.save(CATEGORIES_KEY, categories) {
            warn!(error = %err, "Failed to persist category collection");
        }
    }
}

fn seed_categories() -> Vec<Category> {
    serde_json::from_str(SEED_CATEGORIES).unwrap_or_else(|err| {
        warn!(error = %err, "Bundled category fixture is unparsable, starting empty");
        Vec::new()
    })
}

#[async_trait]
impl CategoryRepository for LocalCategoryRepository {
    #[instrument(skip(self, input), fields(category_name = %input.name))]
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let category = Category::new(input);

        let mut categories = self.categories.write().await;
        categories.push(category.clone());
        self.persist(&categories);

        info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    async fn get_by_id(&self, id: &str) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.clone())
    }

    #[instrument(skip(self, input), fields(category_id = %id))]
    async fn update(&self, id: &str, input: UpdateCategory) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;

        category.apply_update(input);
        let updated = category.clone();
        self.persist(&categories);

        info!(category_id = %id, "Category updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn delete(&self, id: &str) -> CategoryResult<bool> {
        let mut categories = self.categories.write().await;
        let Some(index) = categories.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        categories.remove(index);
        self.persist(&categories);

        info!(category_id = %id, "Category deleted");
        Ok(true)
    }
}
