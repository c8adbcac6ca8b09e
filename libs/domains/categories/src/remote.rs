//! Remote implementation of CategoryRepository
//!
//! Proxies each operation to the hosted record store's `category` table,
//! with the UI↔storage field translation confined to the pure mapping
//! functions below.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use storage::remote::{RecordQuery, RecordStoreClient};
use storage::StorageError;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{normalize_color, Category, CreateCategory, UpdateCategory, DEFAULT_COLOR};
use crate::repository::CategoryRepository;

/// Record-store table holding categories
pub const CATEGORY_TABLE: &str = "category";

const CATEGORY_FIELDS: [&str; 4] = ["Id", "Name", "color_c", "task_count_c"];

/// Remote implementation of the CategoryRepository
pub struct RemoteCategoryRepository {
    client: RecordStoreClient,
}

impl RemoteCategoryRepository {
    pub fn new(client: RecordStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for RemoteCategoryRepository {
    #[instrument(skip(self, input), fields(category_name = %input.name))]
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let records = self
            .client
            .create(CATEGORY_TABLE, vec![create_record(&input)])
            .await?;

        let category = records
            .first()
            .and_then(category_from_record)
            .ok_or_else(|| {
                CategoryError::Backend(StorageError::Unavailable(
                    "create response contained no readable record".to_string(),
                ))
            })?;

        info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn get_by_id(&self, id: &str) -> CategoryResult<Option<Category>> {
        let Some(record_id) = parse_record_id(id) else {
            return Ok(None);
        };

        let record = self
            .client
            .fetch(CATEGORY_TABLE, record_id, &CATEGORY_FIELDS)
            .await?;
        Ok(record.as_ref().and_then(category_from_record))
    }

    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let query = RecordQuery::select(CATEGORY_FIELDS);
        let records = self.client.query(CATEGORY_TABLE, &query).await?;

        let categories = records
            .iter()
            .filter_map(|record| {
                let category = category_from_record(record);
                if category.is_none() {
                    warn!("Skipping category record without a readable id");
                }
                category
            })
            .collect();

        Ok(categories)
    }

    #[instrument(skip(self, input), fields(category_id = %id))]
    async fn update(&self, id: &str, input: UpdateCategory) -> CategoryResult<Category> {
        let Some(record_id) = parse_record_id(id) else {
            return Err(CategoryError::NotFound(id.to_string()));
        };

        let existing = self
            .client
            .fetch(CATEGORY_TABLE, record_id, &CATEGORY_FIELDS)
            .await?
            .as_ref()
            .and_then(category_from_record)
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input.clone());

        self.client
            .update(CATEGORY_TABLE, vec![update_record(record_id, &input)])
            .await?;

        info!(category_id = %id, "Category updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn delete(&self, id: &str) -> CategoryResult<bool> {
        let Some(record_id) = parse_record_id(id) else {
            return Ok(false);
        };

        if self
            .client
            .fetch(CATEGORY_TABLE, record_id, &["Id"])
            .await?
            .is_none()
        {
            return Ok(false);
        }

        self.client.delete(CATEGORY_TABLE, vec![record_id]).await?;

        info!(category_id = %id, "Category deleted");
        Ok(true)
    }
}

// UI shape → storage columns

fn create_record(input: &CreateCategory) -> Value {
    json!({
        "Name": input.name,
        "color_c": normalize_color(input.color.clone()),
        "task_count_c": 0,
    })
}

/// Unset fields are omitted entirely so the store leaves their columns
/// untouched
fn update_record(record_id: i64, input: &UpdateCategory) -> Value {
    let mut record = serde_json::Map::new();
    record.insert("Id".to_string(), json!(record_id));

    if let Some(ref name) = input.name {
        record.insert("Name".to_string(), json!(name));
    }
    if let Some(ref color) = input.color {
        record.insert("color_c".to_string(), json!(color));
    }
    if let Some(task_count) = input.task_count {
        record.insert("task_count_c".to_string(), json!(task_count));
    }

    Value::Object(record)
}

// Storage columns → UI shape

/// Read a category out of a storage record, substituting defaults for null
/// or missing columns. `None` only when the record has no usable id.
fn category_from_record(record: &Value) -> Option<Category> {
    let id = record_id_string(record)?;

    Some(Category {
        id,
        name: str_field(record, "Name").unwrap_or_default(),
        color: str_field(record, "color_c")
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        task_count: record
            .get("task_count_c")
            .and_then(Value::as_i64)
            .unwrap_or(0),
    })
}

fn record_id_string(record: &Value) -> Option<String> {
    match record.get("Id") {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn parse_record_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

fn str_field(record: &Value, field: &str) -> Option<String> {
    record.get(field).and_then(Value::as_str).map(str::to_string)
}
