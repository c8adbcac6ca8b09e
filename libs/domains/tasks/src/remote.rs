//! Remote implementation of TaskRepository
//!
//! Proxies each operation to the hosted record store's `task` table. The
//! translation between UI field names and storage columns is confined to
//! the pure `create_record` / `update_record` / `task_from_record`
//! functions below; nothing above this module sees a storage column name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use storage::remote::{RecordQuery, RecordStoreClient};
use storage::StorageError;

use crate::error::{TaskError, TaskResult};
use crate::models::{normalize_category, CreateTask, Task, TaskFilter, UpdateTask, DEFAULT_CATEGORY};
use crate::repository::TaskRepository;

/// Record-store table holding tasks
pub const TASK_TABLE: &str = "task";

/// Columns requested on every read. `Id` and `CreatedOn` are system columns
/// the store assigns; the client never writes them.
const TASK_FIELDS: [&str; 8] = [
    "Id",
    "Name",
    "CreatedOn",
    "category_c",
    "priority_c",
    "due_date_c",
    "is_completed_c",
    "completed_at_c",
];

/// Remote implementation of the TaskRepository
pub struct RemoteTaskRepository {
    client: RecordStoreClient,
}

impl RemoteTaskRepository {
    pub fn new(client: RecordStoreClient) -> Self {
        Self { client }
    }

    fn build_query(filter: &TaskFilter) -> RecordQuery {
        let mut query = RecordQuery::select(TASK_FIELDS).order_desc("CreatedOn");

        if let Some(ref category) = filter.category {
            query = query.filter_eq("category_c", category.clone());
        }

        if let Some(completed) = filter.completed {
            query = query.filter_eq("is_completed_c", completed.to_string());
        }

        if let Some(ref search) = filter.search {
            query = query.filter_contains("Name", search.clone());
        }

        query
    }
}

#[async_trait]
impl TaskRepository for RemoteTaskRepository {
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let records = self
            .client
            .create(TASK_TABLE, vec![create_record(&input)])
            .await?;

        let task = records.first().and_then(task_from_record).ok_or_else(|| {
            TaskError::Backend(StorageError::Unavailable(
                "create response contained no readable record".to_string(),
            ))
        })?;

        info!(task_id = %task.id, "Task created");
        Ok(task)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn get_by_id(&self, id: &str) -> TaskResult<Option<Task>> {
        // An id that is not an integer record id cannot exist in this backend
        let Some(record_id) = parse_record_id(id) else {
            return Ok(None);
        };

        let record = self.client.fetch(TASK_TABLE, record_id, &TASK_FIELDS).await?;
        Ok(record.as_ref().and_then(task_from_record))
    }

    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let query = Self::build_query(&filter);
        let records = self.client.query(TASK_TABLE, &query).await?;

        let tasks = records
            .iter()
            .filter_map(|record| {
                let task = task_from_record(record);
                if task.is_none() {
                    warn!("Skipping task record without a readable id");
                }
                task
            })
            .collect();

        Ok(tasks)
    }

    #[instrument(skip(self, input), fields(task_id = %id))]
    async fn update(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        let Some(record_id) = parse_record_id(id) else {
            return Err(TaskError::NotFound(id.to_string()));
        };

        let existing = self
            .client
            .fetch(TASK_TABLE, record_id, &TASK_FIELDS)
            .await?
            .as_ref()
            .and_then(task_from_record)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input.clone());

        self.client
            .update(TASK_TABLE, vec![update_record(record_id, &input)])
            .await?;

        info!(task_id = %id, "Task updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn delete(&self, id: &str) -> TaskResult<bool> {
        let Some(record_id) = parse_record_id(id) else {
            return Ok(false);
        };

        if self
            .client
            .fetch(TASK_TABLE, record_id, &["Id"])
            .await?
            .is_none()
        {
            return Ok(false);
        }

        self.client.delete(TASK_TABLE, vec![record_id]).await?;

        info!(task_id = %id, "Task deleted");
        Ok(true)
    }
}

// UI shape → storage columns

/// Build the storage record for a create call. The store assigns `Id` and
/// `CreatedOn`; a fresh task is never completed.
fn create_record(input: &CreateTask) -> Value {
    json!({
        "Name": input.title,
        "category_c": normalize_category(input.category.clone()),
        "priority_c": input.priority.to_string(),
        "due_date_c": input.due_date.map(|d| d.to_string()),
        "is_completed_c": false,
        "completed_at_c": Value::Null,
    })
}

/// Build the storage record for a patch call. Unset fields are omitted
/// entirely so the store leaves their columns untouched.
fn update_record(record_id: i64, input: &UpdateTask) -> Value {
    let mut record = serde_json::Map::new();
    record.insert("Id".to_string(), json!(record_id));

    if let Some(ref title) = input.title {
        record.insert("Name".to_string(), json!(title));
    }
    if let Some(ref category) = input.category {
        record.insert("category_c".to_string(), json!(category));
    }
    if let Some(priority) = input.priority {
        record.insert("priority_c".to_string(), json!(priority.to_string()));
    }
    if let Some(due_date) = input.due_date {
        record.insert(
            "due_date_c".to_string(),
            json!(due_date.map(|d| d.to_string())),
        );
    }
    if let Some(completed) = input.completed {
        record.insert("is_completed_c".to_string(), json!(completed));
    }
    if let Some(completed_at) = input.completed_at {
        record.insert(
            "completed_at_c".to_string(),
            json!(completed_at.map(|t| t.to_rfc3339())),
        );
    }

    Value::Object(record)
}

// Storage columns → UI shape

/// Read a task out of a storage record, substituting the UI defaults for
/// any null or missing column. `None` only when the record has no usable id.
fn task_from_record(record: &Value) -> Option<Task> {
    let id = record_id_string(record)?;

    Some(Task {
        id,
        title: str_field(record, "Name").unwrap_or_default(),
        category: str_field(record, "category_c")
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        priority: str_field(record, "priority_c")
            .and_then(|p| p.parse().ok())
            .unwrap_or_default(),
        due_date: str_field(record, "due_date_c").and_then(|d| d.parse().ok()),
        completed: bool_field(record, "is_completed_c"),
        created_at: datetime_field(record, "CreatedOn").unwrap_or_else(Utc::now),
        completed_at: datetime_field(record, "completed_at_c"),
    })
}

/// Integer record ids are rendered as opaque strings on the UI side
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

/// Boolean columns arrive as JSON booleans, 0/1, or "true"/"false"
/// depending on the column type the store inferred
fn bool_field(record: &Value, field: &str) -> bool {
    match record.get(field) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true") || s == "1",
        _ => false,
    }
}

fn datetime_field(record: &Value, field: &str) -> Option<DateTime<Utc>> {
    str_field(record, field).and_then(|raw| {
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    })
}
