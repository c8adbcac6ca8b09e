use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Category name tasks fall back to when created without one
pub const DEFAULT_CATEGORY: &str = "general";

/// Task priority levels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    Low,
    /// Default priority
    #[default]
    Medium,
    High,
}

/// Task entity - a user-created to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the backend at creation; caller-opaque
    pub id: String,
    /// Task title
    pub title: String,
    /// Name of the category this task belongs to (weak reference; deleting
    /// the category neither cascades nor repoints)
    pub category: String,
    /// Task priority
    pub priority: TaskPriority,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp, set once and immutable thereafter
    pub created_at: DateTime<Utc>,
    /// Completion timestamp; present exactly when `completed` is true
    pub completed_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub category: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

/// DTO for partially updating a task
///
/// `None` leaves a field unchanged. Nullable fields use a double `Option`:
/// `Some(None)` clears the field, `Some(Some(value))` sets it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub category: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

/// Query filters for listing tasks
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Exact category name
    pub category: Option<String>,
    /// Completion state
    pub completed: Option<bool>,
    /// Case-insensitive substring match on the title
    pub search: Option<String>,
}

impl Task {
    /// Build a new task from a create DTO, applying the creation defaults
    pub fn new(input: CreateTask) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: input.title,
            category: normalize_category(input.category),
            priority: input.priority,
            due_date: input.due_date,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Apply updates from an UpdateTask DTO; only supplied fields change
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(completed_at) = update.completed_at {
            self.completed_at = completed_at;
        }
    }

    /// Whether this task passes every predicate of `filter`
    pub fn matches(&self, filter: &TaskFilter) -> bool {
        if let Some(ref category) = filter.category {
            if &self.category != category {
                return false;
            }
        }

        if let Some(completed) = filter.completed {
            if self.completed != completed {
                return false;
            }
        }

        if let Some(ref search) = filter.search {
            if !self
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

/// Sort a task snapshot for display: incomplete tasks before completed
/// ones, newest first within each group.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(b.created_at.cmp(&a.created_at))
    });
}

/// Resolve an optional category input to a stored category name
pub(crate) fn normalize_category(category: Option<String>) -> String {
    match category {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_CATEGORY.to_string(),
    }
}
