use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Neutral gray shown for categories without a configured color
pub const DEFAULT_COLOR: &str = "#6B7280";

/// Category entity - a named, colored grouping label referenced by tasks
///
/// Tasks reference a category by name only; the link is lookup-only, so
/// deleting a category neither cascades nor repoints referencing tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned by the backend at creation; caller-opaque
    pub id: String,
    /// Display name; relied upon by task lookups to be unique, but not
    /// enforced by validation
    pub name: String,
    /// Display color (CSS hex string)
    pub color: String,
    /// Informational counter only. Not kept consistent with actual task
    /// membership; recompute from a task snapshot when it matters.
    pub task_count: i64,
}

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub color: Option<String>,
}

/// DTO for partially updating a category; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub color: Option<String>,
    pub task_count: Option<i64>,
}

impl Category {
    /// Build a new category from a create DTO, applying the default color
    pub fn new(input: CreateCategory) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: input.name,
            color: normalize_color(input.color),
            task_count: 0,
        }
    }

    /// Apply updates from an UpdateCategory DTO
    pub fn apply_update(&mut self, update: UpdateCategory) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(task_count) = update.task_count {
            self.task_count = task_count;
        }
    }
}

/// Resolve an optional color input to a stored color value
pub(crate) fn normalize_color(color: Option<String>) -> String {
    match color {
        Some(color) if !color.trim().is_empty() => color,
        _ => DEFAULT_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_applies_default_color() {
        let category = Category::new(CreateCategory {
            name: "home".to_string(),
            color: None,
        });

        assert_eq!(category.color, DEFAULT_COLOR);
        assert_eq!(category.task_count, 0);
        assert!(!category.id.is_empty());
    }

    #[test]
    fn test_new_category_keeps_supplied_color() {
        let category = Category::new(CreateCategory {
            name: "work".to_string(),
            color: Some("#2563EB".to_string()),
        });

        assert_eq!(category.color, "#2563EB");
    }

    #[test]
    fn test_apply_update_merges_only_supplied_fields() {
        let mut category = Category::new(CreateCategory {
            name: "home".to_string(),
            color: Some("#10B981".to_string()),
        });

        category.apply_update(UpdateCategory {
            name: Some("household".to_string()),
            ..Default::default()
        });

        assert_eq!(category.name, "household");
        assert_eq!(category.color, "#10B981");
    }
}
