//! In-memory query layer consumed by the UI
//!
//! Pure and synchronous: given the current task snapshot, a search string,
//! and the active category filter, compute the visible subset. Recomputed on
//! every relevant state change; nothing here caches or indexes.

use std::collections::HashMap;

use crate::models::Task;

/// The active category filter of the task list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every category
    #[default]
    All,
    /// Show only tasks in the named category
    Named(String),
}

impl CategoryFilter {
    /// Parse the UI's filter value; `"all"` (case-insensitive) means no
    /// category restriction
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(raw.to_string())
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => &task.category == name,
        }
    }
}

/// The visible subset of `tasks`: title contains `search`
/// case-insensitively AND the category filter matches
pub fn visible_tasks(tasks: &[Task], search: &str, category: &CategoryFilter) -> Vec<Task> {
    let needle = search.to_lowercase();

    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle) && category.matches(task))
        .cloned()
        .collect()
}

/// Recompute per-category task counts from a snapshot.
///
/// This is the authoritative counterpart of the category entity's stored
/// `task_count`, which is display-only and never trusted across writes.
pub fn category_task_counts(tasks: &[Task]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for task in tasks {
        *counts.entry(task.category.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateTask, TaskPriority};

    fn task(title: &str, category: &str) -> Task {
        let mut task = Task::new(CreateTask {
            title: title.to_string(),
            category: Some(category.to_string()),
            priority: TaskPriority::default(),
            due_date: None,
        });
        task.id = title.to_lowercase().replace(' ', "-");
        task
    }

    fn sample() -> Vec<Task> {
        vec![task("Buy milk", "home"), task("Write report", "work")]
    }

    #[test]
    fn test_search_narrows_by_title() {
        let visible = visible_tasks(&sample(), "milk", &CategoryFilter::All);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Buy milk");
    }

    #[test]
    fn test_category_filter_narrows_by_category() {
        let filter = CategoryFilter::parse("work");
        let visible = visible_tasks(&sample(), "", &filter);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Write report");
    }

    #[test]
    fn test_empty_search_and_all_filter_keeps_everything() {
        let visible = visible_tasks(&sample(), "", &CategoryFilter::All);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_search_and_filter_combine_with_and() {
        let filter = CategoryFilter::parse("home");
        let visible = visible_tasks(&sample(), "report", &filter);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let visible = visible_tasks(&sample(), "MILK", &CategoryFilter::All);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_parse_all_is_case_insensitive() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("work"),
            CategoryFilter::Named("work".to_string())
        );
    }

    #[test]
    fn test_category_task_counts_recomputes_from_snapshot() {
        let tasks = vec![
            task("Buy milk", "home"),
            task("Water plants", "home"),
            task("Write report", "work"),
        ];

        let counts = category_task_counts(&tasks);
        assert_eq!(counts.get("home"), Some(&2));
        assert_eq!(counts.get("work"), Some(&1));
        assert_eq!(counts.get("personal"), None);
    }
}
