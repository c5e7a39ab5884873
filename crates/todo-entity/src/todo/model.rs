//! To-do task model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Unique, store-assigned identifier.
    pub id: i64,
    /// Owning user's id.
    pub user_id: i64,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Priority from 1 (lowest) to 5 (highest).
    pub priority: i32,
    /// Completion flag.
    pub completed: bool,
}

/// Writable fields of a task, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// Short title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Longer description.
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    /// Priority from 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub priority: i32,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl TodoInput {
    /// Builds the stored row for the given owner and id.
    pub fn into_todo(self, id: i64, user_id: i64) -> Todo {
        Todo {
            id,
            user_id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(priority: i32, title: &str) -> TodoInput {
        TodoInput {
            title: title.to_string(),
            description: "A clean up of your data in project A".to_string(),
            priority,
            completed: false,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input(5, "Clean up").validate().is_ok());
        assert!(input(1, "Clean up").validate().is_ok());
    }

    #[test]
    fn test_priority_bounds() {
        assert!(input(0, "Clean up").validate().is_err());
        assert!(input(6, "Clean up").validate().is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(input(3, "").validate().is_err());
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let parsed: TodoInput = serde_json::from_value(serde_json::json!({
            "title": "Clean up",
            "description": "desc",
            "priority": 2
        }))
        .unwrap();
        assert!(!parsed.completed);
    }
}
