use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Input payload for creating or updating a task.
///
/// The same shape serves both operations: updates replace the full set of
/// mutable fields, so the caller always supplies every field. There is no
/// sparse-patch variant.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Must be between 1 and 255 characters.
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// A description of the task. Maximum length of 255 characters.
    #[validate(length(max = 255))]
    pub description: String,

    /// Free-form state label (e.g. "todo", "in progress", "done").
    #[validate(length(min = 1, max = 64))]
    pub status: String,

    /// When work on the task starts.
    pub start_date: NaiveDate,

    /// When work on the task is due to end.
    pub end_date: NaiveDate,

    /// The owning user's id. Must reference an existing user.
    pub owner_id: i32,
}

/// A task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub owner_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, description: &str, status: &str) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            owner_id: 1,
        }
    }

    #[test]
    fn test_task_input_validation() {
        assert!(input("Write report", "Quarterly report", "todo")
            .validate()
            .is_ok());

        // Empty title
        assert!(input("", "Quarterly report", "todo").validate().is_err());

        // Title too long
        assert!(input(&"a".repeat(256), "desc", "todo").validate().is_err());

        // Description too long
        assert!(input("Write report", &"b".repeat(256), "todo")
            .validate()
            .is_err());

        // Empty status label
        assert!(input("Write report", "desc", "").validate().is_err());
    }
}
