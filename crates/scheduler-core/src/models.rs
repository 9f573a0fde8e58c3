use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use crate::date::parse_date;
use crate::error::{CoreError, RecurrenceError};
use crate::recurrence::{validate_rule, RecurrenceRule};

/// A scheduled task as stored in the `scheduler` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// Due date, always resolved once the task is stored.
    #[serde(with = "crate::date::yyyymmdd")]
    pub date: NaiveDate,
    /// Raw recurrence rule, empty for one-off tasks.
    pub repeat: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    #[inline]
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }

    /// The parsed recurrence rule of this task.
    pub fn rule(&self) -> Result<RecurrenceRule, RecurrenceError> {
        validate_rule(&self.repeat)
    }
}

// Ids and dates are kept as TEXT so that `ORDER BY date` sorts
// chronologically and short id prefixes can be matched with LIKE.
impl<'r> FromRow<'r, SqliteRow> for Task {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let date: String = row.try_get("date")?;
        let comment: Option<String> = row.try_get("comment")?;

        Ok(Self {
            id: Uuid::parse_str(&id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            title: row.try_get("title")?,
            date: parse_date(&date).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            repeat: row.try_get("repeat")?,
            comment: comment.unwrap_or_default(),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Raw input of a new task, before date resolution.
#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    /// `YYYYMMDD`; `None` or empty means today.
    pub date: Option<String>,
    pub repeat: String,
    pub comment: String,
}

impl NewTaskData {
    /// Checks the title, the date format and the rule, returning the parsed rule.
    pub fn validate(&self) -> Result<RecurrenceRule, CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::MissingTitle);
        }
        if let Some(date) = self.date.as_deref().filter(|d| !d.is_empty()) {
            parse_date(date)?;
        }
        Ok(validate_rule(&self.repeat)?)
    }
}

/// Partial update of a stored task. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub date: Option<String>,
    pub repeat: Option<String>,
    pub comment: Option<String>,
}

impl UpdateTaskData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.repeat.is_none() && self.comment.is_none()
    }

    /// Applies this update over `current`, yielding the input to re-validate.
    pub fn merge(self, current: &Task) -> NewTaskData {
        NewTaskData {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            date: Some(
                self.date
                    .unwrap_or_else(|| crate::date::format_date(current.date)),
            ),
            repeat: self.repeat.unwrap_or_else(|| current.repeat.clone()),
            comment: self.comment.unwrap_or_else(|| current.comment.clone()),
        }
    }
}

#[derive(Debug)]
pub enum CompletionResult {
    /// A one-off task was completed and removed.
    Deleted(Task),
    /// A recurring task was moved to its next occurrence.
    Rescheduled { task: Task, previous: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_task() -> Task {
        Task {
            id: Uuid::now_v7(),
            title: "Water plants".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            repeat: "d 3".to_string(),
            comment: "balcony".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_missing_title() {
        for title in ["", " ", "\t\n"] {
            let data = NewTaskData {
                title: title.to_string(),
                ..Default::default()
            };
            assert!(matches!(data.validate(), Err(CoreError::MissingTitle)));
        }
    }

    #[test]
    fn test_validate_bad_date() {
        let data = NewTaskData {
            title: "Pay rent".to_string(),
            date: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(data.validate(), Err(CoreError::Date(_))));
    }

    #[test]
    fn test_validate_bad_rule() {
        let data = NewTaskData {
            title: "Pay rent".to_string(),
            repeat: "m 0".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            data.validate(),
            Err(CoreError::Recurrence(RecurrenceError::InvalidRule(_)))
        ));
    }

    #[test]
    fn test_validate_ok() {
        let data = NewTaskData {
            title: "Pay rent".to_string(),
            date: Some(String::new()),
            repeat: "m 1".to_string(),
            comment: String::new(),
        };
        assert_eq!(data.validate().unwrap().to_string(), "m 1");
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let task = stored_task();
        let merged = UpdateTaskData {
            title: Some("Water all plants".to_string()),
            ..Default::default()
        }
        .merge(&task);

        assert_eq!(merged.title, "Water all plants");
        assert_eq!(merged.date.as_deref(), Some("20240315"));
        assert_eq!(merged.repeat, "d 3");
        assert_eq!(merged.comment, "balcony");
    }

    #[test]
    fn test_merge_can_clear_repeat() {
        let task = stored_task();
        let merged = UpdateTaskData {
            repeat: Some(String::new()),
            ..Default::default()
        }
        .merge(&task);
        assert!(merged.repeat.is_empty());
    }

    #[test]
    fn test_task_serializes_wire_date() {
        let task = stored_task();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["date"], "20240315");
        assert_eq!(json["repeat"], "d 3");
        assert!(task.is_recurring());
        assert_eq!(task.rule().unwrap(), RecurrenceRule::Daily { interval: 3 });
    }
}
