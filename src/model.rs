use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type TaskId = i64;

/// A single to-do item. Serialized form is one JSON object per task with
/// `date` in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: TaskId,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            date,
            completed: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "☐"
        }
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Clock-derived id, forced strictly increasing within this process so two
/// tasks created in the same millisecond never collide. Collisions across
/// processes are accepted as negligible.
pub fn next_id() -> TaskId {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now - 1);
    now.max(prev + 1)
}

/// Accepts the id as either a JSON number or a numeric string, always
/// yielding an integer. Older stores wrote ids as strings.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<TaskId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(n) => Ok(n),
        RawId::Text(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("task id is not an integer: {:?}", s))
        }),
    }
}

/// Which tasks the list shows. Transient per-process state, never persisted;
/// resets to All when every task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Pending,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::All,
        }
    }

    pub fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
        }
    }

    /// Label for the filter control, naming the mode a press switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::All => "FILTER (Pending)",
            Self::Pending => "SHOW ALL",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No task found",
            Self::Pending => "No pending task found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Buy milk", date("2025-01-01"));
        assert!(!task.completed);
        assert_eq!(task.status_label(), "Pending");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let a = next_id();
        let b = next_id();
        let c = next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_id_deserializes_from_number() {
        let task: Task = serde_json::from_str(
            r#"{"id": 42, "name": "Buy milk", "date": "2025-01-01", "completed": false}"#,
        )
        .unwrap();
        assert_eq!(task.id, 42);
    }

    #[test]
    fn test_id_deserializes_from_string() {
        let task: Task = serde_json::from_str(
            r#"{"id": "1735689600000", "name": "Buy milk", "date": "2025-01-01"}"#,
        )
        .unwrap();
        assert_eq!(task.id, 1735689600000);
        assert!(!task.completed);
    }

    #[test]
    fn test_id_rejects_non_numeric_string() {
        let result: std::result::Result<Task, _> = serde_json::from_str(
            r#"{"id": "abc", "name": "Buy milk", "date": "2025-01-01"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_date_round_trips_as_iso_string() {
        let task = Task {
            id: 1,
            name: "Buy milk".into(),
            date: date("2025-01-01"),
            completed: false,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"2025-01-01\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_filter_toggle_round_trip() {
        let mode = FilterMode::All;
        assert_eq!(mode.toggled(), FilterMode::Pending);
        assert_eq!(mode.toggled().toggled(), FilterMode::All);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(FilterMode::All.toggle_label(), "FILTER (Pending)");
        assert_eq!(FilterMode::Pending.toggle_label(), "SHOW ALL");
        assert_eq!(FilterMode::All.empty_message(), "No task found");
        assert_eq!(FilterMode::Pending.empty_message(), "No pending task found");
    }

    #[test]
    fn test_pending_filter_admits_only_incomplete() {
        let mut task = Task::new("Buy milk", date("2025-01-01"));
        assert!(FilterMode::Pending.admits(&task));
        task.completed = true;
        assert!(!FilterMode::Pending.admits(&task));
        assert!(FilterMode::All.admits(&task));
    }
}
