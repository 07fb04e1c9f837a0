//! Serialized record model for stored tasks.

use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One element of the stored task array.
///
/// Field names follow the storage format (`createdAt`, `updatedAt`);
/// timestamps are ISO-8601 strings. Text is validated while decoding, so a
/// stored task with blank text fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier.
    pub id: TaskId,
    /// Task text.
    pub text: TaskText,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            text: task.text().clone(),
            completed: task.is_completed(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: record.id,
            text: record.text,
            completed: record.completed,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
