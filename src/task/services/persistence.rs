//! Persistence adapter storing the task collection as JSON under one key.

use crate::task::{
    adapters::TaskRecord,
    domain::{Task, TaskCollection, TaskDomainError},
    ports::{KeyValueStore, StorageError},
};
use std::collections::HashSet;
use thiserror::Error;

/// Default storage key for the task collection.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Errors raised while loading or saving the task collection.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The key-value store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored value is not a well-formed task array.
    #[error("stored tasks are malformed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The collection could not be serialized.
    #[error("failed to serialize tasks: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored tasks violate a collection invariant.
    #[error("stored tasks are inconsistent: {0}")]
    Domain(#[from] TaskDomainError),
}

/// Reads and writes the whole task collection under a fixed key.
#[derive(Debug, Clone)]
pub struct TaskPersistence<S>
where
    S: KeyValueStore,
{
    store: S,
    key: String,
}

impl<S> TaskPersistence<S>
where
    S: KeyValueStore,
{
    /// Creates a persistence adapter writing under [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Creates a persistence adapter writing under `key`.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored collection, degrading to an empty one.
    ///
    /// A missing key is the normal first-run case. Unreadable storage or
    /// malformed contents are logged and treated as "no data".
    #[must_use]
    pub fn load(&self) -> TaskCollection {
        match self.try_load() {
            Ok(tasks) => {
                tracing::debug!(key = %self.key, count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding stored tasks");
                TaskCollection::new()
            }
        }
    }

    /// Loads the stored collection, reporting why it could not be read.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when storage fails or the value does not
    /// decode as a task array. A task repeating an earlier task's identifier
    /// is dropped with a warning; the first one is kept.
    pub fn try_load(&self) -> Result<TaskCollection, PersistenceError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(TaskCollection::new());
        };
        let records: Vec<TaskRecord> =
            serde_json::from_str(&raw).map_err(PersistenceError::Decode)?;
        let mut seen = HashSet::with_capacity(records.len());
        let tasks = records
            .into_iter()
            .map(Task::from)
            .filter(|task| {
                let first = seen.insert(task.id());
                if !first {
                    tracing::warn!(
                        key = %self.key,
                        task_id = %task.id(),
                        "dropping task with duplicate id"
                    );
                }
                first
            })
            .collect();
        Ok(TaskCollection::from_tasks(tasks)?)
    }

    /// Serializes the whole collection and overwrites the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when serialization or the write fails.
    pub fn save(&self, tasks: &TaskCollection) -> Result<(), PersistenceError> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let encoded = serde_json::to_string(&records).map_err(PersistenceError::Encode)?;
        self.store.set(&self.key, &encoded)?;
        Ok(())
    }
}
