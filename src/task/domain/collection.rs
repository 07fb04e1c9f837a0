//! Ordered task collection and its mutation operations.

use super::{Task, TaskDomainError, TaskId, TaskStats, TaskText};
use mockable::Clock;
use std::collections::HashSet;

/// Ordered collection of tasks, newest first.
///
/// Every identifier in the collection is unique and every task carries
/// non-empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Rebuilds a collection from tasks in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateId`] when two tasks share an
    /// identifier.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskDomainError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateId(task.id()));
            }
        }
        Ok(Self { tasks })
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tasks in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Computes statistics over the current contents.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Creates a task from `text` and places it at the front.
    ///
    /// The identifier is the current clock time in milliseconds. When that
    /// value is already taken the identifier after the current maximum is
    /// used instead, or, if the maximum is `i64::MAX`, the closest free
    /// identifier below the clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when `text` is blank.
    pub fn add(&mut self, text: &str, clock: &impl Clock) -> Result<TaskId, TaskDomainError> {
        let validated = TaskText::new(text)?;
        let id = self.next_id(clock);
        self.tasks.insert(0, Task::new(id, validated, clock));
        Ok(id)
    }

    /// Replaces the text of the task identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when `text` is blank, or
    /// [`TaskDomainError::NotFound`] when no task matches.
    pub fn update_text(
        &mut self,
        id: TaskId,
        text: &str,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let validated = TaskText::new(text)?;
        let task = self.get_mut(id)?;
        task.rename(validated, clock);
        Ok(())
    }

    /// Flips completion of the task identified by `id` and returns the new
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when no task matches.
    pub fn toggle(&mut self, id: TaskId, clock: &impl Clock) -> Result<bool, TaskDomainError> {
        Ok(self.get_mut(id)?.toggle(clock))
    }

    /// Removes and returns the task identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when no task matches.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskDomainError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskDomainError::NotFound(id))?;
        Ok(self.tasks.remove(position))
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        before.saturating_sub(self.tasks.len())
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskDomainError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskDomainError::NotFound(id))
    }

    fn next_id(&self, clock: &impl Clock) -> TaskId {
        let candidate = TaskId::new(clock.utc().timestamp_millis());
        if !self.contains(candidate) {
            return candidate;
        }
        let above_max = self
            .tasks
            .iter()
            .map(Task::id)
            .max()
            .and_then(TaskId::successor);
        if let Some(id) = above_max {
            return id;
        }
        std::iter::successors(candidate.predecessor(), |id| id.predecessor())
            .find(|id| !self.contains(*id))
            .unwrap_or(candidate)
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
