//! Pure view projection over a task collection.
//!
//! Nothing here is cached: statistics and visible subsets are derived from
//! the tasks every time they are requested, so they cannot drift from the
//! collection contents.

use super::{FilterMode, Task, TaskId};

/// Returns the tasks admitted by `filter`, preserving collection order.
#[must_use]
pub fn project(tasks: &[Task], filter: FilterMode) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| filter.admits(task.is_completed()))
        .collect()
}

/// Count statistics for a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks still to do.
    pub active: usize,
}

impl TaskStats {
    /// Computes statistics from the given tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total,
            completed,
            active: total.saturating_sub(completed),
        }
    }

    /// Returns the footer label for the number of active tasks.
    ///
    /// ```
    /// use tasklist::task::domain::TaskStats;
    ///
    /// let stats = TaskStats { total: 3, completed: 2, active: 1 };
    /// assert_eq!(stats.items_left_label(), "1 item left");
    /// ```
    #[must_use]
    pub fn items_left_label(&self) -> String {
        let noun = if self.active == 1 { "item" } else { "items" };
        format!("{} {noun} left", self.active)
    }
}

/// Read-only snapshot handed to render observers after each command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView<'a> {
    /// Tasks visible under the current filter, newest first.
    pub visible: Vec<&'a Task>,
    /// Statistics over the whole collection, independent of the filter.
    pub stats: TaskStats,
    /// Active filter.
    pub filter: FilterMode,
    /// Task currently being edited, if any.
    pub editing: Option<TaskId>,
}

impl<'a> TaskListView<'a> {
    /// Builds a view of `tasks` under `filter`.
    #[must_use]
    pub fn new(tasks: &'a [Task], filter: FilterMode, editing: Option<TaskId>) -> Self {
        Self {
            visible: project(tasks, filter),
            stats: TaskStats::from_tasks(tasks),
            filter,
            editing,
        }
    }

    /// Returns `true` when no task is visible under the current filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
