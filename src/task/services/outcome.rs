//! Results reported by controller commands.

use crate::task::domain::{FilterMode, TaskDomainError, TaskId};

/// What a controller command did.
///
/// Commands never fail outright: rejected input and stale identifiers are
/// reported here, and storage failures are surfaced as notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A task was created.
    Added(TaskId),
    /// The task being edited received new text.
    Updated(TaskId),
    /// A task's completion flag changed.
    Toggled {
        /// Toggled task.
        id: TaskId,
        /// New completion flag.
        completed: bool,
    },
    /// A task was deleted.
    Removed(TaskId),
    /// Completed tasks were deleted.
    Cleared(usize),
    /// The input was invalid; nothing changed.
    Rejected(TaskDomainError),
    /// The referenced task does not exist; nothing changed.
    NotFound(TaskId),
    /// There were no completed tasks to clear.
    NothingToClear,
    /// The user declined the confirmation prompt; nothing changed.
    Declined,
    /// The visible filter changed.
    FilterChanged(FilterMode),
    /// A task was selected for editing.
    EditStarted {
        /// Task being edited.
        id: TaskId,
        /// Current text, for pre-filling the input.
        text: String,
    },
    /// The pending edit was abandoned.
    EditCancelled,
}

impl CommandOutcome {
    /// Returns `true` when the command changed the task collection.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Added(_)
                | Self::Updated(_)
                | Self::Toggled { .. }
                | Self::Removed(_)
                | Self::Cleared(_)
        )
    }
}
