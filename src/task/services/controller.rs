//! Controller owning the task list state and running user commands.

use crate::task::{
    adapters::{NeverConfirm, NullNotifier},
    domain::{FilterMode, Task, TaskCollection, TaskDomainError, TaskId, TaskListView, TaskStats},
    ports::{ConfirmationGate, KeyValueStore, Notification, Notifier, RenderObserver},
    services::{CommandOutcome, TaskPersistence},
};
use mockable::Clock;
use std::sync::Arc;

/// Warning shown when the entered text is blank.
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter a task!";
/// Shown after a task is created.
pub const ADDED_MESSAGE: &str = "Task added!";
/// Shown after an edit is committed.
pub const UPDATED_MESSAGE: &str = "Task updated!";
/// Shown after a task is deleted.
pub const DELETED_MESSAGE: &str = "Task deleted!";
/// Shown when there is nothing to clear.
pub const NOTHING_TO_CLEAR_MESSAGE: &str = "No completed tasks to clear!";
/// Shown after completed tasks are cleared.
pub const CLEARED_MESSAGE: &str = "Completed tasks cleared!";
/// Confirmation prompt for deleting a single task.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Builds the confirmation prompt for clearing `count` completed tasks.
#[must_use]
pub fn clear_prompt(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("Clear {count} completed task{suffix}?")
}

/// Single owner of the task collection, the filter and the edit slot.
///
/// Each command runs to completion: it mutates the collection, saves it,
/// reports feedback through the [`Notifier`] and hands a fresh
/// [`TaskListView`] to every [`RenderObserver`].
pub struct TaskListController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    persistence: TaskPersistence<S>,
    clock: Arc<C>,
    notifier: Box<dyn Notifier>,
    confirmation: Box<dyn ConfirmationGate>,
    observers: Vec<Box<dyn RenderObserver>>,
    tasks: TaskCollection,
    filter: FilterMode,
    editing: Option<TaskId>,
}

impl<S, C> TaskListController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates a controller and loads the stored collection.
    ///
    /// Notifications are discarded and destructive commands are declined
    /// until [`Self::with_notifier`] and [`Self::with_confirmation`] supply
    /// real collaborators.
    #[must_use]
    pub fn new(persistence: TaskPersistence<S>, clock: Arc<C>) -> Self {
        let tasks = persistence.load();
        tracing::info!(key = %persistence.key(), count = tasks.len(), "task list opened");
        Self {
            persistence,
            clock,
            notifier: Box::new(NullNotifier),
            confirmation: Box::new(NeverConfirm),
            observers: Vec::new(),
            tasks,
            filter: FilterMode::default(),
            editing: None,
        }
    }

    /// Sets the notification sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Sets the confirmation gate for destructive commands.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: impl ConfirmationGate + 'static) -> Self {
        self.confirmation = Box::new(confirmation);
        self
    }

    /// Adds a render observer.
    #[must_use]
    pub fn with_observer(mut self, observer: impl RenderObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Returns every task, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    /// Returns the tasks visible under the current filter.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        crate::task::domain::project(self.tasks.as_slice(), self.filter)
    }

    /// Returns statistics over the whole collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        self.tasks.stats()
    }

    /// Returns the current filter.
    #[must_use]
    pub const fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Returns the task currently being edited, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<TaskId> {
        self.editing
    }

    /// Returns a snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> TaskListView<'_> {
        TaskListView::new(self.tasks.as_slice(), self.filter, self.editing)
    }

    /// Returns the persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    /// Commits the entered text.
    ///
    /// Updates the task being edited when an edit is in progress, otherwise
    /// adds a new task. Blank text is rejected with a warning and leaves any
    /// pending edit in place.
    pub fn add_or_update(&mut self, text: &str) -> CommandOutcome {
        match self.editing {
            Some(id) => self.commit_edit(id, text),
            None => self.add(text),
        }
    }

    /// Flips completion of the task identified by `id`.
    pub fn toggle(&mut self, id: TaskId) -> CommandOutcome {
        match self.tasks.toggle(id, &*self.clock) {
            Ok(completed) => {
                tracing::info!(task_id = %id, completed, "toggled task");
                self.persist();
                self.render();
                CommandOutcome::Toggled { id, completed }
            }
            Err(err) => Self::ignore_stale(id, &err),
        }
    }

    /// Deletes the task identified by `id` once the user confirms.
    pub fn remove(&mut self, id: TaskId) -> CommandOutcome {
        if !self.tasks.contains(id) {
            return Self::ignore_stale(id, &TaskDomainError::NotFound(id));
        }
        if !self.confirmation.confirm(DELETE_PROMPT) {
            tracing::debug!(task_id = %id, "delete declined");
            return CommandOutcome::Declined;
        }
        if let Err(err) = self.tasks.remove(id) {
            return Self::ignore_stale(id, &err);
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        tracing::info!(task_id = %id, "deleted task");
        self.notifier.notify(&Notification::info(DELETED_MESSAGE));
        self.persist();
        self.render();
        CommandOutcome::Removed(id)
    }

    /// Deletes every completed task once the user confirms.
    pub fn clear_completed(&mut self) -> CommandOutcome {
        let count = self.tasks.completed_count();
        if count == 0 {
            self.notifier
                .notify(&Notification::info(NOTHING_TO_CLEAR_MESSAGE));
            return CommandOutcome::NothingToClear;
        }
        if !self.confirmation.confirm(&clear_prompt(count)) {
            tracing::debug!(count, "clear completed declined");
            return CommandOutcome::Declined;
        }
        let removed = self.tasks.clear_completed();
        if self.editing.is_some_and(|id| !self.tasks.contains(id)) {
            self.editing = None;
        }
        tracing::info!(removed, "cleared completed tasks");
        self.notifier.notify(&Notification::success(CLEARED_MESSAGE));
        self.persist();
        self.render();
        CommandOutcome::Cleared(removed)
    }

    /// Changes which tasks are visible. The filter is never persisted.
    pub fn set_filter(&mut self, filter: FilterMode) -> CommandOutcome {
        self.filter = filter;
        self.render();
        CommandOutcome::FilterChanged(filter)
    }

    /// Selects the task identified by `id` for editing.
    ///
    /// Replaces any edit already in progress. An unknown `id` leaves the edit
    /// slot untouched.
    pub fn begin_edit(&mut self, id: TaskId) -> CommandOutcome {
        let Some(task) = self.tasks.get(id) else {
            return Self::ignore_stale(id, &TaskDomainError::NotFound(id));
        };
        let text = task.text().as_str().to_owned();
        self.editing = Some(id);
        self.render();
        CommandOutcome::EditStarted { id, text }
    }

    /// Abandons the edit in progress, if any.
    pub fn cancel_edit(&mut self) -> CommandOutcome {
        self.editing = None;
        self.render();
        CommandOutcome::EditCancelled
    }

    fn add(&mut self, text: &str) -> CommandOutcome {
        match self.tasks.add(text, &*self.clock) {
            Ok(id) => {
                tracing::info!(task_id = %id, "added task");
                self.notifier.notify(&Notification::success(ADDED_MESSAGE));
                self.persist();
                self.render();
                CommandOutcome::Added(id)
            }
            Err(err) => self.reject(err),
        }
    }

    fn commit_edit(&mut self, id: TaskId, text: &str) -> CommandOutcome {
        match self.tasks.update_text(id, text, &*self.clock) {
            Ok(()) => {
                self.editing = None;
                tracing::info!(task_id = %id, "updated task");
                self.notifier.notify(&Notification::success(UPDATED_MESSAGE));
                self.persist();
                self.render();
                CommandOutcome::Updated(id)
            }
            Err(TaskDomainError::NotFound(missing)) => {
                self.editing = None;
                self.render();
                Self::ignore_stale(missing, &TaskDomainError::NotFound(missing))
            }
            Err(err) => self.reject(err),
        }
    }

    fn reject(&self, err: TaskDomainError) -> CommandOutcome {
        tracing::debug!(error = %err, "rejected task input");
        self.notifier.notify(&Notification::warning(EMPTY_TEXT_MESSAGE));
        CommandOutcome::Rejected(err)
    }

    fn ignore_stale(id: TaskId, err: &TaskDomainError) -> CommandOutcome {
        tracing::debug!(task_id = %id, error = %err, "ignoring stale task reference");
        CommandOutcome::NotFound(id)
    }

    /// Saves the collection. A failed save keeps the in-memory state and
    /// warns the user.
    fn persist(&self) {
        if let Err(err) = self.persistence.save(&self.tasks) {
            tracing::warn!(key = %self.persistence.key(), error = %err, "failed to save tasks");
            self.notifier
                .notify(&Notification::warning(format!("Could not save tasks: {err}")));
        }
    }

    fn render(&self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &self.observers {
            observer.render(&view);
        }
    }
}
