//! Shared fixtures for in-memory controller tests.

use crate::test_helpers::SteppingClock;
use rstest::fixture;
use std::sync::Arc;
use tasklist::task::{
    adapters::{AlwaysConfirm, InMemoryKeyValueStore, RecordingNotifier},
    domain::TaskId,
    services::{CommandOutcome, TaskListController, TaskPersistence},
};

/// Controller type used across in-memory tests.
pub type TestController = TaskListController<InMemoryKeyValueStore, SteppingClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Provides a recording notifier for each test.
#[fixture]
pub fn notifier() -> RecordingNotifier {
    RecordingNotifier::new()
}

/// Opens a controller over `store` that confirms every prompt.
#[must_use]
pub fn open(store: &InMemoryKeyValueStore, notifier: &RecordingNotifier) -> TestController {
    TaskListController::new(
        TaskPersistence::new(store.clone()),
        Arc::new(SteppingClock::new()),
    )
    .with_notifier(notifier.clone())
    .with_confirmation(AlwaysConfirm)
}

/// Adds a task and returns its identifier.
///
/// # Errors
///
/// Returns an error when the controller does not report an added task.
pub fn add(controller: &mut TestController, text: &str) -> Result<TaskId, eyre::Report> {
    match controller.add_or_update(text) {
        CommandOutcome::Added(id) => Ok(id),
        other => Err(eyre::eyre!("expected {text:?} to be added, got {other:?}")),
    }
}

/// Returns the visible task texts in display order.
#[must_use]
pub fn visible_texts(controller: &TestController) -> Vec<String> {
    controller
        .visible_tasks()
        .iter()
        .map(|task| task.text().as_str().to_owned())
        .collect()
}
