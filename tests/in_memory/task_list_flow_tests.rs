//! End-to-end command flows over an in-memory store.

use super::helpers::{add, notifier, open, store, visible_texts};
use rstest::rstest;
use tasklist::task::{
    adapters::{InMemoryKeyValueStore, RecordingNotifier},
    domain::{FilterMode, TaskId, TaskStats},
    ports::Severity,
    services::CommandOutcome,
};

#[rstest]
fn add_toggle_and_clear_completed(
    store: InMemoryKeyValueStore,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = open(&store, &notifier);
    let milk = add(&mut controller, "Buy milk")?;
    eyre::ensure!(
        controller.stats()
            == TaskStats {
                total: 1,
                completed: 0,
                active: 1
            },
        "unexpected stats after add"
    );

    controller.toggle(milk);
    eyre::ensure!(
        controller.stats()
            == TaskStats {
                total: 1,
                completed: 1,
                active: 0
            },
        "unexpected stats after toggle"
    );

    eyre::ensure!(
        controller.clear_completed() == CommandOutcome::Cleared(1),
        "clear should remove the completed task"
    );
    eyre::ensure!(
        controller.stats() == TaskStats::default(),
        "stats should be zero"
    );
    Ok(())
}

#[rstest]
fn filters_show_matching_tasks_in_order(
    store: InMemoryKeyValueStore,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = open(&store, &notifier);
    let first = add(&mut controller, "first")?;
    add(&mut controller, "second")?;
    let third = add(&mut controller, "third")?;
    controller.toggle(first);
    controller.toggle(third);

    controller.set_filter(FilterMode::Completed);
    assert_eq!(visible_texts(&controller), vec!["third", "first"]);

    controller.set_filter(FilterMode::Active);
    assert_eq!(visible_texts(&controller), vec!["second"]);

    controller.set_filter(FilterMode::All);
    assert_eq!(visible_texts(&controller), vec!["third", "second", "first"]);
    Ok(())
}

#[rstest]
fn stale_references_never_surface_errors(
    store: InMemoryKeyValueStore,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = open(&store, &notifier);
    let id = add(&mut controller, "ephemeral")?;
    controller.remove(id);
    let notified = notifier.notifications().len();

    assert_eq!(controller.toggle(id), CommandOutcome::NotFound(id));
    assert_eq!(controller.remove(id), CommandOutcome::NotFound(id));
    assert_eq!(controller.begin_edit(id), CommandOutcome::NotFound(id));
    assert_eq!(notifier.notifications().len(), notified);
    Ok(())
}

#[rstest]
fn notifications_follow_each_command(
    store: InMemoryKeyValueStore,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = open(&store, &notifier);
    controller.add_or_update("");
    controller.clear_completed();
    let id = add(&mut controller, "note")?;
    controller.toggle(id);
    controller.clear_completed();

    let severities: Vec<Severity> = notifier
        .notifications()
        .into_iter()
        .map(|notification| notification.severity)
        .collect();
    assert_eq!(
        severities,
        vec![
            Severity::Warning,
            Severity::Info,
            Severity::Success,
            Severity::Success,
        ]
    );
    Ok(())
}

#[rstest]
fn many_rapid_adds_keep_unique_ids(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    use crate::test_helpers::SteppingClock;
    use std::sync::Arc;
    use tasklist::task::services::{TaskListController, TaskPersistence};

    let mut controller = TaskListController::new(
        TaskPersistence::new(store),
        Arc::new(SteppingClock::frozen()),
    );
    let mut ids: Vec<TaskId> = Vec::new();
    for n in 0..20 {
        match controller.add_or_update(&format!("task {n}")) {
            CommandOutcome::Added(id) => ids.push(id),
            other => eyre::bail!("unexpected outcome {other:?}"),
        }
    }
    ids.sort();
    ids.dedup();
    eyre::ensure!(ids.len() == 20, "ids collided: {}", ids.len());
    Ok(())
}
