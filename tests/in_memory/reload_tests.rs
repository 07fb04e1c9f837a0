//! State surviving a new controller over the same store.

use super::helpers::{add, notifier, open, store, visible_texts};
use crate::test_helpers::START_MILLIS;
use rstest::rstest;
use tasklist::task::{
    adapters::{InMemoryKeyValueStore, RecordingNotifier},
    domain::FilterMode,
    ports::KeyValueStore,
    services::DEFAULT_STORAGE_KEY,
};

#[rstest]
fn reopened_controller_sees_every_mutation(
    store: InMemoryKeyValueStore,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut first = open(&store, &notifier);
    let a = add(&mut first, "a")?;
    add(&mut first, "b")?;
    let c = add(&mut first, "c")?;
    first.toggle(a);
    first.remove(c);
    first.set_filter(FilterMode::Completed);

    let second = open(&store, &notifier);

    assert_eq!(second.tasks(), first.tasks());
    assert_eq!(second.filter(), FilterMode::All);
    assert_eq!(visible_texts(&second), vec!["b", "a"]);
    Ok(())
}

#[rstest]
fn corrupted_storage_starts_empty_and_is_overwritten(
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let store = InMemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, "[{\"id\":");
    let mut controller = open(&store, &notifier);
    eyre::ensure!(controller.tasks().is_empty(), "corrupt data should load empty");

    add(&mut controller, "fresh start")?;

    let raw = store
        .get(DEFAULT_STORAGE_KEY)?
        .ok_or_else(|| eyre::eyre!("nothing stored"))?;
    eyre::ensure!(raw.contains("fresh start"), "store was not overwritten: {raw}");
    Ok(())
}

#[rstest]
fn add_beside_maximum_identifier_survives_reload(
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let record = |id: i64, text: &str| {
        format!(
            r#"{{"id":{id},"text":"{text}","completed":false,"createdAt":"2026-03-14T15:09:26Z","updatedAt":"2026-03-14T15:09:26Z"}}"#
        )
    };
    let raw = format!(
        "[{},{}]",
        record(START_MILLIS, "a"),
        record(i64::MAX, "b")
    );
    let store = InMemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, raw);
    let mut controller = open(&store, &notifier);

    add(&mut controller, "c")?;
    let reopened = open(&store, &notifier);

    eyre::ensure!(
        reopened.tasks().len() == 3,
        "expected three tasks after reload, found {}",
        reopened.tasks().len()
    );
    assert_eq!(visible_texts(&reopened), vec!["c", "a", "b"]);
    Ok(())
}
