//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use tasklist::task::ports::Severity;

#[then(r#"the visible tasks are "{expected}""#)]
fn visible_tasks_are(world: &TaskListWorld, expected: String) -> Result<(), eyre::Report> {
    let visible: Vec<&str> = world
        .controller
        .visible_tasks()
        .into_iter()
        .map(|task| task.text().as_str())
        .collect();
    let wanted: Vec<&str> = expected.split(", ").collect();
    if visible != wanted {
        return Err(eyre::eyre!("expected {wanted:?}, found {visible:?}"));
    }
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let stats = world.controller.stats();
    if stats.total != 0 {
        return Err(eyre::eyre!("expected no tasks, found {}", stats.total));
    }
    Ok(())
}

#[then(r#"the footer reads "{label}""#)]
fn footer_reads(world: &TaskListWorld, label: String) -> Result<(), eyre::Report> {
    let actual = world.controller.stats().items_left_label();
    if actual != label {
        return Err(eyre::eyre!("expected {label:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no task is being edited")]
fn no_task_is_being_edited(world: &TaskListWorld) -> Result<(), eyre::Report> {
    if let Some(id) = world.controller.editing_id() {
        return Err(eyre::eyre!("task {id} is still being edited"));
    }
    Ok(())
}

#[then(r#"the last notification is {kind} saying "{message}""#)]
fn last_notification_is(
    world: &TaskListWorld,
    kind: String,
    message: String,
) -> Result<(), eyre::Report> {
    let severity = match kind.as_str() {
        "an info" => Severity::Info,
        "a success" => Severity::Success,
        "a warning" => Severity::Warning,
        other => return Err(eyre::eyre!("unknown notification kind {other:?}")),
    };
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was sent"))?;
    if last.severity != severity || last.message != message {
        return Err(eyre::eyre!(
            "expected {severity} {message:?}, found {} {:?}",
            last.severity,
            last.message
        ));
    }
    Ok(())
}

#[then("no confirmation was requested")]
fn no_confirmation_requested(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let prompts = world.gate.prompts();
    if !prompts.is_empty() {
        return Err(eyre::eyre!("unexpected prompts {prompts:?}"));
    }
    Ok(())
}

#[then(r#"the confirmation asked "{prompt}""#)]
fn confirmation_asked(world: &TaskListWorld, prompt: String) -> Result<(), eyre::Report> {
    let prompts = world.gate.prompts();
    if prompts.last() != Some(&prompt) {
        return Err(eyre::eyre!("expected prompt {prompt:?}, found {prompts:?}"));
    }
    Ok(())
}
