//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::given;
use tasklist::task::services::CommandOutcome;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    if !world.controller.tasks().is_empty() {
        return Err(eyre::eyre!("expected a fresh world to start empty"));
    }
    Ok(())
}

#[given(r#"a task list containing "{first}" and "{second}""#)]
fn task_list_containing(
    world: &mut TaskListWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for text in [first, second] {
        let outcome = world.controller.add_or_update(&text);
        if !matches!(outcome, CommandOutcome::Added(_)) {
            return Err(eyre::eyre!("could not add {text:?}: {outcome:?}"));
        }
    }
    Ok(())
}

#[given("the user will decline confirmations")]
fn user_will_decline(world: &mut TaskListWorld) {
    world.gate.decline_from_now();
}
