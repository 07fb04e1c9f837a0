//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::when;
use tasklist::task::domain::FilterMode;

#[when(r#"the user enters "{text}""#)]
fn user_enters(world: &mut TaskListWorld, text: String) {
    world.controller.add_or_update(&text);
}

#[when(r#"the user toggles "{text}""#)]
fn user_toggles(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&text)?;
    world.controller.toggle(id);
    Ok(())
}

#[when(r#"the user edits "{text}""#)]
fn user_edits(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&text)?;
    world.controller.begin_edit(id);
    Ok(())
}

#[when(r#"the user removes "{text}""#)]
fn user_removes(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&text)?;
    world.controller.remove(id);
    Ok(())
}

#[when("the user clears completed tasks")]
fn user_clears_completed(world: &mut TaskListWorld) {
    world.controller.clear_completed();
}

#[when(r#"the user shows "{mode}" tasks"#)]
fn user_shows(world: &mut TaskListWorld, mode: String) -> Result<(), eyre::Report> {
    let filter = FilterMode::try_from(mode.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    world.controller.set_filter(filter);
    Ok(())
}

#[when("the task list is reloaded")]
fn task_list_reloaded(world: &mut TaskListWorld) {
    world.reload();
}
