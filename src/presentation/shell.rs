//! Line parser for the interactive shell.
//!
//! Plain lines are task text and go through
//! [`TaskListController::add_or_update`](crate::task::services::TaskListController::add_or_update),
//! exactly like typing into the input box. Lines starting with `/` are
//! commands.

use mockable::Clock;
use thiserror::Error;

use crate::task::{
    domain::{FilterMode, ParseFilterModeError, TaskId},
    ports::KeyValueStore,
    services::{CommandOutcome, TaskListController},
};

/// Help text listing the shell commands.
pub const SHELL_HELP: &str = "\
<text>           add a task, or save the task being edited
/edit <id>       start editing a task
/cancel          stop editing
/toggle <id>     mark a task done or not done
/remove <id>     delete a task
/clear           delete all completed tasks
/filter <mode>   show all, active or completed tasks
/list            show the list again
/help            show this help
/quit            leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A command run against the task list.
    Task(TaskCommand),
    /// Show the list.
    List,
    /// Show help.
    Help,
    /// Leave the shell.
    Quit,
}

/// Shell commands that map onto a controller command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Text to add, or to save when editing.
    Enter(String),
    /// Start editing a task.
    Edit(TaskId),
    /// Stop editing.
    Cancel,
    /// Toggle a task.
    Toggle(TaskId),
    /// Delete a task.
    Remove(TaskId),
    /// Delete completed tasks.
    Clear,
    /// Change the filter.
    Filter(FilterMode),
}

impl TaskCommand {
    /// Runs the command against `controller` and returns its outcome.
    pub fn apply<S, C>(self, controller: &mut TaskListController<S, C>) -> CommandOutcome
    where
        S: KeyValueStore,
        C: Clock,
    {
        match self {
            Self::Enter(text) => controller.add_or_update(&text),
            Self::Edit(id) => controller.begin_edit(id),
            Self::Cancel => controller.cancel_edit(),
            Self::Toggle(id) => controller.toggle(id),
            Self::Remove(id) => controller.remove(id),
            Self::Clear => controller.clear_completed(),
            Self::Filter(filter) => controller.set_filter(filter),
        }
    }
}

/// Errors raised while parsing a shell line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShellParseError {
    /// The command name is not known.
    #[error("unknown command '/{0}', type /help for a list")]
    UnknownCommand(String),

    /// The command needs an argument that was not given.
    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),

    /// The task identifier is not a number.
    #[error("'{0}' is not a task id")]
    InvalidId(String),

    /// The filter mode is not known.
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterModeError),
}

impl ShellCommand {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns [`ShellParseError`] when a `/` command is unknown or its
    /// argument is missing or invalid.
    pub fn parse(line: &str) -> Result<Self, ShellParseError> {
        let trimmed = line.trim();
        let Some(command_line) = trimmed.strip_prefix('/') else {
            return Ok(Self::Task(TaskCommand::Enter(trimmed.to_owned())));
        };
        let (name, argument) = command_line
            .split_once(char::is_whitespace)
            .map_or((command_line, ""), |(name, rest)| (name, rest.trim()));
        let task = match name.to_ascii_lowercase().as_str() {
            "edit" => TaskCommand::Edit(parse_id("edit", argument)?),
            "cancel" => TaskCommand::Cancel,
            "toggle" => TaskCommand::Toggle(parse_id("toggle", argument)?),
            "remove" | "delete" => TaskCommand::Remove(parse_id("remove", argument)?),
            "clear" => TaskCommand::Clear,
            "filter" => {
                if argument.is_empty() {
                    return Err(ShellParseError::MissingArgument("filter"));
                }
                TaskCommand::Filter(FilterMode::try_from(argument)?)
            }
            "list" => return Ok(Self::List),
            "help" => return Ok(Self::Help),
            "quit" | "exit" => return Ok(Self::Quit),
            other => return Err(ShellParseError::UnknownCommand(other.to_owned())),
        };
        Ok(Self::Task(task))
    }
}

fn parse_id(command: &'static str, argument: &str) -> Result<TaskId, ShellParseError> {
    if argument.is_empty() {
        return Err(ShellParseError::MissingArgument(command));
    }
    argument
        .parse::<TaskId>()
        .map_err(|_| ShellParseError::InvalidId(argument.to_owned()))
}
