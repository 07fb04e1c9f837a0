//! Terminal front end for the task list.
//!
//! Usage:
//!
//! ```text
//! tasklist [--data-dir <DIR>] [--key <KEY>] [--yes] <command>
//! ```
//!
//! One-shot commands (`add`, `edit`, `toggle`, `remove`, `clear-completed`,
//! `list`) load the stored list, run a single command and print the list.
//! `shell` keeps the list open and reads commands line by line, so an edit
//! started with `/edit <id>` is saved by the next plain line of text.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;
use tasklist::{
    config::{ConfigError, TaskListConfig},
    presentation::{
        PromptConfirmation, SHELL_HELP, ShellCommand, StderrNotifier, TextRenderer, header_date,
    },
    task::{
        adapters::{AlwaysConfirm, FileKeyValueStore},
        domain::{FilterMode, TaskId},
        ports::{KeyValueStore, RenderObserver, StorageError},
        services::{CommandOutcome, TaskListController, TaskPersistence},
    },
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Controller = TaskListController<FileKeyValueStore, DefaultClock>;
type Renderer = TextRenderer<io::Stdout>;

/// A small, persistent to-do list.
#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about)]
struct Cli {
    /// Directory holding the stored list (overrides `TASKLIST_DATA_DIR`).
    #[arg(long, global = true)]
    data_dir: Option<Utf8PathBuf>,

    /// Storage key of the list (overrides `TASKLIST_STORAGE_KEY`).
    #[arg(long, global = true)]
    key: Option<String>,

    /// Answer yes to every confirmation prompt.
    #[arg(short, long, global = true)]
    yes: bool,

    /// Command to run; defaults to `list`.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Work with the list interactively.
    Shell,
    #[command(flatten)]
    Once(OneShot),
}

/// Commands that run once and print the list.
#[derive(Debug, PartialEq, Eq, Subcommand)]
enum OneShot {
    /// Show the list.
    List {
        /// Which tasks to show: all, active or completed.
        #[arg(short, long, default_value = "all")]
        filter: FilterMode,
    },
    /// Add a task.
    Add {
        /// Task text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Replace the text of a task.
    Edit {
        /// Task id.
        id: TaskId,
        /// New task text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark a task done, or not done.
    Toggle {
        /// Task id.
        id: TaskId,
    },
    /// Delete a task.
    Remove {
        /// Task id.
        id: TaskId,
    },
    /// Delete all completed tasks.
    ClearCompleted,
}

/// Picks the command to run; no subcommand lists every task.
fn command_or_default(command: Option<Command>) -> Command {
    command.unwrap_or(Command::Once(OneShot::List {
        filter: FilterMode::All,
    }))
}

/// Errors that stop the front end.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open task storage: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to prepare output: {0}")]
    Template(#[from] minijinja::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasklist=warn")),
        )
        .init();

    let cli = Cli::parse();
    run(cli).map_err(Into::into)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(&cli);
    config.validate()?;
    let store = FileKeyValueStore::open(&config.data_dir)?;
    let persistence = TaskPersistence::with_key(store, config.storage_key.as_str());
    let clock = Arc::new(DefaultClock);
    let renderer = Rc::new(TextRenderer::new(io::stdout(), header_date(&clock.local()))?);

    let unconfirmed =
        TaskListController::new(persistence, clock).with_notifier(StderrNotifier);
    let mut controller = if cli.yes {
        unconfirmed.with_confirmation(AlwaysConfirm)
    } else {
        unconfirmed.with_confirmation(PromptConfirmation::stdio())
    };

    match command_or_default(cli.command) {
        Command::Shell => run_shell(controller.with_observer(Rc::clone(&renderer)), &renderer),
        Command::Once(command) => {
            run_once(&mut controller, command);
            renderer.render(&controller.view());
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> TaskListConfig {
    let mut config = TaskListConfig::from_env();
    if let Some(data_dir) = &cli.data_dir {
        config = config.with_data_dir(data_dir.clone());
    }
    if let Some(key) = &cli.key {
        config = config.with_storage_key(key.clone());
    }
    config
}

fn run_once<S, C>(controller: &mut TaskListController<S, C>, command: OneShot) -> CommandOutcome
where
    S: KeyValueStore,
    C: Clock,
{
    let outcome = match command {
        OneShot::List { filter } => controller.set_filter(filter),
        OneShot::Add { text } => controller.add_or_update(&text.join(" ")),
        OneShot::Edit { id, text } => match controller.begin_edit(id) {
            CommandOutcome::EditStarted { .. } => controller.add_or_update(&text.join(" ")),
            other => other,
        },
        OneShot::Toggle { id } => controller.toggle(id),
        OneShot::Remove { id } => controller.remove(id),
        OneShot::ClearCompleted => controller.clear_completed(),
    };
    tracing::debug!(?outcome, mutated = outcome.is_mutation(), "command finished");
    outcome
}

fn run_shell(mut controller: Controller, renderer: &Renderer) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut line = String::new();
    renderer.render(&controller.view());
    loop {
        write_prompt(&controller)?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(io::stderr().lock(), "[warning] {err}")?;
                continue;
            }
        };
        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(io::stdout().lock(), "{SHELL_HELP}")?,
            ShellCommand::List => renderer.render(&controller.view()),
            ShellCommand::Task(task) => {
                let outcome = task.apply(&mut controller);
                if let CommandOutcome::EditStarted { text, .. } = &outcome {
                    writeln!(io::stderr().lock(), "[info] editing: {text}")?;
                }
                tracing::debug!(
                    ?outcome,
                    mutated = outcome.is_mutation(),
                    "command finished"
                );
            }
        }
    }
    Ok(())
}

fn write_prompt(controller: &Controller) -> io::Result<()> {
    let mut err = io::stderr().lock();
    match controller.editing_id() {
        Some(id) => write!(err, "edit {id}> ")?,
        None => write!(err, "> ")?,
    }
    err.flush()
}
