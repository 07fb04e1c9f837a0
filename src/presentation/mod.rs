//! Terminal presentation layer.
//!
//! Everything here sits outside the task list core: it renders views,
//! prompts for confirmation and prints notifications, and only talks to the
//! core through the ports in [`crate::task::ports`].

pub mod render;
pub mod shell;
pub mod terminal;

pub use render::{TextRenderer, header_date};
pub use shell::{SHELL_HELP, ShellCommand, ShellParseError, TaskCommand};
pub use terminal::{AnswerSource, PromptConfirmation, StderrNotifier, StdinAnswers, is_affirmative};
