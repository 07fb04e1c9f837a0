//! Terminal adapters for notifications and confirmation prompts.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::task::ports::{ConfirmationGate, Notification, Notifier, Severity};

const fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Warning => "warning",
    }
}

/// Writes notifications as `[tag] message` lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: &Notification) {
        let mut err = io::stderr().lock();
        if let Err(write_err) = writeln!(
            err,
            "[{}] {}",
            severity_tag(notification.severity),
            notification.message
        ) {
            tracing::debug!(error = %write_err, "failed to print notification");
        }
    }
}

/// Source of answer lines for [`PromptConfirmation`].
pub trait AnswerSource {
    /// Appends the next line to `buf` and returns the bytes read, `0` at end
    /// of input.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_answer(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> AnswerSource for R {
    fn read_answer(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

/// Reads answers from stdin one line at a time, holding the stdin lock only
/// while reading so the shell can share it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn read_answer(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Asks yes/no questions on a prompt stream and reads the answer from
/// `input`.
///
/// Only `y` or `yes` (any case) count as agreement; end of input declines.
pub struct PromptConfirmation<R: AnswerSource, W: Write> {
    input: RefCell<R>,
    prompt_out: RefCell<W>,
}

impl<R: AnswerSource, W: Write> PromptConfirmation<R, W> {
    /// Creates a confirmation gate over the given streams.
    pub const fn new(input: R, prompt_out: W) -> Self {
        Self {
            input: RefCell::new(input),
            prompt_out: RefCell::new(prompt_out),
        }
    }
}

impl PromptConfirmation<StdinAnswers, io::Stderr> {
    /// Prompts on stderr and reads answers from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(StdinAnswers, io::stderr())
    }
}

/// Returns `true` when `answer` is an affirmative reply.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl<R: AnswerSource, W: Write> ConfirmationGate for PromptConfirmation<R, W> {
    fn confirm(&self, prompt: &str) -> bool {
        let (Ok(mut input), Ok(mut out)) =
            (self.input.try_borrow_mut(), self.prompt_out.try_borrow_mut())
        else {
            return false;
        };
        if write!(out, "{prompt} [y/N] ").and_then(|()| out.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match input.read_answer(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}
