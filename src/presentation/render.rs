//! Plain-text rendering of task list views through `minijinja`.

use minijinja::{Environment, context};
use serde::Serialize;
use std::cell::RefCell;
use std::io::Write;

use crate::task::{
    domain::{FilterMode, TaskListView},
    ports::RenderObserver,
};

const TEMPLATE_NAME: &str = "task_list.txt";
const TEMPLATE: &str = "{{ date }}\n\
{% for task in tasks %}[{{ task.mark }}] {{ task.id }}  {{ task.text }}{{ task.suffix }}\n\
{% else %}{{ empty_message }}\n\
{% endfor %}{{ footer }}\n";

/// Formats a date the way the list header shows it, e.g.
/// `Sunday, October 18, 2026`.
#[must_use]
pub fn header_date<Tz>(date: &chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format("%A, %B %-d, %Y").to_string()
}

#[derive(Debug, Serialize)]
struct TaskRow<'a> {
    id: i64,
    text: &'a str,
    mark: &'static str,
    suffix: &'static str,
}

const fn empty_message(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::All => "No tasks yet. Add one to get started.",
        FilterMode::Active => "Nothing left to do.",
        FilterMode::Completed => "No completed tasks.",
    }
}

/// Renders views as text and writes them to `W`.
pub struct TextRenderer<W: Write> {
    env: Environment<'static>,
    date: String,
    out: RefCell<W>,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out` with `date` as the header line.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when the built-in template fails to
    /// compile.
    pub fn new(out: W, date: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self {
            env,
            date: date.into(),
            out: RefCell::new(out),
        })
    }

    /// Renders `view` to a string.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when template evaluation fails.
    pub fn render_to_string(&self, view: &TaskListView<'_>) -> Result<String, minijinja::Error> {
        let rows: Vec<TaskRow<'_>> = view
            .visible
            .iter()
            .map(|task| TaskRow {
                id: task.id().value(),
                text: task.text().as_str(),
                mark: if task.is_completed() { "x" } else { " " },
                suffix: if view.editing == Some(task.id()) {
                    "  (editing)"
                } else {
                    ""
                },
            })
            .collect();
        let footer = format!(
            "{} | {} total, {} completed | showing {}",
            view.stats.items_left_label(),
            view.stats.total,
            view.stats.completed,
            view.filter
        );
        self.env.get_template(TEMPLATE_NAME)?.render(context! {
            date => self.date.as_str(),
            tasks => rows,
            empty_message => empty_message(view.filter),
            footer => footer,
        })
    }

    /// Consumes the renderer and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> RenderObserver for TextRenderer<W> {
    fn render(&self, view: &TaskListView<'_>) {
        let rendered = match self.render_to_string(view) {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::warn!(error = %err, "failed to render task list");
                return;
            }
        };
        let Ok(mut out) = self.out.try_borrow_mut() else {
            tracing::warn!("renderer output already in use");
            return;
        };
        if let Err(err) = writeln!(out, "{rendered}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write task list");
        }
    }
}
