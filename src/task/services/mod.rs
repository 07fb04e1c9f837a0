//! Application services for the task list.

mod controller;
mod outcome;
mod persistence;

pub use controller::{
    ADDED_MESSAGE, CLEARED_MESSAGE, DELETE_PROMPT, DELETED_MESSAGE, EMPTY_TEXT_MESSAGE,
    NOTHING_TO_CLEAR_MESSAGE, TaskListController, UPDATED_MESSAGE, clear_prompt,
};
pub use outcome::CommandOutcome;
pub use persistence::{DEFAULT_STORAGE_KEY, PersistenceError, TaskPersistence};
