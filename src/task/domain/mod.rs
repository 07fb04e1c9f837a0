//! Domain model for the task list.
//!
//! The domain holds tasks, their ordered collection, filter modes and the
//! pure view projection. Storage, notification and rendering concerns stay
//! outside of this boundary.

mod collection;
mod error;
mod filter;
mod ids;
mod projection;
mod task;

pub use collection::TaskCollection;
pub use error::{ParseFilterModeError, TaskDomainError};
pub use filter::FilterMode;
pub use ids::{TaskId, TaskText};
pub use projection::{TaskListView, TaskStats, project};
pub use task::{PersistedTaskData, Task};
