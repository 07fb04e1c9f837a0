//! Port contracts for the task list.
//!
//! Ports define the infrastructure-agnostic interfaces the controller talks
//! to: durable storage, user notifications, confirmation prompts and
//! rendering.

pub mod confirmation;
pub mod notifier;
pub mod render;
pub mod storage;

pub use confirmation::ConfirmationGate;
pub use notifier::{Notification, Notifier, Severity};
pub use render::RenderObserver;
pub use storage::{KeyValueStore, StorageError, StorageResult};
