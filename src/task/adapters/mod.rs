//! Adapter implementations for task list ports.

pub mod feedback;
pub mod file;
pub mod memory;
pub mod models;

pub use feedback::{AlwaysConfirm, NeverConfirm, NullNotifier, RecordingNotifier};
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use models::TaskRecord;
