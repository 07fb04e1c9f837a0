//! Tasklist: a small, persistent, single-user to-do list.
//!
//! The crate keeps the list state and its commands free of any
//! presentation concerns so they can be driven from a terminal, a GUI, or a
//! test harness alike.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: tasks, the ordered collection, filters and the view
//!   projection, with no infrastructure dependencies
//! - **Ports**: trait interfaces for storage, notifications, confirmation
//!   prompts and rendering
//! - **Adapters**: concrete implementations of ports (in-memory and file
//!   storage, recording notifiers)
//!
//! # Modules
//!
//! - [`task`]: task list state, persistence and the command controller
//! - [`config`]: storage location and key
//! - [`presentation`]: terminal rendering and the interactive shell parser

pub mod config;
pub mod presentation;
pub mod task;
