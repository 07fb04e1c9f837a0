//! Task list state and commands.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]: tasks, the ordered collection, filters and
//!   the pure view projection
//! - Port contracts in [`ports`]: key-value storage, notifications,
//!   confirmation and rendering
//! - Adapter implementations in [`adapters`]
//! - The controller and persistence adapter in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
