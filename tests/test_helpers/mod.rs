//! Shared helpers for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Millisecond timestamp of 2026-03-14T15:09:26Z.
pub const START_MILLIS: i64 = 1_773_500_966_000;

/// Clock that advances by a fixed step on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    next_millis: AtomicI64,
    step_millis: i64,
}

impl SteppingClock {
    /// Starts at [`START_MILLIS`] and advances one second per reading.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(START_MILLIS, 1_000)
    }

    /// Starts at `start_millis` and advances `step_millis` per reading.
    #[must_use]
    pub const fn starting_at(start_millis: i64, step_millis: i64) -> Self {
        Self {
            next_millis: AtomicI64::new(start_millis),
            step_millis,
        }
    }

    /// Never advances.
    #[must_use]
    pub const fn frozen() -> Self {
        Self::starting_at(START_MILLIS, 0)
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let millis = self
            .next_millis
            .fetch_add(self.step_millis, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
