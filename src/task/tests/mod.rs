//! Unit tests for the task list core.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Millisecond timestamp of 2026-01-01T09:00:00Z.
pub(crate) const START_MILLIS: i64 = 1_767_258_000_000;

/// Clock returning a programmable sequence of instants.
///
/// Every call to [`Clock::utc`] returns the current instant and then
/// advances it by `step_millis`.
#[derive(Debug)]
pub(crate) struct StepClock {
    next_millis: AtomicI64,
    step_millis: i64,
}

impl StepClock {
    pub(crate) const fn new(start_millis: i64, step_millis: i64) -> Self {
        Self {
            next_millis: AtomicI64::new(start_millis),
            step_millis,
        }
    }

    pub(crate) const fn frozen(millis: i64) -> Self {
        Self::new(millis, 0)
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let millis = self
            .next_millis
            .fetch_add(self.step_millis, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .expect("test clock produces valid instants")
    }
}
