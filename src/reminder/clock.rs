//! Clock abstraction for the reminder scheduler.
//!
//! The scheduler reads wall-clock time through this trait so tests can drive
//! it on simulated time. Timers themselves ride `tokio::time`, which tests
//! virtualize with a paused runtime; together the two cover the spec's
//! injectable now()/setTimer pair.

use chrono::NaiveDateTime;

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The real system clock, local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
