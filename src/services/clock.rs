//! Source of the current time for services that stamp or compare dates.

use chrono::{NaiveDateTime, Utc};

pub trait Clock {
    /// Current UTC time without offset.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock used in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock frozen at a given instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
