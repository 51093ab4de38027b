use anchor_lang::prelude::*;

#[cfg(test)]
use crate::constants::{DAYS_PER_MONTH, SECONDS_PER_DAY};

/// Source of the current Unix timestamp.
pub trait TimeSource {
    fn now(&self) -> Result<i64>;
}

/// Reads the cluster `Clock` sysvar.
pub struct ClusterClock;

impl TimeSource for ClusterClock {
    fn now(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }
}

/// Settable clock for deterministic schedules in tests.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MockClock {
    now: i64,
}

#[cfg(test)]
impl MockClock {
    pub const fn new(now: i64) -> Self {
        Self { now }
    }

    pub fn set(&mut self, now: i64) {
        self.now = now;
    }

    pub fn add_seconds(&mut self, secs: i64) {
        self.now += secs;
    }

    pub fn add_days(&mut self, days: i64) {
        self.add_seconds(days * SECONDS_PER_DAY);
    }

    /// Months are 30 days, matching the vesting schedule.
    pub fn add_months(&mut self, months: i64) {
        self.add_days(months * DAYS_PER_MONTH as i64);
    }
}

#[cfg(test)]
impl TimeSource for MockClock {
    fn now(&self) -> Result<i64> {
        Ok(self.now)
    }
}
