/// Wall-clock collaborator.
///
/// Log timestamps and the "scanned at" line of the summary both read the
/// time through [`Clock`] so tests can pin it with [`FixedClock`].
use chrono::{Datelike, Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// `strftime` pattern shared by log lines and reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Calendar details for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeInfo {
    /// Formatted with [`TIMESTAMP_FORMAT`].
    pub datetime: String,
    /// Full English weekday name, e.g. `Monday`.
    pub day_of_week: String,
    /// ISO 8601 week number (1–53).
    pub week_number: u32,
    /// Day of the year, zero-padded to three digits (`001`–`366`).
    pub day_of_year: String,
}

impl DateTimeInfo {
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self {
            datetime: at.format(TIMESTAMP_FORMAT).to_string(),
            day_of_week: at.format("%A").to_string(),
            week_number: at.iso_week().week(),
            day_of_year: at.format("%j").to_string(),
        }
    }

    /// Read `clock` once and describe that instant.
    pub fn now(clock: &dyn Clock) -> Self {
        Self::from_datetime(clock.now())
    }
}

impl fmt::Display for DateTimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, ISO week {}, day {})",
            self.datetime, self.day_of_week, self.week_number, self.day_of_year
        )
    }
}
