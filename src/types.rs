// src/types.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Identifier of a task in a graph snapshot.
pub type TaskId = i64;

/// Instant that tasks without dependencies start at.
///
/// - `Now`: the wall-clock time of the call (default). Results computed with
///   this anchor drift between calls and should be treated as advisory.
/// - `Fixed`: a configured project start, so results are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleAnchor {
    #[default]
    Now,
    Fixed(DateTime<Utc>),
}

impl ScheduleAnchor {
    /// Anchor at midnight UTC of the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        ScheduleAnchor::Fixed(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Resolve the anchor to a concrete instant.
    ///
    /// Call this once per engine invocation so every root shares the same
    /// start time.
    pub fn resolve(self) -> DateTime<Utc> {
        match self {
            ScheduleAnchor::Now => Utc::now(),
            ScheduleAnchor::Fixed(at) => at,
        }
    }
}

impl FromStr for ScheduleAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("now") {
            return Ok(ScheduleAnchor::Now);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ScheduleAnchor::from_date)
            .map_err(|_| format!("invalid project start: {s} (expected \"now\" or YYYY-MM-DD)"))
    }
}

impl fmt::Display for ScheduleAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleAnchor::Now => write!(f, "now"),
            ScheduleAnchor::Fixed(at) => write!(f, "{}", at.format("%Y-%m-%d")),
        }
    }
}

/// Convert a task duration (whole days) into a time delta.
pub fn days(duration: u32) -> TimeDelta {
    TimeDelta::days(i64::from(duration))
}

/// `at` plus `duration` days, clamped to the latest representable instant.
pub fn add_days(at: DateTime<Utc>, duration: u32) -> DateTime<Utc> {
    at.checked_add_signed(days(duration))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// `at` minus `duration` days, clamped to the earliest representable instant.
pub fn sub_days(at: DateTime<Utc>, duration: u32) -> DateTime<Utc> {
    at.checked_sub_signed(days(duration))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
