//! Clock abstraction and timestamp formatting
//!
//! Records carry their timestamp as ISO 8601 with millisecond precision and
//! a `Z` suffix (`2025-01-08T10:30:45.123Z`). The clock that provides the
//! instant is replaceable wholesale, which is how tests pin output to a
//! fixed line.

use chrono::{DateTime, Utc};

/// Wire layout of the `timestamp` field.
const ISO_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format an instant the way records carry it.
#[must_use]
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(ISO_MILLIS).to_string()
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System UTC clock, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant, for deterministic output in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
