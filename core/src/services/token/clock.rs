//! Time source for issuance and expiry checks

use chrono::{DateTime, Duration, Utc};

/// Source of the current instant
///
/// The token service reads it once per issuance (for `iat`/`exp`) and once per
/// verification (for the expiry check).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
///
/// Gives byte-identical tokens for identical inputs, and lets callers check
/// expiry behavior without waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// A clock pinned `by` later than this one
    pub fn advanced(&self, by: Duration) -> Self {
        Self::new(self.instant + by)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
