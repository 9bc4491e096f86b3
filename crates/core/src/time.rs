//! Where a session's `started_at` and `completed_at` stamps come from.
//!
//! The desktop binary reads the wall clock. Tests pin the clock so that both
//! stamps, and the elapsed time derived from them, are reproducible.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Wall,
    Pinned(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::Wall
    }

    /// A clock that always answers `at` until it is advanced.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Pinned(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::Wall => Utc::now(),
            Self::Pinned(at) => *at,
        }
    }

    /// Step a pinned clock forward, e.g. between the first and the last answer.
    /// No-op on the wall clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Self::Pinned(at) = self {
            *at += delta;
        }
    }
}

/// Seconds after the Unix epoch used for every pinned test stamp
/// (2023-11-14 22:13:20 UTC).
pub const TEST_EPOCH_SECS: i64 = 1_700_000_000;

#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(TEST_EPOCH_SECS, 0).unwrap_or_default()
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
