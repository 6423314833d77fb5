//! Countdown to the launch instant.
//!
//! The decomposition is a pure function of two instants (`target`, `now`);
//! scheduling the once-per-second re-sample is the job of
//! `components::countdown::use_countdown`, which keeps this module free of any
//! runtime concern.
//!
//! Minimal API
//! -----------
//! - `LaunchTarget::parse(raw)` → `Result<LaunchTarget, SiteError>`
//! - `LaunchTarget::snapshot_at(now)` → `CountdownSnapshot`
//! - `countdown(target, now)` → `Option<CountdownSnapshot>` (`None` when no
//!   target is configured, which is distinct from a countdown at zero)
//!
//! Once the target has passed every field reads zero and `reached` is set.
//! Re-sampling after that point keeps returning the same snapshot.

use std::fmt;

use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

use crate::core::error::SiteError;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// The fixed instant the page counts down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaunchTarget(OffsetDateTime);

impl LaunchTarget {
    pub const fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }

    /// Parse an RFC 3339 timestamp such as `2025-12-01T10:00:00+05:30`.
    pub fn parse(raw: &str) -> Result<Self, SiteError> {
        OffsetDateTime::parse(raw, &Rfc3339)
            .map(Self)
            .map_err(|source| SiteError::InvalidLaunchTimestamp {
                raw: raw.to_string(),
                source,
            })
    }

    pub fn instant(&self) -> OffsetDateTime {
        self.0
    }

    /// Time left at `now`, clamped at zero.
    pub fn remaining_at(&self, now: OffsetDateTime) -> Duration {
        (self.0 - now).max(Duration::ZERO)
    }

    pub fn snapshot_at(&self, now: OffsetDateTime) -> CountdownSnapshot {
        CountdownSnapshot::from_remaining(self.remaining_at(now))
    }
}

impl fmt::Display for LaunchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Days/hours/minutes/seconds left at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownSnapshot {
    /// Unbounded.
    pub days: u64,
    /// 0–23
    pub hours: u8,
    /// 0–59
    pub minutes: u8,
    /// 0–59
    pub seconds: u8,
    pub reached: bool,
}

impl CountdownSnapshot {
    /// The snapshot shown once the target has passed.
    pub const fn reached() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            reached: true,
        }
    }

    pub fn between(target: OffsetDateTime, now: OffsetDateTime) -> Self {
        LaunchTarget::new(target).snapshot_at(now)
    }

    /// Decompose a remaining duration. Sub-second remainders are floored, so
    /// a remaining `0.4s` reads all zeros while `reached` is still `false`.
    pub fn from_remaining(remaining: Duration) -> Self {
        if remaining <= Duration::ZERO {
            return Self::reached();
        }

        let total = remaining.whole_seconds().unsigned_abs();
        let days = total / SECONDS_PER_DAY;
        let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let seconds = total % SECONDS_PER_MINUTE;

        Self {
            days,
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            reached: false,
        }
    }

    /// Whole seconds represented by the snapshot fields.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }

    /// Labelled fields in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", u64::from(self.hours)),
            ("Minutes", u64::from(self.minutes)),
            ("Seconds", u64::from(self.seconds)),
        ]
    }
}

/// Snapshot for an optional target. `None` means no countdown is configured.
pub fn countdown(target: Option<LaunchTarget>, now: OffsetDateTime) -> Option<CountdownSnapshot> {
    target.map(|target| target.snapshot_at(now))
}
