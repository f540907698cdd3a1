// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host time, tick durations, and the wall-clock instant fed to providers.
//!
//! Two clocks are involved in every tick:
//!
//! - [`HostTime`] is a monotonic millisecond counter owned by the host. It
//!   drives the [`TickTimer`](crate::timer::TickTimer) and never jumps.
//! - [`Instant`] is the civil wall-clock time with its UTC offset. It is what
//!   providers format, and it may jump (DST, manual clock changes).
//!
//! Keeping them apart means a wall-clock jump changes what is painted but
//! never the tick cadence.

use core::fmt;
use core::ops::{Add, Sub};

use chrono::{DateTime, FixedOffset};

/// A wall-clock timestamp with a fixed UTC offset.
///
/// Providers derive both the UTC epoch (`timestamp()`) and the local civil
/// time (`naive_local()`) from the same value.
pub type Instant = DateTime<FixedOffset>;

/// A point on the host's monotonic clock, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Creates a host time from a millisecond count.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        match self.0.checked_add(duration.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}ms)", self.0)
    }
}

/// A span of host time, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// The zero duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from a millisecond count.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns `true` if this duration is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_duration_since_clamps() {
        let early = HostTime(100);
        let late = HostTime(350);
        assert_eq!(late.saturating_duration_since(early), Duration(250));
        assert_eq!(early.saturating_duration_since(late), Duration::ZERO);
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(HostTime(u64::MAX).checked_add(Duration(1)), None);
        assert_eq!(HostTime(5).checked_add(Duration(5)), Some(HostTime(10)));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(HostTime(10) + Duration(5), HostTime(15));
        assert_eq!(HostTime(15) - HostTime(10), Duration(5));
        assert_eq!(Duration(2) + Duration(3), Duration(5));
    }

    #[test]
    fn debug_shows_units() {
        assert_eq!(alloc::format!("{:?}", HostTime(42)), "HostTime(42ms)");
        assert_eq!(alloc::format!("{:?}", Duration(7)), "Duration(7ms)");
    }
}
