// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned recurring tick timer.
//!
//! A [`TickTimer`] holds at most one armed timer. Arming always replaces the
//! previous one, so a host that routes every provider switch through
//! [`TickTimer::arm`] can never end up with two cadences running at once.
//!
//! The timer does not sleep or register callbacks itself. Hosts drive it by
//! calling [`TickTimer::poll`] from whatever wake-up mechanism they have
//! (a blocking sleep until [`TickTimer::next_deadline`], an interval
//! callback, a test loop).

use crate::time::{Duration, HostTime};

/// State of an armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedTimer {
    /// Period between ticks.
    pub interval: Duration,
    /// Host time at which the next tick is due.
    pub next: HostTime,
    /// Arm counter, unique per [`TickTimer`].
    pub generation: u32,
}

/// A due tick reported by [`TickTimer::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    /// Generation of the timer that fired.
    pub generation: u32,
    /// Whole periods that elapsed unobserved and were dropped.
    pub skipped: u64,
}

/// An owned handle to at most one recurring timer.
#[derive(Debug, Default)]
pub struct TickTimer {
    armed: Option<ArmedTimer>,
    generation: u32,
}

impl TickTimer {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }

    /// Arms a timer firing every `interval`, first at `now + interval`.
    ///
    /// Any previously armed timer is cancelled and returned.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn arm(&mut self, interval: Duration, now: HostTime) -> Option<ArmedTimer> {
        assert!(!interval.is_zero(), "tick interval must be positive");
        let previous = self.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(ArmedTimer {
            interval,
            next: now + interval,
            generation: self.generation,
        });
        previous
    }

    /// Cancels the armed timer, if any, and returns it.
    pub fn cancel(&mut self) -> Option<ArmedTimer> {
        self.armed.take()
    }

    /// Returns whether a timer is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns the armed timer.
    #[must_use]
    pub const fn armed(&self) -> Option<&ArmedTimer> {
        self.armed.as_ref()
    }

    /// Returns when the next tick is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.armed.map(|a| a.next)
    }

    /// Reports a tick if one is due at `now`.
    ///
    /// When several periods have passed since the last poll, a single tick is
    /// reported and the deadline moves to the first period boundary after
    /// `now`; the missed periods are counted in [`Fired::skipped`].
    pub fn poll(&mut self, now: HostTime) -> Option<Fired> {
        let armed = self.armed.as_mut()?;
        if now < armed.next {
            return None;
        }
        let period = armed.interval.millis();
        let late = now.saturating_duration_since(armed.next).millis();
        let skipped = late / period;
        armed.next = HostTime::from_millis(armed.next.millis() + (skipped + 1) * period);
        Some(Fired {
            generation: armed.generation,
            skipped,
        })
    }
}
