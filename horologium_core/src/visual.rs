// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual descriptors: small graphical summaries attached to a provider.
//!
//! A [`Visual`] does not hold any drawable state. It carries the static shape
//! parameters (`max`, `divisions`) and a pure function that turns an
//! [`Instant`] into raw numeric inputs. The
//! [`VisualRenderer`](crate::scene::VisualRenderer) turns those inputs into
//! geometry.
//!
//! The evaluation functions are plain `fn` pointers, so they cannot capture
//! state: calling one any number of times with the same instant yields the
//! same result.

use crate::time::Instant;

/// Evaluates a progress visual at an instant.
pub type ValueFn = fn(&Instant) -> f64;

/// Evaluates clock hands at an instant.
pub type HandsFn = fn(&Instant) -> Hands;

/// A graphical summary attached to a provider.
#[derive(Clone, Copy, Debug)]
pub enum Visual {
    /// A horizontal bar filled left to right.
    ProgressBar(Progress),
    /// A circular arc filled clockwise from 12 o'clock.
    ProgressRing(Progress),
    /// An analog clock face.
    Clock(ClockFace),
}

impl Visual {
    /// Creates a progress bar visual.
    #[must_use]
    pub const fn progress_bar(max: f64, value: ValueFn) -> Self {
        Self::ProgressBar(Progress { max, value })
    }

    /// Creates a progress ring visual.
    #[must_use]
    pub const fn progress_ring(max: f64, value: ValueFn) -> Self {
        Self::ProgressRing(Progress { max, value })
    }

    /// Creates a clock visual with `divisions` hour positions.
    #[must_use]
    pub const fn clock(divisions: u32, hands: HandsFn) -> Self {
        Self::Clock(ClockFace { divisions, hands })
    }

    /// Returns the fieldless shape of this visual.
    #[must_use]
    pub const fn kind(&self) -> VisualKind {
        match self {
            Self::ProgressBar(_) => VisualKind::ProgressBar,
            Self::ProgressRing(_) => VisualKind::ProgressRing,
            Self::Clock(_) => VisualKind::Clock,
        }
    }
}

/// Fieldless mirror of the [`Visual`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// See [`Visual::ProgressBar`].
    ProgressBar,
    /// See [`Visual::ProgressRing`].
    ProgressRing,
    /// See [`Visual::Clock`].
    Clock,
}

/// Parameters shared by the bar and ring visuals.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    /// The value at which the visual is full. Must be finite and positive.
    pub max: f64,
    /// Current value; conceptually in `[0, max]` but may overflow.
    pub value: ValueFn,
}

impl Progress {
    /// Returns the progress fraction at `instant`.
    ///
    /// Only the upper bound is clamped: values above `max` read as `1.0`,
    /// while a negative value gives a negative fraction.
    #[must_use]
    pub fn fraction(&self, instant: &Instant) -> f64 {
        ((self.value)(instant) / self.max).min(1.0)
    }
}

/// Parameters of the clock visual.
#[derive(Clone, Copy, Debug)]
pub struct ClockFace {
    /// Number of hour positions around the face (12, 10, ...). Non-zero.
    pub divisions: u32,
    /// Current hand positions.
    pub hands: HandsFn,
}

/// Hand positions of a [`ClockFace`].
///
/// `hour` is expressed in the face's own base (`0..=divisions`). `minute` and
/// `second` always use a normalized `0..=100` scale, whatever the time
/// system's native base, so the renderer has a single rule for them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hands {
    /// Hour hand position in `[0, divisions]`.
    pub hour: f64,
    /// Minute hand position in `[0, 100]`.
    pub minute: f64,
    /// Second hand position in `[0, 100]`; no second hand when `None`.
    pub second: Option<f64>,
}

impl Hands {
    /// Creates hands without a second hand.
    #[must_use]
    pub const fn new(hour: f64, minute: f64) -> Self {
        Self {
            hour,
            minute,
            second: None,
        }
    }

    /// Adds a second hand.
    #[must_use]
    pub const fn with_second(mut self, second: f64) -> Self {
        self.second = Some(second);
        self
    }
}
