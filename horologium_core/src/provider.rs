// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The time system provider contract.
//!
//! A time system is contributed as a [`ProviderDef`]: a `const`-constructible
//! candidate whose fields may be incomplete. The
//! [`Registry`](crate::registry::Registry) validates each candidate and turns
//! the accepted ones into [`Provider`]s, whose fields are guaranteed present.
//!
//! ```rust
//! use horologium_core::display::{Display, Unified};
//! use horologium_core::provider::{Category, ProviderDef};
//! use horologium_core::time::Instant;
//!
//! fn format(now: &Instant) -> Display {
//!     Unified::new(now.timestamp().to_string()).into()
//! }
//!
//! pub const EPOCH: ProviderDef = ProviderDef::new("epoch-seconds")
//!     .name("Unix Epoch")
//!     .description("Seconds elapsed since 1970-01-01 UTC")
//!     .category(Category::Epoch)
//!     .format(format);
//! ```

use core::fmt;

use crate::display::Display;
use crate::time::{Duration, Instant};
use crate::visual::Visual;

/// Formats an instant into a [`Display`]. Must be total and pure.
pub type FormatFn = fn(&Instant) -> Display;

/// Tick cadence used when a provider does not declare one.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Broad family a time system belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Everyday civil time.
    #[default]
    Standard,
    /// Decimal or otherwise metric subdivisions of the day.
    Metric,
    /// Counts from a fixed epoch.
    Epoch,
    /// Alternative calendars.
    Calendar,
    /// Historical or culturally specific systems.
    Cultural,
}

impl Category {
    /// Lowercase name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Epoch => "epoch",
            Self::Calendar => "calendar",
            Self::Cultural => "cultural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate time system, as contributed before validation.
///
/// Empty strings and `None` stand for missing fields. Build one with
/// [`ProviderDef::new`] and the chained setters; all of them are `const`, so
/// a definition can live in a `const` item next to its formatting function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProviderDef {
    /// Unique key, also the persisted selection value.
    pub id: &'static str,
    /// Human-readable name for selection surfaces.
    pub name: &'static str,
    /// One-sentence description, shown as auxiliary text.
    pub description: &'static str,
    /// Family of the system.
    pub category: Category,
    /// Tick cadence in milliseconds; [`DEFAULT_TICK_INTERVAL`] when `None`.
    pub tick_interval_ms: Option<u64>,
    /// External reference explaining the system.
    pub learn_more_url: Option<&'static str>,
    /// Optional graphical summary.
    pub visual: Option<Visual>,
    /// The formatting function. Required.
    pub format: Option<FormatFn>,
}

impl ProviderDef {
    /// Starts a definition with the given id and every other field missing.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            name: "",
            description: "",
            category: Category::Standard,
            tick_interval_ms: None,
            learn_more_url: None,
            visual: None,
            format: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the description.
    #[must_use]
    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the tick cadence in milliseconds.
    #[must_use]
    pub const fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = Some(ms);
        self
    }

    /// Sets the reference link.
    #[must_use]
    pub const fn learn_more_url(mut self, url: &'static str) -> Self {
        self.learn_more_url = Some(url);
        self
    }

    /// Attaches a visual.
    #[must_use]
    pub const fn visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    /// Sets the formatting function.
    #[must_use]
    pub const fn format(mut self, format: FormatFn) -> Self {
        self.format = Some(format);
        self
    }
}

/// A validated time system.
///
/// Only the [`Registry`](crate::registry::Registry) creates these, so every
/// required field is present and every shape constraint holds.
#[derive(Clone, Copy, Debug)]
pub struct Provider {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    tick_interval: Duration,
    learn_more_url: Option<&'static str>,
    visual: Option<Visual>,
    format: FormatFn,
}

impl Provider {
    /// Builds a provider from a definition whose fields were already checked.
    pub(crate) const fn from_checked(def: &ProviderDef, format: FormatFn) -> Self {
        let tick_interval = match def.tick_interval_ms {
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_TICK_INTERVAL,
        };
        Self {
            id: def.id,
            name: def.name,
            description: def.description,
            category: def.category,
            tick_interval,
            learn_more_url: def.learn_more_url,
            visual: def.visual,
            format,
        }
    }

    /// Unique key of this system.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// One-sentence description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Family of the system.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Tick cadence; always non-zero.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// External reference, if any.
    #[must_use]
    pub const fn learn_more_url(&self) -> Option<&'static str> {
        self.learn_more_url
    }

    /// Attached visual, if any.
    #[must_use]
    pub const fn visual(&self) -> Option<&Visual> {
        self.visual.as_ref()
    }

    /// Formats `instant` in this time system.
    #[must_use]
    pub fn format(&self, instant: &Instant) -> Display {
        (self.format)(instant)
    }
}
