// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Holocene (Human Era) calendar.

use alloc::format;

use chrono::Timelike;
use horologium_core::display::{Display, Split};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;

use crate::civil::long_date;

/// Years added to the Gregorian year.
pub const HOLOCENE_OFFSET: i32 = 10_000;

/// Gregorian dates counted from the start of the Holocene.
pub const HOLOCENE: ProviderDef = ProviderDef::new("holocene")
    .name("Holocene Calendar")
    .description("The Gregorian calendar with 10,000 years added, starting near the dawn of agriculture")
    .category(Category::Calendar)
    .tick_interval_ms(1000)
    .learn_more_url("https://en.wikipedia.org/wiki/Holocene_calendar")
    .format(format);

fn format(instant: &Instant) -> Display {
    let time = instant.time();
    Split::new(
        long_date(instant, HOLOCENE_OFFSET),
        format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ),
    )
    .with_era("HE")
    .into()
}
