// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gregorian date with a 12-hour clock.

use alloc::format;

use chrono::Timelike;
use horologium_core::display::{Display, Split};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;
use horologium_core::visual::{Hands, Visual};

use crate::civil::{long_date, millis_of_day};

/// Civil time as most clocks show it.
pub const STANDARD: ProviderDef = ProviderDef::new("standard")
    .name("Standard Time")
    .description("The Gregorian calendar with a 12-hour clock")
    .category(Category::Standard)
    .tick_interval_ms(1000)
    .learn_more_url("https://en.wikipedia.org/wiki/12-hour_clock")
    .visual(Visual::clock(12, hands))
    .format(format);

fn format(instant: &Instant) -> Display {
    let time = instant.time();
    let (pm, hour) = time.hour12();
    let clock = format!("{hour}:{:02}:{:02}", time.minute(), time.second());
    Split::new(long_date(instant, 0), clock)
        .with_period(if pm { "PM" } else { "AM" })
        .into()
}

fn hands(instant: &Instant) -> Hands {
    let ms = millis_of_day(instant);
    let hour = f64::from(ms % 43_200_000) / 3_600_000.0;
    let minute = f64::from(ms % 3_600_000) / 36_000.0;
    let second = f64::from(ms % 60_000) / 600.0;
    Hands::new(hour, minute).with_second(second)
}
