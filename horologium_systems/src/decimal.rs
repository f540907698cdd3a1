// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decimal time: 10 hours of 100 minutes of 100 seconds.

use alloc::format;
use alloc::vec;

use horologium_core::display::{Display, Segment, SegmentValue, Segmented};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;
use horologium_core::visual::{Hands, Visual};

use crate::civil::DecimalTime;

/// Local time of day in decimal units.
pub const DECIMAL: ProviderDef = ProviderDef::new("decimal")
    .name("Decimal Time")
    .description("The day as 10 hours of 100 minutes of 100 seconds")
    .category(Category::Metric)
    .tick_interval_ms(864)
    .learn_more_url("https://en.wikipedia.org/wiki/Decimal_time")
    .visual(Visual::clock(10, hands))
    .format(format);

fn format(instant: &Instant) -> Display {
    let time = DecimalTime::of(instant);
    Segmented::new(vec![
        Segment::new(i64::from(time.hours), "hours"),
        Segment::new(SegmentValue::Text(format!("{:02}", time.minutes)), "minutes"),
        Segment::new(SegmentValue::Text(format!("{:02}", time.seconds)), "seconds"),
    ])
    .into()
}

fn hands(instant: &Instant) -> Hands {
    let total = DecimalTime::of(instant).total;
    Hands::new(total / 10_000.0, total % 10_000.0 / 100.0).with_second(total % 100.0)
}
