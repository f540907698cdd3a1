// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kiloseconds since local midnight.

use alloc::format;

use horologium_core::display::{Display, Unified};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;
use horologium_core::visual::Visual;

use crate::civil::{MILLIS_PER_DAY, millis_of_day};

/// Length of a day in kiloseconds.
pub const KILOSECONDS_PER_DAY: f64 = 86.4;

/// The day measured in SI kiloseconds.
pub const KILOSECONDS: ProviderDef = ProviderDef::new("kiloseconds")
    .name("Kiloseconds")
    .description("The day as 86.4 kiloseconds counted from local midnight")
    .category(Category::Metric)
    .tick_interval_ms(1000)
    .learn_more_url("https://en.wikipedia.org/wiki/Metric_time")
    .visual(Visual::progress_bar(KILOSECONDS_PER_DAY, kiloseconds))
    .format(format);

fn kiloseconds(instant: &Instant) -> f64 {
    f64::from(millis_of_day(instant)) / 1_000_000.0
}

fn format(instant: &Instant) -> Display {
    Unified::new(format!("{:.3}", kiloseconds(instant)))
        .with_suffix("ks")
        .with_label("kiloseconds since midnight")
        .with_sublabel(format!(
            "of {KILOSECONDS_PER_DAY} ({:.1}% of the day)",
            f64::from(millis_of_day(instant)) / f64::from(MILLIS_PER_DAY) * 100.0
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::local;

    #[test]
    fn noon_is_half_the_day() {
        let noon = local(3, (2024, 5, 5), (12, 0, 0));
        assert_eq!(kiloseconds(&noon), 43.2);
        let Display::Unified(unified) = format(&noon) else {
            panic!("expected a unified display");
        };
        assert_eq!(unified.value, "43.200");
        assert_eq!(unified.suffix.as_deref(), Some("ks"));
        assert_eq!(unified.sublabel.as_deref(), Some("of 86.4 (50.0% of the day)"));
    }

    #[test]
    fn last_second_stays_below_full_day() {
        let late = local(0, (2024, 5, 5), (23, 59, 59));
        assert!(kiloseconds(&late) < KILOSECONDS_PER_DAY);
    }
}
