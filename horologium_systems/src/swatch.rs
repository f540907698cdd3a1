// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swatch Internet Time.
//!
//! The day is divided into 1000 `.beats` of 86.4 seconds, counted from
//! midnight in Biel Mean Time (UTC+1, no daylight saving). The reading is the
//! same everywhere on Earth at the same moment.

use alloc::format;

use horologium_core::display::{Display, Unified};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;
use horologium_core::visual::Visual;

use crate::civil::{MILLIS_PER_DAY, utc_millis_of_day};

/// Offset of Biel Mean Time from UTC.
const BMT_OFFSET_MILLIS: u32 = 3_600_000;

/// Milliseconds per beat.
const MILLIS_PER_BEAT: f64 = 86_400.0;

/// Beats in a day.
pub const BEATS_PER_DAY: f64 = 1000.0;

/// Swatch `.beat` time.
pub const SWATCH: ProviderDef = ProviderDef::new("swatch")
    .name("Swatch Internet Time")
    .description("1000 .beats per day, the same worldwide, counted from Biel Mean Time")
    .category(Category::Metric)
    .tick_interval_ms(864)
    .learn_more_url("https://en.wikipedia.org/wiki/Swatch_Internet_Time")
    .visual(Visual::progress_ring(BEATS_PER_DAY, beats))
    .format(format);

/// Beats elapsed since BMT midnight, in `[0, 1000)`.
pub(crate) fn beats(instant: &Instant) -> f64 {
    let bmt = (utc_millis_of_day(instant) + BMT_OFFSET_MILLIS) % MILLIS_PER_DAY;
    f64::from(bmt) / MILLIS_PER_BEAT
}

fn format(instant: &Instant) -> Display {
    Unified::new(format!("{:.2}", beats(instant)))
        .with_prefix("@")
        .with_label(".beats")
        .with_sublabel("Biel Mean Time (UTC+1)")
        .into()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use proptest::prelude::*;

    use super::*;
    use crate::testing::local;

    #[test]
    fn bmt_midnight_is_zero() {
        let instant = local(0, (2024, 1, 1), (23, 0, 0));
        assert_eq!(beats(&instant), 0.0);
        let Display::Unified(unified) = format(&instant) else {
            panic!("expected a unified display");
        };
        assert_eq!(unified.prefix.as_deref(), Some("@"));
        assert_eq!(unified.value, "0.00");
    }

    #[test]
    fn utc_midnight() {
        let instant = local(0, (2024, 1, 1), (0, 0, 0));
        assert!((beats(&instant) - 41.666_666).abs() < 1e-5);
        let Display::Unified(unified) = format(&instant) else {
            panic!("expected a unified display");
        };
        assert_eq!(unified.value, "41.67");
    }

    #[test]
    fn same_everywhere() {
        let london = local(0, (2024, 7, 1), (11, 0, 0));
        let sydney = local(10, (2024, 7, 1), (21, 0, 0));
        assert_eq!(beats(&london), beats(&sydney));
        assert_eq!(beats(&london), 500.0);
    }

    proptest! {
        #[test]
        fn beats_stay_in_range(
            secs in -2_208_988_800_i64..4_102_444_800,
            offset_quarters in -48_i32..=56,
        ) {
            let offset = chrono::FixedOffset::east_opt(offset_quarters * 900).unwrap();
            let instant = DateTime::from_timestamp(secs, 0)
                .unwrap()
                .with_timezone(&offset);
            let value = beats(&instant);
            prop_assert!((0.0..BEATS_PER_DAY).contains(&value));
        }
    }
}
