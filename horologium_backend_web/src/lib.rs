// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for horologium.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`IntervalLoop`]: `setInterval` tick source
//! - [`DomPresenter`]: HTML and SVG element management
//! - [`LocalStoragePreferences`]: selection persistence in `localStorage`
//! - [`now`] / [`wall_clock`]: monotonic and civil time readings

#![no_std]

extern crate alloc;

mod interval;
mod presenter;
mod storage;

pub use horologium_core::backend::Presenter;
pub use interval::IntervalLoop;
pub use presenter::{DomPresenter, SVG_NAMESPACE, namespace_for};
pub use storage::{LocalStoragePreferences, StorageError};

use chrono::{DateTime, FixedOffset, Utc};
use horologium_core::time::{HostTime, Instant};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = "now")]
    fn date_now() -> f64;

    #[wasm_bindgen(js_name = "Date")]
    type JsDate;

    #[wasm_bindgen(constructor, js_class = "Date")]
    fn new() -> JsDate;

    #[wasm_bindgen(method, js_class = "Date", js_name = "getTimezoneOffset")]
    fn get_timezone_offset(this: &JsDate) -> f64;
}

/// Returns the current host time from `performance.now()`, in whole
/// milliseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = interval::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "performance.now() returns small positive f64; ms fits in u64"
    )]
    let ms = ms as u64;
    HostTime(ms)
}

/// Returns the browser's wall-clock time in its current UTC offset.
#[must_use]
pub fn wall_clock() -> Instant {
    let offset_minutes = JsDate::new().get_timezone_offset();
    instant_from_js(date_now(), offset_minutes)
        .unwrap_or_else(|| DateTime::<Utc>::default().fixed_offset())
}

/// Builds an [`Instant`] from a JS epoch-millisecond timestamp and a
/// `getTimezoneOffset()` value (minutes *behind* UTC, so UTC+2 is `-120`).
///
/// Returns `None` for timestamps or offsets chrono cannot represent.
#[must_use]
pub fn instant_from_js(epoch_millis: f64, timezone_offset_minutes: f64) -> Option<Instant> {
    if !epoch_millis.is_finite() || !timezone_offset_minutes.is_finite() {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "JS timestamps are integral and within ±8.64e15 ms"
    )]
    let millis = epoch_millis as i64;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "timezone offsets are whole minutes within a day"
    )]
    let offset_secs = (timezone_offset_minutes * 60.0) as i32;
    let offset = FixedOffset::west_opt(offset_secs)?;
    Some(DateTime::from_timestamp_millis(millis)?.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn offset_is_west_positive() {
        // 2001-09-09T01:46:40Z seen from UTC+2.
        let instant = instant_from_js(1_000_000_000_000.0, -120.0).unwrap();
        assert_eq!(instant.timestamp(), 1_000_000_000);
        assert_eq!(instant.offset().local_minus_utc(), 7200);
        assert_eq!(instant.hour(), 3);
    }

    #[test]
    fn keeps_milliseconds() {
        let instant = instant_from_js(1500.0, 0.0).unwrap();
        assert_eq!(instant.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn rejects_unrepresentable_inputs() {
        assert_eq!(instant_from_js(f64::NAN, 0.0), None);
        assert_eq!(instant_from_js(0.0, 60.0 * 24.0), None);
    }
}
