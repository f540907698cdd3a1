// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared civil-time arithmetic.
//!
//! Everything here works on the local wall-clock reading of an [`Instant`]
//! (its own fixed offset) unless the name says UTC. Sub-day quantities are
//! derived from whole milliseconds so no floating-point rounding leaks into
//! the integer fields.

use alloc::format;
use alloc::string::{String, ToString};

use chrono::{Datelike, Timelike, Weekday};
use horologium_core::time::Instant;

/// Milliseconds in a civil day.
pub(crate) const MILLIS_PER_DAY: u32 = 86_400_000;

/// Decimal seconds in a day (10 h × 100 min × 100 s).
pub(crate) const DECIMAL_SECONDS_PER_DAY: u32 = 100_000;

pub(crate) const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday name.
pub(crate) const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Milliseconds since local midnight, in `0..MILLIS_PER_DAY`.
///
/// A leap second is folded into the last millisecond of its minute.
pub(crate) fn millis_of_day(instant: &Instant) -> u32 {
    let time = instant.time();
    let subsec = time.nanosecond().min(999_999_999) / 1_000_000;
    time.num_seconds_from_midnight() * 1000 + subsec
}

/// Milliseconds since UTC midnight, in `0..MILLIS_PER_DAY`.
pub(crate) fn utc_millis_of_day(instant: &Instant) -> u32 {
    let secs = instant.timestamp().rem_euclid(86_400);
    let secs = u32::try_from(secs).unwrap_or_default();
    let subsec = instant.timestamp_subsec_millis().min(999);
    secs * 1000 + subsec
}

/// Local time of day in decimal units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DecimalTime {
    pub(crate) hours: u32,
    pub(crate) minutes: u32,
    pub(crate) seconds: u32,
    /// Decimal seconds since midnight, with the fractional part kept.
    pub(crate) total: f64,
}

impl DecimalTime {
    pub(crate) fn of(instant: &Instant) -> Self {
        let ms = millis_of_day(instant);
        let whole = u64::from(ms) * u64::from(DECIMAL_SECONDS_PER_DAY) / u64::from(MILLIS_PER_DAY);
        let whole = u32::try_from(whole).unwrap_or_default();
        Self {
            hours: whole / 10_000,
            minutes: whole % 10_000 / 100,
            seconds: whole % 100,
            total: f64::from(ms) * f64::from(DECIMAL_SECONDS_PER_DAY) / f64::from(MILLIS_PER_DAY),
        }
    }

    /// `h:mm:ss` rendering.
    pub(crate) fn formatted(&self) -> String {
        format!("{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// `Weekday, Month D, YYYY` using the local calendar date, with the year
/// shifted by `year_offset`.
pub(crate) fn long_date(instant: &Instant, year_offset: i32) -> String {
    let date = instant.date_naive();
    let month = MONTHS[date.month0() as usize];
    format!(
        "{}, {month} {}, {}",
        weekday_name(date.weekday()),
        date.day(),
        date.year() + year_offset
    )
}

/// Upper-case Roman numeral for `n`.
///
/// Values outside `1..=3999` have no standard numeral and are written in
/// decimal.
pub(crate) fn roman(n: i32) -> String {
    const TABLE: [(i32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    if !(1..=3999).contains(&n) {
        return n.to_string();
    }
    let mut rest = n;
    let mut out = String::new();
    for (value, numeral) in TABLE {
        while rest >= value {
            out.push_str(numeral);
            rest -= value;
        }
    }
    out
}
