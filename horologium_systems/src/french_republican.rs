// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The French Republican calendar with decimal time.
//!
//! Each year starts on 22 September and is numbered from the founding of the
//! Republic in 1792 (An I). It has twelve months of thirty days, each split
//! into three ten-day *décades*, followed by five complementary days (six in
//! years that run into a Gregorian leap day).

use alloc::format;
use alloc::string::String;

use chrono::{Datelike, NaiveDate};
use horologium_core::display::{Display, Split};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;

use crate::civil::{DecimalTime, roman};

/// Gregorian year of 1 Vendémiaire An I is this plus one.
const EPOCH_OFFSET: i32 = 1791;

const MONTHS: [&str; 12] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
];

const DECADE_DAYS: [&str; 10] = [
    "Primidi", "Duodi", "Tridi", "Quartidi", "Quintidi", "Sextidi", "Septidi", "Octidi", "Nonidi",
    "Décadi",
];

const COMPLEMENTARY_DAYS: [&str; 6] = [
    "Jour de la vertu",
    "Jour du génie",
    "Jour du travail",
    "Jour de l'opinion",
    "Jour des récompenses",
    "Jour de la révolution",
];

/// French Republican calendar date and decimal clock.
pub const FRENCH_REPUBLICAN: ProviderDef = ProviderDef::new("french-republican")
    .name("French Republican")
    .description("The revolutionary calendar of 1793, with ten-day weeks and decimal hours")
    .category(Category::Cultural)
    .tick_interval_ms(864)
    .learn_more_url("https://en.wikipedia.org/wiki/French_Republican_calendar")
    .format(format);

/// A day of the Republican year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RepublicanDay {
    /// `day` (1-based) of month `month` (0-based).
    InMonth { month: usize, day: u32 },
    /// One of the complementary days closing the year (0-based).
    Complementary(usize),
}

/// Converts a Gregorian date into a Republican year and day.
pub(crate) fn republican_date(date: NaiveDate) -> (i32, RepublicanDay) {
    let start_year = if (date.month(), date.day()) >= (9, 22) {
        date.year()
    } else {
        date.year() - 1
    };
    let day_of_year = NaiveDate::from_ymd_opt(start_year, 9, 22)
        .map_or(0, |start| date.signed_duration_since(start).num_days());
    let day_of_year = u32::try_from(day_of_year).unwrap_or_default();

    let day = if day_of_year < 360 {
        RepublicanDay::InMonth {
            month: (day_of_year / 30) as usize,
            day: day_of_year % 30 + 1,
        }
    } else {
        RepublicanDay::Complementary((day_of_year - 360) as usize)
    };
    (start_year - EPOCH_OFFSET, day)
}

fn day_name(day: RepublicanDay) -> String {
    match day {
        RepublicanDay::InMonth { month, day } => {
            let weekday = DECADE_DAYS[((day - 1) % 10) as usize];
            format!("{weekday} {day} {}", MONTHS[month])
        }
        RepublicanDay::Complementary(index) => COMPLEMENTARY_DAYS[index.min(5)].into(),
    }
}

fn format(instant: &Instant) -> Display {
    let (year, day) = republican_date(instant.date_naive());
    Split::new(day_name(day), DecimalTime::of(instant).formatted())
        .with_era(format!("An {}", roman(year)))
        .with_unit_labels(["heures", "minutes", "secondes"])
        .into()
}
