// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display model: the closed set of shapes a formatted time can take.
//!
//! A [`Display`] is produced fresh by a provider on every tick and consumed
//! immediately by the [renderer](crate::render). It carries no
//! identity across ticks.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Separator painted between the date and time blocks of a [`Split`]
/// display when none is given.
pub const DEFAULT_SPLIT_SEPARATOR: &str = " \u{2022} ";

/// Separator painted between consecutive [`Segment`]s when none is given.
pub const DEFAULT_SEGMENT_SEPARATOR: &str = ":";

/// A formatted time value.
#[derive(Clone, Debug, PartialEq)]
pub enum Display {
    /// A single formatted scalar (e.g. an epoch count).
    Unified(Unified),
    /// A calendar date paired with a clock time.
    Split(Split),
    /// An ordered breakdown into labelled segments.
    Segmented(Segmented),
}

impl Display {
    /// Returns the stable name of this variant.
    ///
    /// Used as the styling class of the render target.
    #[must_use]
    pub const fn kind(&self) -> DisplayKind {
        match self {
            Self::Unified(_) => DisplayKind::Unified,
            Self::Split(_) => DisplayKind::Split,
            Self::Segmented(_) => DisplayKind::Segmented,
        }
    }
}

impl From<Unified> for Display {
    fn from(value: Unified) -> Self {
        Self::Unified(value)
    }
}

impl From<Split> for Display {
    fn from(value: Split) -> Self {
        Self::Split(value)
    }
}

impl From<Segmented> for Display {
    fn from(value: Segmented) -> Self {
        Self::Segmented(value)
    }
}

/// Fieldless mirror of the [`Display`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    /// See [`Display::Unified`].
    Unified,
    /// See [`Display::Split`].
    Split,
    /// See [`Display::Segmented`].
    Segmented,
}

impl DisplayKind {
    /// The class name tagged onto a render target showing this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Unified => "time-display unified",
            Self::Split => "time-display split",
            Self::Segmented => "time-display segmented",
        }
    }
}

/// A single formatted scalar with optional decorations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Unified {
    /// The formatted value.
    pub value: String,
    /// Text painted immediately before the value (e.g. `@`).
    pub prefix: Option<String>,
    /// Text painted immediately after the value (e.g. ` ks`).
    pub suffix: Option<String>,
    /// A caption line below the value.
    pub label: Option<String>,
    /// A second, smaller caption line.
    pub sublabel: Option<String>,
}

impl Unified {
    /// Creates a unified display showing `value` with no decorations.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the sublabel.
    #[must_use]
    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }
}

/// The date half of a [`Split`] display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatePart {
    /// Formatted date text.
    pub formatted: String,
    /// Era designation appended after the date (e.g. `HE`).
    pub era: Option<String>,
}

/// The time half of a [`Split`] display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimePart {
    /// Formatted time text.
    pub formatted: String,
    /// Period designation appended after the time (e.g. `PM`).
    pub period: Option<String>,
    /// Names of the units shown in `formatted`, in order.
    pub unit_labels: Option<Vec<String>>,
}

/// A calendar date paired with a clock time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Split {
    /// The date block.
    pub date: DatePart,
    /// The time block.
    pub time: TimePart,
    /// Text between the blocks; [`DEFAULT_SPLIT_SEPARATOR`] when `None`.
    pub separator: Option<String>,
}

impl Split {
    /// Creates a split display from formatted date and time texts.
    #[must_use]
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: DatePart {
                formatted: date.into(),
                era: None,
            },
            time: TimePart {
                formatted: time.into(),
                period: None,
                unit_labels: None,
            },
            separator: None,
        }
    }

    /// Sets the era of the date block.
    #[must_use]
    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.date.era = Some(era.into());
        self
    }

    /// Sets the period of the time block.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.time.period = Some(period.into());
        self
    }

    /// Sets the unit labels of the time block.
    #[must_use]
    pub fn with_unit_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.time.unit_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// The separator that will be painted.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SPLIT_SEPARATOR)
    }
}

/// The value of a [`Segment`]: either preformatted text or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentValue {
    /// Preformatted text, painted as is.
    Text(String),
    /// A number, painted without a trailing `.0` when integral.
    Number(f64),
}

impl fmt::Display for SegmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<f64> for SegmentValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for SegmentValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for SegmentValue {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for SegmentValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// One labelled piece of a [`Segmented`] display.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The segment value.
    pub value: SegmentValue,
    /// Unit name shown with the value.
    pub label: String,
    /// Optional secondary caption.
    pub sublabel: Option<String>,
}

impl Segment {
    /// Creates a segment.
    #[must_use]
    pub fn new(value: impl Into<SegmentValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            sublabel: None,
        }
    }

    /// Sets the sublabel.
    #[must_use]
    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }
}

/// An ordered breakdown into labelled segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segmented {
    /// Segments in display order.
    pub segments: Vec<Segment>,
    /// Text between segments; [`DEFAULT_SEGMENT_SEPARATOR`] when `None`.
    pub separator: Option<String>,
}

impl Segmented {
    /// Creates a segmented display.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            separator: None,
        }
    }

    /// Overrides the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// The separator that will be painted.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or(DEFAULT_SEGMENT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Display::from(Unified::new("1")).kind(), DisplayKind::Unified);
        assert_eq!(Display::from(Split::new("d", "t")).kind(), DisplayKind::Split);
        assert_eq!(
            Display::from(Segmented::new(vec![])).kind(),
            DisplayKind::Segmented
        );
    }

    #[test]
    fn default_separators() {
        assert_eq!(Split::new("d", "t").separator(), " \u{2022} ");
        assert_eq!(Segmented::new(vec![]).separator(), ":");
        assert_eq!(Split::new("d", "t").with_separator(" | ").separator(), " | ");
    }

    #[test]
    fn segment_value_formats() {
        assert_eq!(SegmentValue::from(-7).to_string(), "-7");
        assert_eq!(SegmentValue::from(2.5).to_string(), "2.5");
        assert_eq!(SegmentValue::Number(40.0).to_string(), "40");
        assert_eq!(SegmentValue::from("07").to_string(), "07");
    }
}
