// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::Error;

/// The zoom level of a calendar view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CalendarInterval {
    /// A full month, padded to whole ISO weeks.
    #[default]
    #[serde(rename = "month")]
    #[cfg_attr(feature = "clap", value(name = "month"))]
    Month,

    /// The ISO week of the anchor and the one after it.
    #[serde(rename = "2weeks")]
    #[cfg_attr(feature = "clap", value(name = "2weeks"))]
    TwoWeeks,

    /// The ISO week of the anchor.
    #[serde(rename = "week")]
    #[cfg_attr(feature = "clap", value(name = "week"))]
    Week,

    /// The anchor and the two days after it.
    #[serde(rename = "3days")]
    #[cfg_attr(feature = "clap", value(name = "3days"))]
    ThreeDays,

    /// The anchor only.
    #[serde(rename = "day")]
    #[cfg_attr(feature = "clap", value(name = "day"))]
    Day,
}

impl CalendarInterval {
    /// All intervals, from the widest to the narrowest.
    pub const ALL: [CalendarInterval; 5] = [
        CalendarInterval::Month,
        CalendarInterval::TwoWeeks,
        CalendarInterval::Week,
        CalendarInterval::ThreeDays,
        CalendarInterval::Day,
    ];

    /// The stable name of the interval.
    pub const fn as_str(self) -> &'static str {
        match self {
            CalendarInterval::Month => "month",
            CalendarInterval::TwoWeeks => "2weeks",
            CalendarInterval::Week => "week",
            CalendarInterval::ThreeDays => "3days",
            CalendarInterval::Day => "day",
        }
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| Error::UnknownInterval(s.to_owned()))
    }
}

/// Whether the string names a calendar interval.
pub fn is_calendar_interval(value: &str) -> bool {
    value.parse::<CalendarInterval>().is_ok()
}

/// Moves a date forward by one step of the interval.
///
/// NOTE: the step of [`CalendarInterval::ThreeDays`] is a single day.
pub fn add_interval(date: Date, interval: CalendarInterval) -> Date {
    match interval {
        CalendarInterval::Month => date.saturating_add(1.month()),
        CalendarInterval::TwoWeeks => date.saturating_add(2.weeks()),
        CalendarInterval::Week => date.saturating_add(1.week()),
        CalendarInterval::ThreeDays | CalendarInterval::Day => date.saturating_add(1.day()),
    }
}

/// Moves a date backward by one step of the interval.
///
/// NOTE: the step of [`CalendarInterval::ThreeDays`] is a single day.
pub fn subtract_interval(date: Date, interval: CalendarInterval) -> Date {
    match interval {
        CalendarInterval::Month => date.saturating_sub(1.month()),
        CalendarInterval::TwoWeeks => date.saturating_sub(2.weeks()),
        CalendarInterval::Week => date.saturating_sub(1.week()),
        CalendarInterval::ThreeDays | CalendarInterval::Day => date.saturating_sub(1.day()),
    }
}

/// The Monday of the ISO week containing the date.
pub fn start_of_iso_week(date: Date) -> Date {
    let offset = date.weekday().to_monday_zero_offset();
    date.saturating_sub(offset.days())
}

/// The Sunday of the ISO week containing the date.
pub fn end_of_iso_week(date: Date) -> Date {
    let offset = date.weekday().to_monday_zero_offset();
    date.saturating_add((6 - offset).days())
}

/// A closed range of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DateInterval {
    /// First day, inclusive.
    pub start: Date,

    /// Last day, inclusive.
    pub end: Date,
}

impl DateInterval {
    /// Creates an interval, swapping the bounds if they are reversed.
    pub fn new(start: Date, end: Date) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Number of days in the interval, both ends included.
    pub fn days(&self) -> i64 {
        i64::from((self.end - self.start).get_days()) + 1
    }

    /// Whether the day falls within the interval.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The visible window of a calendar for the anchor date and interval.
pub fn compute_date_interval(anchor: Date, interval: CalendarInterval) -> DateInterval {
    let (start, end) = match interval {
        CalendarInterval::Month => (
            start_of_iso_week(anchor.first_of_month()),
            end_of_iso_week(anchor.last_of_month()),
        ),
        CalendarInterval::TwoWeeks => (
            start_of_iso_week(anchor),
            end_of_iso_week(anchor.saturating_add(1.week())),
        ),
        CalendarInterval::Week => (start_of_iso_week(anchor), end_of_iso_week(anchor)),
        CalendarInterval::ThreeDays => (anchor, anchor.saturating_add(2.days())),
        CalendarInterval::Day => (anchor, anchor),
    };
    DateInterval { start, end }
}
