// SPDX-License-Identifier: MIT

//!
//! The OpenGantt date type and the calendar arithmetic built on it
//!

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The format of every date stamp accepted by OpenGantt (e.g. `2016-02-25`)
pub const DATE_STAMP_FORMAT: &str = "%Y-%m-%d";

/// The stamp that stands for "today" wherever an end date is expected
pub const TODAY_SENTINEL: &str = "-";

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The stamp isn't a `YYYY-MM-DD` calendar date
    #[error("`{0}` is not a YYYY-MM-DD date")]
    Malformed(String),

    /// Day arithmetic left the range chrono can represent
    #[error("Date arithmetic overflowed")]
    OutOfRange,
}

/// The OpenGantt date type.  A calendar day with no time of day attached
/// (equivalent to midnight UTC).
#[derive(
    derive_more::Display, Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash,
)]
pub struct Date(NaiveDate);

impl Date {
    /// Parse a `YYYY-MM-DD` stamp
    pub fn from_stamp(stamp: &str) -> Result<Self, DateError> {
        if !has_stamp_shape(stamp) {
            return Err(DateError::Malformed(stamp.to_string()));
        }
        NaiveDate::parse_from_str(stamp, DATE_STAMP_FORMAT)
            .map(Date)
            .map_err(|_| DateError::Malformed(stamp.to_string()))
    }

    /// Create a date from its parts if they make a real calendar day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| DateError::Malformed(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Today's date in UTC
    pub fn today() -> Self {
        Date(chrono::Utc::now().date_naive())
    }

    /// The date `days` days later (or earlier, if negative)
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Date).ok_or(DateError::OutOfRange)
    }

    /// Whole days from `earlier` to `self` (negative if `self` comes first)
    pub fn days_since(&self, earlier: Date) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// The calendar year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Three letter English month name (e.g. `Feb`)
    pub fn month_abbreviation(&self) -> &'static str {
        match self.0.month() {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            _ => "Dec",
        }
    }

    /// ISO 8601 week number (1 to 53)
    pub fn iso_week(&self) -> u32 {
        self.0.iso_week().week()
    }

    /// Whether the date falls on a Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Date(value)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stamp = String::deserialize(deserializer)?;
        Date::from_stamp(&stamp).map_err(serde::de::Error::custom)
    }
}

/// Exactly `DDDD-DD-DD` (chrono alone accepts signs and single digits)
fn has_stamp_shape(stamp: &str) -> bool {
    stamp.len() == 10
        && stamp.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Resolve an end stamp: [`TODAY_SENTINEL`] becomes `today`, anything else is
/// parsed as a normal stamp
pub fn resolve_end(stamp: &str, today: Date) -> Result<Date, DateError> {
    if stamp.trim() == TODAY_SENTINEL {
        Ok(today)
    } else {
        Date::from_stamp(stamp)
    }
}

/// The zero-based offset of `date` within the inclusive `[first, last]` range,
/// or `None` if it lies outside it
pub fn day_index(date: Date, first: Date, last: Date) -> Option<i64> {
    if date < first || date > last {
        return None;
    }
    Some(date.days_since(first))
}

/// Walk the range one day at a time until `date` is found.  Linear in the
/// length of the range; [`day_index`] gives the same answers directly.
pub fn day_index_by_scan(date: Date, first: Date, last: Date) -> Option<i64> {
    let mut current = first;
    let mut index = 0;
    loop {
        if current == date {
            return Some(index);
        }
        if current >= last {
            return None;
        }
        current = current.add_days(1).ok()?;
        index += 1;
    }
}
