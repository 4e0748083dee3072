//! Proleptic Gregorian calendar arithmetic.
//!
//! Day counts are relative to 1970-01-01 so they line up with [`Instant`]
//! seconds. The conversion pair [`days_from_civil`] / [`civil_from_days`] uses
//! the era-based integer algorithm (400-year cycles starting on March 1st),
//! exact for every `i32` year.
//!
//! [`Instant`]: crate::Instant

use crate::constants::{DAYS_FROM_CIVIL_EPOCH_TO_UNIX, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::{TimeError, TimeResult};
use nutation_core::constants::NANOSECONDS_PER_SECOND;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// Days since 1970-01-01 of a (valid) calendar date.
pub fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let (m, d) = (month as i64, day as i64);
    let y = year as i64 - if m <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - DAYS_FROM_CIVIL_EPOCH_TO_UNIX
}

/// Calendar date of a day count since 1970-01-01.
pub fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + DAYS_FROM_CIVIL_EPOCH_TO_UNIX;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = (yoe + era * 400 + if month <= 2 { 1 } else { 0 }) as i32;
    (year, month, day)
}

/// A validated calendar date, ordered chronologically.
///
/// Used as the effective-date key of the correction tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8) -> TimeResult<Self> {
        let max_day = days_in_month(year, month).ok_or_else(|| {
            TimeError::invalid_calendar(year, month as i32, day as i32, "month out of range")
        })?;
        if day == 0 || day > max_day {
            return Err(TimeError::invalid_calendar(
                year,
                month as i32,
                day as i32,
                "day out of range",
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Parses an 8-digit `YYYYMMDD` field.
    pub fn from_yyyymmdd(s: &str) -> TimeResult<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::InputFormat(format!(
                "expected YYYYMMDD, found '{}'",
                s
            )));
        }
        let year = digits(&s[0..4]) as i32;
        let month = digits(&s[4..6]) as u8;
        let day = digits(&s[6..8]) as u8;
        Self::new(year, month, day)
    }

    pub fn from_days(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Days since 1970-01-01.
    pub fn days_since_unix_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Broken-down date and time with nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDateTime {
    date: CalendarDate,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl CalendarDateTime {
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> TimeResult<Self> {
        let date = CalendarDate::new(year, month, day)?;
        let out_of_range = |what: &str| {
            TimeError::invalid_calendar(year, month as i32, day as i32, what)
        };
        if hour > 23 {
            return Err(out_of_range(&format!("hour {} out of range", hour)));
        }
        if minute > 59 {
            return Err(out_of_range(&format!("minute {} out of range", minute)));
        }
        if second > 59 {
            return Err(out_of_range(&format!("second {} out of range", second)));
        }
        if nanosecond >= NANOSECONDS_PER_SECOND {
            return Err(out_of_range(&format!(
                "nanosecond {} out of range",
                nanosecond
            )));
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    pub(crate) fn from_parts(date: CalendarDate, second_of_day: u32, nanosecond: u32) -> Self {
        Self {
            date,
            hour: (second_of_day / SECONDS_PER_HOUR) as u8,
            minute: (second_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            second: (second_of_day % SECONDS_PER_MINUTE) as u8,
            nanosecond,
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year
    }

    pub fn month(&self) -> u8 {
        self.date.month
    }

    pub fn day(&self) -> u8 {
        self.date.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Whole seconds elapsed since 0h of the day.
    pub fn second_of_day(&self) -> u32 {
        self.hour as u32 * SECONDS_PER_HOUR
            + self.minute as u32 * SECONDS_PER_MINUTE
            + self.second as u32
    }
}

/// Canonical display form `YYYY-MM-DD HH:MM:SS.mmm` (milliseconds truncated).
impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}.{:03}",
            self.date,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond / 1_000_000
        )
    }
}

fn digits(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
}
