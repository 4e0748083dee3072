//! Time points tagged with their time scale.
//!
//! An [`Instant`] counts seconds and nanoseconds from 1970-01-01T00:00:00 *of
//! its own scale*: a TT instant of zero seconds is 1970-01-01 00:00:00 TT. No
//! leap seconds are embedded in the count, so calendar conversion is plain
//! 86400-second-day arithmetic in every scale. Changing scale is the
//! converter's job; constructing an instant never does it.

use crate::calendar::{CalendarDate, CalendarDateTime};
use crate::{TimeError, TimeResult};
use nutation_core::constants::{NANOSECONDS_PER_SECOND, SECONDS_PER_DAY};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeScale {
    TT,
    UTC,
    UT1,
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeScale::TT => "TT",
            TimeScale::UTC => "UTC",
            TimeScale::UT1 => "UT1",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instant {
    seconds: i64,
    nanos: u32,
    scale: TimeScale,
}

impl Instant {
    /// Creates an instant, carrying whole seconds out of `nanos`.
    pub fn new(seconds: i64, nanos: u32, scale: TimeScale) -> Self {
        Self {
            seconds: seconds + (nanos / NANOSECONDS_PER_SECOND) as i64,
            nanos: nanos % NANOSECONDS_PER_SECOND,
            scale,
        }
    }

    pub fn from_calendar(dt: &CalendarDateTime, scale: TimeScale) -> Self {
        let seconds = dt.date().days_since_unix_epoch() * SECONDS_PER_DAY + dt.second_of_day() as i64;
        Self::new(seconds, dt.nanosecond(), scale)
    }

    /// Reads the system clock and tags the reading with `scale`.
    ///
    /// The reading is not converted: `Instant::now(TimeScale::TT)` treats the
    /// clock's civil seconds as TT.
    pub fn now(scale: TimeScale) -> TimeResult<Self> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::ClockUnavailable(e.to_string()))?;
        let seconds = i64::try_from(elapsed.as_secs())
            .map_err(|e| TimeError::ClockUnavailable(e.to_string()))?;
        Ok(Self::new(seconds, elapsed.subsec_nanos(), scale))
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Same count of seconds relabelled with another scale.
    pub fn with_scale(&self, scale: TimeScale) -> Self {
        Self { scale, ..*self }
    }

    /// Shifts by a (possibly fractional, possibly negative) number of seconds,
    /// rounded to the nearest nanosecond.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        let per_second = NANOSECONDS_PER_SECOND as i128;
        let total = self.seconds as i128 * per_second
            + self.nanos as i128
            + (seconds * NANOSECONDS_PER_SECOND as f64).round() as i128;
        Self {
            seconds: total.div_euclid(per_second) as i64,
            nanos: total.rem_euclid(per_second) as u32,
            scale: self.scale,
        }
    }

    /// Broken-down calendar date/time in the instant's own scale.
    pub fn calendar(&self) -> CalendarDateTime {
        let days = self.seconds.div_euclid(SECONDS_PER_DAY);
        let second_of_day = self.seconds.rem_euclid(SECONDS_PER_DAY) as u32;
        CalendarDateTime::from_parts(CalendarDate::from_days(days), second_of_day, self.nanos)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.calendar(), self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_nanoseconds() {
        let i = Instant::new(10, 2_500_000_000, TimeScale::TT);
        assert_eq!(i.seconds(), 12);
        assert_eq!(i.nanos(), 500_000_000);
    }

    #[test]
    fn test_calendar_round_trip() {
        let dt = CalendarDateTime::new(2020, 11, 10, 23, 59, 58, 123_456_789).unwrap();
        let instant = Instant::from_calendar(&dt, TimeScale::TT);
        assert_eq!(instant.calendar(), dt);
    }

    #[test]
    fn test_pre_epoch_calendar() {
        let dt = CalendarDateTime::new(1969, 12, 31, 23, 59, 59, 0).unwrap();
        let instant = Instant::from_calendar(&dt, TimeScale::UTC);
        assert_eq!(instant.seconds(), -1);
        assert_eq!(instant.calendar(), dt);
    }

    #[test]
    fn test_add_seconds_carries_across_day() {
        let dt = CalendarDateTime::new(2016, 12, 31, 23, 59, 30, 0).unwrap();
        let shifted = Instant::from_calendar(&dt, TimeScale::UTC).add_seconds(69.184);
        assert_eq!(shifted.calendar().to_string(), "2017-01-01 00:00:39.184");
        assert_eq!(shifted.nanos(), 184_000_000);
    }

    #[test]
    fn test_add_negative_fraction() {
        let i = Instant::new(100, 100_000_000, TimeScale::UT1).add_seconds(-0.4);
        assert_eq!((i.seconds(), i.nanos()), (99, 700_000_000));
        assert_eq!(i.scale(), TimeScale::UT1);
    }

    #[test]
    fn test_with_scale_keeps_count() {
        let i = Instant::new(5, 6, TimeScale::UTC).with_scale(TimeScale::TT);
        assert_eq!((i.seconds(), i.nanos(), i.scale()), (5, 6, TimeScale::TT));
    }

    #[test]
    fn test_now_reads_clock() {
        let now = Instant::now(TimeScale::TT).unwrap();
        assert!(now.calendar().year() >= 2024);
        assert_eq!(now.scale(), TimeScale::TT);
    }
}
