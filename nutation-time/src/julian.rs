use crate::calendar::CalendarDateTime;
use nutation_core::constants::{
    J2000_JD, MJD_ZERO_POINT, NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY_F64,
};
use nutation_core::utils::jd_to_centuries;
use std::fmt;

/// Two-part Julian Date: `jd1` is the JD of 0h of the calendar day, `jd2` the
/// fraction of that day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        // MJD of 0h on the given day (integer Gregorian algorithm, as eraCal2jd)
        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }

    pub fn from_calendar_datetime(dt: &CalendarDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 / NANOSECONDS_PER_SECOND_F64;
        Self::from_calendar(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), second)
    }

    /// Julian centuries from J2000.0 in this date's own time scale.
    pub fn centuries_since_j2000(&self) -> f64 {
        jd_to_centuries(self.jd1, self.jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}
