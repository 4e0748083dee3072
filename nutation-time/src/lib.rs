//! Time scales and Julian centuries for nutation evaluation.
//!
//! The pipeline entry point is [`TimeScaleConverter`]: it turns an [`Instant`]
//! tagged TT, UTC or UT1 into the Julian Century Number T of TT, using the
//! leap-second and DUT1 tables it borrows.
//!
//! ```
//! use nutation_time::{Dut1Table, Instant, LeapSecondTable, TimeScale, TimeScaleConverter};
//! use nutation_time::parsing::parse_timestamp;
//!
//! let leap = LeapSecondTable::parse("LEAP_SEC.txt", "19990101 32\n")?;
//! let dut1 = Dut1Table::default();
//! let converter = TimeScaleConverter::new(&leap, &dut1);
//!
//! let tt = Instant::from_calendar(&parse_timestamp("20000101120000")?, TimeScale::TT);
//! assert_eq!(converter.julian_century_number(&tt)?, 0.0);
//! assert_eq!(converter.calendar_string(&tt), "2000-01-01 12:00:00.000");
//! # Ok::<(), nutation_time::TimeError>(())
//! ```

pub mod calendar;
pub mod constants;
pub mod converter;
pub mod instant;
pub mod julian;
pub mod parsing;
pub mod tables;

pub use calendar::{CalendarDate, CalendarDateTime};
pub use converter::TimeScaleConverter;
pub use instant::{Instant, TimeScale};
pub use julian::JulianDate;
pub use tables::{Dut1Entry, Dut1Table, LeapSecondEntry, LeapSecondTable};

use nutation_core::NutationError;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Timestamp string too long, too short or not all digits.
    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("System clock unavailable: {0}")]
    ClockUnavailable(String),

    /// Calendar field out of range (month 13, day 32, hour 24, ...).
    #[error("Invalid calendar value {year:04}-{month:02}-{day:02}: {message}")]
    InvalidCalendarValue {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// Queried date precedes the first entry of a correction table.
    #[error("No applicable {table} entry for {date}")]
    NoApplicableEntry {
        table: &'static str,
        date: CalendarDate,
    },

    /// Table loading failure.
    #[error(transparent)]
    Data(#[from] NutationError),
}

impl TimeError {
    pub fn invalid_calendar(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidCalendarValue {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_calendar_display() {
        let err = TimeError::invalid_calendar(2000, 13, 1, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid calendar value 2000-13-01: month out of range"
        );
    }

    #[test]
    fn test_no_applicable_entry_display() {
        let err = TimeError::NoApplicableEntry {
            table: "leap-second",
            date: CalendarDate::new(1960, 1, 1).unwrap(),
        };
        assert_eq!(err.to_string(), "No applicable leap-second entry for 1960-01-01");
    }

    #[test]
    fn test_data_error_is_transparent() {
        let err: TimeError = NutationError::data_unavailable("DUT1.txt", "denied").into();
        assert_eq!(err.to_string(), "Data unavailable (DUT1.txt): denied");
    }
}
