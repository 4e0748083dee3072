/// TT − TAI in seconds, fixed by definition.
pub const TT_MINUS_TAI_SECONDS: f64 = 32.184;

pub const SECONDS_PER_MINUTE: u32 = 60;

pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
pub const DAYS_FROM_CIVIL_EPOCH_TO_UNIX: i64 = 719_468;

/// Longest accepted command-line timestamp: `YYYYMMDDHHMMSS` + 9 fraction digits.
pub const MAX_TIMESTAMP_DIGITS: usize = 23;

/// Digits of the mandatory `YYYYMMDDHHMMSS` part.
pub const CALENDAR_TIMESTAMP_DIGITS: usize = 14;
