//! Date-keyed correction tables.
//!
//! Both tables map an effective date to an offset in seconds and answer the
//! same query: the latest entry whose effective date is on or before the
//! queried date.

pub mod dut1;
pub mod leap_seconds;

pub use dut1::{Dut1Entry, Dut1Table};
pub use leap_seconds::{LeapSecondEntry, LeapSecondTable};

use crate::calendar::CalendarDate;
use nutation_core::data::DataRow;
use nutation_core::NutationError;

/// Reads the `YYYYMMDD value` pair of a table row.
pub(crate) fn dated_value(row: &DataRow<'_>) -> Result<(CalendarDate, f64), NutationError> {
    row.expect_len(2)?;
    let date = CalendarDate::from_yyyymmdd(row.fields()[0])
        .map_err(|e| row.malformed(&format!("field 1: {}", e)))?;
    Ok((date, row.parse(1)?))
}

/// Index of the entry in effect on `date`, given ascending effective dates.
pub(crate) fn effective_index<T>(
    entries: &[T],
    date: &CalendarDate,
    effective: impl Fn(&T) -> CalendarDate,
) -> Option<usize> {
    entries
        .partition_point(|entry| effective(entry) <= *date)
        .checked_sub(1)
}
