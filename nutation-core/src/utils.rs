//! Julian Date to Julian centuries conversion.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// The two-part split preserves precision. Typically `jd1` holds the Julian
/// Date of 0h on the calendar day and `jd2` the fraction of that day.
///
/// ```
/// use nutation_core::utils::jd_to_centuries;
/// use nutation_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, DAYS_PER_JULIAN_CENTURY), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}
