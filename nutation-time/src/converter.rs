//! Conversion of tagged instants to the Julian Century Number of TT.
//!
//! - TT input is used as is.
//! - UTC input gets TAI−UTC (from the leap-second table at the UTC date) plus
//!   the fixed TT−TAI offset.
//! - UT1 input first becomes UTC by subtracting DUT1 (looked up at the UT1
//!   date), then follows the UTC path.

use crate::calendar::CalendarDate;
use crate::constants::TT_MINUS_TAI_SECONDS;
use crate::instant::{Instant, TimeScale};
use crate::julian::JulianDate;
use crate::tables::{Dut1Table, LeapSecondTable};
use crate::TimeResult;

#[derive(Debug, Clone, Copy)]
pub struct TimeScaleConverter<'a> {
    leap_seconds: &'a LeapSecondTable,
    dut1: &'a Dut1Table,
}

impl<'a> TimeScaleConverter<'a> {
    pub fn new(leap_seconds: &'a LeapSecondTable, dut1: &'a Dut1Table) -> Self {
        Self { leap_seconds, dut1 }
    }

    pub fn tai_minus_utc(&self, date: &CalendarDate) -> TimeResult<f64> {
        self.leap_seconds.lookup(date)
    }

    pub fn ut1_minus_utc(&self, date: &CalendarDate) -> TimeResult<f64> {
        self.dut1.lookup(date)
    }

    /// Re-expresses `instant` in TT. TT instants are returned unchanged and
    /// never touch the tables.
    pub fn to_tt(&self, instant: &Instant) -> TimeResult<Instant> {
        match instant.scale() {
            TimeScale::TT => Ok(*instant),
            TimeScale::UTC => self.utc_to_tt(instant),
            TimeScale::UT1 => {
                let dut1 = self.ut1_minus_utc(&instant.calendar().date())?;
                let utc = instant.add_seconds(-dut1).with_scale(TimeScale::UTC);
                log::trace!("UT1 {} -> UTC {} (DUT1 {} s)", instant, utc, dut1);
                self.utc_to_tt(&utc)
            }
        }
    }

    fn utc_to_tt(&self, utc: &Instant) -> TimeResult<Instant> {
        let tai_minus_utc = self.tai_minus_utc(&utc.calendar().date())?;
        let tt = utc
            .add_seconds(tai_minus_utc + TT_MINUS_TAI_SECONDS)
            .with_scale(TimeScale::TT);
        log::trace!("UTC {} -> TT {} (TAI-UTC {} s)", utc, tt, tai_minus_utc);
        Ok(tt)
    }

    /// Two-part Julian Date of `instant` in its own scale.
    pub fn julian_date(&self, instant: &Instant) -> JulianDate {
        JulianDate::from_calendar_datetime(&instant.calendar())
    }

    /// Julian centuries of TT elapsed since J2000.0.
    pub fn julian_century_number(&self, instant: &Instant) -> TimeResult<f64> {
        let tt = self.to_tt(instant)?;
        Ok(self.julian_date(&tt).centuries_since_j2000())
    }

    /// `YYYY-MM-DD HH:MM:SS.mmm` of `instant` in its own scale.
    pub fn calendar_string(&self, instant: &Instant) -> String {
        instant.calendar().to_string()
    }
}
