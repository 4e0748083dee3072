use super::{dated_value, effective_index};
use crate::calendar::CalendarDate;
use crate::{TimeError, TimeResult};
use nutation_core::data::{data_rows, read_table_file, source_label};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UT1−UTC in force from `effective` onwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dut1Entry {
    pub effective: CalendarDate,
    pub ut1_minus_utc: f64,
}

/// Step-wise DUT1 values as published in IERS Bulletin D.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dut1Table {
    entries: Vec<Dut1Entry>,
}

impl Dut1Table {
    pub fn new(mut entries: Vec<Dut1Entry>) -> Self {
        entries.sort_by_key(|entry| entry.effective);
        Self { entries }
    }

    pub fn parse(source: &str, content: &str) -> TimeResult<Self> {
        let entries = data_rows(source, content)
            .map(|row| -> TimeResult<Dut1Entry> {
                let (effective, ut1_minus_utc) = dated_value(&row)?;
                Ok(Dut1Entry {
                    effective,
                    ut1_minus_utc,
                })
            })
            .collect::<TimeResult<Vec<_>>>()?;
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> TimeResult<Self> {
        let table = Self::parse(&source_label(path), &read_table_file(path)?)?;
        log::debug!(
            "loaded {} DUT1 entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn entries(&self) -> &[Dut1Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// UT1−UTC in seconds on `date`.
    pub fn lookup(&self, date: &CalendarDate) -> TimeResult<f64> {
        effective_index(&self.entries, date, |entry| entry.effective)
            .map(|idx| self.entries[idx].ut1_minus_utc)
            .ok_or(TimeError::NoApplicableEntry {
                table: "DUT1",
                date: *date,
            })
    }
}
