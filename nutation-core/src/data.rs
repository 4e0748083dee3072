//! Reader for the whitespace-separated text tables the evaluator consumes.
//!
//! All four input tables (leap seconds, DUT1, luni-solar and planetary
//! coefficients) share one layout: one row per line, fields separated by
//! ASCII whitespace, blank lines and `#` comment lines ignored.
//!
//! ```
//! use nutation_core::data::data_rows;
//!
//! let content = "# date offset\n19720101 10\n\n19720701 11\n";
//! let rows: Vec<_> = data_rows("LEAP_SEC.txt", content).collect();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[1].line(), 4);
//! assert_eq!(rows[1].parse::<f64>(1).unwrap(), 11.0);
//! ```

use crate::errors::{AstroResult, NutationError};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Reads a whole table file into memory.
///
/// Fails with [`NutationError::DataUnavailable`] when the file cannot be read.
pub fn read_table_file(path: &Path) -> AstroResult<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| NutationError::data_unavailable(&source_label(path), &e.to_string()))?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Short name used in diagnostics: the file name when there is one.
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One non-comment line of a table.
#[derive(Debug, Clone)]
pub struct DataRow<'a> {
    source: &'a str,
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> DataRow<'a> {
    /// 1-based line number within the source.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Fails unless the row has exactly `expected` fields.
    pub fn expect_len(&self, expected: usize) -> AstroResult<()> {
        if self.fields.len() != expected {
            return Err(self.malformed(&format!(
                "expected {} fields, found {}",
                expected,
                self.fields.len()
            )));
        }
        Ok(())
    }

    /// Parses field `index` as `T`.
    pub fn parse<T>(&self, index: usize) -> AstroResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self
            .fields
            .get(index)
            .ok_or_else(|| self.malformed(&format!("missing field {}", index + 1)))?;
        raw.parse::<T>()
            .map_err(|e| self.malformed(&format!("field {} ('{}'): {}", index + 1, raw, e)))
    }

    /// Builds a [`NutationError::DataMalformed`] pointing at this row.
    pub fn malformed(&self, reason: &str) -> NutationError {
        NutationError::data_malformed(self.source, self.line, reason)
    }
}

/// Iterates over the data rows of `content`, skipping blanks and `#` comments.
pub fn data_rows<'a>(source: &'a str, content: &'a str) -> impl Iterator<Item = DataRow<'a>> {
    content
        .lines()
        .enumerate()
        .filter_map(move |(idx, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Some(DataRow {
                source,
                line: idx + 1,
                fields: trimmed.split_ascii_whitespace().collect(),
            })
        })
}
