//! Error types for nutation evaluation and table loading.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`DataUnavailable`](NutationError::DataUnavailable) | a table file cannot be opened or read |
//! | [`DataMalformed`](NutationError::DataMalformed) | a table row has the wrong field count or an unparsable field |
//! | [`EmptyCoefficientTable`](NutationError::EmptyCoefficientTable) | a series has zero rows at evaluation time |
//!
//! None of these is recoverable within a single evaluation: a table that failed
//! to load or is empty cannot produce a meaningful Δψ/Δε.
//!
//! ```
//! use nutation_core::NutationError;
//!
//! let err = NutationError::data_malformed("dat_ls.txt", 3, "expected 11 fields, found 10");
//! assert_eq!(
//!     err.to_string(),
//!     "Malformed data in dat_ls.txt at line 3: expected 11 fields, found 10"
//! );
//! ```

use thiserror::Error;

/// Unified error type for the nutation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutationError {
    /// Source could not be opened or read.
    #[error("Data unavailable ({source_name}): {message}")]
    DataUnavailable {
        source_name: String,
        message: String,
    },

    /// A row did not parse to the expected field count or types.
    #[error("Malformed data in {source_name} at line {line}: {message}")]
    DataMalformed {
        source_name: String,
        line: usize,
        message: String,
    },

    /// A series table holds zero rows.
    #[error("Empty coefficient table: the {series} series has no terms")]
    EmptyCoefficientTable { series: &'static str },
}

/// Convenience alias for `Result<T, NutationError>`.
pub type AstroResult<T> = Result<T, NutationError>;

impl NutationError {
    /// Creates a [`DataUnavailable`](Self::DataUnavailable) error.
    pub fn data_unavailable(source_name: &str, reason: &str) -> Self {
        Self::DataUnavailable {
            source_name: source_name.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`DataMalformed`](Self::DataMalformed) error for a 1-based line.
    pub fn data_malformed(source_name: &str, line: usize, reason: &str) -> Self {
        Self::DataMalformed {
            source_name: source_name.to_string(),
            line,
            message: reason.to_string(),
        }
    }

    pub fn empty_table(series: &'static str) -> Self {
        Self::EmptyCoefficientTable { series }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_error() {
        let err = NutationError::data_unavailable("LEAP_SEC.txt", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Data unavailable (LEAP_SEC.txt): No such file or directory"
        );
    }

    #[test]
    fn test_data_malformed_error_carries_line() {
        let err = NutationError::data_malformed("dat_pl.txt", 12, "invalid integer 'x'");
        match &err {
            NutationError::DataMalformed { line, .. } => assert_eq!(*line, 12),
            other => panic!("unexpected variant {:?}", other),
        }
        assert!(err.to_string().contains("dat_pl.txt at line 12"));
    }

    #[test]
    fn test_empty_table_error() {
        let err = NutationError::empty_table("planetary");
        assert_eq!(
            err.to_string(),
            "Empty coefficient table: the planetary series has no terms"
        );
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<NutationError>();
        _assert_sync::<NutationError>();
    }
}
