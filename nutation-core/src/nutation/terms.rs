//! Coefficient tables for the luni-solar and planetary nutation series.
//!
//! The two series have different row shapes and are never mixed, so each gets
//! its own record type:
//!
//! | Series | Multipliers | Amplitudes (0.1 µas) |
//! |--------|-------------|----------------------|
//! | [`LunisolarTerm`] | `l l' F D Ω` | `PS PST PC EC ECT ES` |
//! | [`PlanetaryTerm`] | `l l' F D Ω Me Ve Ea Ma Ju Sa Ur Ne pA` | `PS PC ES EC` |
//!
//! `PST` and `ECT` are secular rates in 0.1 µas per Julian century.
//!
//! Row order is preserved exactly as read: the evaluator sums in insertion
//! order, so a given table always yields bit-identical results.
//!
//! # File format
//!
//! ```text
//! # L L' F D Om          PS       PST      PC        EC     ECT      ES
//!   0  0 0 0  1  -172064161.0 -174666.0 33386.0 92052331.0 9086.0 15377.0
//! ```

use crate::data::{data_rows, read_table_file, source_label, DataRow};
use crate::errors::AstroResult;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fields in a luni-solar row: 5 multipliers + 6 amplitudes.
pub const LUNISOLAR_FIELDS: usize = 11;

/// Number of fields in a planetary row: 14 multipliers + 4 amplitudes.
pub const PLANETARY_FIELDS: usize = 18;

/// One term of the luni-solar series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LunisolarTerm {
    /// Multipliers of `[l, l', F, D, Ω]`.
    pub multipliers: [i32; 5],
    /// Δψ sine amplitude.
    pub ps: f64,
    /// Δψ sine amplitude rate per century.
    pub pst: f64,
    /// Δψ cosine amplitude.
    pub pc: f64,
    /// Δε cosine amplitude.
    pub ec: f64,
    /// Δε cosine amplitude rate per century.
    pub ect: f64,
    /// Δε sine amplitude.
    pub es: f64,
}

impl LunisolarTerm {
    fn from_row(row: &DataRow<'_>) -> AstroResult<Self> {
        row.expect_len(LUNISOLAR_FIELDS)?;
        let mut multipliers = [0i32; 5];
        for (i, m) in multipliers.iter_mut().enumerate() {
            *m = row.parse(i)?;
        }
        Ok(Self {
            multipliers,
            ps: row.parse(5)?,
            pst: row.parse(6)?,
            pc: row.parse(7)?,
            ec: row.parse(8)?,
            ect: row.parse(9)?,
            es: row.parse(10)?,
        })
    }
}

/// One term of the planetary series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetaryTerm {
    /// Multipliers of `[l, l', F, D, Ω, Me, Ve, Ea, Ma, Ju, Sa, Ur, Ne, pA]`.
    pub multipliers: [i32; 14],
    pub ps: f64,
    pub pc: f64,
    pub es: f64,
    pub ec: f64,
}

impl PlanetaryTerm {
    fn from_row(row: &DataRow<'_>) -> AstroResult<Self> {
        row.expect_len(PLANETARY_FIELDS)?;
        let mut multipliers = [0i32; 14];
        for (i, m) in multipliers.iter_mut().enumerate() {
            *m = row.parse(i)?;
        }
        Ok(Self {
            multipliers,
            ps: row.parse(14)?,
            pc: row.parse(15)?,
            es: row.parse(16)?,
            ec: row.parse(17)?,
        })
    }
}

/// Parses luni-solar rows from table text. `source` names the table in errors.
pub fn parse_lunisolar(source: &str, content: &str) -> AstroResult<Vec<LunisolarTerm>> {
    data_rows(source, content)
        .map(|row| LunisolarTerm::from_row(&row))
        .collect()
}

/// Parses planetary rows from table text. `source` names the table in errors.
pub fn parse_planetary(source: &str, content: &str) -> AstroResult<Vec<PlanetaryTerm>> {
    data_rows(source, content)
        .map(|row| PlanetaryTerm::from_row(&row))
        .collect()
}

/// Immutable luni-solar + planetary coefficient set.
///
/// Built once at startup and shared by reference with every evaluation.
/// Emptiness is not rejected here; the evaluator reports it as
/// [`NutationError::EmptyCoefficientTable`](crate::NutationError::EmptyCoefficientTable).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefficientTable {
    lunisolar: Vec<LunisolarTerm>,
    planetary: Vec<PlanetaryTerm>,
}

impl CoefficientTable {
    pub fn new(lunisolar: Vec<LunisolarTerm>, planetary: Vec<PlanetaryTerm>) -> Self {
        Self {
            lunisolar,
            planetary,
        }
    }

    /// Loads both series from their table files.
    pub fn load(lunisolar_path: &Path, planetary_path: &Path) -> AstroResult<Self> {
        let lunisolar = parse_lunisolar(
            &source_label(lunisolar_path),
            &read_table_file(lunisolar_path)?,
        )?;
        let planetary = parse_planetary(
            &source_label(planetary_path),
            &read_table_file(planetary_path)?,
        )?;
        log::debug!(
            "loaded {} luni-solar and {} planetary nutation terms",
            lunisolar.len(),
            planetary.len()
        );
        Ok(Self::new(lunisolar, planetary))
    }

    pub fn lunisolar(&self) -> &[LunisolarTerm] {
        &self.lunisolar
    }

    pub fn planetary(&self) -> &[PlanetaryTerm] {
        &self.planetary
    }
}
