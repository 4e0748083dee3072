//! The computed nutation angles.

use crate::constants::{ARCSEC_PER_DEGREE, RAD_TO_DEG};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nutation in longitude and in obliquity, in radians.
///
/// Valid only for the epoch whose Julian Century Number produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutationResult {
    /// Nutation in longitude (Δψ), measured along the ecliptic.
    pub delta_psi: f64,

    /// Nutation in obliquity (Δε).
    pub delta_eps: f64,
}

impl NutationResult {
    pub fn delta_psi_degrees(&self) -> f64 {
        self.delta_psi * RAD_TO_DEG
    }

    pub fn delta_eps_degrees(&self) -> f64 {
        self.delta_eps * RAD_TO_DEG
    }

    /// Δψ in arcseconds, derived from the degree value.
    pub fn delta_psi_arcseconds(&self) -> f64 {
        self.delta_psi_degrees() * ARCSEC_PER_DEGREE
    }

    /// Δε in arcseconds, derived from the degree value.
    pub fn delta_eps_arcseconds(&self) -> f64 {
        self.delta_eps_degrees() * ARCSEC_PER_DEGREE
    }
}
