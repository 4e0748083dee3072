//! Fundamental arguments for the IAU 2000A nutation series.
//!
//! Fundamental arguments are mean orbital angles of the Moon, Sun and planets.
//! Integer linear combinations of them form the arguments of every term in the
//! nutation series.
//!
//! Two trait-based interfaces are implemented on `f64`, the receiver being the
//! time in Julian centuries (TT) from J2000.0:
//!
//! - [`IERS2003FundamentalArgs`]: Delaunay arguments (quartic polynomials in
//!   arcseconds), planetary mean longitudes and the general precession.
//! - [`MHB2000PlanetaryArgs`]: the linear Delaunay approximations the MHB2000
//!   planetary series is tabulated against.
//!
//! Every method returns radians in `[0, 2π)`. Delaunay polynomials are evaluated
//! in arcseconds, converted to radians, then reduced with a non-negative modulo.
//!
//! # References
//!
//! - IERS Conventions (2003), Chapter 5
//! - Mathews, Herring & Buffett 2002, J. Geophys. Res. 107(B4)

use crate::constants::ARCSEC_TO_RAD;
use crate::math::normalize_radians;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fundamental arguments from IERS Conventions (2003).
///
/// ```
/// use nutation_core::nutation::IERS2003FundamentalArgs;
///
/// let t: f64 = 0.1; // Julian centuries from J2000.0
/// let l = t.moon_mean_anomaly();
/// assert!((0.0..std::f64::consts::TAU).contains(&l));
/// ```
pub trait IERS2003FundamentalArgs {
    /// Mean anomaly of the Moon, l.
    fn moon_mean_anomaly(&self) -> f64;

    /// Mean anomaly of the Sun, l'.
    fn sun_mean_anomaly(&self) -> f64;

    /// Mean argument of latitude of the Moon, F = L - Ω.
    fn mean_argument_of_latitude(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D.
    fn mean_elongation(&self) -> f64;

    /// Mean longitude of the Moon's ascending node, Ω.
    fn moon_ascending_node_longitude(&self) -> f64;

    fn mercury_lng(&self) -> f64;

    fn venus_lng(&self) -> f64;

    fn earth_lng(&self) -> f64;

    fn mars_lng(&self) -> f64;

    fn jupiter_lng(&self) -> f64;

    fn saturn_lng(&self) -> f64;

    fn uranus_lng(&self) -> f64;

    fn neptune_lng(&self) -> f64;

    /// General accumulated precession in longitude, pA.
    fn precession(&self) -> f64;
}

impl IERS2003FundamentalArgs for f64 {
    #[inline]
    fn moon_mean_anomaly(&self) -> f64 {
        let l = 485868.249036
            + self * (1717915923.2178 + self * (31.8792 + self * (0.051635 - self * 0.00024470)));
        normalize_radians(l * ARCSEC_TO_RAD)
    }

    #[inline]
    fn sun_mean_anomaly(&self) -> f64 {
        let lp = 1287104.79305
            + self * (129596581.0481 + self * (-0.5532 + self * (0.000136 - self * 0.00001149)));
        normalize_radians(lp * ARCSEC_TO_RAD)
    }

    #[inline]
    fn mean_argument_of_latitude(&self) -> f64 {
        let f = 335779.526232
            + self * (1739527262.8478 + self * (-12.7512 + self * (-0.001037 + self * 0.00000417)));
        normalize_radians(f * ARCSEC_TO_RAD)
    }

    #[inline]
    fn mean_elongation(&self) -> f64 {
        let d = 1072260.70369
            + self * (1602961601.2090 + self * (-6.3706 + self * (0.006593 - self * 0.00003169)));
        normalize_radians(d * ARCSEC_TO_RAD)
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        let om = 450160.398036
            + self * (-6962890.5431 + self * (7.4722 + self * (0.007702 - self * 0.00005939)));
        normalize_radians(om * ARCSEC_TO_RAD)
    }

    #[inline]
    fn mercury_lng(&self) -> f64 {
        normalize_radians(4.402608842 + 2608.7903141574 * self)
    }

    #[inline]
    fn venus_lng(&self) -> f64 {
        normalize_radians(3.176146697 + 1021.3285546211 * self)
    }

    #[inline]
    fn earth_lng(&self) -> f64 {
        normalize_radians(1.753470314 + 628.3075849991 * self)
    }

    #[inline]
    fn mars_lng(&self) -> f64 {
        normalize_radians(6.203480913 + 334.0612426700 * self)
    }

    #[inline]
    fn jupiter_lng(&self) -> f64 {
        normalize_radians(0.599546497 + 52.9690962641 * self)
    }

    #[inline]
    fn saturn_lng(&self) -> f64 {
        normalize_radians(0.874016757 + 21.3299104960 * self)
    }

    #[inline]
    fn uranus_lng(&self) -> f64 {
        normalize_radians(5.481293872 + 7.4781598567 * self)
    }

    #[inline]
    fn neptune_lng(&self) -> f64 {
        normalize_radians(5.311886287 + 3.8133035638 * self)
    }

    #[inline]
    fn precession(&self) -> f64 {
        normalize_radians((0.02438175 + 0.00000538691 * self) * self)
    }
}

/// Linear Delaunay approximations used by the MHB2000 planetary series.
///
/// Neptune's planetary-series longitude also differs from the IERS 2003 value.
pub trait MHB2000PlanetaryArgs {
    fn moon_mean_anomaly_mhb(&self) -> f64;

    fn sun_mean_anomaly_mhb(&self) -> f64;

    fn mean_argument_of_latitude_mhb(&self) -> f64;

    fn mean_elongation_mhb(&self) -> f64;

    fn moon_ascending_node_longitude_mhb(&self) -> f64;

    fn neptune_lng_mhb(&self) -> f64;
}

impl MHB2000PlanetaryArgs for f64 {
    #[inline]
    fn moon_mean_anomaly_mhb(&self) -> f64 {
        normalize_radians(2.35555598 + 8328.6914269554 * self)
    }

    #[inline]
    fn sun_mean_anomaly_mhb(&self) -> f64 {
        normalize_radians(6.24006013 + 628.301955 * self)
    }

    #[inline]
    fn mean_argument_of_latitude_mhb(&self) -> f64 {
        normalize_radians(1.627905234 + 8433.466158131 * self)
    }

    #[inline]
    fn mean_elongation_mhb(&self) -> f64 {
        normalize_radians(5.198466741 + 7771.3771468121 * self)
    }

    #[inline]
    fn moon_ascending_node_longitude_mhb(&self) -> f64 {
        normalize_radians(2.18243920 - 33.757045 * self)
    }

    #[inline]
    fn neptune_lng_mhb(&self) -> f64 {
        normalize_radians(5.321159000 + 3.8127774000 * self)
    }
}

/// The full fundamental argument set at one epoch, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FundamentalArguments {
    pub l: f64,
    pub l_prime: f64,
    pub f: f64,
    pub d: f64,
    pub omega: f64,
    pub mercury: f64,
    pub venus: f64,
    pub earth: f64,
    pub mars: f64,
    pub jupiter: f64,
    pub saturn: f64,
    pub uranus: f64,
    pub neptune: f64,
    pub precession: f64,
}

impl FundamentalArguments {
    /// Evaluates every argument at `t` Julian centuries (TT) from J2000.0.
    pub fn compute(t: f64) -> Self {
        Self {
            l: t.moon_mean_anomaly(),
            l_prime: t.sun_mean_anomaly(),
            f: t.mean_argument_of_latitude(),
            d: t.mean_elongation(),
            omega: t.moon_ascending_node_longitude(),
            mercury: t.mercury_lng(),
            venus: t.venus_lng(),
            earth: t.earth_lng(),
            mars: t.mars_lng(),
            jupiter: t.jupiter_lng(),
            saturn: t.saturn_lng(),
            uranus: t.uranus_lng(),
            neptune: t.neptune_lng(),
            precession: t.precession(),
        }
    }

    /// Arguments of the luni-solar series: `[l, l', F, D, Ω]`.
    pub fn lunisolar(&self) -> [f64; 5] {
        [self.l, self.l_prime, self.f, self.d, self.omega]
    }

    /// Arguments of the planetary series in table column order:
    /// `[l, l', F, D, Ω, Me, Ve, Ea, Ma, Ju, Sa, Ur, Ne, pA]`.
    ///
    /// The luni-solar columns and Neptune use the MHB2000 linear expressions,
    /// so `t` must be the epoch this set was computed for.
    pub fn planetary(&self, t: f64) -> [f64; 14] {
        [
            t.moon_mean_anomaly_mhb(),
            t.sun_mean_anomaly_mhb(),
            t.mean_argument_of_latitude_mhb(),
            t.mean_elongation_mhb(),
            t.moon_ascending_node_longitude_mhb(),
            self.mercury,
            self.venus,
            self.earth,
            self.mars,
            self.jupiter,
            self.saturn,
            self.uranus,
            t.neptune_lng_mhb(),
            self.precession,
        ]
    }
}
