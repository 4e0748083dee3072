//! IAU 2000A nutation series evaluator.
//!
//! Sums the luni-solar and planetary series of the MHB2000 model against the
//! fundamental arguments. Coefficients come from a caller-supplied
//! [`CoefficientTable`], so the evaluator works equally with the full
//! 678 + 687 term tables, a truncated subset, or synthetic test tables.
//!
//! For each luni-solar term with argument φ = Σ nᵢ·argᵢ:
//!
//! ```text
//! Δψ += (PS + PST·T)·sin φ + PC·cos φ
//! Δε += (EC + ECT·T)·cos φ + ES·sin φ
//! ```
//!
//! Planetary terms follow the same pattern without the rate terms. φ is not
//! reduced again; `sin`/`cos` handle the range.
//!
//! Sums are accumulated in 0.1 µas and converted to radians per series.
//! Terms are visited in table order, so results are bit-reproducible for a
//! given table.
//!
//! # Reference
//!
//! - IERS Conventions (2003), Chapter 5
//! - Mathews, Herring & Buffett (2002), J. Geophys. Res. 107, B4

use super::fundamental_args::FundamentalArguments;
use super::terms::CoefficientTable;
use super::types::NutationResult;
use crate::constants::TENTH_MICROARCSEC_TO_RAD;
use crate::errors::{AstroResult, NutationError};

/// Running (Δψ, Δε) sums in 0.1 µas.
#[derive(Debug, Default, Clone, Copy)]
struct SeriesSum {
    dpsi: f64,
    deps: f64,
}

impl SeriesSum {
    /// Adds one term: `psi_sin·sin φ + psi_cos·cos φ` to Δψ and
    /// `eps_sin·sin φ + eps_cos·cos φ` to Δε.
    #[inline]
    fn accumulate(&mut self, phi: f64, psi_sin: f64, psi_cos: f64, eps_sin: f64, eps_cos: f64) {
        let (sarg, carg) = phi.sin_cos();
        self.dpsi += psi_sin * sarg + psi_cos * carg;
        self.deps += eps_cos * carg + eps_sin * sarg;
    }

    fn to_radians(self) -> (f64, f64) {
        (
            self.dpsi * TENTH_MICROARCSEC_TO_RAD,
            self.deps * TENTH_MICROARCSEC_TO_RAD,
        )
    }
}

#[inline]
fn argument<const N: usize>(multipliers: &[i32; N], args: &[f64; N]) -> f64 {
    multipliers
        .iter()
        .zip(args.iter())
        .fold(0.0, |acc, (&n, &a)| acc + (n as f64) * a)
}

/// IAU 2000A nutation calculator over a borrowed coefficient table.
///
/// ```
/// use nutation_core::nutation::{CoefficientTable, NutationIAU2000A};
/// use nutation_core::nutation::terms::{parse_lunisolar, parse_planetary};
///
/// let table = CoefficientTable::new(
///     parse_lunisolar("ls", "0 0 0 0 1 -172064161.0 -174666.0 33386.0 92052331.0 9086.0 15377.0")?,
///     parse_planetary("pl", "0 0 0 0 0 0 0 8 -16 4 5 0 0 0 1440 0 0 0")?,
/// );
/// let result = NutationIAU2000A::new(&table).compute(0.0)?;
/// assert!(result.delta_psi < 0.0);
/// # Ok::<(), nutation_core::NutationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NutationIAU2000A<'a> {
    table: &'a CoefficientTable,
}

impl<'a> NutationIAU2000A<'a> {
    pub fn new(table: &'a CoefficientTable) -> Self {
        Self { table }
    }

    /// Computes nutation at `t` Julian centuries (TT) from J2000.0.
    pub fn compute(&self, t: f64) -> AstroResult<NutationResult> {
        let args = FundamentalArguments::compute(t);
        self.compute_with_arguments(t, &args)
    }

    /// Computes nutation from precomputed fundamental arguments.
    ///
    /// Fails with [`NutationError::EmptyCoefficientTable`] if either series
    /// has no terms.
    pub fn compute_with_arguments(
        &self,
        t: f64,
        args: &FundamentalArguments,
    ) -> AstroResult<NutationResult> {
        if self.table.lunisolar().is_empty() {
            return Err(NutationError::empty_table("luni-solar"));
        }
        if self.table.planetary().is_empty() {
            return Err(NutationError::empty_table("planetary"));
        }

        let (dpsi_ls, deps_ls) = self.compute_lunisolar(&args.lunisolar(), t);
        let (dpsi_pl, deps_pl) = self.compute_planetary(&args.planetary(t));
        log::trace!(
            "t = {}: luni-solar ({:e}, {:e}) rad, planetary ({:e}, {:e}) rad",
            t,
            dpsi_ls,
            deps_ls,
            dpsi_pl,
            deps_pl
        );

        Ok(NutationResult {
            delta_psi: dpsi_ls + dpsi_pl,
            delta_eps: deps_ls + deps_pl,
        })
    }

    /// Luni-solar contribution in radians.
    ///
    /// `args` are `[l, l', F, D, Ω]`; the rate terms are scaled by `t`.
    pub fn compute_lunisolar(&self, args: &[f64; 5], t: f64) -> (f64, f64) {
        let mut sum = SeriesSum::default();
        for term in self.table.lunisolar() {
            let phi = argument(&term.multipliers, args);
            sum.accumulate(
                phi,
                term.ps + term.pst * t,
                term.pc,
                term.es,
                term.ec + term.ect * t,
            );
        }
        sum.to_radians()
    }

    /// Planetary contribution in radians.
    ///
    /// `args` are in planetary table column order, see
    /// [`FundamentalArguments::planetary`].
    pub fn compute_planetary(&self, args: &[f64; 14]) -> (f64, f64) {
        let mut sum = SeriesSum::default();
        for term in self.table.planetary() {
            let phi = argument(&term.multipliers, args);
            sum.accumulate(phi, term.ps, term.pc, term.es, term.ec);
        }
        sum.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MJD_ZERO_POINT, TWOPI};
    use crate::nutation::terms::{LunisolarTerm, PlanetaryTerm};
    use crate::utils::jd_to_centuries;
    use approx::assert_abs_diff_eq;

    fn ls(multipliers: [i32; 5], c: [f64; 6]) -> LunisolarTerm {
        LunisolarTerm {
            multipliers,
            ps: c[0],
            pst: c[1],
            pc: c[2],
            ec: c[3],
            ect: c[4],
            es: c[5],
        }
    }

    fn pl(multipliers: [i32; 14], c: [f64; 4]) -> PlanetaryTerm {
        PlanetaryTerm {
            multipliers,
            ps: c[0],
            pc: c[1],
            es: c[2],
            ec: c[3],
        }
    }

    // Leading 20 luni-solar terms of the IAU 2000A series.
    fn leading_lunisolar() -> Vec<LunisolarTerm> {
        vec![
            ls([0, 0, 0, 0, 1], [-172064161.0, -174666.0, 33386.0, 92052331.0, 9086.0, 15377.0]),
            ls([0, 0, 2, -2, 2], [-13170906.0, -1675.0, -13696.0, 5730336.0, -3015.0, -4587.0]),
            ls([0, 0, 2, 0, 2], [-2276413.0, -234.0, 2796.0, 978459.0, -485.0, 1374.0]),
            ls([0, 0, 0, 0, 2], [2074554.0, 207.0, -698.0, -897492.0, 470.0, -291.0]),
            ls([0, 1, 0, 0, 0], [1475877.0, -3633.0, 11817.0, 73871.0, -184.0, -1924.0]),
            ls([0, 1, 2, -2, 2], [-516821.0, 1226.0, -524.0, 224386.0, -677.0, -174.0]),
            ls([1, 0, 0, 0, 0], [711159.0, 73.0, -872.0, -6750.0, 0.0, 358.0]),
            ls([0, 0, 2, 0, 1], [-387298.0, -367.0, 380.0, 200728.0, 18.0, 318.0]),
            ls([1, 0, 2, 0, 2], [-301461.0, -36.0, 816.0, 129025.0, -63.0, 367.0]),
            ls([0, -1, 2, -2, 2], [215829.0, -494.0, 111.0, -95929.0, 299.0, 132.0]),
            ls([0, 0, 2, -2, 1], [128227.0, 137.0, 181.0, -68982.0, -9.0, 39.0]),
            ls([-1, 0, 2, 0, 2], [123457.0, 11.0, 19.0, -53311.0, 32.0, -4.0]),
            ls([-1, 0, 0, 2, 0], [156994.0, 10.0, -168.0, -1235.0, 0.0, 82.0]),
            ls([1, 0, 0, 0, 1], [63110.0, 63.0, 27.0, -33228.0, 0.0, -9.0]),
            ls([-1, 0, 0, 0, 1], [-57976.0, -63.0, -189.0, 31429.0, 0.0, -75.0]),
            ls([-1, 0, 2, 2, 2], [-59641.0, -11.0, 149.0, 25543.0, -11.0, 66.0]),
            ls([1, 0, 2, 0, 1], [-51613.0, -42.0, 129.0, 26366.0, 0.0, 78.0]),
            ls([-2, 0, 2, 0, 1], [45893.0, 50.0, 31.0, -24236.0, -10.0, 20.0]),
            ls([0, 0, 0, 2, 0], [63384.0, 11.0, -150.0, -1220.0, 0.0, 29.0]),
            ls([0, 0, 2, 2, 2], [-38571.0, -1.0, 158.0, 16452.0, -11.0, 68.0]),
        ]
    }

    fn leading_planetary() -> Vec<PlanetaryTerm> {
        vec![
            pl([0, 0, 0, 0, 0, 0, 0, 8, -16, 4, 5, 0, 0, 0], [1440.0, 0.0, 0.0, 0.0]),
            pl([0, 0, 0, 0, 0, 0, 0, -8, 16, -4, -5, 0, 0, 2], [56.0, -117.0, -42.0, -40.0]),
            pl([0, 0, 0, 0, 0, 0, 0, 8, -16, 4, 5, 0, 0, 2], [125.0, -43.0, 0.0, -54.0]),
        ]
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn truncated_table() -> CoefficientTable {
        CoefficientTable::new(leading_lunisolar(), leading_planetary())
    }

    #[test]
    fn truncated_series_at_2006() {
        init_logging();
        let table = truncated_table();
        let t = jd_to_centuries(MJD_ZERO_POINT, 53736.0);
        let result = NutationIAU2000A::new(&table).compute(t).unwrap();
        assert_abs_diff_eq!(result.delta_psi, -9.60606473325841e-6, epsilon = 1e-15);
        assert_abs_diff_eq!(result.delta_eps, 4.0617194220328304e-5, epsilon = 1e-15);

        // Full 678 + 687 term series: Δψ = -0.9630909107115518431e-5,
        // Δε = 0.4063239174001678710e-4 rad. The omitted terms are worth a few mas.
        assert_abs_diff_eq!(result.delta_psi, -0.9630909107115518431e-5, epsilon = 3e-8);
        assert_abs_diff_eq!(result.delta_eps, 0.4063239174001678710e-4, epsilon = 3e-8);
    }

    #[test]
    fn truncated_series_at_j2000() {
        init_logging();
        let table = truncated_table();
        let result = NutationIAU2000A::new(&table).compute(0.0).unwrap();
        assert_abs_diff_eq!(result.delta_psi, -6.752670104352335e-5, epsilon = 1e-15);
        assert_abs_diff_eq!(result.delta_eps, -2.7984880042251534e-5, epsilon = 1e-15);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let table = truncated_table();
        let nut = NutationIAU2000A::new(&table);
        let a = nut.compute(0.2345).unwrap();
        let b = nut.compute(0.2345).unwrap();
        assert_eq!(a.delta_psi.to_bits(), b.delta_psi.to_bits());
        assert_eq!(a.delta_eps.to_bits(), b.delta_eps.to_bits());
    }

    #[test]
    fn permuted_rows_agree_within_rounding() {
        let forward = truncated_table();
        let mut reversed_ls = leading_lunisolar();
        reversed_ls.reverse();
        let mut rotated_pl = leading_planetary();
        rotated_pl.rotate_left(1);
        let reversed = CoefficientTable::new(reversed_ls, rotated_pl);

        let t = 0.187;
        let a = NutationIAU2000A::new(&forward).compute(t).unwrap();
        let b = NutationIAU2000A::new(&reversed).compute(t).unwrap();
        assert_abs_diff_eq!(a.delta_psi, b.delta_psi, epsilon = 1e-18);
        assert_abs_diff_eq!(a.delta_eps, b.delta_eps, epsilon = 1e-18);
    }

    #[test]
    fn single_term_matches_closed_form() {
        let term = ls([0, 0, 0, 0, 1], [1000.0, 10.0, 20.0, 3000.0, 30.0, 40.0]);
        let table = CoefficientTable::new(vec![term], leading_planetary());
        let nut = NutationIAU2000A::new(&table);
        let t = 0.5;
        let args = FundamentalArguments::compute(t);
        let (dpsi, deps) = nut.compute_lunisolar(&args.lunisolar(), t);

        let (s, c) = args.omega.sin_cos();
        let expected_psi = ((1000.0 + 10.0 * t) * s + 20.0 * c) * TENTH_MICROARCSEC_TO_RAD;
        let expected_eps = ((3000.0 + 30.0 * t) * c + 40.0 * s) * TENTH_MICROARCSEC_TO_RAD;
        assert_abs_diff_eq!(dpsi, expected_psi, epsilon = 1e-20);
        assert_abs_diff_eq!(deps, expected_eps, epsilon = 1e-20);
    }

    #[test]
    fn planetary_term_uses_all_four_amplitudes() {
        let term = pl([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], [1.0, 2.0, 3.0, 4.0]);
        let table = CoefficientTable::new(leading_lunisolar(), vec![term]);
        let args = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let (dpsi, deps) = NutationIAU2000A::new(&table).compute_planetary(&args);
        let (s, c) = 0.3_f64.sin_cos();
        assert_abs_diff_eq!(dpsi, (s + 2.0 * c) * TENTH_MICROARCSEC_TO_RAD, epsilon = 1e-22);
        assert_abs_diff_eq!(deps, (3.0 * s + 4.0 * c) * TENTH_MICROARCSEC_TO_RAD, epsilon = 1e-22);
    }

    #[test]
    fn argument_is_not_reduced() {
        // 3·Ω can exceed 2π; the sum must use the raw combination
        let m = [0, 0, 0, 0, 3];
        let args = [0.0, 0.0, 0.0, 0.0, 6.0];
        let phi = argument(&m, &args);
        assert_eq!(phi, 18.0);
        assert!(phi > TWOPI);
    }

    #[test]
    fn empty_lunisolar_table_fails() {
        let table = CoefficientTable::new(Vec::new(), leading_planetary());
        let err = NutationIAU2000A::new(&table).compute(0.0).unwrap_err();
        assert_eq!(err, NutationError::empty_table("luni-solar"));
    }

    #[test]
    fn empty_planetary_table_fails() {
        let table = CoefficientTable::new(leading_lunisolar(), Vec::new());
        let err = NutationIAU2000A::new(&table).compute(0.0).unwrap_err();
        assert_eq!(err, NutationError::empty_table("planetary"));
    }

    #[test]
    fn fully_empty_table_never_returns_zero() {
        let table = CoefficientTable::default();
        assert!(NutationIAU2000A::new(&table).compute(0.0).is_err());
    }
}
