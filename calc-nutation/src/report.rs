use nutation_core::NutationResult;
use std::fmt;

/// Console report of one evaluation.
pub struct Report<'a> {
    pub tt: &'a str,
    pub julian_century: f64,
    pub nutation: &'a NutationResult,
}

fn write_angle(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    radians: f64,
    degrees: f64,
    arcseconds: f64,
) -> fmt::Result {
    writeln!(f, "  {} = {:>24.20} rad", label, radians)?;
    writeln!(f, "           = {:>24.20} °", degrees)?;
    writeln!(f, "           = {:>24.20} ″", arcseconds)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "         TT: {}", self.tt)?;
        writeln!(
            f,
            "   T(of TT): {:.10} century (= Julian Century Number)",
            self.julian_century
        )?;
        let n = self.nutation;
        write_angle(
            f,
            "DeltaPsi",
            n.delta_psi,
            n.delta_psi_degrees(),
            n.delta_psi_arcseconds(),
        )?;
        write_angle(
            f,
            "DeltaEps",
            n.delta_eps,
            n.delta_eps_degrees(),
            n.delta_eps_arcseconds(),
        )
    }
}
