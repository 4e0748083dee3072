//! IAU 2000A nutation: oscillation of Earth's rotation axis about its mean
//! position, superimposed on precession.
//!
//! The pipeline is a chain of pure functions:
//!
//! ```text
//! T ──► FundamentalArguments::compute(T) ──► NutationIAU2000A::compute_with_arguments
//!                                                       ▲
//!                                         CoefficientTable (borrowed)
//! ```
//!
//! # Sub-modules
//!
//! - [`fundamental_args`]: Delaunay arguments, planetary longitudes, general precession
//! - [`terms`]: luni-solar and planetary row types and the [`CoefficientTable`]
//! - [`iau2000a`]: series summation
//! - [`types`]: [`NutationResult`]

pub mod fundamental_args;
pub mod iau2000a;
pub mod terms;
pub mod types;

pub use fundamental_args::{FundamentalArguments, IERS2003FundamentalArgs, MHB2000PlanetaryArgs};
pub use iau2000a::NutationIAU2000A;
pub use terms::{CoefficientTable, LunisolarTerm, PlanetaryTerm};
pub use types::NutationResult;
