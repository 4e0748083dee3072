//! IAU 2000A nutation in longitude and obliquity.
//!
//! Coefficient tables are loaded once and passed by reference into the
//! evaluator; nothing in this crate holds global state.
//!
//! ```no_run
//! use nutation_core::nutation::{CoefficientTable, NutationIAU2000A};
//! use std::path::Path;
//!
//! let table = CoefficientTable::load(Path::new("data/dat_ls.txt"), Path::new("data/dat_pl.txt"))?;
//! let result = NutationIAU2000A::new(&table).compute(0.0)?;
//! println!("Δψ = {} rad, Δε = {} rad", result.delta_psi, result.delta_eps);
//! # Ok::<(), nutation_core::NutationError>(())
//! ```

pub mod constants;
pub mod data;
pub mod errors;
pub mod math;
pub mod nutation;
pub mod utils;

pub use errors::{AstroResult, NutationError};
pub use nutation::{CoefficientTable, NutationIAU2000A, NutationResult};
