pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

/// Series coefficients are tabulated in units of 0.1 microarcsecond.
///
/// Units → arcseconds → degrees → radians.
pub const TENTH_MICROARCSEC_TO_RAD: f64 = 1.0e-7 / ARCSEC_PER_DEGREE * (PI / 180.0);
