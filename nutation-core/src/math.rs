use crate::constants::TWOPI;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Non-negative remainder of `x / y`, always in `[0, y)` for positive `y`.
#[inline]
pub fn fmod_positive(x: f64, y: f64) -> f64 {
    let r = fmod(x, y);
    if r < 0.0 {
        let wrapped = r + y;
        // r + y can round up to exactly y when r is a tiny negative number
        if wrapped >= y {
            0.0
        } else {
            wrapped
        }
    } else {
        r
    }
}

/// Reduces an angle in radians to `[0, 2π)`.
#[inline]
pub fn normalize_radians(angle: f64) -> f64 {
    fmod_positive(angle, TWOPI)
}
