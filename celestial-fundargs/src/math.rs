/// Floating-point remainder with the sign of the dividend (C `fmod`).
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Rounds toward zero.
#[inline]
pub fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}
