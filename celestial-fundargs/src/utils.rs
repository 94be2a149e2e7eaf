//! Time helpers shared by the argument evaluators.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// The two-part split preserves precision. Typically:
/// - `jd1 = 2451545.0` (J2000.0 epoch)
/// - `jd2` = days from that epoch
///
/// Strictly the argument should be TDB, but TT is indistinguishable at the
/// precision of the fundamental arguments.
///
/// # Example
///
/// ```
/// use celestial_fundargs::utils::jd_to_centuries;
/// use celestial_fundargs::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, DAYS_PER_JULIAN_CENTURY), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}
