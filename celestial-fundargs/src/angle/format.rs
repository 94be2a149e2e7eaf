//! Astronomical notation for radian angles.
//!
//! Both formatters run the angle through the sexagesimal decomposer, so the
//! printed fields follow the same truncation rules as
//! [`radians_to_dms`] and [`radians_to_hms`].
//!
//! ```
//! use celestial_fundargs::angle::{DmsFmt, HmsFmt};
//! use std::f64::consts::PI;
//!
//! let dms = DmsFmt { frac_digits: 2 };
//! assert_eq!(dms.fmt(-0.5), "-28° 38' 52.40\"");
//!
//! let hms = HmsFmt { frac_digits: 1 };
//! assert_eq!(hms.fmt(PI), "12ʰ 0ᵐ 0.0ˢ");
//! ```

use super::sexagesimal::{radians_to_dms, radians_to_hms, Sexagesimal, Sign, MAX_NDP};

/// Formatter for degrees-minutes-seconds (DMS) notation.
///
/// `±DD° MM' SS.ss"` with the sign always shown. `frac_digits` is the
/// number of decimal places on the arcseconds, capped at [`MAX_NDP`].
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// Formatter for hours-minutes-seconds (HMS) notation.
///
/// `HHʰ MMᵐ SS.ssˢ`, prefixed with `-` for negative angles. The hours are not
/// wrapped: an angle of 2π prints as `24ʰ 0ᵐ 0ˢ`.
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    #[inline]
    pub fn fmt(&self, radians: f64) -> String {
        let s = radians_to_dms(ndp(self.frac_digits), radians);
        format!(
            "{}{}° {}' {}\"",
            s.sign,
            s.whole,
            s.minutes,
            seconds_with_fraction(&s)
        )
    }
}

impl HmsFmt {
    #[inline]
    pub fn fmt(&self, radians: f64) -> String {
        let s = radians_to_hms(ndp(self.frac_digits), radians);
        let sign = if s.sign == Sign::Minus { "-" } else { "" };
        format!(
            "{sign}{}ʰ {}ᵐ {}ˢ",
            s.whole,
            s.minutes,
            seconds_with_fraction(&s)
        )
    }
}

fn ndp(frac_digits: u8) -> i32 {
    i32::from(frac_digits).min(MAX_NDP)
}

fn seconds_with_fraction(s: &Sexagesimal) -> String {
    if s.ndp > 0 {
        format!("{}.{:0width$}", s.seconds, s.fraction, width = s.ndp as usize)
    } else {
        s.seconds.to_string()
    }
}
