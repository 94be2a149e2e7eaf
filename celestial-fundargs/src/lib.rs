//! Fundamental arguments and sexagesimal decomposition for IAU/IERS models.
//!
//! `celestial-fundargs` provides two building blocks used by precession-nutation,
//! ephemeris, and coordinate-transformation code:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fundamental_args`] | IERS 2003 Delaunay arguments, planetary mean longitudes, general precession |
//! | [`angle`] | Days/radians to sign + hours (degrees), minutes, seconds, fraction |
//! | [`utils`] | Two-part Julian Date to Julian centuries |
//! | [`constants`] | Turn, arcsecond, and day constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] for the checked entry points |
//!
//! # Example
//!
//! ```
//! use celestial_fundargs::angle::radians_to_dms;
//! use celestial_fundargs::fundamental_args::IERS2003FundamentalArgs;
//! use celestial_fundargs::utils::jd_to_centuries;
//!
//! let t = jd_to_centuries(2451545.0, 29220.0); // 2080 Jan 1.5, t = 0.8
//! let om = t.moon_ascending_node_longitude();
//!
//! let dms = radians_to_dms(3, om);
//! assert!(dms.is_negative());
//! assert_eq!(dms.to_string(), "-342:15:47.250");
//! ```
//!
//! # Design Notes
//!
//! - **Pure functions**: nothing here holds state, so every call is safe from
//!   any number of threads.
//! - **Reference semantics**: reductions use C `fmod` (sign of the dividend)
//!   and field extraction truncates toward zero, as in the IAU SOFA routines.
//! - **No silent normalization**: a result of 24ʰ or 360° is returned as is.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod fundamental_args;
pub mod math;
pub mod utils;

pub use angle::{Sexagesimal, Sign};
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use fundamental_args::{FundamentalArgument, IERS2003FundamentalArgs};

#[cfg(test)]
mod test_helpers;
