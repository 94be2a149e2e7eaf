//! Fundamental arguments of the IERS Conventions (2003).
//!
//! Fundamental arguments are slowly varying angles (mean anomalies, mean
//! longitudes, and the lunar node) that drive the nutation and planetary
//! series. Each one is a polynomial in time reduced into a single turn.
//!
//! Three interfaces share one coefficient table ([`table`]):
//!
//! - [`FundamentalArgument`]: an enum naming every argument, evaluated with
//!   [`FundamentalArgument::evaluate`]. Useful when the argument is chosen at
//!   runtime.
//! - [`IERS2003FundamentalArgs`]: one method per argument, implemented on
//!   `f64` holding TDB Julian centuries from J2000.0.
//! - [`DelaunayArgs`] / [`PlanetaryArgs`]: all arguments of one family at a
//!   single epoch.
//!
//! # Reduction
//!
//! Reduction uses `fmod`, so the result keeps the sign of the unreduced
//! polynomial. A negative value comes back in `(-2π, 0]`, not wrapped into
//! `[0, 2π)`. Consumers feed these angles to sines and cosines, where the
//! distinction does not matter. The accumulated general precession is a
//! secular quantity and is never reduced.
//!
//! # Example
//!
//! ```
//! use celestial_fundargs::fundamental_args::{FundamentalArgument, IERS2003FundamentalArgs};
//!
//! let t: f64 = 0.8; // Julian centuries from J2000.0
//! let l = t.moon_mean_anomaly();
//! assert_eq!(l, FundamentalArgument::MoonMeanAnomaly.evaluate(t));
//!
//! let venus: FundamentalArgument = "venus".parse().unwrap();
//! assert!((venus.evaluate(t) - 3.424900460533758).abs() < 1e-12);
//! ```

mod iers2003;
mod sets;
pub mod table;

use core::fmt;
use std::str::FromStr;

use crate::errors::{AstroError, AstroResult, MathErrorKind};
use table::{Polynomial, Reduction};

pub use iers2003::IERS2003FundamentalArgs;
pub use sets::{DelaunayArgs, PlanetaryArgs};

/// A fundamental argument of the IERS 2003 nutation and planetary theories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FundamentalArgument {
    /// Mean anomaly of the Moon, l.
    MoonMeanAnomaly,
    /// Mean anomaly of the Sun, l'.
    SunMeanAnomaly,
    /// Mean argument of latitude of the Moon, F = L - Ω.
    MoonArgumentOfLatitude,
    /// Mean elongation of the Moon from the Sun, D.
    MoonMeanElongation,
    /// Mean longitude of the Moon's ascending node, Ω.
    MoonNodeLongitude,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// General accumulated precession in longitude, p_A.
    GeneralPrecession,
}

impl FundamentalArgument {
    pub const ALL: [FundamentalArgument; 14] = [
        Self::MoonMeanAnomaly,
        Self::SunMeanAnomaly,
        Self::MoonArgumentOfLatitude,
        Self::MoonMeanElongation,
        Self::MoonNodeLongitude,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::GeneralPrecession,
    ];

    /// Coefficient row for this argument.
    pub const fn polynomial(self) -> Polynomial {
        match self {
            Self::MoonMeanAnomaly => table::MOON_MEAN_ANOMALY,
            Self::SunMeanAnomaly => table::SUN_MEAN_ANOMALY,
            Self::MoonArgumentOfLatitude => table::MOON_ARGUMENT_OF_LATITUDE,
            Self::MoonMeanElongation => table::MOON_MEAN_ELONGATION,
            Self::MoonNodeLongitude => table::MOON_NODE_LONGITUDE,
            Self::Mercury => table::MERCURY_LONGITUDE,
            Self::Venus => table::VENUS_LONGITUDE,
            Self::Earth => table::EARTH_LONGITUDE,
            Self::Mars => table::MARS_LONGITUDE,
            Self::Jupiter => table::JUPITER_LONGITUDE,
            Self::Saturn => table::SATURN_LONGITUDE,
            Self::Uranus => table::URANUS_LONGITUDE,
            Self::Neptune => table::NEPTUNE_LONGITUDE,
            Self::GeneralPrecession => table::GENERAL_PRECESSION,
        }
    }

    pub const fn reduction(self) -> Reduction {
        self.polynomial().reduction
    }

    /// Evaluates the argument at `t` TDB Julian centuries from J2000.0.
    ///
    /// Returns radians. Total over finite `t`; NaN and infinities propagate.
    #[inline]
    pub fn evaluate(self, t: f64) -> f64 {
        self.polynomial().evaluate(t)
    }

    /// Reduced value before unit conversion: arcseconds for the Delaunay
    /// arguments, radians for the rest.
    #[inline]
    pub fn evaluate_native(self, t: f64) -> f64 {
        self.polynomial().reduced(t)
    }

    /// Conventional symbol, e.g. `l'` or `Ω`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::MoonMeanAnomaly => "l",
            Self::SunMeanAnomaly => "l'",
            Self::MoonArgumentOfLatitude => "F",
            Self::MoonMeanElongation => "D",
            Self::MoonNodeLongitude => "Ω",
            Self::Mercury => "L_Me",
            Self::Venus => "L_Ve",
            Self::Earth => "L_E",
            Self::Mars => "L_Ma",
            Self::Jupiter => "L_J",
            Self::Saturn => "L_Sa",
            Self::Uranus => "L_U",
            Self::Neptune => "L_Ne",
            Self::GeneralPrecession => "p_A",
        }
    }

    /// Snake-case name, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoonMeanAnomaly => "moon_mean_anomaly",
            Self::SunMeanAnomaly => "sun_mean_anomaly",
            Self::MoonArgumentOfLatitude => "moon_argument_of_latitude",
            Self::MoonMeanElongation => "moon_mean_elongation",
            Self::MoonNodeLongitude => "moon_node_longitude",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::GeneralPrecession => "general_precession",
        }
    }
}

impl fmt::Display for FundamentalArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FundamentalArgument {
    type Err = AstroError;

    /// Parses a name (`"moon-mean-anomaly"`, `"Venus"`) case-insensitively,
    /// or an exact symbol (`"l'"`, `"F"`, `"Ω"`, `"L_Ma"`).
    fn from_str(s: &str) -> AstroResult<Self> {
        let s = s.trim();
        if let Some(arg) = Self::ALL.iter().find(|a| a.symbol() == s) {
            return Ok(*arg);
        }

        let key = s.to_ascii_lowercase().replace('-', "_");
        if key == "om" || key == "omega" {
            return Ok(Self::MoonNodeLongitude);
        }

        Self::ALL
            .iter()
            .find(|a| a.name() == key)
            .copied()
            .ok_or_else(|| {
                AstroError::math_error(
                    "FundamentalArgument::from_str",
                    MathErrorKind::InvalidInput,
                    &format!("unknown fundamental argument '{s}'"),
                )
            })
    }
}
