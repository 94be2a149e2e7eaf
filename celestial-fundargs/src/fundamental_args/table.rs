//! Polynomial coefficients of the IERS Conventions (2003) fundamental arguments.
//!
//! Every argument is a polynomial in `t`, TDB Julian centuries since J2000.0.
//! The lunisolar (Delaunay) arguments are tabulated in arcseconds up to `t⁴`;
//! the planetary mean longitudes are linear and tabulated in radians.
//!
//! # References
//!
//! - IERS Conventions (2003), Chapter 5, eq. 40-43
//! - Simon, J.-L. et al. 1994, Astron. Astrophys. 282, 663-683
//! - Souchay, J. et al. 1999, Astron. Astrophys. Supp. Ser. 135, 111

use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, TWOPI};
use crate::math::fmod;

/// How a raw polynomial value is brought into a single turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Polynomial is in arcseconds: `fmod` by 1,296,000″, then convert to radians.
    Arcseconds,
    /// Polynomial is in radians: `fmod` by 2π.
    Radians,
    /// Secular angle, returned as evaluated.
    None,
}

/// One row of the argument table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// Coefficients in ascending powers of `t`.
    pub coefficients: &'static [f64],
    pub reduction: Reduction,
}

impl Polynomial {
    /// Evaluates the polynomial without any reduction, in its native unit.
    ///
    /// Horner form nested as `c0 + t·(c1 + t·(c2 + …))`, which is the
    /// operation order the SOFA/ERFA routines use; results agree bit for bit.
    #[inline]
    pub fn raw(&self, t: f64) -> f64 {
        let mut coeffs = self.coefficients.iter().rev();
        let Some(&highest) = coeffs.next() else {
            return 0.0;
        };
        coeffs.fold(highest, |acc, &c| c + t * acc)
    }

    /// Value reduced into one turn, still in the native unit.
    ///
    /// `fmod` keeps the sign of the dividend, so negative raw values land in
    /// `(-period, 0]` rather than being wrapped to positive.
    #[inline]
    pub fn reduced(&self, t: f64) -> f64 {
        let raw = self.raw(t);
        match self.reduction {
            Reduction::Arcseconds => fmod(raw, CIRCULAR_ARCSECONDS),
            Reduction::Radians => fmod(raw, TWOPI),
            Reduction::None => raw,
        }
    }

    /// Reduced value in radians.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        match self.reduction {
            Reduction::Arcseconds => self.reduced(t) * ARCSEC_TO_RAD,
            Reduction::Radians | Reduction::None => self.reduced(t),
        }
    }
}

const fn arcsec(coefficients: &'static [f64]) -> Polynomial {
    Polynomial {
        coefficients,
        reduction: Reduction::Arcseconds,
    }
}

const fn radians(coefficients: &'static [f64]) -> Polynomial {
    Polynomial {
        coefficients,
        reduction: Reduction::Radians,
    }
}

// Delaunay arguments (arcseconds)
pub const MOON_MEAN_ANOMALY: Polynomial =
    arcsec(&[485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470]);

pub const SUN_MEAN_ANOMALY: Polynomial =
    arcsec(&[1287104.793048, 129596581.0481, -0.5532, 0.000136, -0.00001149]);

pub const MOON_ARGUMENT_OF_LATITUDE: Polynomial =
    arcsec(&[335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417]);

pub const MOON_MEAN_ELONGATION: Polynomial =
    arcsec(&[1072260.703692, 1602961601.2090, -6.3706, 0.006593, -0.00003169]);

pub const MOON_NODE_LONGITUDE: Polynomial =
    arcsec(&[450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939]);

// Planetary mean longitudes (radians)
pub const MERCURY_LONGITUDE: Polynomial = radians(&[4.402608842, 2608.7903141574]);

pub const VENUS_LONGITUDE: Polynomial = radians(&[3.176146697, 1021.3285546211]);

pub const EARTH_LONGITUDE: Polynomial = radians(&[1.753470314, 628.3075849991]);

pub const MARS_LONGITUDE: Polynomial = radians(&[6.203480913, 334.0612426700]);

pub const JUPITER_LONGITUDE: Polynomial = radians(&[0.599546497, 52.9690962641]);

pub const SATURN_LONGITUDE: Polynomial = radians(&[0.874016757, 21.3299104960]);

pub const URANUS_LONGITUDE: Polynomial = radians(&[5.481293872, 7.4781598567]);

pub const NEPTUNE_LONGITUDE: Polynomial = radians(&[5.311886287, 3.8133035638]);

/// General accumulated precession in longitude (radians, not reduced).
pub const GENERAL_PRECESSION: Polynomial = Polynomial {
    coefficients: &[0.0, 0.024381750, 0.00000538691],
    reduction: Reduction::None,
};
