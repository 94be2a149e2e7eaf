use super::table;

/// Fundamental arguments from IERS Conventions (2003).
///
/// Implemented on `f64` holding TDB Julian centuries from J2000.0 (TT is
/// interchangeable at this precision). Results are in radians.
///
/// # Usage
///
/// ```
/// use celestial_fundargs::fundamental_args::IERS2003FundamentalArgs;
///
/// let t: f64 = 0.1; // Julian centuries from J2000.0
/// let l = t.moon_mean_anomaly();
/// let f = t.mean_argument_of_latitude();
/// ```
pub trait IERS2003FundamentalArgs {
    /// Mean anomaly of the Moon (radians), denoted l.
    ///
    /// Computed using a 4th-order polynomial in arcseconds, reduced modulo
    /// 1,296,000″, then converted to radians.
    fn moon_mean_anomaly(&self) -> f64;

    /// Mean anomaly of the Sun (radians), denoted l'.
    fn sun_mean_anomaly(&self) -> f64;

    /// Mean argument of latitude of the Moon (radians), denoted F.
    ///
    /// The angular distance from the ascending node to the Moon, measured
    /// along the lunar orbit.
    fn mean_argument_of_latitude(&self) -> f64;

    /// Mean elongation of the Moon from the Sun (radians), denoted D.
    fn mean_elongation(&self) -> f64;

    /// Mean longitude of the Moon's ascending node (radians), denoted Ω.
    fn moon_ascending_node_longitude(&self) -> f64;

    /// Mean longitude of Mercury (radians).
    fn mercury_lng(&self) -> f64;

    /// Mean longitude of Venus (radians).
    fn venus_lng(&self) -> f64;

    /// Mean longitude of Earth (radians).
    fn earth_lng(&self) -> f64;

    /// Mean longitude of Mars (radians).
    fn mars_lng(&self) -> f64;

    /// Mean longitude of Jupiter (radians).
    fn jupiter_lng(&self) -> f64;

    /// Mean longitude of Saturn (radians).
    fn saturn_lng(&self) -> f64;

    /// Mean longitude of Uranus (radians).
    fn uranus_lng(&self) -> f64;

    /// Mean longitude of Neptune (radians).
    fn neptune_lng(&self) -> f64;

    /// General accumulated precession in longitude (radians).
    ///
    /// Not reduced into [0, 2π).
    fn precession(&self) -> f64;
}

impl IERS2003FundamentalArgs for f64 {
    #[inline]
    fn moon_mean_anomaly(&self) -> f64 {
        table::MOON_MEAN_ANOMALY.evaluate(*self)
    }

    #[inline]
    fn sun_mean_anomaly(&self) -> f64 {
        table::SUN_MEAN_ANOMALY.evaluate(*self)
    }

    #[inline]
    fn mean_argument_of_latitude(&self) -> f64 {
        table::MOON_ARGUMENT_OF_LATITUDE.evaluate(*self)
    }

    #[inline]
    fn mean_elongation(&self) -> f64 {
        table::MOON_MEAN_ELONGATION.evaluate(*self)
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        table::MOON_NODE_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn mercury_lng(&self) -> f64 {
        table::MERCURY_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn venus_lng(&self) -> f64 {
        table::VENUS_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn earth_lng(&self) -> f64 {
        table::EARTH_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn mars_lng(&self) -> f64 {
        table::MARS_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn jupiter_lng(&self) -> f64 {
        table::JUPITER_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn saturn_lng(&self) -> f64 {
        table::SATURN_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn uranus_lng(&self) -> f64 {
        table::URANUS_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn neptune_lng(&self) -> f64 {
        table::NEPTUNE_LONGITUDE.evaluate(*self)
    }

    #[inline]
    fn precession(&self) -> f64 {
        table::GENERAL_PRECESSION.evaluate(*self)
    }
}
