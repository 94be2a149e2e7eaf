use super::IERS2003FundamentalArgs;

/// The five Delaunay arguments at one epoch (radians).
///
/// These are the arguments multiplied into every lunisolar nutation term.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelaunayArgs {
    /// Mean anomaly of the Moon.
    pub l: f64,
    /// Mean anomaly of the Sun.
    pub lp: f64,
    /// Mean argument of latitude of the Moon.
    pub f: f64,
    /// Mean elongation of the Moon from the Sun.
    pub d: f64,
    /// Mean longitude of the Moon's ascending node.
    pub om: f64,
}

impl DelaunayArgs {
    /// Evaluates all five arguments at `t` TDB Julian centuries from J2000.0.
    pub fn at(t: f64) -> Self {
        Self {
            l: t.moon_mean_anomaly(),
            lp: t.sun_mean_anomaly(),
            f: t.mean_argument_of_latitude(),
            d: t.mean_elongation(),
            om: t.moon_ascending_node_longitude(),
        }
    }

    /// Arguments in series order `[l, l', F, D, Ω]`.
    pub fn as_array(&self) -> [f64; 5] {
        [self.l, self.lp, self.f, self.d, self.om]
    }

    /// Linear combination `Σ nᵢ·argᵢ`, the phase of one series term.
    pub fn combine(&self, multipliers: &[i32; 5]) -> f64 {
        self.as_array()
            .iter()
            .zip(multipliers)
            .map(|(arg, &n)| f64::from(n) * arg)
            .sum()
    }
}

/// Planetary mean longitudes and general precession at one epoch (radians).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetaryArgs {
    pub mercury: f64,
    pub venus: f64,
    pub earth: f64,
    pub mars: f64,
    pub jupiter: f64,
    pub saturn: f64,
    pub uranus: f64,
    pub neptune: f64,
    /// General accumulated precession in longitude (unreduced).
    pub precession: f64,
}

impl PlanetaryArgs {
    pub fn at(t: f64) -> Self {
        Self {
            mercury: t.mercury_lng(),
            venus: t.venus_lng(),
            earth: t.earth_lng(),
            mars: t.mars_lng(),
            jupiter: t.jupiter_lng(),
            saturn: t.saturn_lng(),
            uranus: t.uranus_lng(),
            neptune: t.neptune_lng(),
            precession: t.precession(),
        }
    }

    /// Arguments in series order, Mercury outward, then p_A.
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.mercury,
            self.venus,
            self.earth,
            self.mars,
            self.jupiter,
            self.saturn,
            self.uranus,
            self.neptune,
            self.precession,
        ]
    }
}
