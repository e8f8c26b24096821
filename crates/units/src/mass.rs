use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// Mass of the Earth in grams (5.972 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.972e27;

/// A mass quantity stored in solar masses.
///
/// Central bodies are described in solar masses and planets in Earth masses,
/// so both constructors are provided. Values built with `from_solar_masses`
/// are stored verbatim, which keeps sums of stellar masses exact.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(1.4);
/// let planet = Mass::from_earth_masses(317.8);
///
/// assert!(planet < star);
/// assert_eq!((star + star).to_solar_masses(), 2.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One solar mass is approximately 332,946 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_G / SOLAR_MASS_G)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Returns the mass in Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / EARTH_MASS_G
    }

    /// Power function on the solar-mass value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}
