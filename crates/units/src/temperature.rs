use serde::{Deserialize, Serialize};

/// A temperature stored in kelvin.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let photosphere = Temperature::from_kelvin(6000.0);
/// assert_eq!(photosphere.to_kelvin(), 6000.0);
/// assert!(photosphere.to_celsius() > 5700.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature in kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Returns the temperature in degrees Celsius (K − 273.15).
    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Raise the kelvin value to an integer power
    ///
    /// Used by blackbody relations such as L ∝ R²T⁴.
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}
