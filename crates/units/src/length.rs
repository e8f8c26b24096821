use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// An orbital distance stored in astronomical units.
///
/// One AU is one "Earth orbit", the unit users pick orbit sizes in. Lengths
/// built with `from_au` keep the given value bit for bit, so two orbits
/// entered as the same number always compare equal.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let jupiter_orbit = Length::from_au(5.2);
///
/// assert!(earth_orbit < jupiter_orbit);
/// assert_eq!(Length::from_au(4.0), Length::from_au(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}
