//! Planet representation with radius-derived rockiness and mass
//!
//! A planet is either rocky (radius ≤ 5 R⊕) or a gas giant. Its mass follows
//! from the radius and a bulk density picked by that classification:
//! M = 4π ρ R³ in Earth masses.

use std::f64::consts::PI;

use serde::Serialize;
use units::{Length, Mass};

/// Largest radius (R⊕) a planet can have and still be rocky
pub const ROCKY_RADIUS_LIMIT: f64 = 5.0;

/// Bulk density of rocky planets, in Earth-mass-equivalent units
pub const ROCKY_DENSITY: f64 = 0.18;

/// Bulk density of gas giants, in Earth-mass-equivalent units
pub const GAS_DENSITY: f64 = 0.04;

/// A planet orbiting a central body
///
/// Radius, rockiness and mass are fixed together at construction; a
/// different radius means a new planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    /// Radius in Earth radii (R⊕)
    radius: f64,
    /// Orbit size in Earth orbits (AU)
    pub orbit_size: Length,
    /// Whether the planet has a moon
    pub moon: bool,
    rocky: bool,
    mass: Mass,
}

impl Planet {
    /// Create a planet, deriving rockiness and mass from the radius
    ///
    /// Radius and orbit are expected to be positive; callers validate input
    /// before construction.
    pub fn new(name: impl Into<String>, radius: f64, orbit_size: Length, moon: bool) -> Self {
        let rocky = is_rocky(radius);
        Self {
            name: name.into(),
            radius,
            orbit_size,
            moon,
            rocky,
            mass: planet_mass(radius, rocky),
        }
    }

    /// An Earth-sized, moonless seed planet on a 1 AU orbit
    pub fn seed(name: impl Into<String>) -> Self {
        Self::new(name, 1.0, Length::from_au(1.0), false)
    }

    /// Result of two planets sharing an orbit
    ///
    /// The merged planet keeps this planet's name and orbit, adds the radii,
    /// and always ends up with a moon. Rockiness and mass are rederived from
    /// the combined radius.
    pub fn merged_with(&self, other: &Planet) -> Planet {
        Planet::new(
            self.name.clone(),
            self.radius + other.radius,
            self.orbit_size,
            true,
        )
    }

    /// Radius in Earth radii (R⊕)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rocky iff radius ≤ 5 R⊕
    pub fn rocky(&self) -> bool {
        self.rocky
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Mass in Earth masses (M⊕)
    pub fn earth_masses(&self) -> f64 {
        self.mass.to_earth_masses()
    }
}

/// Rockiness rule: rocky iff radius ≤ 5 R⊕
pub fn is_rocky(radius: f64) -> bool {
    radius <= ROCKY_RADIUS_LIMIT
}

/// M = 4π ρ R³ with ρ chosen by rockiness
pub fn planet_mass(radius: f64, rocky: bool) -> Mass {
    let density = if rocky { ROCKY_DENSITY } else { GAS_DENSITY };
    Mass::from_earth_masses(4.0 * PI * density * radius.powi(3))
}
