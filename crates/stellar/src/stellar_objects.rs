//! Central body types and their derivation rules.
//!
//! Each type has two constructors. `new` takes the minimal user input and
//! derives every other attribute. `from_parts` takes a fully specified record
//! (as read back from a saved galaxy) and trusts it verbatim. Both log a
//! creation event. Range checks on user input belong to the caller; these
//! types accept any value they are given.

use std::f64::consts::PI;

use event_log::EventLog;
use serde::{Deserialize, Serialize};
use units::{Mass, Temperature};

use crate::central_body::CentralBody;

/// Black hole radius per solar mass, in kilometres
pub const BLACK_HOLE_KM_PER_SOLAR_MASS: f64 = 4.2e-6;

/// White dwarf radius scale: R = 5916 km × M^-0.33
pub const WHITE_DWARF_RADIUS_KM: f64 = 5916.0;

/// Neutron star radius scale: R = 12 km × M^-0.33
pub const NEUTRON_STAR_RADIUS_KM: f64 = 12.0;

/// Mass-radius exponent shared by the degenerate remnants
pub const DEGENERATE_RADIUS_EXPONENT: f64 = -0.33;

/// Mass above which a white dwarf could detonate (Chandrasekhar limit)
pub const CHANDRASEKHAR_LIMIT: f64 = 1.4;

/// Photosphere temperature of every giant star, in kelvin
pub const GIANT_STAR_TEMPERATURE_K: f64 = 6000.0;

/// Stefan–Boltzmann analogue, scaled so radii come out in solar radii
pub const STEFAN_BOLTZMANN: f64 = 2e-16;

/// Black holes: radius grows linearly with mass
///
/// Never able to go supernova.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackHole {
    pub name: String,
    pub mass: Mass,
    /// Event horizon radius in kilometres
    pub radius_km: f64,
}

impl BlackHole {
    pub fn new(name: impl Into<String>, mass: Mass, log: &mut EventLog) -> Self {
        let radius_km = BLACK_HOLE_KM_PER_SOLAR_MASS * mass.to_solar_masses();
        Self::from_parts(name, mass, radius_km, log)
    }

    pub fn from_parts(
        name: impl Into<String>,
        mass: Mass,
        radius_km: f64,
        log: &mut EventLog,
    ) -> Self {
        let name = name.into();
        log.log_event(format!("Created black hole: {name}"));
        Self {
            name,
            mass,
            radius_km,
        }
    }
}

/// White dwarfs: degenerate remnants that shrink as they gain mass
///
/// # Physical Ranges
/// * mass: up to 1.4 solar masses (Chandrasekhar limit)
/// * radius: thousands of kilometres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhiteDwarf {
    pub name: String,
    pub mass: Mass,
    /// Radius in kilometres
    pub radius_km: f64,
}

impl WhiteDwarf {
    pub fn new(name: impl Into<String>, mass: Mass, log: &mut EventLog) -> Self {
        let radius_km = WHITE_DWARF_RADIUS_KM * mass.powf(DEGENERATE_RADIUS_EXPONENT);
        Self::from_parts(name, mass, radius_km, log)
    }

    pub fn from_parts(
        name: impl Into<String>,
        mass: Mass,
        radius_km: f64,
        log: &mut EventLog,
    ) -> Self {
        let name = name.into();
        log.log_event(format!("Created white dwarf: {name}"));
        Self {
            name,
            mass,
            radius_km,
        }
    }

    /// A white dwarf past the Chandrasekhar limit could detonate.
    ///
    /// Nothing currently drives a white dwarf through a supernova; the flag
    /// is reported so front ends can show it.
    pub fn can_supernova(&self) -> bool {
        self.mass.to_solar_masses() > CHANDRASEKHAR_LIMIT
    }
}

/// Neutron stars: ultra-dense remnants, expected between 1.4 and 2.5 M☉
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeutronStar {
    pub name: String,
    pub mass: Mass,
    /// Radius in kilometres
    pub radius_km: f64,
}

impl NeutronStar {
    pub fn new(name: impl Into<String>, mass: Mass, log: &mut EventLog) -> Self {
        let radius_km = NEUTRON_STAR_RADIUS_KM * mass.powf(DEGENERATE_RADIUS_EXPONENT);
        Self::from_parts(name, mass, radius_km, log)
    }

    pub fn from_parts(
        name: impl Into<String>,
        mass: Mass,
        radius_km: f64,
        log: &mut EventLog,
    ) -> Self {
        let name = name.into();
        log.log_event(format!("Created neutron star: {name}"));
        Self {
            name,
            mass,
            radius_km,
        }
    }
}

/// Giant stars: built from luminosity, always able to go supernova
///
/// Mass follows a mass-luminosity relation (M = 1.4 L^0.286) and the radius
/// comes from the blackbody relation L = 4πR²σT⁴ at a fixed 6000 K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiantStar {
    pub name: String,
    pub mass: Mass,
    /// Radius in solar radii (R☉)
    pub radius_solar: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub temperature: Temperature,
}

impl GiantStar {
    pub fn new(name: impl Into<String>, luminosity: f64, log: &mut EventLog) -> Self {
        let mass = Mass::from_solar_masses(1.4 * luminosity.powf(0.286));
        let temperature = Temperature::from_kelvin(GIANT_STAR_TEMPERATURE_K);
        let radius_solar =
            (luminosity / (4.0 * PI * STEFAN_BOLTZMANN * temperature.powi(4))).sqrt();
        Self::from_parts(name, mass, radius_solar, luminosity, log)
    }

    /// Temperature is not a parameter; every giant burns at 6000 K.
    pub fn from_parts(
        name: impl Into<String>,
        mass: Mass,
        radius_solar: f64,
        luminosity: f64,
        log: &mut EventLog,
    ) -> Self {
        let name = name.into();
        log.log_event(format!("Created giant star: {name}"));
        Self {
            name,
            mass,
            radius_solar,
            luminosity,
            temperature: Temperature::from_kelvin(GIANT_STAR_TEMPERATURE_K),
        }
    }
}

/// Two central bodies sharing a system
///
/// The pair has no radius of its own; its mass is the sum of its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binary {
    pub name: String,
    pub body1: Box<CentralBody>,
    pub body2: Box<CentralBody>,
}

impl Binary {
    pub fn new(
        name: impl Into<String>,
        body1: CentralBody,
        body2: CentralBody,
        log: &mut EventLog,
    ) -> Self {
        let name = name.into();
        log.log_event(format!(
            "Created binary: {name} ({} and {})",
            body1.kind(),
            body2.kind()
        ));
        Self {
            name,
            body1: Box::new(body1),
            body2: Box::new(body2),
        }
    }

    pub fn mass(&self) -> Mass {
        self.body1.mass() + self.body2.mass()
    }
}
