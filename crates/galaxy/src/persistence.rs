//! Whole-galaxy snapshots saved as JSON
//!
//! Saving serializes the entire galaxy; loading rebuilds a brand new one
//! from the stored records through the regular constructors, so every body,
//! system and planet logs its creation again. A failed load never touches
//! the caller's current galaxy or log, and a failed save is reported as an
//! error, never as success.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use event_log::EventLog;
use planetary::Planet;
use serde::Deserialize;
use stellar::{Binary, BlackHole, CentralBody, GiantStar, NeutronStar, WhiteDwarf};
use tracing::{debug, warn};
use units::{Length, Mass};

use crate::config::BuilderConfig;
use crate::error::{GalaxyError, Result};
use crate::galaxy::Galaxy;
use crate::solar_system::SolarSystem;

/// Stored galaxy, as written by [`GalaxyStore::write`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GalaxyRecord {
    name: String,
    solar_systems: BTreeMap<String, SolarSystemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolarSystemRecord {
    name: String,
    central_body: CentralBody,
    planets: BTreeMap<String, PlanetRecord>,
}

/// Stored planet; `rocky` and `mass` must agree with the radius
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanetRecord {
    name: String,
    radius: f64,
    orbit_size: Length,
    moon: bool,
    rocky: bool,
    mass: Mass,
}

/// Reads and writes a galaxy at a fixed path
#[derive(Debug, Clone)]
pub struct GalaxyStore {
    path: PathBuf,
}

impl GalaxyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(config.store_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the galaxy, creating the parent directory if needed
    pub fn write(&self, galaxy: &Galaxy, log: &mut EventLog) -> Result<()> {
        let json = serde_json::to_string_pretty(galaxy)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.unavailable(e))?;

        debug!(path = %self.path.display(), systems = galaxy.solar_system_count(), "galaxy saved");
        log.log_event(format!(
            "Saved galaxy {} to {}",
            galaxy.name(),
            self.path.display()
        ));
        Ok(())
    }

    /// Load a galaxy saved by [`GalaxyStore::write`]
    ///
    /// Central bodies are rebuilt from their stored parts; planets are rebuilt
    /// from radius, orbit and moon, and rejected as `CorruptRecord` if the
    /// stored rockiness or mass disagrees. Map keys must match names and no
    /// two planets of a system may share an orbit. Creation events reach
    /// `log` only once the whole galaxy has loaded.
    pub fn read(&self, log: &mut EventLog) -> Result<Galaxy> {
        let json = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        let record: GalaxyRecord = serde_json::from_str(&json)?;

        let mut pending = EventLog::new();
        let galaxy = restore_galaxy(record, &mut pending)?;

        debug!(path = %self.path.display(), systems = galaxy.solar_system_count(), "galaxy loaded");
        pending.log_event(format!(
            "Loaded galaxy {} from {}",
            galaxy.name(),
            self.path.display()
        ));
        log.append(&mut pending);
        Ok(galaxy)
    }

    fn unavailable(&self, source: std::io::Error) -> GalaxyError {
        warn!(path = %self.path.display(), error = %source, "galaxy store unavailable");
        GalaxyError::storage(&self.path, source)
    }
}

fn corrupt(message: String) -> GalaxyError {
    GalaxyError::CorruptRecord { message }
}

fn restore_galaxy(record: GalaxyRecord, log: &mut EventLog) -> Result<Galaxy> {
    let mut galaxy = Galaxy::new(record.name, log);
    for (key, system) in record.solar_systems {
        if key != system.name {
            return Err(corrupt(format!(
                "solar system stored as '{}' is named '{}'",
                key, system.name
            )));
        }
        let system = restore_solar_system(system, log)?;
        galaxy.add_solar_system(system, log)?;
    }
    Ok(galaxy)
}

fn restore_solar_system(record: SolarSystemRecord, log: &mut EventLog) -> Result<SolarSystem> {
    let central_body = restore_body(record.central_body, log);
    let mut system = SolarSystem::new(record.name, central_body, log);

    for (key, stored) in record.planets {
        if key != stored.name {
            return Err(corrupt(format!(
                "planet stored as '{}' in {} is named '{}'",
                key,
                system.name(),
                stored.name
            )));
        }
        let planet = restore_planet(stored, system.name())?;
        if let Some(other) = system.planets().find(|p| p.orbit_size == planet.orbit_size) {
            return Err(corrupt(format!(
                "planets {} and {} in {} share an orbit",
                other.name,
                planet.name,
                system.name()
            )));
        }
        system.add_planet(planet, log)?;
    }
    Ok(system)
}

/// Rebuild a central body through its fully specified constructor
fn restore_body(stored: CentralBody, log: &mut EventLog) -> CentralBody {
    match stored {
        CentralBody::BlackHole(b) => {
            BlackHole::from_parts(b.name, b.mass, b.radius_km, log).into()
        }
        CentralBody::WhiteDwarf(b) => {
            WhiteDwarf::from_parts(b.name, b.mass, b.radius_km, log).into()
        }
        CentralBody::NeutronStar(b) => {
            NeutronStar::from_parts(b.name, b.mass, b.radius_km, log).into()
        }
        CentralBody::GiantStar(b) => {
            GiantStar::from_parts(b.name, b.mass, b.radius_solar, b.luminosity, log).into()
        }
        CentralBody::Binary(b) => {
            let body1 = restore_body(*b.body1, log);
            let body2 = restore_body(*b.body2, log);
            Binary::new(b.name, body1, body2, log).into()
        }
    }
}

fn restore_planet(stored: PlanetRecord, system: &str) -> Result<Planet> {
    let positive = |value: f64| value > 0.0 && value.is_finite();
    if !positive(stored.radius) || !positive(stored.orbit_size.to_au()) {
        return Err(corrupt(format!(
            "planet {} in {} needs a positive radius and orbit",
            stored.name, system
        )));
    }

    let planet = Planet::new(stored.name, stored.radius, stored.orbit_size, stored.moon);
    if planet.rocky() != stored.rocky || planet.mass() != stored.mass {
        return Err(corrupt(format!(
            "planet {} in {} has rockiness or mass that does not match its radius",
            planet.name, system
        )));
    }
    Ok(planet)
}
