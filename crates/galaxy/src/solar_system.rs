//! A central body and the planets orbiting it

use std::collections::BTreeMap;

use event_log::EventLog;
use planetary::Planet;
use serde::Serialize;
use stellar::{BlackHole, CentralBody};

use crate::error::{GalaxyError, Result};

/// A solar system: one central body and planets keyed by name
///
/// No two planets share a name or an orbit size. Adding a planet on an
/// occupied orbit merges it into the planet already there (see
/// [`SolarSystem::add_planet`]). The name is fixed at creation, so a galaxy
/// can key systems by it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    name: String,
    central_body: CentralBody,
    planets: BTreeMap<String, Planet>,
}

impl SolarSystem {
    /// Create a solar system with no planets
    pub fn new(name: impl Into<String>, central_body: CentralBody, log: &mut EventLog) -> Self {
        let name = name.into();
        log.log_event(format!(
            "Created solar system: {name} around {} ({})",
            central_body.name(),
            central_body.kind()
        ));
        Self {
            name,
            central_body,
            planets: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn central_body(&self) -> &CentralBody {
        &self.central_body
    }

    /// Whether the central body may go supernova
    pub fn can_supernova(&self) -> bool {
        self.central_body.can_supernova()
    }

    /// Add a planet, merging it with any planet already on the same orbit
    ///
    /// Returns `Ok(true)` when a collision happened. The merged planet keeps
    /// the existing planet's name and orbit, sums the radii and always has a
    /// moon; the incoming planet's name is discarded.
    ///
    /// Fails with `NameConflict`, leaving the system unchanged, if a planet
    /// already carries the incoming name.
    pub fn add_planet(&mut self, planet: Planet, log: &mut EventLog) -> Result<bool> {
        self.check_planet_name(&planet.name)?;

        let existing = self
            .planets
            .values()
            .find(|p| p.orbit_size == planet.orbit_size)
            .map(|p| p.name.clone());

        match existing {
            Some(existing_name) => {
                let merged = self.planets[&existing_name].merged_with(&planet);
                tracing::debug!(
                    system = %self.name,
                    survivor = %existing_name,
                    absorbed = %planet.name,
                    radius = merged.radius(),
                    "planets collided"
                );
                log.log_event(format!(
                    "Planet {} collided with {} in {}",
                    planet.name, existing_name, self.name
                ));
                self.planets.insert(existing_name, merged);
                Ok(true)
            }
            None => {
                log.log_event(format!("Added planet {} to {}", planet.name, self.name));
                self.planets.insert(planet.name.clone(), planet);
                Ok(false)
            }
        }
    }

    /// Remove a planet by name
    ///
    /// Callers confirm the planet exists before asking; `None` means nothing
    /// was removed.
    pub fn remove_planet(&mut self, name: &str, log: &mut EventLog) -> Option<Planet> {
        let removed = self.planets.remove(name);
        if removed.is_some() {
            log.log_event(format!("Removed planet {} from {}", name, self.name));
        }
        removed
    }

    /// Fail with `NameConflict` if a planet already carries this name
    pub fn check_planet_name(&self, name: &str) -> Result<()> {
        if self.planets.contains_key(name) {
            Err(GalaxyError::name_conflict(name))
        } else {
            Ok(())
        }
    }

    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets.get(name)
    }

    /// Planets ordered by name
    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.values()
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Collapse the central body into a black hole, destroying every planet
    ///
    /// The black hole keeps the original body's name and mass, and the new
    /// system keeps this system's name. The supernova gate
    /// ([`SolarSystem::can_supernova`]) is the caller's to check.
    pub fn collapse(self, log: &mut EventLog) -> SolarSystem {
        tracing::debug!(
            system = %self.name,
            body = self.central_body.name(),
            planets = self.planets.len(),
            "supernova"
        );
        log.log_event(format!(
            "Supernova in {}: {} collapsed, {} planets destroyed",
            self.name,
            self.central_body.name(),
            self.planets.len()
        ));

        let remnant = BlackHole::new(
            self.central_body.name().to_string(),
            self.central_body.mass(),
            log,
        );
        SolarSystem::new(self.name, remnant.into(), log)
    }
}
