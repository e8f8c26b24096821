//! The galaxy: a named collection of uniquely named solar systems

use std::collections::BTreeMap;

use event_log::EventLog;
use serde::Serialize;

use crate::error::{GalaxyError, Result};
use crate::solar_system::SolarSystem;

/// A galaxy owning solar systems keyed by name
///
/// # Examples
///
/// ```
/// use event_log::EventLog;
/// use galaxy::{Galaxy, SolarSystem};
/// use stellar::GiantStar;
///
/// let mut log = EventLog::new();
/// let mut galaxy = Galaxy::new("milky way", &mut log);
///
/// let sun = GiantStar::new("sun", 1.0, &mut log);
/// galaxy
///     .add_solar_system(SolarSystem::new("sol", sun.into(), &mut log), &mut log)
///     .unwrap();
///
/// assert_eq!(galaxy.solar_system_count(), 1);
/// assert!(galaxy.solar_system("sol").is_some());
/// assert!(galaxy.solar_system("vega").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Galaxy {
    name: String,
    solar_systems: BTreeMap<String, SolarSystem>,
}

impl Galaxy {
    /// Create an empty galaxy
    pub fn new(name: impl Into<String>, log: &mut EventLog) -> Self {
        let name = name.into();
        log.log_event(format!("Created galaxy: {name}"));
        Self {
            name,
            solar_systems: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the galaxy; solar system names are untouched
    pub fn change_name(&mut self, new_name: impl Into<String>, log: &mut EventLog) {
        let new_name = new_name.into();
        log.log_event(format!("Renamed galaxy {} to {}", self.name, new_name));
        self.name = new_name;
    }

    /// Register a solar system under its own name
    ///
    /// Fails with `NameConflict`, leaving the galaxy unchanged, if the name
    /// is already taken.
    pub fn add_solar_system(&mut self, solar_system: SolarSystem, log: &mut EventLog) -> Result<()> {
        let name = solar_system.name().to_string();
        if self.solar_systems.contains_key(&name) {
            return Err(GalaxyError::name_conflict(name));
        }

        log.log_event(format!("Added solar system {} to galaxy {}", name, self.name));
        self.solar_systems.insert(name, solar_system);
        Ok(())
    }

    /// Remove a solar system by name
    ///
    /// Callers look the system up first; `None` means nothing was removed.
    pub fn remove_solar_system(&mut self, name: &str, log: &mut EventLog) -> Option<SolarSystem> {
        let removed = self.solar_systems.remove(name);
        if removed.is_some() {
            log.log_event(format!(
                "Removed solar system {} from galaxy {}",
                name, self.name
            ));
        }
        removed
    }

    /// Look up a solar system; absence is a normal outcome
    pub fn solar_system(&self, name: &str) -> Option<&SolarSystem> {
        self.solar_systems.get(name)
    }

    /// Mutable access for editing planets; a system's name cannot change,
    /// so its key stays valid
    pub fn solar_system_mut(&mut self, name: &str) -> Option<&mut SolarSystem> {
        self.solar_systems.get_mut(name)
    }

    /// Solar systems ordered by name
    pub fn solar_systems(&self) -> impl Iterator<Item = &SolarSystem> {
        self.solar_systems.values()
    }

    /// Number of solar systems, always the live size of the collection
    pub fn solar_system_count(&self) -> usize {
        self.solar_systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solar_systems.is_empty()
    }

    /// Send a solar system's central body supernova
    ///
    /// The old system is removed and a fresh one registered under the same
    /// name, anchored by a black hole with the original body's name and mass
    /// and holding no planets. Whether the body may go supernova is for the
    /// caller to check.
    ///
    /// # Panics
    /// Panics if re-registering the collapsed system hits a name conflict,
    /// which cannot happen since its name was just vacated.
    pub fn supernova(&mut self, name: &str, log: &mut EventLog) -> Result<()> {
        let system = self
            .remove_solar_system(name, log)
            .ok_or_else(|| GalaxyError::not_found(name))?;

        let collapsed = system.collapse(log);
        if let Err(e) = self.add_solar_system(collapsed, log) {
            unreachable!("collapsed system could not be re-added: {e}");
        }
        Ok(())
    }
}
