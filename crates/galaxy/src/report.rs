//! Human-readable summaries of galaxies, solar systems and their members

use std::fmt::Write;

use planetary::Planet;
use stellar::CentralBody;

use crate::galaxy::Galaxy;
use crate::solar_system::SolarSystem;

/// Name, kind, mass and the kind-specific details of a central body
pub fn central_body_summary(body: &CentralBody) -> String {
    let mut out = format!("Name: {} - {}\n", body.name(), body.kind());

    if let CentralBody::Binary(pair) = body {
        let _ = writeln!(
            out,
            "\tComposed of a {} and a {}",
            pair.body1.kind(),
            pair.body2.kind()
        );
    }

    let _ = writeln!(out, "\tMass: {:.2} Solar masses", body.mass().to_solar_masses());

    if let Some(radius) = body.radius() {
        let _ = writeln!(out, "\tRadius: {radius}");
    }

    if let Some(luminosity) = body.luminosity() {
        let _ = writeln!(out, "\tLuminosity: {luminosity:.2} Solar luminosities");
    }

    out
}

/// Name, type, moon flag, mass, radius and orbit of a planet
pub fn planet_summary(planet: &Planet) -> String {
    let planet_type = if planet.rocky() {
        "Rocky planet"
    } else {
        "Gas giant planet"
    };
    let moon = if planet.moon { "Has a moon" } else { "No moon" };

    format!(
        "Name: {} - {} - {}\n\t-Mass: {:.2} Earth masses\n\t-Radius: {:.2} Earth radii\n\t-Orbit Size: {:.2} Earth orbits\n",
        planet.name,
        planet_type,
        moon,
        planet.earth_masses(),
        planet.radius(),
        planet.orbit_size.to_au()
    )
}

/// Central body followed by every planet
pub fn solar_system_summary(system: &SolarSystem) -> String {
    let mut out = format!("Solar System: {}\n", system.name());
    out.push_str("CENTRAL BODY:\n");
    out.push_str(&central_body_summary(system.central_body()));

    let _ = writeln!(out, "PLANETS: ({} planets)", system.planet_count());
    for planet in system.planets() {
        out.push_str(&planet_summary(planet));
    }
    out
}

/// One short entry per solar system
pub fn galaxy_summary(galaxy: &Galaxy) -> String {
    let mut out = format!("GALAXY: {}\n", galaxy.name());
    for system in galaxy.solar_systems() {
        let _ = writeln!(
            out,
            "Name: {}\n\tCentral body: {}\n\tNumber of planets: {}",
            system.name(),
            system.central_body().kind(),
            system.planet_count()
        );
    }
    out
}
