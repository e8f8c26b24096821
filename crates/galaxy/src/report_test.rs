use event_log::EventLog;
use planetary::Planet;
use stellar::{Binary, BlackHole, CentralBody, GiantStar, WhiteDwarf};
use units::{Length, Mass};

use crate::report::{central_body_summary, galaxy_summary, planet_summary, solar_system_summary};
use crate::{Galaxy, SolarSystem};

#[test]
fn test_giant_star_summary() {
    let mut log = EventLog::new();
    let giant: CentralBody = GiantStar::new("rigel", 10.0, &mut log).into();
    let summary = central_body_summary(&giant);

    assert!(summary.starts_with("Name: rigel - Giant Star"));
    assert!(summary.contains("Solar radii"));
    assert!(summary.contains("Luminosity: 10.00 Solar luminosities"));
}

#[test]
fn test_compact_body_summary_uses_kilometres() {
    let mut log = EventLog::new();
    let dwarf: CentralBody = WhiteDwarf::new("sirius b", Mass::from_solar_masses(1.0), &mut log).into();
    let summary = central_body_summary(&dwarf);

    assert!(summary.contains("Mass: 1.00 Solar masses"));
    assert!(summary.contains("Radius: 5916.00 kilometers"));
    assert!(!summary.contains("Luminosity"));
}

#[test]
fn test_binary_summary_has_no_radius() {
    let mut log = EventLog::new();
    let a = BlackHole::new("a", Mass::from_solar_masses(3.0), &mut log);
    let b = WhiteDwarf::new("b", Mass::from_solar_masses(1.0), &mut log);
    let pair: CentralBody = Binary::new("ab", a.into(), b.into(), &mut log).into();
    let summary = central_body_summary(&pair);

    assert!(summary.contains("Composed of a Black Hole and a White Dwarf"));
    assert!(summary.contains("Mass: 4.00 Solar masses"));
    assert!(!summary.contains("Radius"));
}

#[test]
fn test_planet_summary() {
    let rocky = Planet::new("earth", 1.0, Length::from_au(1.0), true);
    let summary = planet_summary(&rocky);
    assert!(summary.starts_with("Name: earth - Rocky planet - Has a moon"));
    assert!(summary.contains("Radius: 1.00 Earth radii"));
    assert!(summary.contains("Orbit Size: 1.00 Earth orbits"));

    let gas = Planet::new("neptune", 6.0, Length::from_au(30.0), false);
    assert!(planet_summary(&gas).contains("Gas giant planet - No moon"));
}

#[test]
fn test_system_and_galaxy_summaries() {
    let mut log = EventLog::new();
    let mut galaxy = Galaxy::new("local group", &mut log);
    let sun = GiantStar::new("sun", 1.0, &mut log);
    let mut sol = SolarSystem::new("sol", sun.into(), &mut log);
    sol.add_planet(Planet::seed("earth"), &mut log).unwrap();

    let system_text = solar_system_summary(&sol);
    assert!(system_text.starts_with("Solar System: sol"));
    assert!(system_text.contains("PLANETS: (1 planets)"));
    assert!(system_text.contains("Name: earth"));

    galaxy.add_solar_system(sol, &mut log).unwrap();
    let galaxy_text = galaxy_summary(&galaxy);
    assert!(galaxy_text.starts_with("GALAXY: local group"));
    assert!(galaxy_text.contains("Central body: Giant Star"));
    assert!(galaxy_text.contains("Number of planets: 1"));
}
