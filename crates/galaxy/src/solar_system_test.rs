use std::f64::consts::PI;

use approx::assert_relative_eq;
use event_log::EventLog;
use planetary::Planet;
use stellar::{BlackHole, BodyKind, CentralBody, GiantStar};
use units::{Length, Mass};

use crate::{GalaxyError, SolarSystem};

fn giant_system(log: &mut EventLog) -> SolarSystem {
    let star = GiantStar::new("helios", 10.0, log);
    SolarSystem::new("sys", star.into(), log)
}

#[test]
fn test_new_system_has_no_planets() {
    let mut log = EventLog::new();
    let system = giant_system(&mut log);

    assert_eq!(system.planet_count(), 0);
    assert_eq!(system.central_body().kind(), BodyKind::GiantStar);
    assert!(system.can_supernova());
}

#[test]
fn test_add_planet_without_collision() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);

    let a = Planet::new("a", 1.0, Length::from_au(1.0), false);
    let b = Planet::new("b", 7.0, Length::from_au(5.2), true);
    assert!(!system.add_planet(a, &mut log).unwrap());
    assert!(!system.add_planet(b, &mut log).unwrap());

    assert_eq!(system.planet_count(), 2);
    assert_eq!(system.planet("b").map(|p| p.rocky()), Some(false));
}

#[test]
fn test_collision_merges_into_existing_planet() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);

    let first = Planet::new("first", 3.0, Length::from_au(4.0), false);
    let second = Planet::new("second", 2.0, Length::from_au(4.0), false);
    system.add_planet(first, &mut log).unwrap();
    let collided = system.add_planet(second, &mut log).unwrap();

    assert!(collided);
    assert_eq!(system.planet_count(), 1);
    assert!(system.planet("second").is_none());

    let merged = system.planet("first").unwrap();
    assert_eq!(merged.orbit_size, Length::from_au(4.0));
    assert_eq!(merged.radius(), 5.0);
    assert!(merged.moon);
    assert!(merged.rocky());
    assert_relative_eq!(
        merged.earth_masses(),
        4.0 * PI * 0.18 * 125.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_collision_always_yields_a_moon() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);

    let x = Planet::new("x", 4.0, Length::from_au(2.0), false);
    let y = Planet::new("y", 4.0, Length::from_au(2.0), false);
    system.add_planet(x, &mut log).unwrap();
    system.add_planet(y, &mut log).unwrap();

    let merged = system.planet("x").unwrap();
    assert!(merged.moon);
    assert_eq!(merged.radius(), 8.0);
    assert!(!merged.rocky());
}

#[test]
fn test_planet_count_tracks_live_collection() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);

    for (i, orbit) in [1.0, 2.0, 1.0, 3.0, 2.0, 1.0].into_iter().enumerate() {
        system.add_planet(
            Planet::new(format!("p{i}"), 1.0, Length::from_au(orbit), false),
            &mut log,
        )
        .unwrap();
        assert_eq!(system.planet_count(), system.planets().count());
    }
    // Three distinct orbits survive
    assert_eq!(system.planet_count(), 3);

    system.remove_planet("p0", &mut log);
    assert_eq!(system.planet_count(), 2);
    assert_eq!(system.planet_count(), system.planets().count());
}

#[test]
fn test_remove_planet() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);
    system.add_planet(Planet::seed("earth"), &mut log).unwrap();

    let removed = system.remove_planet("earth", &mut log);
    assert_eq!(removed.map(|p| p.name), Some("earth".to_string()));
    assert!(system.remove_planet("earth", &mut log).is_none());
}

#[test]
fn test_check_planet_name() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);
    system.add_planet(Planet::seed("earth"), &mut log).unwrap();

    assert!(system.check_planet_name("mars").is_ok());
    assert!(matches!(
        system.check_planet_name("earth"),
        Err(GalaxyError::NameConflict { name }) if name == "earth"
    ));
}

#[test]
fn test_duplicate_planet_name_is_rejected() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);
    system.add_planet(Planet::new("p", 3.0, Length::from_au(1.0), false), &mut log).unwrap();
    let events_before = log.len();

    let result = system.add_planet(Planet::new("p", 9.0, Length::from_au(2.0), false), &mut log);

    assert!(matches!(result, Err(GalaxyError::NameConflict { ref name }) if name == "p"));
    assert_eq!(system.planet_count(), 1);
    assert_eq!(log.len(), events_before);
    // The first planet survives untouched
    let kept = system.planet("p").unwrap();
    assert_eq!(kept.radius(), 3.0);
    assert_eq!(kept.orbit_size, Length::from_au(1.0));
}

#[test]
fn test_duplicate_name_on_occupied_orbit_does_not_merge() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);
    system.add_planet(Planet::seed("earth"), &mut log).unwrap();

    assert!(system.add_planet(Planet::seed("earth"), &mut log).is_err());
    let earth = system.planet("earth").unwrap();
    assert_eq!(earth.radius(), 1.0);
    assert!(!earth.moon);
}

#[test]
fn test_collapse_leaves_black_hole_and_no_planets() {
    let mut log = EventLog::new();
    let mut system = giant_system(&mut log);
    let original_mass = system.central_body().mass();

    system.add_planet(Planet::seed("a"), &mut log).unwrap();
    let b = Planet::new("b", 6.0, Length::from_au(3.0), true);
    system.add_planet(b, &mut log).unwrap();

    let collapsed = system.collapse(&mut log);

    assert_eq!(collapsed.name(), "sys");
    assert_eq!(collapsed.planet_count(), 0);
    assert!(!collapsed.can_supernova());
    match collapsed.central_body() {
        CentralBody::BlackHole(hole) => {
            assert_eq!(hole.name, "helios");
            assert_eq!(hole.mass, original_mass);
            assert_eq!(hole.radius_km, 4.2e-6 * original_mass.to_solar_masses());
        }
        other => panic!("expected a black hole, got {}", other.kind()),
    }
}

#[test]
fn test_mutations_are_logged_in_order() {
    let mut log = EventLog::new();
    let hole = BlackHole::new("gargantua", Mass::from_solar_masses(100.0), &mut log);
    let mut system = SolarSystem::new("endurance", hole.into(), &mut log);

    let miller = Planet::new("miller", 1.0, Length::from_au(0.1), false);
    let mann = Planet::new("mann", 1.0, Length::from_au(0.1), false);
    system.add_planet(miller, &mut log).unwrap();
    system.add_planet(mann, &mut log).unwrap();
    system.remove_planet("miller", &mut log);

    let descriptions: Vec<&str> = log.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Created black hole: gargantua",
            "Created solar system: endurance around gargantua (Black Hole)",
            "Added planet miller to endurance",
            "Planet mann collided with miller in endurance",
            "Removed planet miller from endurance",
        ]
    );
}
