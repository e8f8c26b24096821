//! Solar systems and galaxies built from stellar and planetary bodies
//!
//! Ownership is a strict tree: a [`Galaxy`] owns its [`SolarSystem`]s, each
//! of which owns one central body and its planets. Every mutation takes the
//! session's [`event_log::EventLog`] so significant changes are recorded in
//! order.

pub mod config;
pub mod error;
pub mod galaxy;
pub mod input;
pub mod persistence;
pub mod report;
pub mod solar_system;

// Re-export main types at crate root
pub use config::BuilderConfig;
pub use error::{GalaxyError, Result};
pub use galaxy::Galaxy;
pub use persistence::GalaxyStore;
pub use solar_system::SolarSystem;

// Re-export body types for convenience
pub use planetary::Planet;
pub use stellar::{Binary, BlackHole, BodyKind, CentralBody, GiantStar, NeutronStar, WhiteDwarf};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod report_test;
#[cfg(test)]
mod solar_system_test;
