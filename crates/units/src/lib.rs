//! Typed physical quantities shared by the galaxy builder crates.

pub mod length;
pub mod mass;
pub mod temperature;

#[cfg(test)]
mod length_test;

pub use length::Length;
pub use mass::{EARTH_MASS_G, Mass, SOLAR_MASS_G};
pub use temperature::Temperature;
