//! Planets and the rules deriving their mass and type from size

pub mod planet;

// Re-export key types at crate root
pub use planet::{Planet, is_rocky, planet_mass};
