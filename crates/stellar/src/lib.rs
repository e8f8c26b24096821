//! Central bodies of a solar system and their derivation formulas.

pub mod central_body;
pub mod stellar_objects;
pub mod stellar_radius;


// Re-export types
pub use central_body::{BodyKind, CentralBody};
pub use stellar_objects::{Binary, BlackHole, GiantStar, NeutronStar, WhiteDwarf};
pub use stellar_radius::StellarRadius;
