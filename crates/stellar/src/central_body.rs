//! The closed set of bodies that can anchor a solar system.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Mass, Temperature};

use crate::stellar_objects::{Binary, BlackHole, GiantStar, NeutronStar, WhiteDwarf};
use crate::stellar_radius::StellarRadius;

/// Kind tag of a central body, as shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    BlackHole,
    WhiteDwarf,
    NeutronStar,
    GiantStar,
    Binary,
}

impl BodyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BlackHole => "Black Hole",
            Self::WhiteDwarf => "White Dwarf",
            Self::NeutronStar => "Neutron Star",
            Self::GiantStar => "Giant Star",
            Self::Binary => "Binary",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A central body of any kind
///
/// Kind-specific data (a giant's luminosity, a binary's members) is reached
/// by matching on the variant; the accessors below return `Option` where a
/// kind does not carry the attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CentralBody {
    BlackHole(BlackHole),
    WhiteDwarf(WhiteDwarf),
    NeutronStar(NeutronStar),
    GiantStar(GiantStar),
    Binary(Binary),
}

impl CentralBody {
    pub fn name(&self) -> &str {
        match self {
            Self::BlackHole(b) => &b.name,
            Self::WhiteDwarf(b) => &b.name,
            Self::NeutronStar(b) => &b.name,
            Self::GiantStar(b) => &b.name,
            Self::Binary(b) => &b.name,
        }
    }

    pub fn mass(&self) -> Mass {
        match self {
            Self::BlackHole(b) => b.mass,
            Self::WhiteDwarf(b) => b.mass,
            Self::NeutronStar(b) => b.mass,
            Self::GiantStar(b) => b.mass,
            Self::Binary(b) => b.mass(),
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Self::BlackHole(_) => BodyKind::BlackHole,
            Self::WhiteDwarf(_) => BodyKind::WhiteDwarf,
            Self::NeutronStar(_) => BodyKind::NeutronStar,
            Self::GiantStar(_) => BodyKind::GiantStar,
            Self::Binary(_) => BodyKind::Binary,
        }
    }

    /// Radius in the unit natural to the kind; a binary has none
    pub fn radius(&self) -> Option<StellarRadius> {
        match self {
            Self::BlackHole(b) => Some(StellarRadius::Kilometers(b.radius_km)),
            Self::WhiteDwarf(b) => Some(StellarRadius::Kilometers(b.radius_km)),
            Self::NeutronStar(b) => Some(StellarRadius::Kilometers(b.radius_km)),
            Self::GiantStar(b) => Some(StellarRadius::SolarRadii(b.radius_solar)),
            Self::Binary(_) => None,
        }
    }

    /// Whether this body may be collapsed by a supernova
    ///
    /// Binaries never qualify: collapsing a pair into one black hole is not
    /// modelled.
    pub fn can_supernova(&self) -> bool {
        match self {
            Self::GiantStar(_) => true,
            Self::WhiteDwarf(b) => b.can_supernova(),
            Self::BlackHole(_) | Self::NeutronStar(_) | Self::Binary(_) => false,
        }
    }

    /// Luminosity in L☉, carried only by giant stars
    pub fn luminosity(&self) -> Option<f64> {
        match self {
            Self::GiantStar(b) => Some(b.luminosity),
            _ => None,
        }
    }

    pub fn temperature(&self) -> Option<Temperature> {
        match self {
            Self::GiantStar(b) => Some(b.temperature),
            _ => None,
        }
    }
}

impl From<BlackHole> for CentralBody {
    fn from(body: BlackHole) -> Self {
        Self::BlackHole(body)
    }
}

impl From<WhiteDwarf> for CentralBody {
    fn from(body: WhiteDwarf) -> Self {
        Self::WhiteDwarf(body)
    }
}

impl From<NeutronStar> for CentralBody {
    fn from(body: NeutronStar) -> Self {
        Self::NeutronStar(body)
    }
}

impl From<GiantStar> for CentralBody {
    fn from(body: GiantStar) -> Self {
        Self::GiantStar(body)
    }
}

impl From<Binary> for CentralBody {
    fn from(body: Binary) -> Self {
        Self::Binary(body)
    }
}
