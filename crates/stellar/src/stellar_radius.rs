use std::fmt;

/// Radius of a central body, tagged with the unit it is expressed in
///
/// Compact remnants are measured in kilometres, giant stars in solar radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StellarRadius {
    Kilometers(f64),
    SolarRadii(f64),
}

impl StellarRadius {
    pub fn value(&self) -> f64 {
        match self {
            Self::Kilometers(v) | Self::SolarRadii(v) => *v,
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            Self::Kilometers(_) => "kilometers",
            Self::SolarRadii(_) => "Solar radii",
        }
    }
}

impl fmt::Display for StellarRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value(), self.unit_label())
    }
}
