//! Validation of raw user input before it reaches the domain types
//!
//! Front ends run every typed number and name through these helpers and
//! re-prompt on `InvalidInput`. The domain constructors themselves accept
//! whatever they are given.

use stellar::BodyKind;

use crate::error::{GalaxyError, Result};

/// Bounds on the value a user enters for a body kind
///
/// The value is a mass in solar masses, except for giant stars where it is
/// a luminosity in solar luminosities. The lower bound is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub max_inclusive: bool,
}

impl InputBounds {
    /// Inclusive range `[min, max]`
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_inclusive: true,
        }
    }

    /// Half-open range `[min, max)`
    pub const fn below(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_inclusive: false,
        }
    }

    /// Bounds for the defining input of a body kind; binaries take none
    pub fn for_kind(kind: BodyKind) -> Option<Self> {
        match kind {
            BodyKind::BlackHole => Some(Self::new(2.5, f64::INFINITY)),
            BodyKind::NeutronStar => Some(Self::new(1.4, 2.5)),
            // Strictly below the Chandrasekhar limit
            BodyKind::WhiteDwarf => Some(Self::below(0.0, 1.4)),
            BodyKind::GiantStar => Some(Self::new(0.0, f64::INFINITY)),
            BodyKind::Binary => None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.max_inclusive {
            (self.min..=self.max).contains(&value)
        } else {
            (self.min..self.max).contains(&value)
        }
    }
}

/// Parse a strictly positive number
///
/// # Examples
///
/// ```
/// use galaxy::input::parse_positive;
///
/// assert_eq!(parse_positive(" 2.5 ").unwrap(), 2.5);
/// assert!(parse_positive("0").is_err());
/// assert!(parse_positive("lots").is_err());
/// ```
pub fn parse_positive(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| GalaxyError::invalid_input(format!("'{trimmed}' is not a number")))?;

    if !value.is_finite() {
        return Err(GalaxyError::invalid_input(format!("'{trimmed}' is not a finite number")));
    }
    if value <= 0.0 {
        return Err(GalaxyError::invalid_input(format!("{value} is not positive")));
    }
    Ok(value)
}

/// Check an already parsed value against the bounds of a body kind
pub fn validate_body_input(kind: BodyKind, value: f64) -> Result<f64> {
    if value <= 0.0 {
        return Err(GalaxyError::invalid_input(format!("{value} is not positive")));
    }

    match InputBounds::for_kind(kind) {
        Some(bounds) if !bounds.contains(value) => {
            let upper = if bounds.max_inclusive { "at most" } else { "below" };
            Err(GalaxyError::invalid_input(format!(
                "{kind} input must be at least {} and {upper} {}, got {value}",
                bounds.min, bounds.max
            )))
        }
        _ => Ok(value),
    }
}

/// Parse and range-check in one step
pub fn parse_body_input(kind: BodyKind, text: &str) -> Result<f64> {
    parse_positive(text).and_then(|value| validate_body_input(kind, value))
}

/// Names are trimmed and lowercased, so "Sol " and "sol" collide
pub fn normalize_name(text: &str) -> String {
    text.trim().to_lowercase()
}
