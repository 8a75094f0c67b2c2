//! Affine conversion to a quantity's base unit

use serde::{Deserialize, Serialize};

/// Affine transform mapping a unit value onto its quantity's base unit
///
/// `to_base(x) = multiplier * x + offset`. Composing with the inverse of
/// another unit's transform converts between the two units via the shared
/// base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Scale applied before the offset
    pub multiplier: f64,
    /// Additive offset for non-proportional units (Celsius, Fahrenheit)
    pub offset: f64,
}

impl Conversion {
    /// Create a conversion with both scale and offset
    pub fn new(multiplier: f64, offset: f64) -> Self {
        Conversion { multiplier, offset }
    }

    /// Create a proportional conversion (no offset)
    pub fn scaling(multiplier: f64) -> Self {
        Conversion {
            multiplier,
            offset: 0.0,
        }
    }

    /// The identity transform used by base units
    pub fn identity() -> Self {
        Conversion {
            multiplier: 1.0,
            offset: 0.0,
        }
    }

    /// Check if this conversion has an offset (non-proportional)
    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }

    /// Convert a value in this unit to the quantity's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.multiplier + self.offset
    }

    /// Convert a value in the quantity's base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        (value - self.offset) / self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_to_base() {
        let km = Conversion::scaling(1000.0);
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_offset_to_base() {
        // Celsius onto a Kelvin base
        let celsius = Conversion::new(1.0, 273.15);
        assert_eq!(celsius.to_base(0.0), 273.15);
        assert_eq!(celsius.from_base(273.15), 0.0);
    }

    #[test]
    fn test_identity() {
        let id = Conversion::identity();
        assert_eq!(id.to_base(42.0), 42.0);
        assert_eq!(id.from_base(42.0), 42.0);
        assert!(!id.has_offset());
    }

    #[test]
    fn test_roundtrip() {
        let fahrenheit = Conversion::new(0.5555555555555556, 255.3722222222222);
        let value = 98.6;
        let back = fahrenheit.from_base(fahrenheit.to_base(value));
        assert!((back - value).abs() < 1e-9);
    }
}
