//! Unit entity and value conversion between units of a quantity

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Conversion;

/// A physical unit: identity, quantity grouping, aliases and the affine
/// conversion to its quantity's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Globally unique id in `<quantity-slug>:<unit-slug>` form
    /// (e.g. "temperature:celsius")
    pub external_id: String,
    /// The unit name (e.g. "Celsius")
    pub name: String,
    /// Display name of the quantity grouping interconvertible units
    /// (e.g. "Temperature")
    pub quantity: String,
    /// Alternative lookup names, unique within the unit
    pub alias_names: Vec<String>,
    /// Transform onto the quantity's base unit
    pub conversion: Conversion,
    /// Names of the unit systems this unit belongs to, if any
    pub systems: BTreeSet<String>,
}

impl Unit {
    /// Create a unit with no aliases and no system membership
    pub fn new(external_id: &str, name: &str, quantity: &str, conversion: Conversion) -> Self {
        Unit {
            external_id: external_id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            alias_names: Vec::new(),
            conversion,
            systems: BTreeSet::new(),
        }
    }

    /// Builder: set alias names
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.alias_names = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Builder: set unit-system membership
    pub fn in_systems(mut self, systems: &[&str]) -> Self {
        self.systems = systems.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Check if this is its quantity's base unit
    pub fn is_base(&self) -> bool {
        self.conversion == Conversion::identity()
    }

    /// Convert a value from this unit to the quantity's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    /// Convert a value from the quantity's base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        self.conversion.from_base(value)
    }

    /// Convert a value from this unit to another unit of the same quantity
    ///
    /// Same-quantity pairing is the caller's invariant; the result is
    /// computed through the shared base without re-validating it. A unit
    /// converted to itself reproduces the value through the full formula.
    pub fn convert_to(&self, target: &Unit, value: f64) -> f64 {
        target.from_base(self.to_base(value))
    }

    /// Convert a squared quantity (e.g. a variance) from this unit to
    /// another unit of the same quantity
    ///
    /// Only the multiplier ratio applies; offsets carry no meaning for
    /// squared values.
    pub fn convert_variance_to(&self, target: &Unit, value: f64) -> f64 {
        let ratio = self.conversion.multiplier / target.conversion.multiplier;
        value * ratio * ratio
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.external_id)
    }
}
