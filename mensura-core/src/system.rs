//! Unit systems - named profiles designating one unit per quantity

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of the system used as the fallback when a requested system has no
/// unit for a quantity
pub const DEFAULT_SYSTEM: &str = "Default";

/// A named unit-system profile (e.g. "SI", "Imperial")
///
/// Maps quantity display names to the external id of the unit designated
/// for that quantity within the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSystem {
    /// Unique system name
    pub name: String,
    /// Quantity display name to designated unit external id
    pub units: HashMap<String, String>,
}

impl UnitSystem {
    /// Create an empty system
    pub fn new(name: &str) -> Self {
        UnitSystem {
            name: name.to_string(),
            units: HashMap::new(),
        }
    }

    /// Builder: designate a unit for a quantity
    pub fn with_unit(mut self, quantity: &str, external_id: &str) -> Self {
        self.units
            .insert(quantity.to_string(), external_id.to_string());
        self
    }

    /// External id of the unit designated for a quantity, if any
    pub fn designated(&self, quantity: &str) -> Option<&str> {
        self.units.get(quantity).map(|id| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designated_unit() {
        let si = UnitSystem::new("SI")
            .with_unit("Length", "length:meter")
            .with_unit("Temperature", "temperature:kelvin");

        assert_eq!(si.designated("Length"), Some("length:meter"));
        assert_eq!(si.designated("Power"), None);
    }
}
