//! Unit catalog - lookup structures, load-time validation and unit-system
//! resolution

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use mensura_core::{CatalogError, LookupError, Unit, UnitSystem, DEFAULT_SYSTEM};

use crate::loader;

static BUNDLED_UNITS: &str = include_str!("../data/units.json");
static BUNDLED_SYSTEMS: &str = include_str!("../data/systems.json");

/// Process-wide catalog built from the bundled canonical data
///
/// The bundled documents are maintained alongside the code, so
/// initialization treats an inconsistency in them as a programming error.
/// Independent instances can always be built from explicit sources,
/// bypassing this one entirely.
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(|| {
    UnitCatalog::from_json(BUNDLED_UNITS, BUNDLED_SYSTEMS)
        .expect("bundled unit catalog is consistent")
});

/// Immutable catalog of units with hash-based lookup structures
///
/// Built once, eagerly, from a data source; every query afterwards is a
/// pure read over the finished index, so concurrent readers need no
/// locking.
#[derive(Debug)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    by_external_id: HashMap<String, usize>,
    by_quantity: HashMap<String, Vec<usize>>,
    by_quantity_alias: HashMap<String, HashMap<String, usize>>,
    by_alias: HashMap<String, Vec<usize>>,
    systems: HashMap<String, UnitSystem>,
}

impl UnitCatalog {
    /// Build a catalog from already-decoded records
    ///
    /// Validates every load-time invariant; the first violation aborts
    /// construction, so a partially consistent catalog is never exposed.
    pub fn new(units: Vec<Unit>, systems: Vec<UnitSystem>) -> Result<Self, CatalogError> {
        let mut catalog = UnitCatalog {
            units: Vec::with_capacity(units.len()),
            by_external_id: HashMap::new(),
            by_quantity: HashMap::new(),
            by_quantity_alias: HashMap::new(),
            by_alias: HashMap::new(),
            systems: HashMap::new(),
        };
        for unit in units {
            catalog.insert_unit(unit)?;
        }
        for system in systems {
            catalog.insert_system(system)?;
        }
        Ok(catalog)
    }

    /// Build a catalog from the two JSON documents of the source contract
    pub fn from_json(units_json: &str, systems_json: &str) -> Result<Self, CatalogError> {
        Self::new(
            loader::units_from_str(units_json)?,
            loader::systems_from_str(systems_json)?,
        )
    }

    /// Build a catalog from documents on disk
    pub fn from_paths(units: &Path, systems: &Path) -> Result<Self, CatalogError> {
        Self::new(
            loader::units_from_path(units)?,
            loader::systems_from_path(systems)?,
        )
    }

    fn insert_unit(&mut self, unit: Unit) -> Result<(), CatalogError> {
        let expected = quantity_slug(&unit.quantity);
        if !id_matches_slug(&unit.external_id, &expected) {
            return Err(CatalogError::InvalidExternalId {
                id: unit.external_id.clone(),
                name: unit.name.clone(),
                quantity: unit.quantity.clone(),
                expected,
            });
        }
        if !unit.conversion.multiplier.is_finite() || unit.conversion.multiplier == 0.0 {
            return Err(CatalogError::InvalidMultiplier {
                id: unit.external_id.clone(),
                multiplier: unit.conversion.multiplier,
            });
        }
        if self.by_external_id.contains_key(&unit.external_id) {
            return Err(CatalogError::DuplicateExternalId {
                id: unit.external_id.clone(),
                name: unit.name.clone(),
                quantity: unit.quantity.clone(),
            });
        }

        let index = self.units.len();
        let quantity_aliases = self
            .by_quantity_alias
            .entry(unit.quantity.clone())
            .or_default();
        for (position, alias) in unit.alias_names.iter().enumerate() {
            // A repeat inside one unit is its own error kind; check it
            // before the quantity-wide index reports it as a cross-unit
            // clash.
            if unit.alias_names[..position].contains(alias) {
                return Err(CatalogError::DuplicateUnitAlias {
                    alias: alias.clone(),
                    id: unit.external_id.clone(),
                });
            }
            if quantity_aliases.insert(alias.clone(), index).is_some() {
                return Err(CatalogError::DuplicateQuantityAlias {
                    alias: alias.clone(),
                    quantity: unit.quantity.clone(),
                    id: unit.external_id.clone(),
                });
            }
            self.by_alias.entry(alias.clone()).or_default().push(index);
        }

        self.by_external_id.insert(unit.external_id.clone(), index);
        self.by_quantity
            .entry(unit.quantity.clone())
            .or_default()
            .push(index);
        self.units.push(unit);
        Ok(())
    }

    fn insert_system(&mut self, system: UnitSystem) -> Result<(), CatalogError> {
        if self.systems.contains_key(&system.name) {
            return Err(CatalogError::DuplicateSystem { name: system.name });
        }
        for (quantity, id) in &system.units {
            if !self.by_external_id.contains_key(id) {
                return Err(CatalogError::UnknownSystemUnit {
                    system: system.name.clone(),
                    quantity: quantity.clone(),
                    id: id.clone(),
                });
            }
        }
        self.systems.insert(system.name.clone(), system);
        Ok(())
    }

    /// Exact lookup by external id
    pub fn unit_by_external_id(&self, id: &str) -> Result<&Unit, LookupError> {
        self.by_external_id
            .get(id)
            .map(|&i| &self.units[i])
            .ok_or_else(|| LookupError::UnknownExternalId(id.to_string()))
    }

    /// All units of a quantity, in source order
    ///
    /// An unknown quantity is an error, distinct from an empty list.
    pub fn units_by_quantity(&self, quantity: &str) -> Result<Vec<&Unit>, LookupError> {
        self.by_quantity
            .get(quantity)
            .map(|ids| ids.iter().map(|&i| &self.units[i]).collect())
            .ok_or_else(|| LookupError::UnknownQuantity(quantity.to_string()))
    }

    /// Exact lookup by quantity and alias
    pub fn unit_by_quantity_and_alias(
        &self,
        quantity: &str,
        alias: &str,
    ) -> Result<&Unit, LookupError> {
        self.by_quantity_alias
            .get(quantity)
            .and_then(|aliases| aliases.get(alias))
            .map(|&i| &self.units[i])
            .ok_or_else(|| LookupError::UnknownQuantityAlias {
                quantity: quantity.to_string(),
                alias: alias.to_string(),
            })
    }

    /// All units sharing an alias, across quantities
    ///
    /// Broader than the (quantity, alias) lookup: aliases are only unique
    /// within a quantity, so this may return several units.
    pub fn units_by_alias(&self, alias: &str) -> Result<Vec<&Unit>, LookupError> {
        self.by_alias
            .get(alias)
            .map(|ids| ids.iter().map(|&i| &self.units[i]).collect())
            .ok_or_else(|| LookupError::UnknownAlias(alias.to_string()))
    }

    /// The full unit list, in source order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Names of all unit systems, sorted
    pub fn unit_systems(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.systems.keys().map(|n| n.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the unit representing a unit's quantity within a system
    ///
    /// Falls back to the "Default" system when the requested system has no
    /// unit for the quantity. A quantity designated by neither is a catalog
    /// gap and is surfaced to the caller rather than silently answered with
    /// the input unit.
    pub fn unit_by_system(&self, unit: &Unit, system: &str) -> Result<&Unit, LookupError> {
        let requested = self
            .systems
            .get(system)
            .ok_or_else(|| LookupError::UnknownSystem(system.to_string()))?;
        let designated = requested.designated(&unit.quantity).or_else(|| {
            self.systems
                .get(DEFAULT_SYSTEM)
                .and_then(|fallback| fallback.designated(&unit.quantity))
        });
        let id = designated.ok_or_else(|| LookupError::UnresolvableQuantity {
            quantity: unit.quantity.clone(),
            system: system.to_string(),
        })?;
        self.unit_by_external_id(id)
    }
}

/// Lower-kebab-case slug of a quantity display name
/// ("Linear Density" -> "linear-density")
fn quantity_slug(quantity: &str) -> String {
    quantity
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn id_matches_slug(id: &str, slug: &str) -> bool {
    match id.split_once(':') {
        Some((prefix, suffix)) => prefix == slug && !suffix.is_empty() && !suffix.contains(':'),
        None => false,
    }
}
