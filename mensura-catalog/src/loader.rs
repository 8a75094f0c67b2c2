//! Catalog loader - strict decoding of the structured data source
//!
//! The source contract is two JSON documents: a unit list and a
//! unit-system list. Records are decoded through dedicated serde types with
//! `deny_unknown_fields`, so malformed documents are rejected here before
//! any index is built.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use mensura_core::{CatalogError, Conversion, Unit, UnitSystem};

/// One unit record as carried by the source document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UnitRecord {
    external_id: String,
    name: String,
    quantity: String,
    conversion: ConversionRecord,
    alias_names: Vec<String>,
    #[serde(default)]
    systems: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConversionRecord {
    multiplier: f64,
    offset: f64,
}

/// One unit-system record: a name and a quantity-to-unit mapping
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SystemRecord {
    name: String,
    units: HashMap<String, String>,
}

impl From<UnitRecord> for Unit {
    fn from(record: UnitRecord) -> Self {
        Unit {
            external_id: record.external_id,
            name: record.name,
            quantity: record.quantity,
            alias_names: record.alias_names,
            conversion: Conversion::new(record.conversion.multiplier, record.conversion.offset),
            systems: record.systems.into_iter().collect(),
        }
    }
}

impl From<SystemRecord> for UnitSystem {
    fn from(record: SystemRecord) -> Self {
        UnitSystem {
            name: record.name,
            units: record.units,
        }
    }
}

/// Decode a unit-list document from JSON text
pub fn units_from_str(json: &str) -> Result<Vec<Unit>, CatalogError> {
    let records: Vec<UnitRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Unit::from).collect())
}

/// Decode a unit-system-list document from JSON text
pub fn systems_from_str(json: &str) -> Result<Vec<UnitSystem>, CatalogError> {
    let records: Vec<SystemRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(UnitSystem::from).collect())
}

/// Read and decode a unit-list document from disk
pub fn units_from_path(path: &Path) -> Result<Vec<Unit>, CatalogError> {
    units_from_str(&fs::read_to_string(path)?)
}

/// Read and decode a unit-system-list document from disk
pub fn systems_from_path(path: &Path) -> Result<Vec<UnitSystem>, CatalogError> {
    systems_from_str(&fs::read_to_string(path)?)
}
