//! Mensura Catalog - catalog-backed unit lookup and conversion
//!
//! Loads a static catalog of unit definitions from a structured data
//! source, validates it for internal consistency, and serves hash-based
//! lookups, unit-system resolution and duplicate diagnostics over immutable
//! in-memory structures. Conversion math lives on `mensura_core::Unit`.
//!
//! Bundled quantities:
//! - Temperature (K, C, F, R)
//! - Length (m, km, cm, ft, in, mi)
//! - Mass (kg, g, lb, oz)
//! - Power (W, J/s, VA, kW, hp)
//! - Speed (m/s, km/h, mph, kn)
//! - Electric Charge (C, Ah)
//! - Linear Density (kg/m, lb/ft)
//!
//! The bundled catalog is exposed as the process-wide [`CATALOG`] static;
//! independent instances can be built from explicit sources with
//! [`UnitCatalog::from_json`] or [`UnitCatalog::from_paths`].

mod catalog;
mod duplicates;
mod loader;

pub use catalog::{UnitCatalog, CATALOG};
pub use duplicates::DuplicateGroup;
pub use loader::{systems_from_path, systems_from_str, units_from_path, units_from_str};
