//! Mensura Core - Fundamental types
//!
//! This crate provides the core types used throughout Mensura:
//! - `Conversion`: affine transform onto a quantity's base unit
//! - `Unit`: a physical unit with identity, aliases and conversion
//! - `UnitSystem`: a named profile designating one unit per quantity
//! - `CatalogError` / `LookupError`: load-time vs query-time failures

mod conversion;
mod error;
mod system;
mod unit;

pub use conversion::Conversion;
pub use error::{CatalogError, LookupError};
pub use system::{UnitSystem, DEFAULT_SYSTEM};
pub use unit::Unit;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CatalogError, Conversion, LookupError, Unit, UnitSystem, DEFAULT_SYSTEM};
}
