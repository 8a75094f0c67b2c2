//! Typed errors for catalog loading and catalog queries
//!
//! Two distinct classes so callers can branch on kind: `CatalogError` means
//! the catalog data itself is broken and construction aborted; `LookupError`
//! means a single query missed and the service keeps running.

use thiserror::Error;

/// Load-time consistency error
///
/// Raised once during catalog construction; no partially built catalog is
/// ever exposed. Each variant names the offending record so the failure is
/// diagnosable without inspecting the source data further.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate external id `{id}` (unit `{name}`, quantity `{quantity}`)")]
    DuplicateExternalId {
        id: String,
        name: String,
        quantity: String,
    },

    #[error(
        "external id `{id}` of unit `{name}` does not match quantity `{quantity}` \
         (expected `{expected}:<unit-slug>`)"
    )]
    InvalidExternalId {
        id: String,
        name: String,
        quantity: String,
        expected: String,
    },

    #[error("alias `{alias}` appears twice on unit `{id}`")]
    DuplicateUnitAlias { alias: String, id: String },

    #[error("alias `{alias}` is used by more than one unit of quantity `{quantity}` (seen on `{id}`)")]
    DuplicateQuantityAlias {
        alias: String,
        quantity: String,
        id: String,
    },

    #[error("unit system `{system}` maps quantity `{quantity}` to unknown unit `{id}`")]
    UnknownSystemUnit {
        system: String,
        quantity: String,
        id: String,
    },

    #[error("unit `{id}` has unusable multiplier {multiplier} (must be finite and non-zero)")]
    InvalidMultiplier { id: String, multiplier: f64 },

    #[error("duplicate unit system `{name}`")]
    DuplicateSystem { name: String },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog source unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// Query-time lookup error
///
/// Raised per call and recoverable by the caller; never fatal to the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown unit `{0}`")]
    UnknownExternalId(String),

    #[error("unknown quantity `{0}`")]
    UnknownQuantity(String),

    #[error("quantity `{quantity}` has no unit with alias `{alias}`")]
    UnknownQuantityAlias { quantity: String, alias: String },

    #[error("no unit has alias `{0}`")]
    UnknownAlias(String),

    #[error("unknown unit system `{0}`")]
    UnknownSystem(String),

    #[error("quantity `{quantity}` has no unit in system `{system}` or the default system")]
    UnresolvableQuantity { quantity: String, system: String },
}
