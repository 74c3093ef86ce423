//! Generic normalized address record.
//!
//! # Responsibility
//! - Hold the provider-agnostic fields every geocoding result shares.
//! - Serve as the composition base for provider-specific extensions.
//!
//! # Invariants
//! - Optional sub-objects (`coordinates`, `bounds`, `country`) are either
//!   fully populated or absent.
//! - The record is a plain value; sharing it across threads is safe because
//!   nothing mutates it in place.

use crate::model::admin_level::AdminLevelCollection;
use crate::model::country::Country;
use crate::model::geometry::{Bounds, Coordinates};
use serde::{Deserialize, Serialize};

/// Fallback provider label when the upstream result does not carry one.
pub const UNKNOWN_PROVIDER: &str = "n/a";

/// Provider-agnostic normalized address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Name of the geocoding provider the result came from.
    pub provided_by: String,
    /// Administrative subdivisions, ascending by level.
    pub admin_levels: AdminLevelCollection,
    pub coordinates: Option<Coordinates>,
    pub bounds: Option<Bounds>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub postal_code: Option<String>,
    pub locality: Option<String>,
    pub sub_locality: Option<String>,
    pub country: Option<Country>,
    pub timezone: Option<String>,
}

impl Address {
    /// Creates an address with every optional field absent.
    ///
    /// The builder fills in whatever the raw result could materialize.
    pub fn new(provided_by: impl Into<String>, admin_levels: AdminLevelCollection) -> Self {
        Self {
            provided_by: provided_by.into(),
            admin_levels,
            coordinates: None,
            bounds: None,
            street_number: None,
            street_name: None,
            postal_code: None,
            locality: None,
            sub_locality: None,
            country: None,
            timezone: None,
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new(UNKNOWN_PROVIDER, AdminLevelCollection::empty())
    }
}
