//! French-geocoding address record.
//!
//! # Responsibility
//! - Extend the generic address with the INSEE-derived fields French
//!   providers return: city code, superseded city code and name.
//! - Expose copy-on-write setters so shared values stay immutable.
//!
//! # Invariants
//! - `with_*` setters return a new value; the original is never touched.

use crate::model::address::Address;
use serde::{Deserialize, Serialize};

/// Normalized address enriched with French-specific fields.
///
/// Composition over the generic [`Address`] rather than inheritance; the
/// base record stays usable on its own and the wire shape stays flat
/// thanks to `serde(flatten)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrenchAddress {
    #[serde(flatten)]
    pub base: Address,
    /// INSEE city code of the result.
    pub city_code: Option<String>,
    /// INSEE code of the absorbed commune, for merged municipalities.
    pub old_city_code: Option<String>,
    /// Name of the absorbed commune, for merged municipalities.
    pub old_city: Option<String>,
}

impl FrenchAddress {
    pub fn new(base: Address) -> Self {
        Self {
            base,
            city_code: None,
            old_city_code: None,
            old_city: None,
        }
    }

    pub fn city_code(&self) -> Option<&str> {
        self.city_code.as_deref()
    }

    pub fn old_city_code(&self) -> Option<&str> {
        self.old_city_code.as_deref()
    }

    pub fn old_city(&self) -> Option<&str> {
        self.old_city.as_deref()
    }

    /// Returns a copy with the city code replaced.
    pub fn with_city_code(self, city_code: Option<String>) -> Self {
        Self { city_code, ..self }
    }

    /// Returns a copy with the superseded city code replaced.
    pub fn with_old_city_code(self, old_city_code: Option<String>) -> Self {
        Self {
            old_city_code,
            ..self
        }
    }

    /// Returns a copy with the superseded city name replaced.
    pub fn with_old_city(self, old_city: Option<String>) -> Self {
        Self { old_city, ..self }
    }
}
