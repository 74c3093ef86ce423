//! Country value type.

use serde::{Deserialize, Serialize};

/// Country attached to an address.
///
/// Either part may be missing on its own, but a `Country` value only exists
/// when at least one of them is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Display name, e.g. `"Guadeloupe"`.
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code, e.g. `"GP"`.
    pub code: Option<String>,
}

impl Country {
    /// Creates a country with both name and ISO code known.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            code: Some(code.into()),
        }
    }

    /// Builds a country from independently optional parts.
    ///
    /// # Contract
    /// - Returns `None` when both parts are absent; a country with neither
    ///   name nor code carries no information.
    pub fn from_parts(name: Option<String>, code: Option<String>) -> Option<Self> {
        if name.is_none() && code.is_none() {
            return None;
        }
        Some(Self { name, code })
    }
}
