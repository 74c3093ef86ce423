//! Raw geocoding result normalization.
//!
//! # Responsibility
//! - Accept the loose key/value shape upstream providers return and turn
//!   it into a validated, immutable [`FrenchAddress`].
//! - Degrade, never fail: missing or malformed fields become absent
//!   options, not errors.
//!
//! # Invariants
//! - `build` is pure; the same raw input always yields the same address.
//! - Optional sub-objects materialize only when every required part is
//!   present (see the `from_parts` constructors in `model`).

use crate::model::address::{Address, UNKNOWN_PROVIDER};
use crate::model::admin_level::{AdminLevel, AdminLevelCollection};
use crate::model::french::FrenchAddress;
use crate::model::geometry::{Bounds, Coordinates};
use crate::territory;
use log::debug;
use serde::Deserialize;

/// One administrative-level entry as upstream sends it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawAdminLevel {
    pub level: Option<u32>,
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Bounding-box fields as upstream sends them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawBounds {
    pub south: Option<f64>,
    pub west: Option<f64>,
    pub north: Option<f64>,
    pub east: Option<f64>,
}

/// Flat key/value result extracted from an upstream geocoding response.
///
/// Every field is independently absent-tolerant and unknown keys are
/// ignored, so a partial or over-complete upstream payload decodes
/// without error.
///
/// `country` and `countryCode` are accepted for contract completeness but
/// the builder does not read them; see [`build`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawResult {
    pub provided_by: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bounds: Option<RawBounds>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub locality: Option<String>,
    pub postal_code: Option<String>,
    pub sub_locality: Option<String>,
    pub admin_levels: Option<Vec<RawAdminLevel>>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub city_code: Option<String>,
    pub old_city_code: Option<String>,
    pub old_city: Option<String>,
}

/// Normalizes one raw result into an immutable [`FrenchAddress`].
///
/// # Contract
/// - Never fails; every malformed or missing field degrades to an absent
///   optional output.
/// - The country comes from the postal code alone. The `country` and
///   `countryCode` inputs are deliberately ignored to stay
///   bug-compatible with the upstream provider contract, which derives
///   the territory itself and never sends usable country fields.
/// - `providedBy` falls back to `"n/a"` when absent.
pub fn build(raw: RawResult) -> FrenchAddress {
    let admin_levels = filter_admin_levels(raw.admin_levels.unwrap_or_default());
    let bounds_parts = raw.bounds.unwrap_or_default();
    let country = territory::classify(raw.postal_code.as_deref());

    let mut base = Address::new(
        raw.provided_by
            .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
        admin_levels,
    );
    base.coordinates = Coordinates::from_parts(raw.latitude, raw.longitude);
    base.bounds = Bounds::from_parts(
        bounds_parts.south,
        bounds_parts.west,
        bounds_parts.north,
        bounds_parts.east,
    );
    base.street_number = raw.street_number;
    base.street_name = raw.street_name;
    base.postal_code = raw.postal_code;
    base.locality = raw.locality;
    base.sub_locality = raw.sub_locality;
    base.country = country;
    base.timezone = raw.timezone;

    let address = FrenchAddress {
        base,
        city_code: raw.city_code,
        old_city_code: raw.old_city_code,
        old_city: raw.old_city,
    };

    // Metadata only: address payloads are personal data and stay out of logs.
    debug!(
        "event=result_normalized module=builder provided_by={} coordinates={} bounds={} country={} admin_levels={}",
        address.base.provided_by,
        address.base.coordinates.is_some(),
        address.base.bounds.is_some(),
        address.base.country.is_some(),
        address.base.admin_levels.len()
    );

    address
}

/// Keeps the usable administrative-level entries, in rank order.
///
/// An entry survives only with a positive level and a resolvable name:
/// `name` when the key is present, otherwise `code`. An empty resolved
/// name drops the entry, and so does a level already seen, keeping the
/// collection's uniqueness invariant without an error on this path.
fn filter_admin_levels(entries: Vec<RawAdminLevel>) -> AdminLevelCollection {
    let mut seen: Vec<u32> = Vec::new();
    let mut levels: Vec<AdminLevel> = Vec::new();

    for entry in entries {
        let level = match entry.level {
            Some(level) if level > 0 => level,
            _ => continue,
        };
        if seen.contains(&level) {
            continue;
        }

        let resolved = entry.name.or_else(|| entry.code.clone());
        let name = match resolved.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => continue,
        };

        seen.push(level);
        levels.push(AdminLevel::new(level, name, entry.code));
    }

    // Levels were deduplicated above, so the constructor cannot reject.
    AdminLevelCollection::new(levels).unwrap_or_default()
}
