//! Postal-code territory classification.
//!
//! # Responsibility
//! - Map a French postal code to the country it belongs to, separating
//!   metropolitan France from overseas departments and collectivities.
//!
//! # Invariants
//! - Pure and total over its input: no postal code, however malformed,
//!   produces an error.
//! - No postal code means no country; no default is assumed.

use crate::model::country::Country;

/// Classifies a postal code into its territory.
///
/// Overseas departments and collectivities have dedicated `97x`/`98x`
/// postal prefixes and their own ISO 3166-1 codes; everything else is
/// metropolitan France.
///
/// # Contract
/// - `None` input returns `None`.
/// - Codes shorter than three characters fall through to France/FR.
pub fn classify(postal_code: Option<&str>) -> Option<Country> {
    let postal_code = postal_code?;
    let prefix: String = postal_code.chars().take(3).collect();
    let (name, code) = match prefix.as_str() {
        "971" => ("Guadeloupe", "GP"),
        "972" => ("Martinique", "MQ"),
        "973" => ("Guyane", "GF"),
        "974" => ("La Réunion", "RE"),
        "975" => ("Saint-Pierre-et-Miquelon", "PM"),
        "976" => ("Mayotte", "YT"),
        "977" => ("Saint-Barthélemy", "BL"),
        "978" => ("Saint-Martin", "MF"),
        "986" => ("Wallis-et-Futuna", "WF"),
        "987" => ("Polynésie française", "PF"),
        "988" => ("Nouvelle-Calédonie", "NC"),
        _ => ("France", "FR"),
    };
    Some(Country::new(name, code))
}
