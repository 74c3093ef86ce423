//! Immutable value records for normalized geocoding results.
//!
//! # Responsibility
//! - Define the canonical address shape shared by all downstream consumers.
//! - Keep optional sub-objects valid-by-construction (all-or-nothing).
//!
//! # Invariants
//! - Every record is created once and never mutated in place; updates go
//!   through copy-on-write `with_*` constructors.
//! - `Coordinates`/`Bounds` never exist partially populated.

pub mod address;
pub mod admin_level;
pub mod country;
pub mod french;
pub mod geometry;
