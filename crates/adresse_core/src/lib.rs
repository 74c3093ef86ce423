//! Normalization core for French geocoding results.
//! This crate is the single source of truth for address-shaping invariants.

pub mod builder;
pub mod logging;
pub mod model;
pub mod territory;

pub use builder::{build, RawAdminLevel, RawBounds, RawResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::{Address, UNKNOWN_PROVIDER};
pub use model::admin_level::{AdminLevel, AdminLevelCollection, AdminLevelError};
pub use model::country::Country;
pub use model::french::FrenchAddress;
pub use model::geometry::{Bounds, Coordinates};
pub use territory::classify;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
