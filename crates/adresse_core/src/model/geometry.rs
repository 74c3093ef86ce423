//! Geographic point and bounding-box value types.
//!
//! # Responsibility
//! - Carry WGS84 decimal-degree positions attached to an address.
//! - Centralize the all-or-nothing construction rule for partial input.
//!
//! # Invariants
//! - A `Coordinates` value always has both latitude and longitude.
//! - A `Bounds` value always has all four edges.

use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds coordinates from independently optional parts.
    ///
    /// # Contract
    /// - Returns `Some` only when both parts are present.
    /// - A single missing part yields `None`, never a half-filled value.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// Bounding rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Builds a bounding box from independently optional edges.
    ///
    /// # Contract
    /// - Returns `Some` only when all four edges are present.
    pub fn from_parts(
        south: Option<f64>,
        west: Option<f64>,
        north: Option<f64>,
        east: Option<f64>,
    ) -> Option<Self> {
        match (south, west, north, east) {
            (Some(south), Some(west), Some(north), Some(east)) => {
                Some(Self::new(south, west, north, east))
            }
            _ => None,
        }
    }
}
