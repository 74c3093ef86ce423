//! Administrative level records and their ordered collection.
//!
//! # Responsibility
//! - Represent one administrative subdivision (region, department, city...).
//! - Keep the per-address collection ordered by rank with unique levels.
//!
//! # Invariants
//! - `level` is a positive rank; 1 is the widest subdivision.
//! - A collection never holds two entries with the same level.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One administrative subdivision an address belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLevel {
    /// Rank of the subdivision, e.g. 1 = region, 2 = department.
    pub level: u32,
    /// Human-readable subdivision name.
    pub name: String,
    /// Short administrative code, e.g. an INSEE department number.
    pub code: Option<String>,
}

impl AdminLevel {
    pub fn new(level: u32, name: impl Into<String>, code: Option<String>) -> Self {
        Self {
            level,
            name: name.into(),
            code,
        }
    }
}

/// Error raised when a collection would break the unique-level invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminLevelError {
    DuplicateLevel(u32),
}

impl Display for AdminLevelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateLevel(level) => {
                write!(f, "administrative level {level} appears more than once")
            }
        }
    }
}

impl Error for AdminLevelError {}

/// Ordered set of administrative levels, ascending by rank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AdminLevelCollection {
    levels: Vec<AdminLevel>,
}

impl AdminLevelCollection {
    /// Creates a collection, sorting entries by ascending level.
    ///
    /// # Errors
    /// - Returns `AdminLevelError::DuplicateLevel` when two entries share
    ///   the same level.
    pub fn new(mut levels: Vec<AdminLevel>) -> Result<Self, AdminLevelError> {
        levels.sort_by_key(|entry| entry.level);
        for pair in levels.windows(2) {
            if pair[0].level == pair[1].level {
                return Err(AdminLevelError::DuplicateLevel(pair[0].level));
            }
        }
        Ok(Self { levels })
    }

    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the entry with the given level, if any.
    pub fn get(&self, level: u32) -> Option<&AdminLevel> {
        self.levels.iter().find(|entry| entry.level == level)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdminLevel> {
        self.levels.iter()
    }
}

impl<'a> IntoIterator for &'a AdminLevelCollection {
    type Item = &'a AdminLevel;
    type IntoIter = std::slice::Iter<'a, AdminLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

// Manual impl so decoded collections go through `new` and keep the
// unique-level invariant instead of trusting the wire.
impl<'de> Deserialize<'de> for AdminLevelCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let levels = Vec::<AdminLevel>::deserialize(deserializer)?;
        Self::new(levels).map_err(D::Error::custom)
    }
}
