//! # Restaurant Directory
//!
//! The fixed, read-only collection of restaurants. Built once at startup
//! from the embedded fixture (or a user-supplied JSON file) and never
//! mutated afterwards. Every view borrows from it.
//!
//! ```text
//! assets/restaurants.json ──┐
//!                           ├─► Directory::new() ──► validate ──► Directory
//! --data <PATH> ────────────┘
//! ```

use log::info;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::restaurant::Restaurant;

/// Fixture compiled into the binary.
const EMBEDDED_FIXTURE: &str = include_str!("../../assets/restaurants.json");

pub const MAX_RATING: f64 = 5.0;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DirectoryError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Io(e) => write!(f, "restaurant data I/O error: {e}"),
            DirectoryError::Parse(e) => write!(f, "restaurant data parse error: {e}"),
            DirectoryError::Invalid(reason) => write!(f, "invalid restaurant data: {reason}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

// ============================================================================
// Directory
// ============================================================================

#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<Restaurant>,
}

impl Directory {
    /// Build a directory from records, rejecting data that would break
    /// sorting or lookup (duplicate ids, NaN distances, out-of-range ratings).
    pub fn new(records: Vec<Restaurant>) -> Result<Self, DirectoryError> {
        validate(&records)?;
        Ok(Self { records })
    }

    /// The fixture shipped with the binary.
    pub fn embedded() -> Result<Self, DirectoryError> {
        let directory = Self::from_json(EMBEDDED_FIXTURE)?;
        info!("Loaded {} built-in restaurants", directory.len());
        Ok(directory)
    }

    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<Restaurant> = serde_json::from_str(json).map_err(DirectoryError::Parse)?;
        Self::new(records)
    }

    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let contents = fs::read_to_string(path).map_err(DirectoryError::Io)?;
        let directory = Self::from_json(&contents)?;
        info!(
            "Loaded {} restaurants from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// All records in fixture order.
    pub fn list(&self) -> &[Restaurant] {
        &self.records
    }

    /// Look up a record by id. Absence is `None`, not an error.
    pub fn find(&self, id: &str) -> Option<&Restaurant> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(records: &[Restaurant]) -> Result<(), DirectoryError> {
    let mut ids = HashSet::new();
    for r in records {
        if !ids.insert(r.id.as_str()) {
            return Err(DirectoryError::Invalid(format!(
                "duplicate restaurant id '{}'",
                r.id
            )));
        }
        if !r.distance_mi.is_finite() || r.distance_mi < 0.0 {
            return Err(DirectoryError::Invalid(format!(
                "restaurant '{}' has distance {}",
                r.id, r.distance_mi
            )));
        }
        if !(0.0..=MAX_RATING).contains(&r.rating) {
            return Err(DirectoryError::Invalid(format!(
                "restaurant '{}' has rating {} outside 0-{}",
                r.id, r.rating, MAX_RATING
            )));
        }

        let mut item_ids = HashSet::new();
        for item in &r.menu {
            if !item_ids.insert(item.id.as_str()) {
                return Err(DirectoryError::Invalid(format!(
                    "restaurant '{}' has duplicate menu item '{}'",
                    r.id, item.id
                )));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(DirectoryError::Invalid(format!(
                    "menu item '{}' in '{}' has price {}",
                    item.id, r.id, item.price
                )));
            }
        }
    }
    Ok(())
}
