//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::DEFAULT_LOCATION;
use crate::core::directory::Directory;
use crate::core::restaurant::{MenuItem, Restaurant};
use crate::core::sort::SortKey;
use crate::core::state::App;

/// A restaurant with a one-item menu and the given sort fields.
pub fn restaurant(id: &str, distance_mi: f64, rating: f64, eta_min: u32) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("Restaurant {}", id.to_uppercase()),
        cuisine: "Test Kitchen".to_string(),
        distance_mi,
        eta_min,
        rating,
        menu: vec![MenuItem {
            id: format!("{id}-1"),
            name: "House Special".to_string(),
            price: 12.5,
        }],
    }
}

/// `a` is farther but better rated; `b` is closer and faster.
pub fn scenario_records() -> Vec<Restaurant> {
    vec![restaurant("a", 3.0, 4.5, 20), restaurant("b", 1.0, 4.0, 15)]
}

pub fn scenario_directory() -> Directory {
    Directory::new(scenario_records()).unwrap()
}

/// Creates a test App over the two-record scenario directory.
pub fn test_app() -> App {
    App::new(
        scenario_directory(),
        SortKey::Distance,
        DEFAULT_LOCATION.to_string(),
    )
}
