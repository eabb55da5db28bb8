//! # Restaurant Records
//!
//! The immutable data the whole app browses. Records come from a JSON
//! fixture whose keys are camelCase (`distanceMi`, `etaMin`), so the serde
//! attributes map them onto snake_case fields.

use serde::Deserialize;

/// A single dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    /// Unique within its restaurant.
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// A restaurant as listed on the home page and shown on its detail page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub distance_mi: f64,
    pub eta_min: u32,
    /// 0.0 to 5.0 inclusive.
    pub rating: f64,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Card line: `"1.2 mi away"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} mi away", self.distance_mi)
    }

    /// Card line: `"25 min"`.
    pub fn eta_label(&self) -> String {
        format!("{} min", self.eta_min)
    }

    /// Card line: `"⭐ 4.5"`. Whole ratings print without a fraction (`"⭐ 4"`).
    pub fn rating_label(&self) -> String {
        format!("⭐ {}", self.rating)
    }

    /// Case-insensitive match of `query` against name or cuisine.
    ///
    /// `query` is expected to be already lowercased and trimmed; an empty
    /// query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.name.to_lowercase().contains(query)
            || self.cuisine.to_lowercase().contains(query)
    }
}

/// Format a menu price with two decimals: `6.5` → `"$6.50"`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
