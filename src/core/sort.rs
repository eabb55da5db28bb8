//! # List Ordering
//!
//! Orders the directory for the home page. Sorting never touches the
//! directory itself; it returns a fresh `Vec` of borrows.
//!
//! | Key        | Label        | Order                  |
//! |------------|--------------|------------------------|
//! | `distance` | Closest      | ascending `distance_mi`|
//! | `rating`   | Best rated   | descending `rating`    |
//! | `eta`      | Fastest      | ascending `eta_min`    |
//!
//! `slice::sort_by` is stable, so equal keys keep directory order.

use clap::ValueEnum;
use log::debug;

use crate::core::restaurant::Restaurant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Distance,
    Rating,
    Eta,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Distance, SortKey::Rating, SortKey::Eta];

    /// Parse a key id, case-insensitively. `None` for anything unrecognized.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "distance" => Some(SortKey::Distance),
            "rating" => Some(SortKey::Rating),
            "eta" => Some(SortKey::Eta),
            _ => None,
        }
    }

    /// Parse a key id. Anything unrecognized orders by distance.
    pub fn from_key(key: &str) -> Self {
        Self::parse_key(key).unwrap_or_else(|| {
            debug!("Unrecognized sort key '{}', using distance", key);
            SortKey::Distance
        })
    }

    pub fn id(self) -> &'static str {
        match self {
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
            SortKey::Eta => "eta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Distance => "Closest",
            SortKey::Rating => "Best rated",
            SortKey::Eta => "Fastest",
        }
    }

    /// Cycle Distance → Rating → Eta → Distance.
    pub fn next(self) -> Self {
        match self {
            SortKey::Distance => SortKey::Rating,
            SortKey::Rating => SortKey::Eta,
            SortKey::Eta => SortKey::Distance,
        }
    }
}

/// Return `records` ordered by `key`.
pub fn sorted(records: &[Restaurant], key: SortKey) -> Vec<&Restaurant> {
    let mut view: Vec<&Restaurant> = records.iter().collect();
    match key {
        SortKey::Distance => view.sort_by(|a, b| a.distance_mi.total_cmp(&b.distance_mi)),
        SortKey::Rating => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Eta => view.sort_by_key(|r| r.eta_min),
    }
    view
}

/// Sort, then keep records matching `query` (name or cuisine, case-insensitive).
pub fn visible<'a>(records: &'a [Restaurant], key: SortKey, query: &str) -> Vec<&'a Restaurant> {
    let needle = query.trim().to_lowercase();
    sorted(records, key)
        .into_iter()
        .filter(|r| r.matches(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{restaurant, scenario_records};

    fn ids<'a>(view: &[&'a Restaurant]) -> Vec<&'a str> {
        view.iter().map(|r| r.id.as_str()).collect()
    }

    fn mixed_records() -> Vec<Restaurant> {
        vec![
            restaurant("p", 2.5, 3.9, 30),
            restaurant("q", 0.4, 4.9, 45),
            restaurant("r", 1.1, 4.2, 12),
            restaurant("s", 4.0, 4.9, 25),
            restaurant("t", 1.1, 2.0, 12),
        ]
    }

    #[test]
    fn test_scenario_orderings() {
        let records = scenario_records();
        assert_eq!(ids(&sorted(&records, SortKey::Distance)), vec!["b", "a"]);
        assert_eq!(ids(&sorted(&records, SortKey::Rating)), vec!["a", "b"]);
        assert_eq!(ids(&sorted(&records, SortKey::Eta)), vec!["b", "a"]);
    }

    #[test]
    fn test_every_key_yields_a_permutation() {
        let records = mixed_records();
        for key in SortKey::ALL {
            let mut out = ids(&sorted(&records, key));
            out.sort();
            assert_eq!(out, vec!["p", "q", "r", "s", "t"], "key {:?}", key);
        }
    }

    #[test]
    fn test_adjacent_pairs_are_ordered() {
        let records = mixed_records();

        let by_distance = sorted(&records, SortKey::Distance);
        assert!(by_distance.windows(2).all(|w| w[0].distance_mi <= w[1].distance_mi));

        let by_rating = sorted(&records, SortKey::Rating);
        assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));

        let by_eta = sorted(&records, SortKey::Eta);
        assert!(by_eta.windows(2).all(|w| w[0].eta_min <= w[1].eta_min));
    }

    #[test]
    fn test_ties_keep_directory_order() {
        let records = mixed_records();
        // r and t share distance 1.1 and eta 12; q and s share rating 4.9
        assert_eq!(ids(&sorted(&records, SortKey::Distance)), vec!["q", "r", "t", "p", "s"]);
        assert_eq!(ids(&sorted(&records, SortKey::Rating)), vec!["q", "s", "r", "p", "t"]);
        assert_eq!(ids(&sorted(&records, SortKey::Eta)), vec!["r", "t", "s", "p", "q"]);
    }

    #[test]
    fn test_sorting_leaves_source_untouched() {
        let records = mixed_records();
        let before = records.clone();
        let _ = sorted(&records, SortKey::Rating);
        assert_eq!(records, before);
    }

    #[test]
    fn test_unrecognized_key_falls_back_to_distance() {
        assert_eq!(SortKey::from_key("price"), SortKey::Distance);
        assert_eq!(SortKey::from_key(""), SortKey::Distance);
        assert_eq!(SortKey::from_key(" Rating "), SortKey::Rating);
        assert_eq!(SortKey::from_key("ETA"), SortKey::Eta);

        let records = mixed_records();
        assert_eq!(
            ids(&sorted(&records, SortKey::from_key("bogus"))),
            ids(&sorted(&records, SortKey::Distance))
        );
    }

    #[test]
    fn test_next_cycles_through_all_keys() {
        assert_eq!(SortKey::Distance.next(), SortKey::Rating);
        assert_eq!(SortKey::Rating.next(), SortKey::Eta);
        assert_eq!(SortKey::Eta.next(), SortKey::Distance);
    }

    #[test]
    fn test_labels_and_ids() {
        let labels: Vec<&str> = SortKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["Closest", "Best rated", "Fastest"]);
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_key(key.id()), key);
        }
    }

    #[test]
    fn test_visible_filters_after_sorting() {
        let mut records = mixed_records();
        records[0].cuisine = "Pizza".to_string();
        records[2].name = "Pizza Palace".to_string();
        records[3].cuisine = "Sushi".to_string();

        let view = visible(&records, SortKey::Distance, "  PIZZA ");
        assert_eq!(ids(&view), vec!["r", "p"]);

        let all = visible(&records, SortKey::Eta, "");
        assert_eq!(ids(&all), ids(&sorted(&records, SortKey::Eta)));

        assert!(visible(&records, SortKey::Distance, "tacos").is_empty());
    }

    #[test]
    fn test_parse_key_is_case_insensitive() {
        assert_eq!(SortKey::parse_key(" ETA "), Some(SortKey::Eta));
        assert_eq!(SortKey::parse_key("Rating"), Some(SortKey::Rating));
        assert_eq!(SortKey::parse_key("price"), None);
    }
}
