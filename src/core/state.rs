//! # Application State
//!
//! Core business state for DeDash. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── directory: Directory         // read-only restaurant data
//! ├── route: Route                 // Home or Restaurant(id)
//! ├── sort_key: SortKey            // list ordering (reset on re-entry)
//! ├── default_sort: SortKey        // what re-entry resets to
//! ├── search_query: String         // SearchBar text
//! ├── profile: PanelState          // profile slide-over
//! ├── location: String             // NavBar location label
//! └── status_message: String       // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::directory::Directory;
use crate::core::panel::PanelState;
use crate::core::restaurant::Restaurant;
use crate::core::sort::{self, SortKey};

/// Which page is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Detail page addressed by an opaque restaurant id.
    Restaurant(String),
}

pub struct App {
    pub directory: Directory,
    pub route: Route,
    pub sort_key: SortKey,
    pub default_sort: SortKey,
    pub search_query: String,
    pub profile: PanelState,
    pub location: String,
    pub status_message: String,
}

impl App {
    pub fn new(directory: Directory, default_sort: SortKey, location: String) -> Self {
        Self {
            directory,
            route: Route::Home,
            sort_key: default_sort,
            default_sort,
            search_query: String::new(),
            profile: PanelState::Closed,
            location,
            status_message: String::new(),
        }
    }

    pub fn from_config(directory: Directory, config: &ResolvedConfig) -> Self {
        Self::new(directory, config.default_sort, config.location.clone())
    }

    /// Home page list: sorted by the active key, filtered by the search query.
    pub fn visible_restaurants(&self) -> Vec<&Restaurant> {
        sort::visible(self.directory.list(), self.sort_key, &self.search_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.sort_key, SortKey::Distance);
        assert!(app.search_query.is_empty());
        assert!(!app.profile.is_open());
        assert_eq!(app.location, "Boston, MA");
    }

    #[test]
    fn test_visible_restaurants_follow_sort_key() {
        let mut app = test_app();
        let ids: Vec<&str> = app.visible_restaurants().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        app.sort_key = SortKey::Rating;
        let ids: Vec<&str> = app.visible_restaurants().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
