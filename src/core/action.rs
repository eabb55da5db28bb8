//! # Actions
//!
//! Everything that can happen in DeDash becomes an `Action`.
//! User picks a card? That's `Action::SelectRestaurant(id)`.
//! User cycles the sort selector? That's `Action::CycleSort`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` for the event loop. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::panel::ProfileEntry;
use crate::core::sort::SortKey;
use crate::core::state::{App, Route};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSortKey(SortKey),
    CycleSort,
    SetSearchQuery(String),
    /// Navigate to a restaurant's detail page.
    SelectRestaurant(String),
    /// Leave the detail page for the home list.
    Back,
    OpenProfile,
    CloseProfile,
    ProfileEntrySelected(ProfileEntry),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SetSortKey(key) => {
            app.sort_key = key;
            app.status_message = format!("Sorted by: {}", key.label());
            Effect::None
        }
        Action::CycleSort => {
            let next = app.sort_key.next();
            update(app, Action::SetSortKey(next))
        }
        Action::SetSearchQuery(query) => {
            app.search_query = query;
            Effect::None
        }
        Action::SelectRestaurant(id) => {
            info!("Navigating to /restaurants/{}", id);
            app.profile.close();
            app.status_message.clear();
            app.route = Route::Restaurant(id);
            Effect::None
        }
        Action::Back => {
            if app.route != Route::Home {
                info!("Navigating to /home");
                // Home list re-mounts: its transient view state starts over
                app.route = Route::Home;
                app.sort_key = app.default_sort;
                app.search_query.clear();
                app.status_message.clear();
            }
            Effect::None
        }
        Action::OpenProfile => {
            app.profile.open();
            Effect::None
        }
        Action::CloseProfile => {
            app.profile.close();
            Effect::None
        }
        Action::ProfileEntrySelected(entry) => {
            app.status_message = format!("{} is not available yet", entry.label());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
