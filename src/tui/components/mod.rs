//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Logo`, `Loc`, `ProfileButton`: NavBar chrome
//! - `RestaurantCard`: One entry on the home list
//! - `StatusBar`: Bottom line with key hints and status text
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Single-line filter input
//! - `RestaurantList`: Sorted, selectable card list
//! - `RestaurantDetail`: Scrollable menu for one restaurant
//! - `ProfilePanel`: Slide-over account menu
//!
//! Stateful overlays and lists follow the persistent state + transient
//! wrapper pattern: `FooState` lives in `TuiState`, `Foo<'a>` is built each
//! frame with borrowed state and props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file, shared text helpers)
//! ├── nav_bar.rs            (Logo + Loc + SearchBar + ProfileButton)
//! ├── logo.rs
//! ├── loc.rs
//! ├── search_bar.rs
//! ├── profile_button.rs
//! ├── profile_panel.rs
//! ├── restaurant_card.rs
//! ├── restaurant_list.rs
//! ├── restaurant_detail.rs
//! └── status_bar.rs
//! ```

pub mod loc;
pub mod logo;
pub mod nav_bar;
pub mod profile_button;
pub mod profile_panel;
pub mod restaurant_card;
pub mod restaurant_detail;
pub mod restaurant_list;
pub mod search_bar;
pub mod status_bar;

pub use nav_bar::{NavBar, NavLayout};
pub use profile_panel::{ProfilePanel, ProfilePanelEvent, ProfilePanelState};
pub use restaurant_detail::{DetailEvent, RestaurantDetail, RestaurantDetailState};
pub use restaurant_list::{ListEvent, RestaurantList, RestaurantListState};
pub use search_bar::{SearchBar, SearchEvent};
pub use status_bar::StatusBar;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, ending in "…" if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// One row with `left` flush left and `right` flush right in `width` columns.
///
/// `right` is never cut; `left` is truncated to leave at least one space
/// between the two.
pub fn two_column(
    left: &str,
    left_style: Style,
    right: &str,
    right_style: Style,
    width: usize,
) -> Line<'static> {
    let right_width = right.width();
    let left_room = width.saturating_sub(right_width + 1);
    let left = truncate_to_width(left, left_room);
    let gap = width.saturating_sub(left.width() + right_width).max(1);
    Line::from(vec![
        Span::styled(left, left_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(right.to_string(), right_style),
    ])
}
