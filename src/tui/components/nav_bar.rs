//! # NavBar Component
//!
//! Top chrome row: logo and location on the left, search and profile
//! button on the right.
//!
//! ```text
//!                                  ╭──────────────────────────────╮ ╭────╮
//!  DeDash  📍 Boston, MA           │🔍 Search...                  │ │ 👤 │
//!                                  ╰──────────────────────────────╯ ╰────╯
//! ```
//!
//! The NavBar owns no state. The profile action is reported by the event
//! loop's hit test against [`NavLayout::profile_button`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::component::Component;
use crate::tui::components::loc::Loc;
use crate::tui::components::logo::{LOGO_WIDTH, Logo};
use crate::tui::components::profile_button::{PROFILE_BUTTON_WIDTH, ProfileButton};
use crate::tui::components::search_bar::SearchBar;

pub const NAV_HEIGHT: u16 = 3;
const SEARCH_WIDTH: u16 = 32;
const H_PADDING: u16 = 1;

/// Where each NavBar child sits. Shared by rendering and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLayout {
    pub logo: Rect,
    pub loc: Rect,
    pub search: Rect,
    pub profile_button: Rect,
}

impl NavLayout {
    pub fn new(area: Rect, location: &str) -> Self {
        use Constraint::{Fill, Length};

        let loc_width = Loc::new(location).width();
        let [_, logo_col, _, loc_col, _, search, _, profile_button, _] = Layout::horizontal([
            Length(H_PADDING),
            Length(LOGO_WIDTH),
            Length(2),
            Length(loc_width),
            Fill(1),
            Length(SEARCH_WIDTH),
            Length(1),
            Length(PROFILE_BUTTON_WIDTH),
            Length(H_PADDING),
        ])
        .areas(area);

        // Single-line children sit on the middle row
        let middle = |col: Rect| Rect {
            y: col.y + col.height / 2,
            height: col.height.min(1),
            ..col
        };

        Self {
            logo: middle(logo_col),
            loc: middle(loc_col),
            search,
            profile_button,
        }
    }
}

pub struct NavBar<'a> {
    pub location: &'a str,
    pub search_bar: &'a mut SearchBar,
    pub profile_open: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(location: &'a str, search_bar: &'a mut SearchBar, profile_open: bool) -> Self {
        Self {
            location,
            search_bar,
            profile_open,
        }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = NavLayout::new(area, self.location);

        Logo.render(frame, layout.logo);
        Loc::new(self.location).render(frame, layout.loc);
        self.search_bar.render(frame, layout.search);
        ProfileButton {
            active: self.profile_open,
        }
        .render(frame, layout.profile_button);
    }
}
