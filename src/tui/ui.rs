use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::core::detail::DetailView;
use crate::core::state::{App, Route};
use crate::tui::component::Component;
use crate::tui::components::nav_bar::NAV_HEIGHT;
use crate::tui::components::profile_panel::{self, PanelHit};
use crate::tui::components::restaurant_list::ListLayout;
use crate::tui::components::{
    NavBar, NavLayout, ProfilePanel, RestaurantDetail, RestaurantList, StatusBar,
};
use crate::tui::{InputMode, TuiState};

/// Max width of the list and detail column; wider terminals center it.
pub const CONTENT_WIDTH: u16 = 72;

const HOME_HINTS: &str = "↑↓ Select  Enter Open  s Sort  / Search  p Profile  q Quit";
const SEARCH_HINTS: &str = "Type to filter  Enter/Esc Done";
const DETAIL_HINTS: &str = "↑↓ Scroll  Esc Back  p Profile  q Quit";
const PANEL_HINTS: &str = "↑↓ Select  Enter Choose  Esc Close";

/// Top-level screen split: nav bar, page body, status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub main: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Fill, Length};
        let [nav, _, main, status] =
            Layout::vertical([Length(NAV_HEIGHT), Length(1), Fill(1), Length(1)]).areas(area);
        Self { nav, main, status }
    }
}

/// Center a column of at most `max_width` inside `area`.
pub fn content_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    tui.frame_area = frame.area();
    // Sync props from mode
    tui.search_bar.focused = tui.input_mode == InputMode::Search;

    let layout = ScreenLayout::new(frame.area());

    NavBar::new(&app.location, &mut tui.search_bar, app.profile.is_open())
        .render(frame, layout.nav);

    let column = content_column(layout.main, CONTENT_WIDTH);
    match &app.route {
        Route::Home => {
            let visible = app.visible_restaurants();
            tui.restaurant_list.sync(&visible);
            RestaurantList::new(&mut tui.restaurant_list, &visible, app.sort_key)
                .render(frame, column);
        }
        Route::Restaurant(id) => {
            let view = DetailView::resolve(&app.directory, id);
            RestaurantDetail::new(&mut tui.detail, view).render(frame, column);
        }
    }

    StatusBar::new(hints(app, tui), &app.status_message).render(frame, layout.status);

    if app.profile.is_open() {
        ProfilePanel::new(&tui.profile_panel).render(frame, frame.area());
    }
}

fn hints(app: &App, tui: &TuiState) -> &'static str {
    if app.profile.is_open() {
        return PANEL_HINTS;
    }
    match app.route {
        Route::Home if tui.input_mode == InputMode::Search => SEARCH_HINTS,
        Route::Home => HOME_HINTS,
        Route::Restaurant(_) => DETAIL_HINTS,
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ProfileButton,
    SearchBar,
    SortSelector,
    /// Index into the home list's visible cards.
    Card(usize),
    Panel(PanelHit),
    Nothing,
}

/// Hit test a click against the layout of the last drawn frame.
pub fn hit_test(app: &App, tui: &TuiState, col: u16, row: u16) -> Hit {
    let area = tui.frame_area;
    if app.profile.is_open() {
        return Hit::Panel(profile_panel::hit_test(area, col, row));
    }

    let position = Position::new(col, row);
    let layout = ScreenLayout::new(area);
    let nav = NavLayout::new(layout.nav, &app.location);
    if nav.profile_button.contains(position) {
        return Hit::ProfileButton;
    }
    if nav.search.contains(position) {
        return Hit::SearchBar;
    }

    if app.route == Route::Home {
        let list = ListLayout::new(content_column(layout.main, CONTENT_WIDTH));
        if list.header.contains(position) {
            let selector = format!("Sort: {} ▾", app.sort_key.label());
            let selector_start = list.header.right().saturating_sub(selector.width() as u16);
            if col >= selector_start {
                return Hit::SortSelector;
            }
        }
        if list.cards.contains(position)
            && let Some(index) = tui.restaurant_list.card_at(list.cards, row)
        {
            return Hit::Card(index);
        }
    }

    Hit::Nothing
}
