//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! crossterm ─► TuiEvent ─► dispatch()
//!                            ├─ profile panel open?  ─► ProfilePanelState
//!                            ├─ Home + Search mode   ─► SearchBar
//!                            ├─ Home + Browse mode   ─► RestaurantListState
//!                            └─ Restaurant(id)       ─► RestaurantDetailState
//!                                         │
//!                                         ▼
//!                                 core::update(app, action)
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after it handled at least one event (including resizes).

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::panel::ProfileEntry;
use crate::core::state::{App, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::profile_panel::PanelHit;
use crate::tui::components::{
    DetailEvent, ListEvent, ProfilePanelEvent, ProfilePanelState, RestaurantDetailState,
    RestaurantListState, SearchBar, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal input mode on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the list (select, sort, open).
    Browse,
    /// Keys are typed into the search bar.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub restaurant_list: RestaurantListState,
    pub detail: RestaurantDetailState,
    pub search_bar: SearchBar,
    pub profile_panel: ProfilePanelState,
    pub input_mode: InputMode,
    /// Size of the last drawn frame, for mouse hit testing.
    pub frame_area: Rect,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            restaurant_list: RestaurantListState::new(),
            detail: RestaurantDetailState::new(),
            search_bar: SearchBar::new(),
            profile_panel: ProfilePanelState::new(),
            input_mode: InputMode::Browse,
            frame_area: Rect::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Mouse capture unavailable: {}", e))
        .ok();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if dispatch(app, tui, event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one event to whichever component currently owns input and apply
/// the resulting action.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return Effect::None,
        // ForceQuit (Ctrl+C) always quits regardless of mode
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::MouseClick(col, row) => return handle_click(app, tui, col, row),
        _ => {}
    }

    // Open panel captures every key
    if app.profile.is_open() {
        return match tui.profile_panel.handle_event(&event) {
            Some(ProfilePanelEvent::Close) => update(app, Action::CloseProfile),
            Some(ProfilePanelEvent::Choose(entry)) => {
                update(app, Action::ProfileEntrySelected(entry))
            }
            None => Effect::None,
        };
    }

    match app.route {
        Route::Home => dispatch_home(app, tui, event),
        Route::Restaurant(_) => dispatch_detail(app, tui, event),
    }
}

fn dispatch_home(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if tui.input_mode == InputMode::Search {
        match tui.search_bar.handle_event(&event) {
            Some(SearchEvent::Changed(query)) => return update(app, Action::SetSearchQuery(query)),
            Some(SearchEvent::Done) => tui.input_mode = InputMode::Browse,
            None => {}
        }
        return Effect::None;
    }

    match event {
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
            Effect::None
        }
        TuiEvent::InputChar('p') => open_profile(app, tui),
        _ => {
            // Keys may arrive in a batch after a sort change; act on the current order
            tui.restaurant_list.sync(&app.visible_restaurants());
            match tui.restaurant_list.handle_event(&event) {
                Some(ListEvent::Activate(id)) => select_restaurant(app, tui, id),
                Some(ListEvent::CycleSort) => update(app, Action::CycleSort),
                Some(ListEvent::Sort(key)) => update(app, Action::SetSortKey(key)),
                None => Effect::None,
            }
        }
    }
}

fn dispatch_detail(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('p') => open_profile(app, tui),
        _ => match tui.detail.handle_event(&event) {
            Some(DetailEvent::Back) => go_back(app, tui),
            None => Effect::None,
        },
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, col: u16, row: u16) -> Effect {
    let hit = ui::hit_test(app, tui, col, row);
    if hit != Hit::SearchBar {
        tui.input_mode = InputMode::Browse;
    }

    match hit {
        Hit::Panel(PanelHit::CloseButton | PanelHit::Overlay) => update(app, Action::CloseProfile),
        Hit::Panel(PanelHit::Entry(entry)) => {
            if let Some(index) = ProfileEntry::ALL.iter().position(|e| *e == entry) {
                tui.profile_panel.selected = index;
            }
            update(app, Action::ProfileEntrySelected(entry))
        }
        Hit::Panel(PanelHit::Panel) | Hit::Nothing => Effect::None,
        Hit::ProfileButton => open_profile(app, tui),
        Hit::SearchBar => {
            if app.route == Route::Home {
                tui.input_mode = InputMode::Search;
            }
            Effect::None
        }
        Hit::SortSelector => update(app, Action::CycleSort),
        Hit::Card(index) => {
            tui.restaurant_list.select(index);
            match tui.restaurant_list.selected_id().map(str::to_owned) {
                Some(id) => select_restaurant(app, tui, id),
                None => Effect::None,
            }
        }
    }
}

fn open_profile(app: &mut App, tui: &mut TuiState) -> Effect {
    tui.profile_panel = ProfilePanelState::new();
    update(app, Action::OpenProfile)
}

fn select_restaurant(app: &mut App, tui: &mut TuiState, id: String) -> Effect {
    tui.detail = RestaurantDetailState::new();
    tui.input_mode = InputMode::Browse;
    update(app, Action::SelectRestaurant(id))
}

fn go_back(app: &mut App, tui: &mut TuiState) -> Effect {
    let effect = update(app, Action::Back);
    // The home page re-mounts with fresh view state
    tui.restaurant_list = RestaurantListState::new();
    tui.search_bar.clear();
    tui.input_mode = InputMode::Browse;
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::panel::PanelState;
    use crate::core::sort::SortKey;
    use crate::test_support::test_app;
    use crate::tui::components::profile_panel::{close_button_rect, panel_rect};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn drawn(app: &App, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    }

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut last = Effect::None;
        for event in events {
            last = dispatch(app, tui, event.clone());
        }
        last
    }

    #[test]
    fn test_enter_opens_highlighted_restaurant() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        // Distance order is [b, a]
        send(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(app.route, Route::Restaurant("a".to_string()));
    }

    #[test]
    fn test_nothing_navigates_without_activation() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        drawn(&app, &mut tui);
        send(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorUp, TuiEvent::Resize]);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_sort_change_then_enter_uses_new_order() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        drawn(&app, &mut tui);
        // Rating order is [a, b]; highlight was on b (first by distance)
        send(&mut app, &mut tui, &[TuiEvent::InputChar('2'), TuiEvent::CursorUp, TuiEvent::Submit]);
        assert_eq!(app.sort_key, SortKey::Rating);
        assert_eq!(app.route, Route::Restaurant("a".to_string()));
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        send(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('/'), TuiEvent::InputChar('q'), TuiEvent::InputChar('p')],
        );
        // 'q' and 'p' were typed, not treated as quit/profile
        assert_eq!(app.search_query, "qp");
        assert!(!app.profile.is_open());

        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(tui.input_mode, InputMode::Browse);
        assert_eq!(app.search_query, "qp");
    }

    #[test]
    fn test_back_resets_home_view() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        send(
            &mut app,
            &mut tui,
            &[
                TuiEvent::InputChar('/'),
                TuiEvent::InputChar('a'),
                TuiEvent::Submit,
                TuiEvent::NextSort,
                TuiEvent::Submit,
            ],
        );
        assert!(matches!(app.route, Route::Restaurant(_)));

        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.sort_key, SortKey::Distance);
        assert!(app.search_query.is_empty());
        assert!(tui.search_bar.buffer.is_empty());
    }

    #[test]
    fn test_profile_panel_keyboard_flow() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        send(&mut app, &mut tui, &[TuiEvent::InputChar('p')]);
        assert_eq!(app.profile, PanelState::Open);

        // Keys go to the panel, not the list
        send(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.status_message, "My Orders is not available yet");

        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.profile, PanelState::Closed);
    }

    #[test]
    fn test_profile_panel_mouse_flow() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        drawn(&app, &mut tui);

        let layout = ui::ScreenLayout::new(tui.frame_area);
        let nav = components::NavLayout::new(layout.nav, &app.location);
        let click = TuiEvent::MouseClick(nav.profile_button.x + 1, nav.profile_button.y + 1);
        send(&mut app, &mut tui, &[click]);
        assert!(app.profile.is_open());

        // Overlay click closes
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(1, 10)]);
        assert!(!app.profile.is_open());

        // Close glyph closes
        send(&mut app, &mut tui, &[TuiEvent::InputChar('p')]);
        let close = close_button_rect(panel_rect(tui.frame_area));
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(close.x + 1, close.y)]);
        assert!(!app.profile.is_open());
    }

    #[test]
    fn test_card_click_navigates() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        drawn(&app, &mut tui);

        let layout = ui::ScreenLayout::new(tui.frame_area);
        let list = components::restaurant_list::ListLayout::new(ui::content_column(
            layout.main,
            ui::CONTENT_WIDTH,
        ));
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(list.cards.x + 3, list.cards.y + 5)]);
        assert_eq!(app.route, Route::Restaurant("a".to_string()));
    }

    #[test]
    fn test_detail_quit_and_force_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.route, Route::Restaurant("b".to_string()));
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]), Effect::Quit);

        tui.input_mode = InputMode::Search;
        app.route = Route::Home;
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }
}
