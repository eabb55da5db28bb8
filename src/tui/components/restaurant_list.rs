//! # RestaurantList Component
//!
//! The home page: a header with the sort selector and a scrollable list of
//! restaurant cards.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RestaurantListState` lives in `TuiState`
//! - `RestaurantList` is created each frame with borrowed state
//!
//! The list never sorts anything itself. The event loop hands it the
//! already-ordered view from `App::visible_restaurants()` via
//! [`RestaurantListState::sync`], and the list only tracks which card is
//! highlighted. Highlight is keyed by restaurant id so it follows the
//! record when the order changes.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListState, Paragraph};

use crate::core::restaurant::Restaurant;
use crate::core::sort::SortKey;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::restaurant_card::{CARD_HEIGHT, RestaurantCard};
use crate::tui::components::two_column;
use crate::tui::event::TuiEvent;

const HEADING: &str = "Restaurants near you";

/// Header row and card area inside the list's content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub header: Rect,
    pub cards: Rect,
}

impl ListLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Fill, Length};
        let [header, _, cards] = Layout::vertical([Length(1), Length(1), Fill(1)]).areas(area);
        Self { header, cards }
    }
}

/// Events emitted by the restaurant list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// User activated a card; navigate to its detail page.
    Activate(String),
    CycleSort,
    Sort(SortKey),
}

/// Persistent state for the home list.
#[derive(Debug, Default)]
pub struct RestaurantListState {
    /// Ids of the cards currently shown, in display order.
    pub visible_ids: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
    /// Whole cards that fit in the last rendered area.
    page_size: usize,
}

impl RestaurantListState {
    pub fn new() -> Self {
        Self {
            page_size: 1,
            ..Default::default()
        }
    }

    /// Replace the displayed order, keeping the highlighted restaurant if
    /// it is still visible.
    pub fn sync(&mut self, visible: &[&Restaurant]) {
        let previous = self.selected_id().map(str::to_owned);
        self.visible_ids = visible.iter().map(|r| r.id.clone()).collect();
        self.selected = previous
            .and_then(|id| self.visible_ids.iter().position(|v| *v == id))
            .unwrap_or(0);
        self.list_state.select(if self.visible_ids.is_empty() {
            None
        } else {
            Some(self.selected)
        });
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.visible_ids.get(self.selected).map(String::as_str)
    }

    fn move_selection(&mut self, delta: isize) {
        if self.visible_ids.is_empty() {
            return;
        }
        let last = self.visible_ids.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(self.selected));
    }

    /// Which card (index into `visible_ids`) covers screen row `row`.
    pub fn card_at(&self, cards: Rect, row: u16) -> Option<usize> {
        if row < cards.y || row >= cards.y + cards.height {
            return None;
        }
        let index = self.list_state.offset() + ((row - cards.y) / CARD_HEIGHT) as usize;
        (index < self.visible_ids.len()).then_some(index)
    }

    /// Highlight a card by index (used by mouse clicks before activation).
    pub fn select(&mut self, index: usize) {
        if index < self.visible_ids.len() {
            self.selected = index;
            self.list_state.select(Some(index));
        }
    }
}

impl EventHandler for RestaurantListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page = self.page_size.max(1) as isize;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.move_selection(-1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.move_selection(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_selection(-page);
                None
            }
            TuiEvent::PageDown => {
                self.move_selection(page);
                None
            }
            TuiEvent::Submit => {
                let id = self.selected_id()?.to_string();
                debug!("List activated {}", id);
                Some(ListEvent::Activate(id))
            }
            TuiEvent::NextSort | TuiEvent::InputChar('s') => Some(ListEvent::CycleSort),
            TuiEvent::InputChar('1') => Some(ListEvent::Sort(SortKey::Distance)),
            TuiEvent::InputChar('2') => Some(ListEvent::Sort(SortKey::Rating)),
            TuiEvent::InputChar('3') => Some(ListEvent::Sort(SortKey::Eta)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the home list.
pub struct RestaurantList<'a> {
    state: &'a mut RestaurantListState,
    restaurants: &'a [&'a Restaurant],
    sort_key: SortKey,
}

impl<'a> RestaurantList<'a> {
    pub fn new(
        state: &'a mut RestaurantListState,
        restaurants: &'a [&'a Restaurant],
        sort_key: SortKey,
    ) -> Self {
        Self {
            state,
            restaurants,
            sort_key,
        }
    }
}

impl Component for RestaurantList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = ListLayout::new(area);

        let selector = format!("Sort: {} ▾", self.sort_key.label());
        frame.render_widget(
            two_column(
                HEADING,
                Style::default().add_modifier(Modifier::BOLD),
                &selector,
                Style::default().fg(Color::Magenta),
                layout.header.width as usize,
            ),
            layout.header,
        );

        self.state.page_size = (layout.cards.height / CARD_HEIGHT) as usize;

        if self.restaurants.is_empty() {
            let empty = Paragraph::new("No restaurants match your search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, layout.cards);
            return;
        }

        let width = layout.cards.width;
        let items: Vec<_> = self
            .restaurants
            .iter()
            .enumerate()
            .map(|(i, r)| RestaurantCard::new(r, i == self.state.selected).into_list_item(width))
            .collect();

        frame.render_stateful_widget(List::new(items), layout.cards, &mut self.state.list_state);
    }
}
