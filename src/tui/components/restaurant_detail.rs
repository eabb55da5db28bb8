//! # RestaurantDetail Component
//!
//! The detail page for one restaurant: name, cuisine and the menu with
//! two-decimal prices. An unknown id renders a plain not-found message;
//! the only way out is back.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RestaurantDetailState` (menu scroll offset) lives in `TuiState`
//! - `RestaurantDetail` is created each frame from a resolved `DetailView`

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::detail::DetailView;
use crate::core::restaurant::{Restaurant, format_price};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::two_column;
use crate::tui::event::TuiEvent;

pub const NOT_FOUND_MESSAGE: &str = "Restaurant not found";
/// Item row plus its rule line.
const MENU_ROW_HEIGHT: u16 = 2;

/// Events emitted by the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

#[derive(Default)]
pub struct RestaurantDetailState {
    pub scroll_state: ScrollViewState,
}

impl RestaurantDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for RestaurantDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
                Some(DetailEvent::Back)
            }
            _ => None,
        }
    }
}

/// Menu rows the scroll view can hold; its content height is a `u16`.
fn menu_rows(items: usize) -> u16 {
    u16::try_from(items)
        .unwrap_or(u16::MAX)
        .min(u16::MAX / MENU_ROW_HEIGHT)
}

/// Transient render wrapper for the detail page.
pub struct RestaurantDetail<'a> {
    state: &'a mut RestaurantDetailState,
    view: DetailView<'a>,
}

impl<'a> RestaurantDetail<'a> {
    pub fn new(state: &'a mut RestaurantDetailState, view: DetailView<'a>) -> Self {
        Self { state, view }
    }

    fn render_found(&mut self, frame: &mut Frame, area: Rect, restaurant: &Restaurant) {
        use Constraint::{Fill, Length};
        let [name, cuisine, _, heading, menu] =
            Layout::vertical([Length(1), Length(1), Length(1), Length(1), Fill(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(restaurant.name.as_str()).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            name,
        );
        frame.render_widget(
            Paragraph::new(restaurant.cuisine.as_str()).style(Style::default().fg(Color::Gray)),
            cuisine,
        );
        frame.render_widget(
            Paragraph::new("Menu").style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            heading,
        );

        if restaurant.menu.is_empty() {
            frame.render_widget(
                Paragraph::new("No menu items.").style(Style::default().fg(Color::DarkGray)),
                menu,
            );
            return;
        }

        // One column is reserved for the scrollbar
        let content_width = menu.width.saturating_sub(1);
        let rows = menu_rows(restaurant.menu.len());
        let content_height = rows * MENU_ROW_HEIGHT;
        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let rule = Line::styled(
            "─".repeat(content_width as usize),
            Style::default().fg(Color::DarkGray),
        );
        for (row, item) in (0..rows).zip(&restaurant.menu) {
            let y = row * MENU_ROW_HEIGHT;
            scroll_view.render_widget(
                two_column(
                    &item.name,
                    Style::default(),
                    &format_price(item.price),
                    Style::default().fg(Color::Green),
                    content_width as usize,
                ),
                Rect::new(0, y, content_width, 1),
            );
            scroll_view.render_widget(rule.clone(), Rect::new(0, y + 1, content_width, 1));
        }

        frame.render_stateful_widget(scroll_view, menu, &mut self.state.scroll_state);
    }
}

impl Component for RestaurantDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.view {
            DetailView::Found(restaurant) => self.render_found(frame, area, restaurant),
            DetailView::NotFound(_) => {
                let message = Paragraph::new(NOT_FOUND_MESSAGE)
                    .style(Style::default().add_modifier(Modifier::BOLD));
                frame.render_widget(message, area);
            }
        }
    }
}
