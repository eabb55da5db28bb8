//! # RestaurantCard Component
//!
//! One entry on the home list. Transient: built per frame from a borrowed
//! record. Cards are laid out by `RestaurantList` as `ListItem`s, so this
//! produces lines rather than drawing into a `Rect`.
//!
//! ```text
//! ▌ North End Slice                 1.2 mi away
//! ▌ Pizza                                25 min
//! ▌                                      ⭐ 4.6
//!
//! ```

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::core::restaurant::Restaurant;
use crate::tui::components::two_column;

/// Rows per card, including the blank separator.
pub const CARD_HEIGHT: u16 = 4;
const MARKER_WIDTH: usize = 2;

pub struct RestaurantCard<'a> {
    pub restaurant: &'a Restaurant,
    pub selected: bool,
}

impl<'a> RestaurantCard<'a> {
    pub fn new(restaurant: &'a Restaurant, selected: bool) -> Self {
        Self {
            restaurant,
            selected,
        }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let body_width = (width as usize).saturating_sub(MARKER_WIDTH);
        let r = self.restaurant;

        let (marker, name_style, detail_style) = if self.selected {
            (
                Span::styled("▌ ", Style::default().fg(Color::Magenta)),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            )
        } else {
            (
                Span::raw("  "),
                Style::default().add_modifier(Modifier::BOLD),
                Style::default().fg(Color::DarkGray),
            )
        };

        let rows = [
            two_column(&r.name, name_style, &r.distance_label(), detail_style, body_width),
            two_column(&r.cuisine, detail_style, &r.eta_label(), detail_style, body_width),
            two_column(
                "",
                detail_style,
                &r.rating_label(),
                detail_style.add_modifier(Modifier::BOLD),
                body_width,
            ),
        ];

        let mut lines: Vec<Line<'static>> = rows
            .into_iter()
            .map(|row| {
                let mut spans = vec![marker.clone()];
                spans.extend(row.spans);
                Line::from(spans)
            })
            .collect();
        lines.push(Line::default());
        lines
    }

    pub fn into_list_item(self, width: u16) -> ListItem<'static> {
        ListItem::new(self.lines(width))
    }
}
