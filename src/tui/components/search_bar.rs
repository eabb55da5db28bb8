//! # SearchBar Component
//!
//! Single-line filter input in the NavBar.
//!
//! ## Responsibilities
//!
//! - Capture text while focused (the parent decides when it is focused)
//! - Handle backspace
//! - Emit the new query on every edit so the list re-filters as you type
//!
//! The buffer is internal state; `focused` is a prop set by the parent
//! from the current input mode. The cursor always sits at the end.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search...";
const ICON: &str = "🔍 ";

/// High-level events emitted by the SearchBar.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer changed; carries the full query.
    Changed(String),
    /// User finished typing (Enter or Esc). Focus should move back to the list.
    Done,
}

pub struct SearchBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether keystrokes are routed here (Prop)
    pub focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = if self.buffer.is_empty() && !self.focused {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.buffer.as_str())
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let input = Paragraph::new(Line::from(vec![Span::raw(ICON), text])).block(block);
        frame.render_widget(input, area);

        if self.focused {
            // Keep the cursor on screen even when the query overflows
            let inner_right = area.x + area.width.saturating_sub(2);
            let x = area.x + 1 + (ICON.width() + self.buffer.width()) as u16;
            frame.set_cursor_position((x.min(inner_right), area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit | TuiEvent::Escape => Some(SearchEvent::Done),
            _ => None,
        }
    }
}
