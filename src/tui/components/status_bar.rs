//! # StatusBar Component
//!
//! Bottom line: key hints for the current page on the left, the latest
//! status message (sort changes, unavailable profile entries) on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational. It receives the hint text and the
//! status message as props and has no internal state.
//!
//! ### Priority on Narrow Terminals
//!
//! The status message is never truncated; the hints give way first.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::tui::component::Component;
use crate::tui::components::two_column;

pub struct StatusBar<'a> {
    /// Key hints for the active page or overlay
    pub hints: &'a str,
    /// Transient status (e.g., "Sorted by: Fastest")
    pub status_message: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a str, status_message: &'a str) -> Self {
        Self {
            hints,
            status_message,
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = two_column(
            self.hints,
            Style::default().fg(Color::DarkGray),
            self.status_message,
            Style::default().fg(Color::Yellow),
            area.width as usize,
        );
        frame.render_widget(line, area);
    }
}
