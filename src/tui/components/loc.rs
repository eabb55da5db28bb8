//! # Loc Component
//!
//! Location label next to the logo. Static text; there is no geolocation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const PIN: &str = "📍 ";

pub struct Loc<'a> {
    pub location: &'a str,
}

impl<'a> Loc<'a> {
    pub fn new(location: &'a str) -> Self {
        Self { location }
    }

    /// Columns needed to show the label without truncation.
    pub fn width(&self) -> u16 {
        (PIN.width() + self.location.width()) as u16
    }
}

impl Component for Loc<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(PIN),
            Span::styled(
                self.location.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
