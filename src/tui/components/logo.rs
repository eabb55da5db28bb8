//! # Logo Component
//!
//! The two-tone "DeDash" wordmark at the left of the NavBar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const LOGO_WIDTH: u16 = 6;

pub struct Logo;

impl Logo {
    pub fn line() -> Line<'static> {
        Line::from(vec![
            Span::styled(
                "De",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Dash",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

impl Component for Logo {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(Self::line()), area);
    }
}
