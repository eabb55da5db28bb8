//! # ProfileButton Component
//!
//! Round-cornered button at the right of the NavBar. Clicking it (or
//! pressing `p`) asks the parent to open the profile panel; the button
//! itself holds no state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const PROFILE_BUTTON_WIDTH: u16 = 6;

pub struct ProfileButton {
    /// Highlighted while the panel it controls is open.
    pub active: bool,
}

impl Component for ProfileButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.active {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta)
        };
        let button = Paragraph::new("👤")
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, area);
    }
}
