//! # ProfilePanel Component
//!
//! Slide-over account menu pinned to the right edge. While open, the rest
//! of the screen is dimmed (the overlay) and the panel captures all keys.
//!
//! Whether the panel is open is core state (`App::profile`); this module
//! only holds the highlighted entry and knows the geometry needed to tell
//! a click on the close glyph, an entry, or the overlay apart.
//!
//! ```text
//!  dimmed overlay        ┌ Your Account ──────── ✕ ┐
//!  (click = close)       │                         │
//!                        │ Profile                 │
//!                        │                         │
//!                        │ My Orders               │
//!                        │ ...                     │
//!                        └──── Enter Choose  Esc ──┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::panel::ProfileEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PANEL_WIDTH: u16 = 40;
const CLOSE_GLYPH: &str = " ✕ ";
/// Entries start one blank row below the top border and are spaced by one.
const FIRST_ENTRY_OFFSET: u16 = 2;
const ENTRY_SPACING: u16 = 2;

/// Events emitted by the profile panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePanelEvent {
    Close,
    Choose(ProfileEntry),
}

/// What a click inside the screen landed on while the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    CloseButton,
    Entry(ProfileEntry),
    Panel,
    Overlay,
}

/// Persistent state for the profile panel.
#[derive(Debug, Default)]
pub struct ProfilePanelState {
    pub selected: usize,
}

impl ProfilePanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_entry(&self) -> ProfileEntry {
        ProfileEntry::ALL[self.selected.min(ProfileEntry::ALL.len() - 1)]
    }
}

impl EventHandler for ProfilePanelState {
    type Event = ProfilePanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('x') | TuiEvent::InputChar('p') => {
                Some(ProfilePanelEvent::Close)
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.selected = (self.selected + 1).min(ProfileEntry::ALL.len() - 1);
                None
            }
            TuiEvent::Submit => Some(ProfilePanelEvent::Choose(self.selected_entry())),
            _ => None,
        }
    }
}

/// The panel's rect inside the full screen `area`.
pub fn panel_rect(area: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width);
    Rect {
        x: area.x + area.width - width,
        width,
        ..area
    }
}

/// The clickable close glyph in the panel's top border.
pub fn close_button_rect(panel: Rect) -> Rect {
    let width = CLOSE_GLYPH.chars().count() as u16;
    Rect {
        x: panel.right().saturating_sub(1 + width),
        y: panel.y,
        width,
        height: 1,
    }
}

/// Classify a click at (`col`, `row`) on a screen of size `area`.
pub fn hit_test(area: Rect, col: u16, row: u16) -> PanelHit {
    let panel = panel_rect(area);
    let position = Position::new(col, row);

    if close_button_rect(panel).contains(position) {
        return PanelHit::CloseButton;
    }
    if !panel.contains(position) {
        return PanelHit::Overlay;
    }

    let first = panel.y + FIRST_ENTRY_OFFSET;
    if row >= first && (row - first) % ENTRY_SPACING == 0 {
        let index = ((row - first) / ENTRY_SPACING) as usize;
        if let Some(entry) = ProfileEntry::ALL.get(index) {
            return PanelHit::Entry(*entry);
        }
    }
    PanelHit::Panel
}

/// Transient render wrapper for the profile panel.
pub struct ProfilePanel<'a> {
    state: &'a ProfilePanelState,
}

impl<'a> ProfilePanel<'a> {
    pub fn new(state: &'a ProfilePanelState) -> Self {
        Self { state }
    }
}

impl Component for ProfilePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Overlay: dim whatever is underneath
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let panel = panel_rect(area);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(" Your Account ").style(Style::default().add_modifier(Modifier::BOLD)))
            .title(Line::from(CLOSE_GLYPH).right_aligned())
            .title_bottom(Line::from(" Enter Choose  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![Line::default()];
        for (i, entry) in ProfileEntry::ALL.iter().enumerate() {
            let mut style = if *entry == ProfileEntry::LogOut {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            if i == self.state.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(entry.label(), style));
        }

        frame.render_widget(Paragraph::new(lines).block(block), panel);
    }
}
