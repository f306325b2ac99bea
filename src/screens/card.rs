//! Card screen - the contact rows and their click regions.

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_garnish::{shadow::HalfShadow, GarnishableWidget, Padding};
use std::sync::Arc;

use crate::models::{ContactCard, LinkAction};
use crate::services::Theme;

use super::{Screen, ScreenAction};

/// Screen presenting the contact card.
pub struct CardScreen {
    card: ContactCard,
    theme: Arc<Theme>,

    // UI state
    selected: usize,
    /// Hit region of each link row, refreshed on every draw.
    link_areas: Vec<Rect>,
}

impl CardScreen {
    /// Create a new card screen.
    pub fn new(card: ContactCard, theme: Arc<Theme>) -> Self {
        Self {
            card,
            theme,
            selected: 0,
            link_areas: Vec::new(),
        }
    }

    /// Navigate up in the link list.
    fn move_up(&mut self) {
        if self.card.links.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.card.links.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Navigate down in the link list.
    fn move_down(&mut self) {
        if self.card.links.is_empty() {
            return;
        }
        self.selected = if self.selected >= self.card.links.len() - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    /// Resolve a screen position to the link row containing it.
    fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        self.link_areas
            .iter()
            .position(|area| area.contains(Position::new(column, row)))
    }

    /// Action for activating the link at `index`.
    fn activate(&self, index: usize) -> ScreenAction {
        match self.card.links.get(index).map(|link| &link.action) {
            Some(LinkAction::CopyText(_)) => ScreenAction::CopyContact,
            Some(LinkAction::OpenUrl(url)) => ScreenAction::OpenLink { url: url.clone() },
            None => ScreenAction::None,
        }
    }
}

#[async_trait]
impl Screen for CardScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        // Owner header, one row per link, slack at the bottom
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(self.card.links.len()));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        // Owner header
        let mut header_lines = vec![Line::from(Span::styled(
            self.card.owner.clone(),
            Style::default()
                .fg(self.theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(tagline) = &self.card.tagline {
            header_lines.push(Line::from(Span::styled(
                tagline.clone(),
                Style::default().fg(self.theme.muted),
            )));
        }
        f.render_widget(Paragraph::new(header_lines), chunks[0]);

        // Link rows; the bordered block is the row's click target
        self.link_areas.clear();
        for (i, link) in self.card.links.iter().enumerate() {
            let chunk = chunks[i + 1];
            self.link_areas.push(chunk);

            let focused = i == self.selected;
            let block = Block::default()
                .borders(Borders::ALL)
                .title(link.platform.clone())
                .border_style(if focused {
                    Style::default().fg(self.theme.accent)
                } else {
                    Style::default().fg(self.theme.muted)
                });

            let value_style = if focused {
                Style::default()
                    .fg(self.theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.foreground)
            };

            let row = Paragraph::new(Line::from(vec![
                Span::raw(format!("{} ", link.glyph)),
                Span::styled(link.value.clone(), value_style),
                Span::raw("  "),
                Span::styled(link.hint, Style::default().fg(self.theme.muted)),
            ]))
            .block(block);

            // Shadow effect on the focused row
            if focused {
                let garnished = row
                    .garnish(Padding::horizontal(1))
                    .garnish(HalfShadow::default());
                f.render_widget(garnished, chunk);
            } else {
                f.render_widget(row, chunk);
            }
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.move_down();
                ScreenAction::None
            }
            KeyCode::Enter | KeyCode::Char('y') => self.activate(self.selected),
            KeyCode::Char('?') => ScreenAction::StatusMessage(
                "j/k move, Enter activates, or click a row".to_string(),
            ),
            _ => ScreenAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenAction::None;
        }

        match self.link_at(mouse.column, mouse.row) {
            Some(index) => {
                self.selected = index;
                self.activate(index)
            }
            None => ScreenAction::None,
        }
    }
}
