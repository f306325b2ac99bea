//! Main application state and event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::models::ContactCard;
use crate::screens::{CardScreen, Screen, ScreenAction};
use crate::services::{banner, ClipboardNotifier, Popover, Theme};

/// Application state.
pub struct App {
    config: Arc<Config>,
    theme: Arc<Theme>,
    should_quit: bool,

    // Screens
    card_screen: CardScreen,

    // Copy trigger and its confirmation overlay
    notifier: ClipboardNotifier,
    popover: Popover,

    // Status bar info
    status_message: String,
    status_is_error: bool,

    // Banner (randomly selected on startup)
    banner: &'static str,
}

impl App {
    /// Create a new application instance.
    ///
    /// Fails when the configured card has no copy trigger to attach to.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let theme = Arc::new(Theme::load());

        let card = ContactCard::from_profile(&config.profile);
        let notifier =
            ClipboardNotifier::attach(&card).context("failed to attach the copy trigger")?;

        let link_count = card.links.len();
        let card_screen = CardScreen::new(card, theme.clone());

        Ok(Self {
            config,
            theme,
            should_quit: false,
            card_screen,
            notifier,
            popover: Popover::new(),
            status_message: format!("{} links", link_count),
            status_is_error: false,
            banner: banner::random_banner(),
        })
    }

    /// Run the application.
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.config.display.mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main event loop
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop.
    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|f| self.draw(f))?;

            // Poll for events with a timeout so hide deadlines are observed
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => match (key.modifiers, key.code) {
                        (KeyModifiers::CONTROL, KeyCode::Char('c'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
                            self.should_quit = true;
                        }
                        (_, KeyCode::Char('q')) => {
                            self.should_quit = true;
                        }
                        _ => {
                            let action = self.card_screen.handle_key(key).await;
                            self.dispatch(action).await;
                        }
                    },
                    Event::Mouse(mouse) => {
                        let action = self.card_screen.handle_mouse(mouse);
                        self.dispatch(action).await;
                    }
                    _ => {}
                }
            }

            self.popover.tick(Instant::now());

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply an action returned by a screen handler.
    async fn dispatch(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::StatusMessage(msg) => {
                self.status_message = msg;
                self.status_is_error = false;
            }
            ScreenAction::CopyContact => {
                self.notifier.on_trigger(&mut self.popover).await;
            }
            ScreenAction::OpenLink { url } => match open::that_detached(&url) {
                Ok(()) => {
                    self.status_message = format!("Opening {}", url);
                    self.status_is_error = false;
                }
                Err(e) => {
                    tracing::error!("failed to open {url}: {e}");
                    self.status_message = format!("Failed to open {}", url);
                    self.status_is_error = true;
                }
            },
        }
    }

    /// Draw the UI.
    fn draw(&mut self, f: &mut ratatui::Frame) {
        use ratatui::layout::Alignment;
        use ratatui::style::{Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};
        use ratatui_garnish::{shadow::HalfShadow, GarnishableWidget};

        let banner_height = if self.config.display.show_banner { 5 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height), // Banner
                Constraint::Min(0),                // Card
                Constraint::Length(1),             // Status bar
            ])
            .split(f.area());

        if self.config.display.show_banner {
            let banner = Paragraph::new(self.banner)
                .style(Style::default().fg(self.theme.accent))
                .alignment(Alignment::Center);
            f.render_widget(banner, chunks[0]);
        }

        // Card content
        self.card_screen.draw(f, chunks[1]);

        // Status bar
        let status_style = if self.status_is_error {
            Style::default().fg(self.theme.error)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let status = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(&self.status_message, status_style),
            Span::raw(" │ "),
            Span::styled("j/k", Style::default().fg(self.theme.muted)),
            Span::styled(" Nav", Style::default().fg(self.theme.foreground)),
            Span::raw(" │ "),
            Span::styled("Enter", Style::default().fg(self.theme.muted)),
            Span::styled(" Activate", Style::default().fg(self.theme.foreground)),
            Span::raw(" │ "),
            Span::styled("q", Style::default().fg(self.theme.muted)),
            Span::styled(" Quit", Style::default().fg(self.theme.foreground)),
        ]));
        f.render_widget(status, chunks[2]);

        // Confirmation popover floats above the card until its timer hides it
        if self.popover.is_visible() {
            let width = self.popover.message().len() as u16 + 4;
            let area = popover_area(f.area(), width);
            f.render_widget(Clear, area);

            let popover = Paragraph::new(self.popover.message())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(self.theme.foreground)
                        .bg(self.theme.background)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(self.theme.accent)),
                );

            let garnished = popover.garnish(HalfShadow::default());
            f.render_widget(garnished, area);
        }
    }
}

/// Centered floating rect for the popover.
fn popover_area(frame: Rect, width: u16) -> Rect {
    let width = width.min(frame.width);
    let height = 3u16.min(frame.height);
    let x = frame.x + frame.width.saturating_sub(width) / 2;
    let y = frame.y + frame.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_area_is_centered_and_clamped() {
        let frame = Rect::new(0, 0, 80, 24);
        let area = popover_area(frame, 24);
        assert_eq!(area, Rect::new(28, 10, 24, 3));

        // Never wider than the frame
        let tiny = Rect::new(0, 0, 10, 2);
        let clamped = popover_area(tiny, 24);
        assert!(clamped.width <= 10);
        assert!(clamped.height <= 2);
    }
}
