//! TUI screens.

pub mod card;

pub use card::CardScreen;

use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Action returned by screen event handlers.
#[derive(Debug)]
pub enum ScreenAction {
    /// No action needed.
    None,
    /// Display a status message.
    StatusMessage(String),
    /// The copy trigger was activated.
    CopyContact,
    /// Open a link in the default browser.
    OpenLink { url: String },
}

/// Trait for screen implementations.
#[async_trait]
pub trait Screen {
    /// Draw the screen.
    fn draw(&mut self, f: &mut Frame, area: Rect);

    /// Handle a key event.
    async fn handle_key(&mut self, key: KeyEvent) -> ScreenAction;

    /// Handle a mouse event.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction;
}
