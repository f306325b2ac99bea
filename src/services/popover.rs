//! Transient confirmation popover.

use std::time::{Duration, Instant};

/// How long the popover stays visible after each show.
pub const HIDE_DELAY: Duration = Duration::from_millis(1500);

/// Message overlay with timed auto-hide.
///
/// Every `show` arms its own hide deadline and deadlines are never
/// cancelled: a re-show while visible still hides when the earlier
/// deadline elapses, and the later deadline then fires as a no-op.
#[derive(Debug, Default)]
pub struct Popover {
    message: String,
    visible: bool,
    hide_deadlines: Vec<Instant>,
}

impl Popover {
    /// Create a hidden popover with no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` and arm a hide deadline `HIDE_DELAY` from now.
    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message, Instant::now());
    }

    fn show_at(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.visible = true;
        self.hide_deadlines.push(now + HIDE_DELAY);
    }

    /// Fire any elapsed hide deadlines.
    ///
    /// Hides the popover if at least one deadline elapsed; the message
    /// text is kept as-is.
    pub fn tick(&mut self, now: Instant) {
        let before = self.hide_deadlines.len();
        self.hide_deadlines.retain(|deadline| *deadline > now);
        if self.hide_deadlines.len() < before {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn starts_hidden() {
        let popover = Popover::new();
        assert!(!popover.is_visible());
        assert_eq!(popover.message(), "");
    }

    #[test]
    fn show_sets_text_and_visibility_synchronously() {
        let mut popover = Popover::new();
        popover.show("Name has been copied!");
        assert!(popover.is_visible());
        assert_eq!(popover.message(), "Name has been copied!");
    }

    #[test]
    fn stays_visible_before_the_delay() {
        let now = Instant::now();
        let mut popover = Popover::new();
        popover.show_at("copied", now);

        popover.tick(now + HIDE_DELAY - MS);
        assert!(popover.is_visible());
    }

    #[test]
    fn hides_after_the_delay_and_keeps_text() {
        let now = Instant::now();
        let mut popover = Popover::new();
        popover.show_at("copied", now);

        popover.tick(now + HIDE_DELAY);
        assert!(!popover.is_visible());
        assert_eq!(popover.message(), "copied");
    }

    #[test]
    fn reshow_while_visible_updates_text() {
        let now = Instant::now();
        let mut popover = Popover::new();
        popover.show_at("first", now);
        popover.show_at("second", now + 100 * MS);

        popover.tick(now + 200 * MS);
        assert!(popover.is_visible());
        assert_eq!(popover.message(), "second");
    }

    #[test]
    fn second_show_does_not_cancel_the_first_deadline() {
        let now = Instant::now();
        let mut popover = Popover::new();
        popover.show_at("first", now);
        popover.show_at("second", now + 500 * MS);

        // The first deadline elapses while the second is still pending
        popover.tick(now + HIDE_DELAY);
        assert!(!popover.is_visible());
        assert_eq!(popover.message(), "second");

        // The second deadline still fires, a no-op on a hidden popover
        popover.tick(now + 500 * MS + HIDE_DELAY);
        assert!(!popover.is_visible());
    }
}
