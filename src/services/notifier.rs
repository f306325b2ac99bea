//! The card's copy trigger, wired to the confirmation popover.

use thiserror::Error;

use crate::models::ContactCard;
use crate::services::clipboard;
use crate::services::Popover;

/// Confirmation shown after a successful copy.
pub const CONFIRMATION: &str = "Name has been copied!";

/// Errors from attaching the notifier to a card.
#[derive(Debug, Error)]
pub enum AttachError {
    /// The card has no copy-action link to trigger on.
    #[error("card has no copyable contact entry")]
    NoTrigger,
}

/// Copies the owner's handle on trigger and confirms via the popover.
pub struct ClipboardNotifier {
    payload: String,
}

impl ClipboardNotifier {
    /// Resolve the card's copy trigger and capture its payload.
    ///
    /// Fails when the card carries no copy-action link; callers treat
    /// this as a fatal startup error.
    pub fn attach(card: &ContactCard) -> Result<Self, AttachError> {
        let payload = card
            .copy_payload()
            .map(str::to_string)
            .ok_or(AttachError::NoTrigger)?;

        Ok(Self { payload })
    }

    /// Handle a trigger: write the payload to the clipboard, then confirm.
    ///
    /// A failed write is logged; the popover is left untouched.
    pub async fn on_trigger(&self, popover: &mut Popover) {
        match clipboard::copy_to_clipboard(self.payload.clone()).await {
            Ok(()) => popover.show(CONFIRMATION),
            Err(e) => tracing::error!("error copying contact to clipboard: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;

    fn profile(username: &str) -> ProfileConfig {
        ProfileConfig {
            username: username.to_string(),
            tagline: None,
            github: Some("someone".to_string()),
            website: None,
        }
    }

    #[test]
    fn attach_captures_the_copy_payload() {
        let card = ContactCard::from_profile(&profile("KenkiCZ"));
        let notifier = ClipboardNotifier::attach(&card).expect("attach");
        assert_eq!(notifier.payload, "KenkiCZ");
    }

    #[test]
    fn attach_fails_without_a_copy_link() {
        // URL-only card: nothing to copy, attaching must not silently no-op
        let card = ContactCard::from_profile(&profile(""));
        assert!(matches!(
            ClipboardNotifier::attach(&card),
            Err(AttachError::NoTrigger)
        ));
    }
}
