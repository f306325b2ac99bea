//! Backend services.

pub mod banner;
pub mod clipboard;
pub mod notifier;
pub mod popover;
pub mod theme;

pub use notifier::ClipboardNotifier;
pub use popover::Popover;
pub use theme::Theme;
