//! Data models for the contact card.

pub mod card;

pub use card::{ContactCard, LinkAction, SocialLink};
