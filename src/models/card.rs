//! Contact card data model.

use crate::config::ProfileConfig;

/// What activating a link does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Copy the contained text to the system clipboard.
    CopyText(String),
    /// Open the contained URL in the default browser.
    OpenUrl(String),
}

/// A single entry on the card.
#[derive(Debug, Clone)]
pub struct SocialLink {
    /// Platform name, shown as the row title (e.g. "Discord").
    pub platform: String,
    /// Icon glyph rendered before the value.
    pub glyph: &'static str,
    /// The value shown on the row (handle or URL).
    pub value: String,
    /// Short hint shown dimmed after the value.
    pub hint: &'static str,
    /// What activating the row does.
    pub action: LinkAction,
}

/// The card: owner identity plus an ordered list of links.
#[derive(Debug, Clone)]
pub struct ContactCard {
    pub owner: String,
    pub tagline: Option<String>,
    pub links: Vec<SocialLink>,
}

impl ContactCard {
    /// Build the card from the profile configuration.
    ///
    /// The Discord entry carries the copy action and is only present when
    /// the handle is non-empty; URL entries are present when configured.
    pub fn from_profile(profile: &ProfileConfig) -> Self {
        let mut links = Vec::new();

        if !profile.username.is_empty() {
            links.push(SocialLink {
                platform: "Discord".to_string(),
                glyph: "🗨",
                value: profile.username.clone(),
                hint: "copy handle",
                action: LinkAction::CopyText(profile.username.clone()),
            });
        }

        if let Some(github) = profile.github.as_deref().filter(|g| !g.is_empty()) {
            let url = format!("https://github.com/{}", github);
            links.push(SocialLink {
                platform: "GitHub".to_string(),
                glyph: "🐙",
                value: url.clone(),
                hint: "open in browser",
                action: LinkAction::OpenUrl(url),
            });
        }

        if let Some(website) = profile.website.as_deref().filter(|w| !w.is_empty()) {
            links.push(SocialLink {
                platform: "Website".to_string(),
                glyph: "🌐",
                value: website.to_string(),
                hint: "open in browser",
                action: LinkAction::OpenUrl(website.to_string()),
            });
        }

        let owner = if profile.username.is_empty() {
            "anonymous".to_string()
        } else {
            profile.username.clone()
        };

        Self {
            owner,
            tagline: profile.tagline.clone(),
            links,
        }
    }

    /// The payload of the card's copy trigger, if it has one.
    pub fn copy_payload(&self) -> Option<&str> {
        self.links.iter().find_map(|link| match &link.action {
            LinkAction::CopyText(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> ProfileConfig {
        ProfileConfig {
            username: username.to_string(),
            tagline: None,
            github: None,
            website: None,
        }
    }

    #[test]
    fn default_profile_has_one_copy_link_with_the_handle() {
        let card = ContactCard::from_profile(&ProfileConfig::default());
        let copy_links: Vec<_> = card
            .links
            .iter()
            .filter(|l| matches!(l.action, LinkAction::CopyText(_)))
            .collect();
        assert_eq!(copy_links.len(), 1);
        assert_eq!(card.copy_payload(), Some("KenkiCZ"));
    }

    #[test]
    fn empty_handle_drops_the_copy_link() {
        let card = ContactCard::from_profile(&profile(""));
        assert!(card.links.is_empty());
        assert_eq!(card.copy_payload(), None);
    }

    #[test]
    fn github_account_becomes_a_profile_url() {
        let mut p = profile("someone");
        p.github = Some("someone".to_string());
        let card = ContactCard::from_profile(&p);
        let github = card
            .links
            .iter()
            .find(|l| l.platform == "GitHub")
            .expect("github link");
        assert_eq!(
            github.action,
            LinkAction::OpenUrl("https://github.com/someone".to_string())
        );
    }
}
