//! Banner art shown above the card.

use rand::seq::SliceRandom;

const CARD_FRAME: &str = r#"
╭──────────────────────────────╮
│    c a l l i n g   c a r d   │
╰──────────────────────────────╯
"#;

const TERMINAL_PROMPT: &str = r#"
 ┌─[~]─────────────────────────┐
 │ $ whoami                    │
 │ > say hi, copy a handle     │
 └─────────────────────────────┘
"#;

const POSTMARK: &str = r#"
   ════════════╗  ▒▒▒▒
    FIRST CLASS ║  ▒▒▒▒
   ════════════╝  ▒▒▒▒
"#;

/// All available banners.
const BANNERS: &[&str] = &[CARD_FRAME, TERMINAL_PROMPT, POSTMARK];

/// Returns a randomly selected banner.
pub fn random_banner() -> &'static str {
    let mut rng = rand::thread_rng();
    BANNERS.choose(&mut rng).copied().unwrap_or(CARD_FRAME)
}
