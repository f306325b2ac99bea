//! calling-card - a contact card for your terminal
//!
//! Presents your handles and links as a small TUI card. Activating the
//! Discord entry copies the handle to the system clipboard and confirms
//! with a popover that hides itself after a moment.

mod app;
mod config;
mod models;
mod screens;
mod services;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// calling-card - terminal contact card
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Config file path (default: ~/.config/calling-card/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the handle shown and copied by the card
    #[arg(long)]
    username: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = if args.debug {
        "calling_card=debug,info"
    } else {
        "calling_card=info,warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = if let Some(path) = args.config {
        config::Config::from_file(&path)?
    } else {
        config::Config::load()?
    };

    // Override the handle if specified
    if let Some(username) = args.username {
        config.profile.username = username;
    }

    // Run the TUI application
    let mut app = app::App::new(config)?;
    app.run().await?;

    Ok(())
}
