//! Clipboard operations.

use anyhow::Result;

/// Copy text to the system clipboard without blocking the UI task.
pub async fn copy_to_clipboard(text: String) -> Result<()> {
    tokio::task::spawn_blocking(move || write_text(&text)).await?
}

fn write_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        use std::time::{Duration, Instant};

        // Give clipboard managers a moment to take ownership of the
        // contents before the write returns
        clipboard
            .set()
            .wait_until(Instant::now() + Duration::from_millis(250))
            .text(text.to_owned())?;
    }

    #[cfg(not(target_os = "linux"))]
    clipboard.set_text(text)?;

    Ok(())
}
