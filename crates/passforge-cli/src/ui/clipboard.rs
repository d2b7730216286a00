//! Clipboard copy with a short-lived acknowledgment.

use anyhow::{Context, Result};
use arboard::Clipboard;
use colored::Colorize;
use passforge_types::PassforgeError;
use std::time::Duration;
use tokio::task::JoinHandle;
#[cfg(target_os = "linux")]
use zeroize::Zeroizing;
use super::progress;

/// How long the "Copied!" acknowledgment stays on screen.
pub const ACKNOWLEDGE_FOR: Duration = Duration::from_secs(2);

fn open() -> Result<Clipboard> {
    Clipboard::new()
        .map_err(|e| PassforgeError::Clipboard(e.to_string()))
        .context("Failed to open clipboard")
}

/// Put `text` on the clipboard and keep serving it from a blocking task
/// until another application takes the selection.
///
/// On X11 and Wayland the selection lives in the writing process; a
/// clipboard manager usually takes it over right away.
#[cfg(target_os = "linux")]
fn start(text: &str) -> Result<Option<JoinHandle<Result<()>>>> {
    use arboard::SetExtLinux;

    let mut clipboard = open()?;
    let secret = Zeroizing::new(text.to_string());

    Ok(Some(tokio::task::spawn_blocking(move || {
        clipboard
            .set()
            .wait()
            .text(secret.as_str())
            .map_err(|e| PassforgeError::Clipboard(e.to_string()))
            .context("Failed to copy password")
    })))
}

/// Put `text` on the clipboard. The system keeps it after the handle drops.
#[cfg(not(target_os = "linux"))]
fn start(text: &str) -> Result<Option<JoinHandle<Result<()>>>> {
    open()?
        .set_text(text)
        .map_err(|e| PassforgeError::Clipboard(e.to_string()))
        .context("Failed to copy password")?;
    Ok(None)
}

/// Status line shown while the acknowledgment is up.
fn acknowledgment(quiet: bool) -> String {
    if quiet {
        String::new()
    } else {
        format!("{} Copied!", "✓".green().bold())
    }
}

/// Copy `text`, then show "Copied!" for [`ACKNOWLEDGE_FOR`].
///
/// Only the acknowledgment reverts; the clipboard contents stay. Returns once
/// the acknowledgment is cleared and the text no longer depends on this
/// process.
pub async fn copy_with_acknowledgment(text: &str, quiet: bool) -> Result<()> {
    let serving = start(text)?;
    tracing::info!("password copied to clipboard");

    progress::flash(&acknowledgment(quiet), ACKNOWLEDGE_FOR).await;

    let Some(serving) = serving else {
        return Ok(());
    };
    if !serving.is_finished() {
        tracing::info!("serving clipboard contents until another application takes them");
    }
    serving.await.context("Clipboard task failed")?
}
