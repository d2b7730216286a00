//! Transient status lines.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a single status line showing `message`.
///
/// Drawn to stderr and hidden automatically when stderr is not a terminal.
pub fn status(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    );
    pb.set_message(message.to_string());
    pb.tick();
    pb
}

/// Show `message` for `duration`, then clear the line.
pub async fn flash(message: &str, duration: Duration) {
    let pb = status(message);
    tokio::time::sleep(duration).await;
    pb.finish_and_clear();
}
