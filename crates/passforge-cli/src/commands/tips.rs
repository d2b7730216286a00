//! Show password security tips.

use anyhow::Result;
use colored::Colorize;
use passforge_core::term;

pub const TIPS: [&str; 5] = [
    "Use 16+ characters",
    "Mix character types",
    "Unique per account",
    "Use a password manager",
    "Enable 2FA when possible",
];

const PRIVACY_NOTE: &str = "Passwords are generated locally using cryptographically secure \
    random numbers from the operating system. Nothing is sent to any server.";

pub async fn execute() -> Result<()> {
    println!("\n{}", "Security tips".cyan().bold());
    println!("{}", "=".repeat(30));

    for tip in TIPS {
        println!("  • {}", tip);
    }

    println!("\n{}", "Privacy first:".green().bold());
    let width = term::terminal_width().saturating_sub(4).max(20);
    for line in term::wrap_text(PRIVACY_NOTE, width) {
        println!("  {}", line);
    }

    Ok(())
}
