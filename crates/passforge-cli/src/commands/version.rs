//! Show version information.

use anyhow::Result;
use colored::Colorize;

pub async fn execute(verbose: bool) -> Result<()> {
    println!("{} {}", "passforge".cyan().bold(), passforge_core::VERSION);

    if verbose {
        println!("\nBuild Information:");
        println!("  Version: {}", passforge_core::VERSION);
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
        println!("  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
        println!("  Entropy: operating system CSPRNG");
    }

    Ok(())
}
