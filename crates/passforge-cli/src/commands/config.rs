//! Show the effective generator settings.

use anyhow::{Context, Result};
use colored::Colorize;
use passforge_core::config::{Config, GeneratorSettings};
use passforge_types::{Category, PasswordLength};

pub async fn execute(init: bool) -> Result<()> {
    let config = super::load_config()?;
    let settings = GeneratorSettings::from_config(&config)?;
    let path = config.file_path().map(|p| p.display().to_string()).unwrap_or_default();

    println!("\n{}", "Generator Settings".cyan().bold());
    println!("{}", "=".repeat(30));
    println!("  File: {}", path);
    println!(
        "  Length: {} (allowed {}-{})",
        settings.length.to_string().cyan(),
        PasswordLength::MIN,
        PasswordLength::MAX
    );

    for category in Category::ALL {
        let state = if settings.includes(category) {
            "on".green()
        } else {
            "off".red()
        };
        println!("  {}: {}", category.label(), state);
    }

    if init {
        init_settings_file(&config)?;
    }

    Ok(())
}

/// Write the file-backed settings, without environment overrides, if no
/// settings file exists yet.
fn init_settings_file(config: &Config) -> Result<()> {
    let Some(path) = config.file_path() else {
        anyhow::bail!("No settings file location");
    };

    if path.exists() {
        println!("\n{} Settings file already exists, leaving it unchanged", "•".yellow());
        return Ok(());
    }

    let stored = GeneratorSettings::load_from(path)?;
    let mut fresh = Config::load(path)?;
    fresh.set("length", stored.length)?;
    for category in Category::ALL {
        fresh.set(&category.to_string(), stored.includes(category))?;
    }
    fresh.save().context("Failed to write settings file")?;

    println!("\n{} Wrote {}", "✓".green().bold(), path.display());
    Ok(())
}
