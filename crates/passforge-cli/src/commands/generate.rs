//! Generate passwords.

use anyhow::{Context, Result};
use colored::Colorize;
use passforge_core::config::{Config, GeneratorSettings};
use passforge_core::{Alphabet, PasswordGenerator};
use passforge_types::Category;
use crate::cli::GenerateArgs;
use crate::ui::clipboard;

pub async fn execute(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let mut config = super::load_config()?;
    apply_flags(&mut config, args)?;

    let settings = GeneratorSettings::from_config(&config)?;
    let request = settings.to_generator_config();

    if request.enabled().is_empty() {
        tracing::warn!("no character category selected, using lowercase letters");
    }

    let alphabet = Alphabet::from_config(&request);
    if !quiet {
        eprintln!(
            "{} {} character(s) from {} candidates ({})",
            "Generating".green().bold(),
            request.length,
            alphabet.len(),
            describe(&alphabet)
        );
    }

    let mut generator = PasswordGenerator::new();
    let passwords = generator
        .generate_many(&request, args.count as usize)
        .context("Failed to generate password")?;

    for password in &passwords {
        println!("{}", password);
    }

    if args.copy {
        if let Some(last) = passwords.last() {
            clipboard::copy_with_acknowledgment(last.expose(), quiet).await?;
        }
    }

    Ok(())
}

/// Command-line flags are the highest-priority settings layer.
fn apply_flags(config: &mut Config, args: &GenerateArgs) -> Result<()> {
    if let Some(length) = args.length {
        config.set("length", length)?;
    }

    let disabled = [
        (Category::Uppercase, args.no_uppercase),
        (Category::Lowercase, args.no_lowercase),
        (Category::Numbers, args.no_numbers),
        (Category::Symbols, args.no_symbols),
    ];
    for (category, off) in disabled {
        if off {
            config.set(&category.to_string(), false)?;
        }
    }

    Ok(())
}

fn describe(alphabet: &Alphabet) -> String {
    alphabet
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
