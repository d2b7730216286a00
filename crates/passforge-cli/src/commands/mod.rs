//! CLI command implementations.

pub mod generate;
pub mod tips;
pub mod config;
pub mod version;

use anyhow::{Context, Result};
use passforge_core::config::{Config, GeneratorSettings};

/// Load the layered settings: defaults, file, then `PASSFORGE_*` variables.
pub(crate) fn load_config() -> Result<Config> {
    let path = GeneratorSettings::default_path().context("Failed to locate settings file")?;
    let config = Config::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    Ok(config.with_process_env())
}
