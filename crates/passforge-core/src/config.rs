//! Configuration management for passforge.
//!
//! This module provides multi-layer configuration support with:
//! - File-based configuration
//! - Environment variable overrides
//! - Programmatic updates (command-line flags)
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Programmatically set values
//! 2. Environment variables
//! 3. Values loaded from file
//!
//! Keys missing from every layer take their defaults from
//! [`GeneratorSettings`] when the typed settings are resolved.
//!
//! ## Example
//!
//! ```no_run
//! use passforge_core::config::{Config, GeneratorSettings};
//!
//! let mut config = Config::load(GeneratorSettings::default_path()?)?.with_process_env();
//! config.set("length", 24)?;
//!
//! let settings = GeneratorSettings::from_config(&config)?;
//! assert_eq!(settings.length.get(), 24);
//! # Ok::<(), passforge_core::PassforgeError>(())
//! ```

use passforge_types::{Category, GeneratorConfig, PassforgeError, PasswordLength, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::fs;

/// Environment variable naming an alternate settings file.
pub const CONFIG_PATH_VAR: &str = "PASSFORGE_CONFIG";

/// Prefix of per-key environment overrides, e.g. `PASSFORGE_LENGTH`.
pub const ENV_PREFIX: &str = "PASSFORGE_";

const ENV_KEYS: [&str; 5] = ["length", "uppercase", "lowercase", "numbers", "symbols"];

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Values loaded from file
    Loaded = 0,
    /// Values from environment variables
    Environment = 1,
    /// Values set programmatically
    Set = 2,
}

impl ConfigLayer {
    const LOWEST_FIRST: [ConfigLayer; 3] = [
        ConfigLayer::Loaded,
        ConfigLayer::Environment,
        ConfigLayer::Set,
    ];
}

/// Layered key/value configuration store.
///
/// This is the low-level configuration type. For the typed view used by
/// generation, see [`GeneratorSettings`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration from a file path.
    ///
    /// If the file doesn't exist, an empty configuration is created.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut layers = HashMap::new();

        if path.exists() {
            let value = crate::util::load_yaml_file(path)
                .map_err(|e| PassforgeError::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

            // An empty file parses as null
            if !value.is_null() {
                if !value.is_object() {
                    return Err(PassforgeError::Config(format!(
                        "Config file {:?} must contain a mapping",
                        path
                    )));
                }
                layers.insert(ConfigLayer::Loaded, value);
            }
        }

        Ok(Self {
            layers,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Fill the environment layer from `PASSFORGE_*` process variables.
    pub fn with_process_env(self) -> Self {
        self.with_env_vars(std::env::vars())
    }

    /// Fill the environment layer from the given variables.
    ///
    /// Only `PASSFORGE_<KEY>` names for known keys are read. Numbers and
    /// booleans are converted; anything else is kept as a string and fails
    /// later when the typed settings are resolved.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut env = serde_json::Map::new();

        for (name, raw) in vars {
            let Some(key) = name.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let key = key.to_lowercase();
            if !ENV_KEYS.contains(&key.as_str()) {
                continue;
            }
            env.insert(key, parse_env_value(raw.as_ref()));
        }

        if !env.is_empty() {
            tracing::debug!(keys = ?env.keys().collect::<Vec<_>>(), "applied environment overrides");
            self.layers.insert(ConfigLayer::Environment, Value::Object(env));
        }
        self
    }

    /// Get a configuration value by key, respecting layer priority.
    ///
    /// Returns None if the key doesn't exist in any layer.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        for layer in ConfigLayer::LOWEST_FIRST.iter().rev() {
            if let Some(layer_data) = self.layers.get(layer) {
                if let Some(value) = crate::util::data::get_path(layer_data, key) {
                    if let Ok(typed_value) = serde_json::from_value(value.clone()) {
                        return Some(typed_value);
                    }
                }
            }
        }

        None
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| PassforgeError::Config(format!("Failed to serialize value: {}", e)))?;

        let set_layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert(Value::Object(Default::default()));

        Self::set_value_at_path(set_layer, key, value)
    }

    /// Save the file and set layers back to the file.
    ///
    /// Environment overrides are never persisted.
    pub fn save(&self) -> Result<()> {
        let path = self.file_path.as_ref().ok_or_else(|| {
            PassforgeError::Config("Cannot save: no file path set".to_string())
        })?;

        let mut merged = Value::Object(serde_json::Map::new());
        for layer in ConfigLayer::LOWEST_FIRST {
            if layer == ConfigLayer::Environment {
                continue;
            }
            if let Some(layer_data) = self.layers.get(&layer) {
                merged = crate::util::deep_merge(merged, layer_data.clone());
            }
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        crate::util::save_yaml_file(path, &merged)
            .map_err(|e| PassforgeError::Config(format!("Failed to write config file: {}", e)))
    }

    /// Get merged data from all layers.
    pub fn merged_data(&self) -> Value {
        let mut merged = Value::Object(serde_json::Map::new());

        for layer in ConfigLayer::LOWEST_FIRST {
            if let Some(layer_data) = self.layers.get(&layer) {
                merged = crate::util::deep_merge(merged, layer_data.clone());
            }
        }

        merged
    }

    /// Path this configuration was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    // Helper: Set value at dotted path
    fn set_value_at_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
        let parts: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            return Err(PassforgeError::Config("Empty path".to_string()));
        };

        let mut current = data;
        for part in parents {
            if !current.is_object() {
                *current = Value::Object(Default::default());
            }
            current = current
                .as_object_mut()
                .map(|map| {
                    map.entry(part.to_string())
                        .or_insert_with(|| Value::Object(Default::default()))
                })
                .ok_or_else(|| PassforgeError::Config(format!("Cannot set '{}'", path)))?;
        }

        match current {
            Value::Object(map) => {
                map.insert(last.to_string(), value);
                Ok(())
            }
            _ => Err(PassforgeError::Config(format!("Cannot set '{}': parent is not a mapping", path))),
        }
    }
}

fn parse_env_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Value::from(n);
    }
    match trimmed.to_lowercase().as_str() {
        "true" | "yes" | "on" => Value::Bool(true),
        "false" | "no" | "off" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}

/// Generator defaults (`~/.passforge/config`).
///
/// Every field is optional in the file; missing values fall back to a
/// 16-character password with all categories enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Default password length
    #[serde(default)]
    pub length: PasswordLength,
    /// Include `A-Z`
    #[serde(default = "default_true")]
    pub uppercase: bool,
    /// Include `a-z`
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Include `0-9`
    #[serde(default = "default_true")]
    pub numbers: bool,
    /// Include punctuation
    #[serde(default = "default_true")]
    pub symbols: bool,
}

fn default_true() -> bool {
    true
}

impl GeneratorSettings {
    /// Load settings from the default location, with environment overrides.
    pub fn load() -> Result<Self> {
        let config = Config::load(Self::default_path()?)?.with_process_env();
        Self::from_config(&config)
    }

    /// Load settings from a specific path, without environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&Config::load(path)?)
    }

    /// Resolve the typed settings from a layered configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        serde_json::from_value(config.merged_data())
            .map_err(|e| PassforgeError::Config(format!("Invalid generator settings: {}", e)))
    }

    /// Get the default path for the settings file.
    ///
    /// `PASSFORGE_CONFIG` takes precedence over `~/.passforge/config`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Ok(crate::util::expand_path(path));
        }

        dirs::home_dir()
            .map(|home| home.join(".passforge").join("config"))
            .ok_or_else(|| PassforgeError::Config("Could not determine home directory".to_string()))
    }

    /// Whether a category is enabled by default.
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Numbers => self.numbers,
            Category::Symbols => self.symbols,
        }
    }

    /// The per-request configuration these settings describe.
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length.get(),
            include_uppercase: self.uppercase,
            include_lowercase: self.lowercase,
            include_numbers: self.numbers,
            include_symbols: self.symbols,
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: PasswordLength::default(),
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_layers() {
        let mut config = Config::default();

        config.layers.insert(
            ConfigLayer::Loaded,
            serde_json::json!({"key": "loaded_value", "other": "kept"}),
        );
        config.layers.insert(
            ConfigLayer::Environment,
            serde_json::json!({"key": "env_value"}),
        );

        let value: String = config.get("key").unwrap();
        assert_eq!(value, "env_value");
        assert_eq!(config.get::<String>("other").as_deref(), Some("kept"));
        assert_eq!(config.get::<String>("missing"), None);

        config.set("key", "set_value").unwrap();
        let value: String = config.get("key").unwrap();
        assert_eq!(value, "set_value");
    }

    #[test]
    fn test_env_beats_file_and_flags_beat_env() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "length: 20\nsymbols: false\n");

        let mut config = Config::load(&path)
            .unwrap()
            .with_env_vars([("PASSFORGE_LENGTH", "30"), ("HOME", "/root")]);
        assert_eq!(config.get::<usize>("length"), Some(30));

        config.set("length", 40).unwrap();
        let settings = GeneratorSettings::from_config(&config).unwrap();
        assert_eq!(settings.length.get(), 40);
        assert!(!settings.symbols);
        assert!(settings.uppercase);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = GeneratorSettings::load_from(dir.path().join("absent")).unwrap();
        assert_eq!(settings, GeneratorSettings::default());
        assert_eq!(settings.to_generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        assert_eq!(GeneratorSettings::load_from(path).unwrap(), GeneratorSettings::default());
    }

    #[test]
    fn test_out_of_range_length_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "length: 4\n");
        let err = GeneratorSettings::load_from(path).unwrap_err();
        assert!(matches!(err, PassforgeError::Config(_)));
    }

    #[test]
    fn test_non_mapping_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "- 1\n- 2\n");
        assert!(matches!(Config::load(path), Err(PassforgeError::Config(_))));
    }

    #[test]
    fn test_bad_env_value_surfaces_on_resolve() {
        let config = Config::default().with_env_vars([("PASSFORGE_NUMBERS", "maybe")]);
        assert!(GeneratorSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_env_bool_parsing() {
        let config = Config::default().with_env_vars([
            ("PASSFORGE_UPPERCASE", "no"),
            ("PASSFORGE_symbols", "0"),
            ("PASSFORGE_UNKNOWN", "1"),
        ]);
        let settings = GeneratorSettings::from_config(&config);
        // "0" parses as a number, which is not a bool
        assert!(settings.is_err());

        let config = Config::default().with_env_vars([("PASSFORGE_UPPERCASE", "no")]);
        let settings = GeneratorSettings::from_config(&config).unwrap();
        assert!(!settings.uppercase);
        assert!(!settings.includes(Category::Uppercase));
    }

    #[test]
    fn test_save_round_trip_skips_env() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config");

        let mut config = Config::load(&path)
            .unwrap()
            .with_env_vars([("PASSFORGE_LENGTH", "50")]);
        config.set("numbers", false).unwrap();
        config.save().unwrap();

        let settings = GeneratorSettings::load_from(&path).unwrap();
        assert!(!settings.numbers);
        assert_eq!(settings.length.get(), 16);
    }

    #[test]
    fn test_dotted_set() {
        let mut config = Config::default();
        config.set("profiles.work.length", 32).unwrap();
        assert_eq!(config.get::<usize>("profiles.work.length"), Some(32));
    }
}
