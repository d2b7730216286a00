//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use crate::enums::Category;
use crate::length::PasswordLength;

/// Parameters for a single generation request.
///
/// Built per request and discarded afterwards. The length is not
/// range-checked here; see [`PasswordLength`] for caller-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of characters to generate
    pub length: usize,
    /// Include `A-Z`
    #[serde(default = "default_true")]
    pub include_uppercase: bool,
    /// Include `a-z`
    #[serde(default = "default_true")]
    pub include_lowercase: bool,
    /// Include `0-9`
    #[serde(default = "default_true")]
    pub include_numbers: bool,
    /// Include punctuation
    #[serde(default = "default_true")]
    pub include_symbols: bool,
}

fn default_true() -> bool {
    true
}

impl GeneratorConfig {
    /// A configuration of the given length with every category enabled.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }

    /// A configuration of the given length with no category enabled.
    pub fn empty(length: usize) -> Self {
        Self {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }

    /// Whether a category is enabled.
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.include_uppercase,
            Category::Lowercase => self.include_lowercase,
            Category::Numbers => self.include_numbers,
            Category::Symbols => self.include_symbols,
        }
    }

    /// Enable or disable a category.
    pub fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Uppercase => self.include_uppercase = enabled,
            Category::Lowercase => self.include_lowercase = enabled,
            Category::Numbers => self.include_numbers = enabled,
            Category::Symbols => self.include_symbols = enabled,
        }
    }

    /// Builder-style enable.
    pub fn with(mut self, category: Category) -> Self {
        self.set(category, true);
        self
    }

    /// Builder-style disable.
    pub fn without(mut self, category: Category) -> Self {
        self.set(category, false);
        self
    }

    /// Enabled categories in concatenation order.
    pub fn enabled(&self) -> Vec<Category> {
        Category::ALL.into_iter().filter(|c| self.includes(*c)).collect()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(PasswordLength::DEFAULT)
    }
}
