//! Candidate character set for one generation request.

use passforge_types::{Category, GeneratorConfig};
use std::fmt;

/// The characters available for sampling, built from the enabled categories.
///
/// Never empty: when a configuration enables no category, the alphabet falls
/// back to the lowercase category alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    categories: Vec<Category>,
}

impl Alphabet {
    /// Build the alphabet for a configuration.
    ///
    /// Enabled categories are concatenated in [`Category::ALL`] order. An
    /// empty selection is not an error.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut categories = config.enabled();

        if categories.is_empty() {
            tracing::debug!("no category enabled, falling back to lowercase");
            categories.push(Category::Lowercase);
        }

        Self::from_categories(categories)
    }

    fn from_categories(categories: Vec<Category>) -> Self {
        let chars = categories
            .iter()
            .flat_map(|c| c.chars().chars())
            .collect();

        Self { chars, categories }
    }

    /// Number of candidate characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether there are no candidates; never true for a built alphabet.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Whether `c` is a candidate.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The characters, in order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Categories this alphabet was built from.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
