//! Password generation entry points.

use passforge_types::{bail, EntropySource, GeneratorConfig, Result};
use crate::alphabet::Alphabet;
use crate::entropy::OsEntropy;
use crate::password::Password;
use crate::sampler;

/// Generates passwords from a configuration and an entropy source.
///
/// Holds no state between calls other than the source itself.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator<S = OsEntropy> {
    source: S,
}

impl PasswordGenerator<OsEntropy> {
    /// Generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { source: OsEntropy::new() }
    }
}

impl<S: EntropySource> PasswordGenerator<S> {
    /// Generator backed by a caller-provided source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generate one password.
    ///
    /// A zero length is rejected. Any other length is used as given; range
    /// checks belong to the caller (see [`passforge_types::PasswordLength`]).
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<Password> {
        if config.length == 0 {
            bail!(Validation, "Password length must be greater than 0");
        }

        let alphabet = Alphabet::from_config(config);
        tracing::debug!(
            length = config.length,
            alphabet_size = alphabet.len(),
            source = self.source.name(),
            "generating password"
        );

        sampler::sample(&alphabet, config.length, &mut self.source)
    }

    /// Generate `count` independent passwords with the same configuration.
    pub fn generate_many(&mut self, config: &GeneratorConfig, count: usize) -> Result<Vec<Password>> {
        if count == 0 {
            bail!(Validation, "Count must be at least 1");
        }

        (0..count).map(|_| self.generate(config)).collect()
    }
}

/// Generate one password with the operating system CSPRNG.
pub fn generate_password(config: &GeneratorConfig) -> Result<Password> {
    PasswordGenerator::new().generate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use passforge_types::{Category, PassforgeError};
    use proptest::prelude::*;
    use std::collections::HashMap;

    const FULL: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";
    const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

    mock! {
        Source {}
        impl EntropySource for Source {
            fn fill_u32(&mut self, buf: &mut [u32]) -> Result<()>;
            fn name(&self) -> &'static str;
        }
    }

    #[test]
    fn test_all_categories_scenario() {
        let password = generate_password(&GeneratorConfig::new(16)).unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| FULL.contains(c)));
    }

    #[test]
    fn test_no_categories_scenario() {
        let password = generate_password(&GeneratorConfig::empty(8)).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| LOWER.contains(c)));
    }

    #[test]
    fn test_boundary_lengths() {
        for length in [8, 64] {
            let password = generate_password(&GeneratorConfig::new(length)).unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = generate_password(&GeneratorConfig::new(0)).unwrap_err();
        assert!(matches!(err, PassforgeError::Validation(_)));
    }

    #[test]
    fn test_consecutive_generations_differ() {
        let mut generator = PasswordGenerator::new();
        let config = GeneratorConfig::default();
        let first = generator.generate(&config).unwrap();
        let second = generator.generate(&config).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_many() {
        let mut generator = PasswordGenerator::new();
        let passwords = generator.generate_many(&GeneratorConfig::new(12), 5).unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 12));

        assert!(generator.generate_many(&GeneratorConfig::new(12), 0).is_err());
    }

    #[test]
    fn test_uses_injected_source() {
        let mut source = MockSource::new();
        source.expect_name().return_const("mock");
        source
            .expect_fill_u32()
            .times(1)
            .returning(|buf| {
                for (i, slot) in buf.iter_mut().enumerate() {
                    *slot = i as u32;
                }
                Ok(())
            });

        let mut generator = PasswordGenerator::with_source(source);
        let config = GeneratorConfig::empty(8).with(Category::Uppercase);
        assert_eq!(generator.generate(&config).unwrap().expose(), "ABCDEFGH");
    }

    #[test]
    fn test_entropy_failure_is_fatal() {
        let mut source = MockSource::new();
        source.expect_name().return_const("mock");
        source
            .expect_fill_u32()
            .returning(|_| Err(PassforgeError::Entropy("no device".to_string())));

        let mut generator = PasswordGenerator::with_source(source);
        let err = generator.generate(&GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, PassforgeError::Entropy(_)));
    }

    #[test]
    fn test_single_category_distribution() {
        // 26 buckets, expected 1000 each; 5 standard deviations is about 156
        let draws = 26_000;
        let config = GeneratorConfig::empty(draws);
        let password = generate_password(&config).unwrap();

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), 26);
        let expected = draws / 26;
        for (c, count) in counts {
            assert!(
                count.abs_diff(expected) < 200,
                "character {:?} appeared {} times, expected about {}",
                c,
                count,
                expected
            );
        }
    }

    fn any_config() -> impl Strategy<Value = GeneratorConfig> {
        (8usize..=64, any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(length, upper, lower, numbers, symbols)| GeneratorConfig {
                length,
                include_uppercase: upper,
                include_lowercase: lower,
                include_numbers: numbers,
                include_symbols: symbols,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_length_and_membership(config in any_config()) {
            let password = generate_password(&config).unwrap();
            prop_assert_eq!(password.len(), config.length);

            let mut enabled = config.enabled();
            if enabled.is_empty() {
                enabled.push(Category::Lowercase);
            }
            for c in password.chars() {
                prop_assert!(enabled.iter().any(|cat| cat.chars().contains(c)));
            }
        }
    }
}
