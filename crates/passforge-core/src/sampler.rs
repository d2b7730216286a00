//! Uniform character sampling.
//!
//! Draws one random `u32` per output character and maps it onto the
//! alphabet with `r % alphabet.len()`. With a 2^32 range the modulo bias is
//! below 2^-25 for any alphabet built from the standard categories.

use passforge_types::{EntropySource, PassforgeError, Result};
use zeroize::Zeroize;
use crate::alphabet::Alphabet;
use crate::password::Password;

/// Sample `length` characters from `alphabet`.
///
/// The length is taken as given. Any failure of the entropy source is
/// returned unchanged; there is no fallback generator.
pub fn sample<S>(alphabet: &Alphabet, length: usize, source: &mut S) -> Result<Password>
where
    S: EntropySource + ?Sized,
{
    if alphabet.is_empty() {
        return Err(PassforgeError::Validation("Cannot sample from an empty alphabet".to_string()));
    }

    let mut draws = vec![0u32; length];
    source.fill_u32(&mut draws)?;

    let candidates = alphabet.as_slice();
    let mut password = Password::with_capacity(length);
    for r in &draws {
        password.push(candidates[*r as usize % candidates.len()]);
    }

    draws.zeroize();
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use passforge_types::{Category, GeneratorConfig};

    /// Replays a fixed sequence of words.
    struct Sequence(Vec<u32>, usize);

    impl EntropySource for Sequence {
        fn fill_u32(&mut self, buf: &mut [u32]) -> Result<()> {
            for slot in buf.iter_mut() {
                *slot = self.0[self.1 % self.0.len()];
                self.1 += 1;
            }
            Ok(())
        }
    }

    struct Broken;

    impl EntropySource for Broken {
        fn fill_u32(&mut self, _buf: &mut [u32]) -> Result<()> {
            Err(PassforgeError::Entropy("device unavailable".to_string()))
        }
    }

    #[test]
    fn test_selects_index_modulo_length() {
        let alphabet = Alphabet::from_config(&GeneratorConfig::empty(8).with(Category::Numbers));
        let mut source = Sequence(vec![0, 9, 10, 23, u32::MAX], 0);

        let password = sample(&alphabet, 5, &mut source).unwrap();
        // u32::MAX % 10 == 5
        assert_eq!(password.expose(), "09035");
    }

    #[test]
    fn test_draw_order_is_preserved() {
        let alphabet = Alphabet::from_config(&GeneratorConfig::empty(8));
        let mut source = Sequence((0..26).rev().collect(), 0);

        let password = sample(&alphabet, 26, &mut source).unwrap();
        assert_eq!(password.expose(), "zyxwvutsrqponmlkjihgfedcba");
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let alphabet = Alphabet::from_config(&GeneratorConfig::default());
        let err = sample(&alphabet, 16, &mut Broken).unwrap_err();
        assert!(matches!(err, PassforgeError::Entropy(_)));
    }

    #[test]
    fn test_zero_length_yields_empty() {
        let alphabet = Alphabet::from_config(&GeneratorConfig::default());
        let password = sample(&alphabet, 0, &mut Sequence(vec![1], 0)).unwrap();
        assert!(password.is_empty());
    }
}
