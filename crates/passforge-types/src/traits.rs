//! Core trait definitions for passforge abstractions.

use crate::errors::Result;

/// A source of uniformly distributed random words.
///
/// Production code must back this with a cryptographically secure generator.
/// Implementations report an unavailable source as
/// [`PassforgeError::Entropy`](crate::PassforgeError::Entropy) and must never
/// substitute a weaker generator.
pub trait EntropySource {
    /// Fill `buf` with independent, uniformly distributed values.
    fn fill_u32(&mut self, buf: &mut [u32]) -> Result<()>;

    /// Short name for diagnostics (e.g., "os").
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_u32(&mut self, buf: &mut [u32]) -> Result<()> {
        (**self).fill_u32(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
