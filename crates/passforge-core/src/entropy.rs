//! Operating-system entropy source.

use passforge_types::{EntropySource, PassforgeError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// Entropy from the operating system CSPRNG (`getrandom(2)`, `BCryptGenRandom`,
/// `SecRandomCopyBytes`, ...).
///
/// Stateless; every call goes to the OS. A failed read is reported as
/// [`PassforgeError::Entropy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Create a new OS entropy source.
    pub fn new() -> Self {
        OsEntropy
    }
}

impl EntropySource for OsEntropy {
    fn fill_u32(&mut self, buf: &mut [u32]) -> Result<()> {
        let mut bytes = Zeroizing::new(vec![0u8; buf.len() * 4]);

        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| PassforgeError::Entropy(format!("OS random source failed: {}", e)))?;

        for (slot, chunk) in buf.iter_mut().zip(bytes.chunks_exact(4)) {
            *slot = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_whole_buffer() {
        let mut buf = [0u32; 64];
        OsEntropy::new().fill_u32(&mut buf).unwrap();
        // 64 zero words from a working CSPRNG is not a realistic outcome
        assert!(buf.iter().any(|w| *w != 0));
    }

    #[test]
    fn test_consecutive_reads_differ() {
        let mut a = [0u32; 8];
        let mut b = [0u32; 8];
        let mut source = OsEntropy::new();
        source.fill_u32(&mut a).unwrap();
        source.fill_u32(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u32; 0] = [];
        assert!(OsEntropy::new().fill_u32(&mut buf).is_ok());
    }
}
