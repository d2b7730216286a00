//! Range-checked password length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{PassforgeError, Result};

/// A password length within the range offered to users.
///
/// Generation itself accepts any non-zero length; this type is what input
/// surfaces (CLI flags, settings files) use to enforce the 8 to 64 range.
///
/// # Example
///
/// ```
/// use passforge_types::PasswordLength;
///
/// let len = PasswordLength::new(32).unwrap();
/// assert_eq!(len.get(), 32);
///
/// assert!(PasswordLength::new(0).is_err());
/// assert_eq!(PasswordLength::default().get(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PasswordLength(usize);

impl PasswordLength {
    /// Shortest accepted length.
    pub const MIN: usize = 8;
    /// Longest accepted length.
    pub const MAX: usize = 64;
    /// Length used when nothing else is configured.
    pub const DEFAULT: usize = 16;

    /// Create a new validated length.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is outside `MIN..=MAX`.
    pub fn new(length: usize) -> Result<Self> {
        if !Self::is_valid(length) {
            return Err(PassforgeError::Validation(format!(
                "Invalid password length {}: must be between {} and {}",
                length,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(length))
    }

    /// Check if a length is in range.
    pub fn is_valid(length: usize) -> bool {
        (Self::MIN..=Self::MAX).contains(&length)
    }

    /// Get the raw length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<usize> for PasswordLength {
    type Error = PassforgeError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PasswordLength> for usize {
    fn from(value: PasswordLength) -> Self {
        value.0
    }
}

impl FromStr for PasswordLength {
    type Err = PassforgeError;

    fn from_str(s: &str) -> Result<Self> {
        let length: usize = s.trim().parse().map_err(|_| {
            PassforgeError::Validation(format!("Invalid password length '{}': not a number", s))
        })?;
        Self::new(length)
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
