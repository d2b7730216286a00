//! Generated password value.

use std::fmt;
use zeroize::Zeroizing;

/// A generated password.
///
/// The backing buffer is wiped on drop and `Debug` output is redacted, so a
/// password never ends up in logs by accident. Use [`Password::expose`] or
/// `Display` to get at the characters.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub(crate) fn with_capacity(length: usize) -> Self {
        Self(Zeroizing::new(String::with_capacity(length)))
    }

    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    /// The password characters.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True when no characters were generated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the characters in draw order.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<redacted, {} chars>)", self.len())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expose())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.expose()
    }
}
