//! Error types for passforge operations.

use thiserror::Error;

/// The main error type for passforge operations.
///
/// Generation itself only fails when the secure random source is
/// unavailable or the request is degenerate; the remaining variants cover
/// settings, clipboard, and I/O around it.
#[derive(Error, Debug)]
pub enum PassforgeError {
    /// The cryptographically secure random source could not be read
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for passforge operations.
pub type Result<T> = std::result::Result<T, PassforgeError>;

/// Helper macro to bail out with a PassforgeError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if count == 0 {
///     bail!(Validation, "Count must be at least 1");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::PassforgeError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::PassforgeError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::PassforgeError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::PassforgeError::Other(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(count: usize) -> Result<usize> {
        if count == 0 {
            bail!(Validation, "count must be at least {}", 1);
        }
        Ok(count)
    }

    #[test]
    fn test_bail_builds_variant() {
        match reject(0) {
            Err(PassforgeError::Validation(msg)) => assert_eq!(msg, "count must be at least 1"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(reject(3).unwrap(), 3);
    }

    #[test]
    fn test_error_display() {
        let err = PassforgeError::Entropy("getrandom failed".to_string());
        assert_eq!(err.to_string(), "Entropy source unavailable: getrandom failed");
    }
}
