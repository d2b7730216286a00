//! Common enumerations used throughout passforge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{PassforgeError, Result};

/// A named, fixed character alphabet that can be enabled for generation.
///
/// The declaration order is the order in which enabled categories are
/// concatenated into an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `A` through `Z`
    Uppercase,
    /// `a` through `z`
    Lowercase,
    /// `0` through `9`
    Numbers,
    /// Printable ASCII punctuation
    Symbols,
}

impl Category {
    /// Every category, in concatenation order.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Numbers,
        Category::Symbols,
    ];

    /// The characters this category contributes to an alphabet.
    pub const fn chars(self) -> &'static str {
        match self {
            Category::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Category::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            Category::Numbers => "0123456789",
            Category::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Short human label, e.g. `Uppercase (A-Z)`.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Uppercase => "Uppercase (A-Z)",
            Category::Lowercase => "Lowercase (a-z)",
            Category::Numbers => "Numbers (0-9)",
            Category::Symbols => "Symbols (!@#$...)",
        }
    }
}

impl FromStr for Category {
    type Err = PassforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uppercase" | "upper" => Ok(Category::Uppercase),
            "lowercase" | "lower" => Ok(Category::Lowercase),
            "numbers" | "digits" => Ok(Category::Numbers),
            "symbols" => Ok(Category::Symbols),
            _ => Err(PassforgeError::Validation(format!("Invalid category: {}", s))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Uppercase => write!(f, "uppercase"),
            Category::Lowercase => write!(f, "lowercase"),
            Category::Numbers => write!(f, "numbers"),
            Category::Symbols => write!(f, "symbols"),
        }
    }
}

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub const fn as_directive(self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = PassforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(PassforgeError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}
