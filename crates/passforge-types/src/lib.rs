//! # passforge Types
//!
//! Core types, traits, and enums shared across all passforge crates.
//!
//! This crate provides the fundamental building blocks for the passforge
//! password generator, including:
//!
//! - Character categories and their fixed alphabets
//! - The per-request generator configuration
//! - A range-checked password length for callers that collect user input
//! - The entropy source abstraction
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use passforge_types::{Category, GeneratorConfig, PasswordLength};
//!
//! let length = PasswordLength::new(20).unwrap();
//! let config = GeneratorConfig::new(length.get()).without(Category::Symbols);
//! assert_eq!(config.length, 20);
//! assert!(!config.includes(Category::Symbols));
//!
//! // Out-of-range lengths are rejected
//! assert!(PasswordLength::new(7).is_err());
//! assert!(PasswordLength::new(65).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod length;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{PassforgeError, Result};
pub use length::PasswordLength;
pub use enums::{Category, LogLevel};
pub use traits::EntropySource;
pub use config::GeneratorConfig;
