//! # passforge Core
//!
//! Password generation, configuration management, logging, and terminal
//! helpers for passforge.
//!
//! This crate provides:
//!
//! - **Alphabet**: Concatenation of the enabled character categories
//! - **Sampler**: Uniform selection of characters from secure random words
//! - **Entropy**: The operating-system CSPRNG behind the sampler
//! - **Generator**: One-call password generation from a configuration
//! - **Configuration**: Multi-layer settings (defaults, file, flags, environment)
//! - **Logging**: `tracing` subscriber setup
//! - **Terminal**: Terminal width and text wrapping
//!
//! ## Example
//!
//! ```no_run
//! use passforge_core::{generate_password, GeneratorConfig};
//!
//! let password = generate_password(&GeneratorConfig::new(16))?;
//! assert_eq!(password.len(), 16);
//! # Ok::<(), passforge_core::PassforgeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod sampler;
pub mod entropy;
pub mod password;
pub mod generator;
pub mod config;
pub mod log;
pub mod term;
pub mod util;

// Re-export commonly used items
pub use alphabet::Alphabet;
pub use entropy::OsEntropy;
pub use generator::{generate_password, PasswordGenerator};
pub use password::Password;
pub use config::{Config, GeneratorSettings};
pub use passforge_types::{Category, GeneratorConfig, PassforgeError, PasswordLength, Result};

/// passforge application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
