//! Common utility functions.

pub mod data;
pub mod fs;

// Re-export commonly used items
pub use data::{load_yaml_file, save_yaml_file, deep_merge};
pub use fs::expand_path;
