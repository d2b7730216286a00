//! Terminal interaction helpers.

pub mod clipboard;
pub mod progress;
