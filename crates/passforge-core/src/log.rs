//! Logging setup for passforge.
//!
//! Events go to stderr so that stdout only ever carries generated passwords.
//! `RUST_LOG` takes precedence over the level chosen on the command line.

use passforge_types::{LogLevel, PassforgeError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a level, scoped to the binary and the core crate.
pub fn directive(level: LogLevel) -> String {
    let level = level.as_directive();
    format!("passforge={level},passforge_core={level}")
}

/// Initialize the logging system at the given level.
pub fn init(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| PassforgeError::Other(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        assert_eq!(
            directive(LogLevel::Debug),
            "passforge=debug,passforge_core=debug"
        );
        assert!(directive(LogLevel::None).starts_with("passforge=off"));
    }
}
