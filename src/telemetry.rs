//! Tracing subscriber installation.
//!
//! `RUST_LOG` takes precedence over [`LoggingConfig::level`]. With
//! [`LoggingConfig::json`] set, events are written as one JSON object per
//! line.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Builds the filter from `RUST_LOG`, falling back to the configured level.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());
    EnvFilter::try_new(&directives).unwrap_or_else(|error| {
        eprintln!("invalid log filter {directives:?} ({error}), using \"info\"");
        EnvFilter::new("info")
    })
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed, which happens
/// when several tests initialise tracing in the same process.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = env_filter(config);
    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_reports_existing_subscriber() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
