//! Logging setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::Result;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the configured filter when it is set and valid.
/// Returns `Ok(false)` if a global subscriber was already installed; later
/// calls are no-ops.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %config.filter, "logging initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig {
            filter: "warn".to_string(),
        };
        // Another test may already have installed a subscriber, so only the
        // second call's result is known
        init(&config).unwrap();
        assert!(!init(&config).unwrap());
    }
}
