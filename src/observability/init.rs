//! Tracing initialization and subscriber setup.
//!
//! This module configures the global tracing subscriber from the host
//! configuration: an `EnvFilter` built from the configured trace level and a
//! standard fmt layer.

use crate::domain::{PathkeysError, Result};
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for the routing core's host.
///
/// The filter level is taken from `config.trace_level`, defaulting to
/// `"info"`. Any `EnvFilter` directive string is accepted, so hosts can pass
/// targeted directives like `"pathkeys=debug"` as well as plain levels.
///
/// # Errors
///
/// Returns [`PathkeysError::Config`] when the level string is not a valid
/// filter directive, and [`PathkeysError::Observability`] when a global
/// subscriber is already installed. Hosts that treat observability as
/// optional may ignore the latter.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_new(&level)
        .map_err(|e| PathkeysError::Config(format!("invalid trace level {level:?}: {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| PathkeysError::Observability(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_trace_level_is_a_config_error() {
        let config = Config {
            trace_level: Some("pathkeys=notalevel".to_string()),
            ..Config::default()
        };

        assert!(matches!(
            init_tracing(&config),
            Err(PathkeysError::Config(_))
        ));
    }
}
