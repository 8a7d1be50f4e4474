//! Tracing subscriber initialization.

use crate::LoggingConfig;
use discord_data_error::{ConfigError, DiscordDataResult};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::filter`]. With
/// [`LoggingConfig::json`] set, events are written as JSON lines.
///
/// # Errors
///
/// Returns a configuration error if the filter directives are invalid (from
/// either source) or a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> DiscordDataResult<()> {
    let filter = log_filter(config, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(json = config.json, "Tracing initialized");
    Ok(())
}

/// Pick the filter directives: `env_directives` when set, else the configured ones.
fn log_filter(
    config: &LoggingConfig,
    env_directives: Option<&str>,
) -> DiscordDataResult<EnvFilter> {
    let (source, directives) = match env_directives {
        Some(directives) => (EnvFilter::DEFAULT_ENV, directives),
        None => ("logging.filter", config.filter.as_str()),
    };
    let filter = EnvFilter::try_new(directives).map_err(|e| {
        ConfigError::new(format!("Invalid log filter '{}': {}", directives, e)).with_origin(source)
    })?;
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discord_data_error::DiscordDataErrorKind;

    fn config(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
            json: false,
        }
    }

    #[test]
    fn test_env_directives_take_precedence() {
        let filter = log_filter(&config("not a [valid filter"), Some("discord_data=trace"));
        assert!(filter.is_ok());
    }

    #[test]
    fn test_invalid_env_directives_are_rejected() {
        let err = log_filter(&config("info"), Some("discord_data=verbose"))
            .expect_err("Set but unparsable RUST_LOG is an error");
        match err.kind() {
            DiscordDataErrorKind::Config(e) => assert_eq!(e.origin.as_deref(), Some("RUST_LOG")),
            other => panic!("Expected config error, got {}", other),
        }
    }

    #[test]
    fn test_config_used_when_env_unset() {
        assert!(log_filter(&config("discord_data=debug"), None).is_ok());
        let err = log_filter(&config("discord_data=verbose"), None).expect_err("Bad config filter");
        match err.kind() {
            DiscordDataErrorKind::Config(e) => {
                assert_eq!(e.origin.as_deref(), Some("logging.filter"))
            }
            other => panic!("Expected config error, got {}", other),
        }
    }
}
