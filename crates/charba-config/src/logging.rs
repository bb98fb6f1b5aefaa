//! Logging bootstrap built on `tracing-subscriber`.

use crate::config::{ConfigError, ConfigResult, LoggingConfig};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Crates whose default level is driven by `LoggingConfig::level`
const CHARBA_TARGETS: &[&str] = &["charba_events", "charba_config"];

static INIT: Once = Once::new();

/// Build an `EnvFilter` directive string from configuration
///
/// The default level applies to the charba crates only; everything else stays
/// at `warn`. Component overrides are appended last so they win.
pub fn build_filter_string(config: &LoggingConfig) -> String {
    let mut directives = vec!["warn".to_string()];

    for target in CHARBA_TARGETS {
        directives.push(format!("{}={}", target, config.level.to_lowercase()));
    }

    for (component, level) in &config.components {
        directives.push(format!("{}={}", component, level.to_lowercase()));
    }

    directives.join(",")
}

/// Initialize the global `tracing` subscriber.
///
/// `RUST_LOG`, when set, takes precedence over the configured levels. Only the
/// first call installs a subscriber; later calls still validate `config` but
/// are otherwise no-ops, as is a call made after another subscriber was
/// installed elsewhere.
pub fn init_logging(config: &LoggingConfig) -> ConfigResult<()> {
    config.validate()?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(build_filter_string(config)).map_err(|e| {
            ConfigError::Invalid {
                field: "logging".to_string(),
                reason: e.to_string(),
            }
        })?,
    };

    let include_target = config.include_target;
    let ansi = config.ansi;
    INIT.call_once(move || {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(include_target)
            .with_ansi(ansi)
            .try_init();

        if installed.is_ok() {
            tracing::debug!("logging initialized");
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_string_defaults() {
        let filter = build_filter_string(&LoggingConfig::default());
        assert_eq!(filter, "warn,charba_events=info,charba_config=info");
    }

    #[test]
    fn test_filter_string_component_overrides_come_last() {
        let config = LoggingConfig {
            level: "Debug".to_string(),
            ..Default::default()
        }
        .with_component("charba_events::bus", "TRACE");

        let filter = build_filter_string(&config);
        assert_eq!(
            filter,
            "warn,charba_events=debug,charba_config=debug,charba_events::bus=trace"
        );
    }

    #[test]
    fn test_filter_string_parses_as_env_filter() {
        let config = LoggingConfig::default().with_component("charba_events::manager", "off");
        assert!(EnvFilter::try_new(build_filter_string(&config)).is_ok());
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(init_logging(&config).is_err());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}
