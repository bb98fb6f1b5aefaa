//! Configuration types and TOML loading.
//!
//! Every section uses `#[serde(default)]`, so a partial (or empty) file is a
//! valid configuration:
//!
//! ```toml
//! [dispatch]
//! nested_depth_warning = 8
//! trace_dispatch = true
//!
//! [logging]
//! level = "debug"
//!
//! [logging.components]
//! "charba_events::bus" = "trace"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A field holds a value outside its allowed range
    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default depth at which nested fires start logging warnings.
pub const DEFAULT_NESTED_DEPTH_WARNING: usize = 16;

/// Tuning for the event dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Firing depth at which a warning is logged. Dispatch is never refused,
    /// this only surfaces handlers that keep re-firing events.
    pub nested_depth_warning: usize,

    /// Emit a `trace!` record for every handler invocation
    pub trace_dispatch: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            nested_depth_warning: DEFAULT_NESTED_DEPTH_WARNING,
            trace_dispatch: false,
        }
    }
}

impl DispatchConfig {
    /// Check the dispatch section for out-of-range values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.nested_depth_warning == 0 {
            return Err(ConfigError::invalid(
                "dispatch.nested_depth_warning",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for the charba crates (`trace`, `debug`, `info`, `warn`, `error`, `off`)
    pub level: String,

    /// Per-target overrides, e.g. `"charba_events::bus" = "trace"`
    pub components: BTreeMap<String, String>,

    /// Whether to include the target/module in each record
    pub include_target: bool,

    /// Whether to use ANSI colors
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            components: BTreeMap::new(),
            include_target: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Check that every configured level parses
    pub fn validate(&self) -> ConfigResult<()> {
        parse_level("logging.level", &self.level)?;
        for (target, level) in &self.components {
            parse_level(&format!("logging.components.{target}"), level)?;
        }
        Ok(())
    }

    /// Add a per-target level override
    pub fn with_component(mut self, target: impl Into<String>, level: impl Into<String>) -> Self {
        self.components.insert(target.into(), level.into());
        self
    }
}

fn parse_level(field: &str, value: &str) -> ConfigResult<LevelFilter> {
    LevelFilter::from_str(value)
        .map_err(|_| ConfigError::invalid(field, format!("unknown log level '{value}'")))
}

/// Root configuration for the event core
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CharbaConfig {
    /// Dispatcher tuning
    pub dispatch: DispatchConfig,

    /// Logging setup
    pub logging: LoggingConfig,
}

impl CharbaConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: CharbaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        self.dispatch.validate()?;
        self.logging.validate()
    }
}
