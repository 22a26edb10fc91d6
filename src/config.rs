//! Tooltip configuration.
//!
//! [`TooltipOptions`] is what a caller attaches to a trigger. [`TooltipConfig`]
//! wraps application-wide defaults plus logging and can be loaded from JSON.

use perch_layout::Placement;
use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Per-trigger options. Fixed for the duration of one show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    /// Ignore show requests entirely
    pub disabled: bool,
    /// Set the fade flag while visible
    pub animated: bool,
    /// Where the bubble goes relative to the host
    pub placement: Placement,
    /// Position against the document instead of the host's offset container
    pub append_to_body: bool,
}

impl TooltipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn placement(mut self, placement: impl Into<Placement>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn append_to_body(mut self, append_to_body: bool) -> Self {
        self.append_to_body = append_to_body;
        self
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide tooltip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Options used by triggers that don't set their own
    #[serde(default)]
    pub defaults: TooltipOptions,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            defaults: TooltipOptions::default(),
        }
    }
}

impl TooltipConfig {
    /// Parse configuration from JSON, rejecting versions newer than supported.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        log::debug!("Loaded tooltip config version {}", config.version);
        Ok(config)
    }

    /// Serialize configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_layout::{Align, Side};

    #[test]
    fn options_defaults() {
        let options = TooltipOptions::default();
        assert!(!options.disabled);
        assert!(!options.animated);
        assert!(!options.append_to_body);
        assert_eq!(options.placement, Placement::BOTTOM);
    }

    #[test]
    fn options_builder() {
        let options = TooltipOptions::new().animated(true).placement("left-top");
        assert!(options.animated);
        assert_eq!(options.placement, Placement::new(Side::Left, Align::Top));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = TooltipConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config, TooltipConfig::default());

        let config =
            TooltipConfig::from_json(r#"{ "version": 1, "defaults": { "placement": "right" } }"#)
                .unwrap();
        assert_eq!(config.defaults.placement, Placement::RIGHT);
        assert!(!config.defaults.disabled);
    }

    #[test]
    fn round_trip_json() {
        let config = TooltipConfig {
            log_level: LogLevel::Debug,
            defaults: TooltipOptions::new().animated(true).placement("top-left"),
            ..TooltipConfig::default()
        };

        let json = config.to_json().unwrap();
        assert!(json.contains("\"top-left\""));
        assert_eq!(TooltipConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_newer_version() {
        let err = TooltipConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            TooltipConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn log_level_filter() {
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}
