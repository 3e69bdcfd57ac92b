//! Configuration file support for the thumbtrack player.
//!
//! The player keeps its preferences (log verbosity and the default scrollbar
//! configuration) in a versioned JSON file, so a configuration exported by a
//! newer build is rejected instead of being half understood.

use serde::{Deserialize, Serialize};
use thumbtrack_ui::ScrollbarConfig;

/// Log level setting for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show layout and drag session boundaries
    Debug,
    /// Show every paint and timer firing
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

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Player configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Scrollbar configuration used by scenarios that bring none
    #[serde(default)]
    pub scrollbar: ScrollbarConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            scrollbar: ScrollbarConfig::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "thumbtrack-config.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("thumbtrack").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("thumbtrack")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Load configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

/// Errors that can occur when loading or saving configuration.
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

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbtrack_ui::{Skin, TrackGap};

    #[test]
    fn test_config_roundtrip() {
        let config = DemoConfig {
            log_level: LogLevel::Trace,
            scrollbar: ScrollbarConfig::new().skin(Skin::Dark).min_thumb_size(24.0),
            ..DemoConfig::new()
        };
        let json = config.to_json().unwrap();
        let parsed = DemoConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = DemoConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.scrollbar, ScrollbarConfig::default());
    }

    #[test]
    fn test_partial_scrollbar_section() {
        let config = DemoConfig::from_json(
            r#"{ "version": 1, "log_level": "debug", "scrollbar": { "track_gap": 4 } }"#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.scrollbar.track_gap, TrackGap::Uniform(4.0));
        assert_eq!(config.scrollbar.min_thumb_size, 20.0);
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        match DemoConfig::from_json(&json) {
            Err(ConfigError::VersionTooNew {
                file_version,
                supported_version,
            }) => {
                assert_eq!(file_version, CONFIG_VERSION + 1);
                assert_eq!(supported_version, CONFIG_VERSION);
            }
            other => panic!("expected VersionTooNew, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DemoConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_filters() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("thumbtrack-config-{}", std::process::id()));
        let path = dir.join("nested").join(DemoConfig::default_filename());
        let config = DemoConfig {
            log_level: LogLevel::Warn,
            scrollbar: ScrollbarConfig::new().track_gap(8.0_f32),
            ..DemoConfig::new()
        };

        config.save(&path).unwrap();
        assert_eq!(DemoConfig::load(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
