//! Command-line arguments of the scenario player.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, DemoConfig, LogLevel};

/// Headless player for thumbtrack overlay scrollbar scenarios
#[derive(Parser, Debug)]
#[command(name = "thumbtrack")]
#[command(about = "Replay overlay scrollbar scenarios against a simulated container")]
#[command(version)]
pub struct Args {
    /// Scenario file to play (the built-in demo when omitted)
    pub scenario: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration file
    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Write the effective configuration back to the configuration file
    #[arg(long)]
    pub save_config: bool,
}

impl Args {
    /// Path the configuration is read from and saved to.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(DemoConfig::default_path)
    }

    /// Load the configuration and apply command-line overrides.
    ///
    /// An explicit `--config` file must load. A missing or unreadable file at
    /// the default location falls back to defaults.
    pub fn load_config(&self) -> Result<DemoConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::load_from_default_path().unwrap_or_default(),
        };
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        Ok(config)
    }

    /// Save `config` to [`config_path`](Self::config_path).
    pub fn save(&self, config: &DemoConfig) -> Result<PathBuf, ConfigError> {
        let path = self.config_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        config.save(&path)?;
        Ok(path)
    }
}
