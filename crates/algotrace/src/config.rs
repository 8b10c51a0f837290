// AlgoTrace - Instrumented Algorithm Catalog
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Configuration system for the AlgoTrace CLI
//!
//! Preferences live in `~/.algotrace.toml`; the `ALGOTRACE_CONFIG` environment
//! variable points the CLI at a different file.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "ALGOTRACE_CONFIG";

/// How `run` prints a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The trace as a JSON array of steps
    #[default]
    Json,
    /// One line per step
    Pretty,
    /// Per-action statistics and the final result
    Summary,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty_json: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to a rolling file in the temp directory
    pub file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig { format: OutputFormat::Json, pretty_json: true },
            logging: LoggingConfig { file: false },
        }
    }
}

impl Config {
    /// Get the config file path (`$ALGOTRACE_CONFIG` or `~/.algotrace.toml`)
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home =
            dirs::home_dir().ok_or_else(|| eyre::eyre!("Unable to determine home directory"))?;
        Ok(home.join(".algotrace.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// Nothing is logged here; call [`ConfigSource::report`] once logging is up.
    pub fn load() -> Result<(Self, ConfigSource)> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save(&config_path)?;
            return Ok((default_config, ConfigSource::Created(config_path)));
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {config_path:?}"))?;

        let config: Self =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok((config, ConfigSource::Loaded(config_path)))
    }

    /// Write configuration to `config_path`
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")?;

        fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {config_path:?}"))
    }
}

/// Where a loaded [`Config`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file existed; the defaults were written here
    Created(PathBuf),
    /// Read from an existing file
    Loaded(PathBuf),
}

impl ConfigSource {
    /// Log how the configuration was obtained
    pub fn report(&self) {
        match self {
            Self::Created(path) => info!("Config file not found, created default at {:?}", path),
            Self::Loaded(path) => debug!("Loaded configuration from {:?}", path),
        }
    }
}
