// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use evcal_core::{APP_NAME, Config as CoreConfig};

const EVCAL_CONFIG_ENV: &str = "EVCAL_CONFIG";

/// Load the configuration.
///
/// The file is taken from `path`, then `$EVCAL_CONFIG`, then the user config
/// directory. A missing file in the user config directory means defaults.
///
/// ## Errors
/// If an explicitly named file cannot be read, or any file is not valid.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(EVCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(APP_NAME).join("config.toml"),
            Err(e) => {
                tracing::warn!("{e}, using default configuration");
                return Ok(Config::default());
            }
        };
        if !config.exists() {
            tracing::debug!(
                path = %config.display(),
                "no config file, using default configuration"
            );
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e).into())
}

/// Configuration for the evcal application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion pipeline settings
    pub core: CoreConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// How events are written.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
