//! Configuration system for Benchboard.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment -> overrides.
//! Configuration is loaded from `~/.config/benchboard/config.toml` and/or
//! `.benchboard/config.toml` in the workspace directory.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level configuration for Benchboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Where the asset catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL of the asset catalog service. When unset the page always falls
    /// back to the demo catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// HTTP timeout for the catalog fetch, in seconds.
    #[serde(default = "default_catalog_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_catalog_timeout(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_catalog_timeout() -> u64 {
    10
}

/// Benchmark run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Simulated processing time of a ranking run, in milliseconds.
    #[serde(default = "default_simulated_delay")]
    pub simulated_delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay(),
        }
    }
}

impl RunConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

fn default_simulated_delay() -> u64 {
    1200
}

impl BenchConfig {
    /// Reject settings that would make the catalog client unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "catalog.timeout_secs must be greater than zero".to_string(),
            });
        }
        if let Some(endpoint) = &self.catalog.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    message: format!("catalog.endpoint must be an http(s) URL, got '{endpoint}'"),
                });
            }
        }
        Ok(())
    }
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `BENCHBOARD_`)
/// 3. Workspace-local config (`.benchboard/config.toml`)
/// 4. User config (`~/.config/benchboard/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&BenchConfig>,
) -> Result<BenchConfig, Box<figment::Error>> {
    let mut figment = Figment::from(Serialized::defaults(BenchConfig::default()));

    if let Some(config_dir) = directories::ProjectDirs::from("dev", "benchboard", "benchboard") {
        let user_config = config_dir.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = workspace_config_path(ws);
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // BENCHBOARD_CATALOG__ENDPOINT, BENCHBOARD_RUN__SIMULATED_DELAY_MS, etc.
    figment = figment.merge(Env::prefixed("BENCHBOARD_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    figment.extract().map_err(Box::new)
}

/// Path of the workspace-local config file.
pub fn workspace_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".benchboard").join("config.toml")
}

/// Write the default configuration to the workspace config file.
///
/// Returns `false` and leaves the file alone when one already exists.
pub fn init_workspace_config(workspace: &Path) -> crate::Result<bool> {
    let path = workspace_config_path(workspace);
    if path.exists() {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let toml_str =
        toml::to_string_pretty(&BenchConfig::default()).map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;
    std::fs::write(&path, toml_str)?;
    Ok(true)
}

/// Load configuration from an explicit file, layered over the built-in defaults.
pub fn load_config_file(path: &Path) -> Result<BenchConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let config: BenchConfig = Figment::from(Serialized::defaults(BenchConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("BENCHBOARD_").split("__"))
        .extract()?;
    config.validate()?;
    Ok(config)
}
