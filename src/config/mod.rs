//! Server configuration loading
//!
//! Defaults, then the YAML file named by `GRUBDASH_CONFIG` (if set), then the
//! `HOST` and `PORT` environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_VAR: &str = "GRUBDASH_CONFIG";

/// Listener and startup data settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Seed file to load instead of the built-in seed
    pub seed_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file {path}"))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the effective configuration for this process
    pub fn load() -> Result<Self> {
        let config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                tracing::info!(%path, "loading config file");
                Self::from_yaml_file(&path)?
            }
            Err(_) => {
                tracing::info!("{CONFIG_PATH_VAR} not set, using default configuration");
                Self::default()
            }
        };
        Ok(config.with_overrides(|key| env::var(key).ok()))
    }

    /// Apply `HOST`/`PORT` overrides read through `lookup`
    ///
    /// Values that do not parse are logged and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = try_override::<String>(&lookup, "HOST") {
            self.host = host;
        }
        if let Some(port) = try_override::<u16>(&lookup, "PORT") {
            self.port = port;
        }
        self
    }

    /// `host:port` for the listener
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_override<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = lookup(key)?;
    raw.trim()
        .parse()
        .map_err(|e| {
            tracing::warn!("Invalid {key} value {raw:?}: {e}, keeping configured value");
        })
        .ok()
}
