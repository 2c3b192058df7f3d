//! Configuration for gsurface.
//!
//! Values come from `~/.config/gsurface/config.yaml` (or the file named by
//! `GSURFACE_CONFIG`), then environment variables. Every key is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod defaults;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default project for project-scoped resources.
    #[serde(default)]
    pub project: Option<String>,
    /// Default location for API Gateway operations.
    #[serde(default)]
    pub api_gateway_location: Option<String>,
    #[serde(default = "default_iam_endpoint")]
    pub iam_endpoint: String,
    #[serde(default = "default_api_gateway_endpoint")]
    pub api_gateway_endpoint: String,
    /// Bearer token. When unset, `gcloud auth print-access-token` is used.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: None,
            api_gateway_location: None,
            iam_endpoint: default_iam_endpoint(),
            api_gateway_endpoint: default_api_gateway_endpoint(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Config file (global path or `GSURFACE_CONFIG`)
    /// 2. Environment variables
    pub fn load() -> Result<Self> {
        let mut config = match config_path().as_deref() {
            Some(path) if path.exists() => Self::load_from(path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Override values from the environment. `lookup` is injected so tests
    /// can avoid touching the process environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(project) = value(PROJECT_ENV) {
            self.project = Some(project);
        }
        if let Some(token) = value(ACCESS_TOKEN_ENV) {
            self.access_token = Some(token);
        }
        if let Some(endpoint) = value(IAM_ENDPOINT_ENV) {
            self.iam_endpoint = endpoint;
        }
        if let Some(endpoint) = value(API_GATEWAY_ENDPOINT_ENV) {
            self.api_gateway_endpoint = endpoint;
        }
    }

    /// The `--project` flag if given, else the configured project.
    pub fn resolve_project<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.project.as_deref())
    }
}

/// Returns the path to the global config file at ~/.config/gsurface/config.yaml
/// The config file `load` reads: `GSURFACE_CONFIG` if set, else the global path.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(global_config_path)
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/gsurface/config.yaml"))
}

#[cfg(test)]
mod tests;
