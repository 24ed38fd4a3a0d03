//! Configuration resolution.
//!
//! Precedence, highest first: command-line overrides, environment, the
//! optional `config.toml`, built-in defaults. A missing API key is not an
//! error here; requests fail later and the advisor shows its fallback.

use auditorsec_neural::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
pub const ENV_MODEL: &str = "AUDITORSEC_MODEL";
pub const ENV_BASE_URL: &str = "AUDITORSEC_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl FileConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Merge environment (via `env`) over an optional file config.
    pub fn resolve(env: impl Fn(&str) -> Option<String>, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: lookup(ENV_API_KEY)
                .or_else(|| lookup(ENV_API_KEY_FALLBACK))
                .or(file.api_key),
            model: lookup(ENV_MODEL)
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup(ENV_BASE_URL)
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Load from the process environment and `path` (or the default location).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => Some(FileConfig::read(p)?),
            None => match default_config_path() {
                Some(p) if p.exists() => Some(FileConfig::read(&p)?),
                _ => None,
            },
        };

        let config = Self::resolve(|key| std::env::var(key).ok(), file);
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "AuditorSEC", "auditorsec")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_local_dir().join("auditorsec.log"))
}
