//! Runtime configuration
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. TOML file (`--config` or `<config dir>/pos-seeder/config.toml`)
//! 3. `.env` in the working directory
//! 4. `POS_API_URL`, `POS_USERNAME`, `POS_PASSWORD`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::RetryConfig;

pub const ENV_API_URL: &str = "POS_API_URL";
pub const ENV_USERNAME: &str = "POS_USERNAME";
pub const ENV_PASSWORD: &str = "POS_PASSWORD";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub username: String,
    pub password: Option<String>,
    pub timeout_secs: u64,
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api".to_string(),
            username: "admin".to_string(),
            password: None,
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides; blank values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(username) = get(ENV_USERNAME) {
            self.username = username;
        }
        if let Some(password) = get(ENV_PASSWORD) {
            self.password = Some(password);
        }
    }

    /// Configured password, or prompt for one
    pub fn password_or_prompt(&self) -> Result<String> {
        match &self.password {
            Some(password) => Ok(password.clone()),
            None => rpassword::prompt_password(format!("Password for {}: ", self.username))
                .context("Failed to read password"),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pos-seeder").join("config.toml"))
}
