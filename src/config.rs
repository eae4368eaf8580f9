//! Configuration loading and management for prospecta.
//!
//! Loads settings from `prospecta.toml` with environment variable overrides
//! for credentials. A missing file is fine: the defaults plus environment
//! variables are enough to run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing required API key: {0}")]
    MissingApiKey(String),
}

/// LLM settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Model identifier (e.g., "gpt-4o-mini")
    pub model: String,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search engine: "google" or "bing"
    pub engine: String,
    /// Fetch-proxy zone name
    pub zone: String,
}

/// API keys (normally loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub brightdata_key: Option<String>,
    #[serde(default)]
    pub openai_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from the default locations, then apply environment
    /// overrides. No config file means built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::read_file(&path)?,
            None => Config::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific path (still env-overridable).
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn read_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("BRIGHTDATA_API_KEY") {
            self.api.brightdata_key = Some(key);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.api.openai_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("prospecta.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("prospecta").join("prospecta.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// The search API key, required to build the search client
    pub fn brightdata_key(&self) -> Result<&str, ConfigError> {
        self.api
            .brightdata_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey("BRIGHTDATA_API_KEY".to_string()))
    }

    /// The model API key, required to build the LLM client
    pub fn openai_key(&self) -> Result<&str, ConfigError> {
        self.api
            .openai_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey("OPENAI_API_KEY".to_string()))
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: "google".to_string(),
            zone: "serp_api".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_missing_file() {
        let config = Config::default();
        assert_eq!(config.agent.model, "gpt-4o-mini");
        assert_eq!(config.search.engine, "google");
        assert_eq!(config.search.zone, "serp_api");
        assert!(config.api.openai_key.is_none());
    }

    #[test]
    fn missing_keys_surface_as_config_errors() {
        let config = Config::default();
        assert!(matches!(
            config.brightdata_key(),
            Err(ConfigError::MissingApiKey(_))
        ));
        assert!(matches!(
            config.openai_key(),
            Err(ConfigError::MissingApiKey(_))
        ));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [agent]
            model = "gpt-4"
            temperature = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(config.agent.model, "gpt-4");
        assert_eq!(config.agent.temperature, Some(0.7));
        assert_eq!(config.search.engine, "google");
    }

    #[test]
    fn load_from_reads_an_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prospecta.toml");
        std::fs::write(
            &path,
            r#"
            [agent]
            model = "gpt-4"

            [search]
            engine = "bing"
            zone = "serp_api"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.agent.model, "gpt-4");
        assert_eq!(config.search.engine, "bing");
    }

    #[test]
    fn load_from_errors_on_a_missing_path() {
        let path = PathBuf::from("/nonexistent/prospecta.toml");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn file_keys_are_readable_without_env() {
        let config: Config = toml::from_str(
            r#"
            [api]
            brightdata_key = "bd-123"
            openai_key = "sk-456"
            "#,
        )
        .unwrap();
        assert_eq!(config.brightdata_key().unwrap(), "bd-123");
        assert_eq!(config.openai_key().unwrap(), "sk-456");
    }
}
