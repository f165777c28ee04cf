use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

use crate::language::Language;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Display language code (ISO 639-1)
    #[serde(default = "default_display_language")]
    pub display_language: String,

    /// Backend config
    #[serde(default)]
    pub backend: BackendConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Inference backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    // @field: Service URL
    #[serde(default = "default_backend_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_backend_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_display_language() -> String {
    "en".to_string()
}

fn default_backend_endpoint() -> String {
    // Development default of the inference server
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the display language
        let _language = self.display_language()?;

        // Validate the backend endpoint
        Url::parse(&self.backend.endpoint)
            .map_err(|e| anyhow!("Invalid backend endpoint '{}': {}", self.backend.endpoint, e))?;

        if self.backend.timeout_secs == 0 {
            return Err(anyhow!("Backend timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Parse the configured display language
    pub fn display_language(&self) -> Result<Language> {
        Language::from_code(&self.display_language)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            display_language: default_display_language(),
            backend: BackendConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
