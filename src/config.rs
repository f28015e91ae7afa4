//! Configuration management for the city guide
//!
//! Configuration is layered: built-in defaults, an optional TOML file, then
//! environment variables prefixed with `CITYGUIDE__`. The completion API key
//! falls back to `OPENAI_API_KEY` when the layers above do not set it.

use crate::CityGuideError;
use crate::prompt::DEFAULT_MODEL;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable holding the completion API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityGuideConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion API settings
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Completion API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Bearer token for the completion API
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// OTLP/HTTP endpoint for span export, disabled when unset
    pub otlp_endpoint: Option<String>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            otlp_endpoint: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CityGuideConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("CITYGUIDE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: CityGuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.resolve_api_key(env::var(API_KEY_ENV).ok());
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cityguide").join("config.toml"))
    }

    /// Use `from_env` as the API key unless one is configured already
    pub fn resolve_api_key(&mut self, from_env: Option<String>) {
        if self.completion.api_key.is_none() {
            self.completion.api_key = from_env;
        }
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.completion.base_url.is_empty() {
            self.completion.base_url = default_base_url();
        }
        if self.completion.model.is_empty() {
            self.completion.model = default_model();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_server()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// An API key, when present, must not be blank
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.completion.api_key {
            if api_key.trim().is_empty() {
                return Err(CityGuideError::config(
                    "Completion API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(CityGuideError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CityGuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(CityGuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !is_http_url(&self.completion.base_url) {
            return Err(CityGuideError::config(
                "Completion API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if let Some(endpoint) = &self.logging.otlp_endpoint {
            if !is_http_url(endpoint) {
                return Err(CityGuideError::config(
                    "OTLP endpoint must be a valid HTTP or HTTPS URL",
                )
                .into());
            }
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
