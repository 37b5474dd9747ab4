//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Caption fetching settings
    #[serde(default)]
    pub captions: CaptionSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; "production" hides stack traces in error bodies
    #[serde(default = "default_environment")]
    pub environment: String,

    /// How failures map to HTTP status codes
    #[serde(default)]
    pub status_codes: StatusPolicy,
}

/// Status code policy for error responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Every failure is answered with 400.
    #[default]
    Literal,
    /// 400 for bad input, 502 for upstream failures, 422 for malformed model replies.
    ByKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSettings {
    /// Caption language used when a request does not name one
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for local/custom providers)
    #[serde(default)]
    pub endpoint: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Request timeout in seconds (0 = client default)
    #[serde(default)]
    pub timeout_secs: u64,
}

// Default value functions

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.4
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            status_codes: StatusPolicy::default(),
        }
    }
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            temperature: default_temperature(),
            timeout_secs: 0,
        }
    }
}

impl ServerSettings {
    /// Whether error bodies should omit stack traces
    pub fn is_production(&self) -> bool {
        self.environment.trim().eq_ignore_ascii_case("production")
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides read through `lookup`. Blank values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(port) = var("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value '{}'", port),
            }
        }

        if let Some(env) = var("VIDSUM_ENV").or_else(|| var("NODE_ENV")) {
            self.server.environment = env.trim().to_string();
        }

        if self.llm.api_key.trim().is_empty() {
            if let Some(key) = var("VIDSUM_GEMINI_API_KEY").or_else(|| var("GOOGLE_API_KEY")) {
                self.llm.api_key = key;
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "vidsum", "vidsum")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
