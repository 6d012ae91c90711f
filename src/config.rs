//! Configuration management for the dashboard backend
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_DARK_THEME_START_HOUR, DEFAULT_HOST, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_LIGHT_THEME_START_HOUR, DEFAULT_PORT, DEFAULT_QUOTE_URL, DEFAULT_USER_ID, DEFAULT_WEATHER_CITY,
    DEFAULT_WEATHER_KEY_ENV, DEFAULT_WEATHER_UNITS, DEFAULT_WEATHER_URL, MAX_HTTP_TIMEOUT_SECS,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub integrations: IntegrationsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind (overridden by the `PORT` environment variable)
    pub port: u16,
    /// Identity injected into every record; client-supplied user ids are discarded
    pub user_id: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

/// External collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntegrationsConfig {
    pub quote: QuoteConfig,
    pub weather: WeatherConfig,
    pub theme: ThemeConfig,
}

/// Quote of the day upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Upstream URL returning ZenQuotes-style JSON
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Weather upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Upstream URL returning OpenWeatherMap-style JSON
    pub url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Unit system passed to the upstream ("metric", "imperial" or "standard")
    pub units: String,
    /// City used when a request names neither a city nor coordinates
    pub default_city: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Light/dark theme schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Hour (0-23) at which the light theme starts
    pub light_start_hour: u32,
    /// Hour (0-23) at which the dark theme starts
    pub dark_start_hour: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUOTE_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEATHER_URL.to_string(),
            api_key_env: DEFAULT_WEATHER_KEY_ENV.to_string(),
            units: DEFAULT_WEATHER_UNITS.to_string(),
            default_city: DEFAULT_WEATHER_CITY.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_start_hour: DEFAULT_LIGHT_THEME_START_HOUR,
            dark_start_hour: DEFAULT_DARK_THEME_START_HOUR,
        }
    }
}

impl WeatherConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|key| !key.trim().is_empty())
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("dashboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("dashboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Apply `PORT` from the environment, as hosting platforms expect
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT environment variable: '{}'", port))?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server settings
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }
        if self.server.user_id.trim().is_empty() {
            anyhow::bail!("server.user_id cannot be empty");
        }

        // Validate logging level
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        self.validate_integrations()?;

        Ok(())
    }

    /// Validate upstream and schedule settings
    fn validate_integrations(&self) -> Result<()> {
        let quote = &self.integrations.quote;
        let weather = &self.integrations.weather;

        for (name, url) in [("quote", &quote.url), ("weather", &weather.url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("integrations.{}.url must be an http(s) URL, got '{}'", name, url);
            }
        }

        for (name, timeout) in [("quote", quote.timeout_secs), ("weather", weather.timeout_secs)] {
            if timeout == 0 || timeout > MAX_HTTP_TIMEOUT_SECS {
                anyhow::bail!(
                    "integrations.{}.timeout_secs must be between 1 and {}, got {}",
                    name,
                    MAX_HTTP_TIMEOUT_SECS,
                    timeout
                );
            }
        }

        if weather.default_city.trim().is_empty() {
            anyhow::bail!("integrations.weather.default_city cannot be empty");
        }

        if weather.api_key_env.is_empty() {
            anyhow::bail!("integrations.weather.api_key_env cannot be empty");
        }

        let valid_units = ["metric", "imperial", "standard"];
        if !valid_units.contains(&weather.units.as_str()) {
            anyhow::bail!(
                "integrations.weather.units must be one of {}, got '{}'",
                valid_units.join(", "),
                weather.units
            );
        }

        let theme = &self.integrations.theme;
        if theme.light_start_hour > 23 || theme.dark_start_hour > 23 {
            anyhow::bail!("theme hours must be between 0 and 23");
        }
        if theme.light_start_hour == theme.dark_start_hour {
            anyhow::bail!("theme light_start_hour and dark_start_hour cannot be equal");
        }

        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.server.host, self.server.port))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Dashboard Configuration File\n# Generated on {}\n\n",
            datetime::format_today()
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("dashboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
