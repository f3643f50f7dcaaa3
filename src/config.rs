use crate::types::ThemeMode;
use std::time::Duration;

pub const DEFAULT_CATALOG_LATENCY: Duration = Duration::from_millis(500);
pub const DEFAULT_REPLY_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got '{value}'")]
    InvalidLatency { key: &'static str, value: String },

    #[error("{key} must be 'light' or 'dark', got '{value}'")]
    InvalidTheme { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL serving `/api/models` and `/api/templates`. `None` uses the
    /// built-in catalogs.
    pub catalog_url: Option<String>,
    pub catalog_latency: Duration,
    pub reply_latency: Duration,
    pub theme: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: None,
            catalog_latency: DEFAULT_CATALOG_LATENCY,
            reply_latency: DEFAULT_REPLY_LATENCY,
            theme: ThemeMode::Light,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PROMPT_STUDIO_CATALOG_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.catalog_url = Some(url.to_string());
            }
        }
        if let Some(value) = lookup("PROMPT_STUDIO_CATALOG_LATENCY_MS") {
            config.catalog_latency = parse_latency("PROMPT_STUDIO_CATALOG_LATENCY_MS", &value)?;
        }
        if let Some(value) = lookup("PROMPT_STUDIO_REPLY_LATENCY_MS") {
            config.reply_latency = parse_latency("PROMPT_STUDIO_REPLY_LATENCY_MS", &value)?;
        }
        if let Some(value) = lookup("PROMPT_STUDIO_THEME") {
            config.theme = match value.trim().to_ascii_lowercase().as_str() {
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => {
                    return Err(ConfigError::InvalidTheme {
                        key: "PROMPT_STUDIO_THEME",
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn parse_latency(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidLatency {
            key,
            value: value.to_string(),
        })
}
