//! Configuration types.

use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;
use crate::session::Theme;

/// Backend base URL used when `VOICEFLOW_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Where the session (token + theme) is persisted by default.
pub const DEFAULT_SESSION_PATH: &str = "./data/session.json";

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL every API path is appended to.
    pub api_base_url: Url,
    /// Session file location.
    pub session_path: PathBuf,
    /// Theme used when no preference has been persisted yet.
    pub default_theme: Theme,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid URL"),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            default_theme: Theme::Light,
        }
    }
}

impl ConsoleConfig {
    /// Build configuration from `VOICEFLOW_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("VOICEFLOW_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = parse_base_url(raw.trim())?;
        }

        if let Some(path) = lookup("VOICEFLOW_SESSION_PATH").filter(|v| !v.trim().is_empty()) {
            config.session_path = PathBuf::from(path);
        }

        if let Some(theme) = lookup("VOICEFLOW_THEME").filter(|v| !v.trim().is_empty()) {
            config.default_theme =
                theme
                    .trim()
                    .parse()
                    .map_err(|message: String| ConfigError::InvalidValue {
                        key: "VOICEFLOW_THEME".to_string(),
                        message,
                    })?;
        }

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: "VOICEFLOW_API_URL".to_string(),
        message: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key: "VOICEFLOW_API_URL".to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}
