//! Session context: bearer token and theme preference.
//!
//! One `SessionContext` is created at startup with [`SessionContext::load`]
//! and shared (`Arc`) with the API gateway and the console. It replaces
//! ambient storage lookups: the gateway asks it for the bearer token, clears
//! it on a 401, and the console tears it down on sign-out.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::SessionError;

/// Console colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// On-disk shape of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signed_in_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<SecretString>,
    signed_in_at: Option<DateTime<Utc>>,
    theme: Theme,
}

/// Process-wide session state, passed explicitly.
#[derive(Debug)]
pub struct SessionContext {
    path: Option<PathBuf>,
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// A session that lives only in memory.
    pub fn in_memory(theme: Theme) -> Self {
        Self {
            path: None,
            state: RwLock::new(SessionState {
                theme,
                ..Default::default()
            }),
        }
    }

    /// Load the persisted session at `path`.
    ///
    /// A missing or corrupt file yields a signed-out session using
    /// `default_theme`; the next persist overwrites a corrupt file. A
    /// persisted theme always wins over `default_theme`.
    pub async fn load(path: impl Into<PathBuf>, default_theme: Theme) -> Result<Self, SessionError> {
        let path = path.into();
        let persisted = match fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(persisted) => persisted,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Session file is corrupt, starting signed out");
                    PersistedSession::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No session file, starting signed out");
                PersistedSession::default()
            }
            Err(e) => return Err(e.into()),
        };

        let state = SessionState {
            token: persisted
                .token
                .filter(|t| !t.is_empty())
                .map(SecretString::from),
            signed_in_at: persisted.signed_in_at,
            theme: persisted.theme.unwrap_or(default_theme),
        };

        Ok(Self {
            path: Some(path),
            state: RwLock::new(state),
        })
    }

    /// Where this session is persisted, if anywhere.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.state.read().await.token.is_some()
    }

    pub async fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.signed_in_at
    }

    /// `Authorization` header value, when signed in.
    pub async fn bearer(&self) -> Option<String> {
        self.state
            .read()
            .await
            .token
            .as_ref()
            .map(|t| format!("Bearer {}", t.expose_secret()))
    }

    /// Store a freshly issued token and persist it.
    pub async fn sign_in(&self, token: impl Into<String>) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            state.token = Some(SecretString::from(token.into()));
            state.signed_in_at = Some(Utc::now());
        }
        info!("Signed in");
        self.persist().await
    }

    /// Tear the session down: forget the token, keep the theme.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.clear_token().await;
        info!("Signed out");
        self.persist().await
    }

    /// Drop credentials after the backend rejected them.
    ///
    /// Persistence failures are logged rather than returned: the caller is
    /// already handling an authorization error.
    pub async fn clear_credentials(&self) {
        self.clear_token().await;
        warn!("Credentials rejected by backend, session cleared");
        if let Err(e) = self.persist().await {
            warn!("Failed to persist cleared session: {}", e);
        }
    }

    pub async fn theme(&self) -> Theme {
        self.state.read().await.theme
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), SessionError> {
        self.state.write().await.theme = theme;
        debug!(%theme, "Theme updated");
        self.persist().await
    }

    /// Flip between light and dark, returning the new theme.
    pub async fn toggle_theme(&self) -> Result<Theme, SessionError> {
        let theme = {
            let mut state = self.state.write().await;
            state.theme = state.theme.toggled();
            state.theme
        };
        self.persist().await?;
        Ok(theme)
    }

    async fn clear_token(&self) {
        let mut state = self.state.write().await;
        state.token = None;
        state.signed_in_at = None;
    }

    async fn persist(&self) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let persisted = {
            let state = self.state.read().await;
            PersistedSession {
                token: state.token.as_ref().map(|t| t.expose_secret().to_string()),
                signed_in_at: state.signed_in_at,
                theme: Some(state.theme),
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, serde_json::to_string_pretty(&persisted)?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_starts_signed_out_with_default_theme() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionContext::load(dir.path().join("session.json"), Theme::Dark)
            .await
            .unwrap();
        assert!(!session.is_signed_in().await);
        assert!(session.bearer().await.is_none());
        assert_eq!(session.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn sign_in_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = SessionContext::load(&path, Theme::Light).await.unwrap();
        session.sign_in("tok-123").await.unwrap();
        session.set_theme(Theme::Dark).await.unwrap();
        assert_eq!(session.bearer().await.as_deref(), Some("Bearer tok-123"));

        let reloaded = SessionContext::load(&path, Theme::Light).await.unwrap();
        assert!(reloaded.is_signed_in().await);
        assert!(reloaded.signed_in_at().await.is_some());
        assert_eq!(reloaded.bearer().await.as_deref(), Some("Bearer tok-123"));
        // Persisted preference beats the configured default.
        assert_eq!(reloaded.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn sign_out_clears_token_but_keeps_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = SessionContext::load(&path, Theme::Light).await.unwrap();
        session.sign_in("tok").await.unwrap();
        assert_eq!(session.toggle_theme().await.unwrap(), Theme::Dark);
        session.sign_out().await.unwrap();
        assert!(!session.is_signed_in().await);

        let reloaded = SessionContext::load(&path, Theme::Light).await.unwrap();
        assert!(!reloaded.is_signed_in().await);
        assert_eq!(reloaded.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn clear_credentials_in_memory() {
        let session = SessionContext::in_memory(Theme::Light);
        session.sign_in("tok").await.unwrap();
        session.clear_credentials().await;
        assert!(!session.is_signed_in().await);
        assert!(session.path().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_starts_signed_out_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = SessionContext::load(&path, Theme::Dark).await.unwrap();
        assert!(!session.is_signed_in().await);
        assert_eq!(session.theme().await, Theme::Dark);

        // Sign-out and theme changes still work and repair the file.
        session.sign_out().await.unwrap();
        session.set_theme(Theme::Light).await.unwrap();
        let reloaded = SessionContext::load(&path, Theme::Dark).await.unwrap();
        assert_eq!(reloaded.theme().await, Theme::Light);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    }

    #[test]
    fn theme_parsing_and_display() {
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled().to_string(), "dark");
    }
}
