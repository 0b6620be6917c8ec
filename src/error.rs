//! Error types for the VoiceFlow console.

use reqwest::StatusCode;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failures talking to the backend REST API.
///
/// Every variant is recoverable: callers display it and let the user retry.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401. Stored credentials have already been cleared.
    #[error("Not signed in (credentials rejected)")]
    Unauthorized,

    #[error("Request to {path} failed with status {status}: {message}")]
    Status {
        path: String,
        status: StatusCode,
        message: String,
    },

    #[error("Transport error on {path}: {reason}")]
    Transport { path: String, reason: String },

    #[error("Invalid response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("Invalid URL for {path}: {reason}")]
    InvalidUrl { path: String, reason: String },
}

impl ApiError {
    /// Whether this failure came from a rejected credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Why a wizard submission did not go through.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission already in progress")]
    InFlight,

    #[error("Already submitted")]
    AlreadySubmitted,

    #[error("Submission is only available from the final step")]
    NotAtFinalStep,

    #[error("Step '{step}' is incomplete")]
    Incomplete { step: String },

    #[error("No submission in progress")]
    NotInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Session persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Interactive input errors.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Input ended or the terminal was closed.
    #[error("Input closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
