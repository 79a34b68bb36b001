//! Client Errors
//!
//! One taxonomy for everything the board client can fail with.
//! Validation and not-found errors are raised locally before any network
//! call; the rest come back from the API boundary.

use thiserror::Error;

use crate::domain::TaskId;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Coarse classification used by the UI and by tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    TaskNotFound,
    Auth,
    Network,
    Server,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected before reaching the network (empty title, bad form input)
    #[error("validation failed: {0}")]
    Validation(String),
    /// Local board does not hold the referenced task
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Credential missing, expired or refused (HTTP 401/403).
    ///
    /// `message` is what the server (or identity provider) said, without the status.
    #[error("not authorized: {}", with_status(.status, .message))]
    Auth { status: Option<u16>, message: String },
    /// Transport failure, no HTTP response
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response or a malformed body
    #[error("server error: {0}")]
    Server(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::TaskNotFound(_) => ErrorKind::TaskNotFound,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Network(_) => ErrorKind::Network,
            Self::Server(_) => ErrorKind::Server,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// The session must be dropped and the user sent back to login
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Text fit to show a user as-is, when the error carries one
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Validation(message) | Self::Auth { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Auth failure raised locally, with no HTTP status
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            status: None,
            message: message.into(),
        }
    }

    /// Map an HTTP status that is not a success to the taxonomy
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Auth {
                status: Some(status),
                message,
            },
            _ => Self::Server(format!("HTTP {}: {}", status, message)),
        }
    }
}

fn with_status(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("HTTP {}: {}", status, message),
        None => message.to_string(),
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Server(format!("malformed response: {}", err))
        } else if let Some(status) = err.status() {
            ClientError::from_status(status.as_u16(), err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Server(format!("malformed response: {}", err))
    }
}
