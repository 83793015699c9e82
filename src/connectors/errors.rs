use thiserror::Error;

/// Kinds of failure a connector can surface to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCredentials,
    NotConnected,
    Unauthorized,
    NoSuchObject,
    InvalidInput,
    RateLimitExceeded,
    Unexpected,
}

/// Errors that can occur during vendor communication
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Missing, empty or rejected auth material (401)
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    /// Operation attempted before connect
    #[error("Not connected: {0}")]
    NotConnected(String),
    /// Authenticated but forbidden (403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Resource or id not found (404)
    #[error("No such object{}: {message}", .id.as_deref().map(|id| format!(" '{id}'")).unwrap_or_default())]
    NoSuchObject { message: String, id: Option<String> },
    /// Request rejected by the vendor as malformed (400/422)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Vendor throttling (429, or 403 with a rate limit message on some vendors)
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
    /// Anything else, including network failures
    #[error("Unexpected error{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Unexpected { status: Option<u16>, message: String },
}

impl ConnectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials(_) => ErrorKind::InvalidCredentials,
            Self::NotConnected(_) => ErrorKind::NotConnected,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::NoSuchObject { .. } => ErrorKind::NoSuchObject,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::RateLimitExceeded(_) => ErrorKind::RateLimitExceeded,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            status: None,
            message: message.into(),
        }
    }

    pub fn no_such_object(message: impl Into<String>, id: Option<&str>) -> Self {
        Self::NoSuchObject {
            message: message.into(),
            id: id.map(str::to_string),
        }
    }

    /// Build the error for a given kind, used by the status normalizer
    pub fn from_kind(
        kind: ErrorKind,
        status: Option<u16>,
        message: String,
        id: Option<&str>,
    ) -> Self {
        match kind {
            ErrorKind::InvalidCredentials => Self::InvalidCredentials(message),
            ErrorKind::NotConnected => Self::NotConnected(message),
            ErrorKind::Unauthorized => Self::Unauthorized(message),
            ErrorKind::NoSuchObject => Self::no_such_object(message, id),
            ErrorKind::InvalidInput => Self::InvalidInput(message),
            ErrorKind::RateLimitExceeded => Self::RateLimitExceeded(message),
            ErrorKind::Unexpected => Self::Unexpected { status, message },
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timeout: {}", err)
        } else if err.is_connect() {
            format!("Connection failed: {}", err)
        } else {
            err.to_string()
        };
        Self::Unexpected {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}
