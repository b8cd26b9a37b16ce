use std::io;
use thiserror::Error;

/// Custom result type alias for the application
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while querying and reporting npm statistics
#[derive(Debug, Error)]
pub enum StatsError {
    /// I/O errors
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// HTTP transport errors (DNS, TLS, socket)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing/serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The stored query could not be read or parsed
    #[error("Config load error: {0}")]
    ConfigLoad(String),

    /// The stored query could not be written
    #[error("Config write error: {0}")]
    ConfigWrite(io::Error),

    /// Neither users nor packages were given
    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),
}

impl StatsError {
    /// Checks if this error sends the user to the manual instead of failing
    pub fn shows_manual(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::InvalidInvocation(_))
    }
}
