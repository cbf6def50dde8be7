//! Error types for the quake announcer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while announcing the latest quake.
///
/// Every variant is terminal for the invocation and is handed back to the
/// Lambda runtime as-is.
#[derive(Error, Debug)]
pub enum Error {
    /// The feed could not be reached
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The feed answered with a non-success status
    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    /// The response body could not be read
    #[error("Read error: {0}")]
    Read(#[source] reqwest::Error),

    /// The body was not a quake feed
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The quake time was not RFC 3339
    #[error("Time parse error: {0}")]
    TimeParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
