use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structured error returned by the remote collection store
    #[error("Remote store error (status {status}): {message}")]
    Remote {
        /// HTTP status code reported by the remote store
        status: u16,
        /// Response body, as returned by the remote store
        message: String,
    },

    /// Transport-level failure before a structured response arrived
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
