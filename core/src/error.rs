//! Error types for the Satchel wallet core.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Satchel wallet core.
#[derive(Error, Debug)]
pub enum Error {
    /// The secrets file is missing or malformed.
    #[error("Secrets error: {0}")]
    Secrets(String),

    /// Invalid mnemonic phrase.
    #[error("Invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    /// A string did not parse as a Bitcoin address for the configured network.
    #[error("Invalid Bitcoin address: {0}")]
    InvalidAddress(String),

    /// A payment or invoice amount is out of range.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Key derivation error.
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// The gateway rejected the request; the message is passed through as-is.
    #[error("Gateway error: {0}")]
    Api(String),

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(format!("{:#}", err))
    }
}
