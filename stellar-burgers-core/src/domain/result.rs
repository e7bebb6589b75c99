//! Result and error types for the core library
//!
//! HTTP outcomes (4xx, 5xx) are not errors here: they come back as
//! ordinary response handles. These variants cover what fails locally.

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Map a reqwest send failure to a readable transport error
    pub fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::transport(format!("Request timed out: {}", error))
        } else if error.is_connect() {
            Self::transport(format!("Unable to connect to API server: {}", error))
        } else {
            Self::transport(format!("Request failed: {}", error))
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_kind() {
        assert_eq!(
            Error::config("bad url").to_string(),
            "Configuration error: bad url"
        );
        assert!(Error::decode("not json")
            .to_string()
            .starts_with("Decode error"));
    }

    #[test]
    fn test_json_error_converts() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Json(_)));
    }
}
