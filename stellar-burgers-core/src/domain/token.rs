//! Access token returned by register and login

use std::fmt;

use serde::{Deserialize, Serialize};

const DEBUG_TAIL_LEN: usize = 6;

/// Opaque bearer credential
///
/// Sent verbatim as the `Authorization` header value; the server issues
/// it already prefixed with `Bearer `.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Issued tokens share their scheme and JWT header; only the tail differs
        let chars: Vec<char> = self.0.chars().collect();
        let start = chars.len().saturating_sub(DEBUG_TAIL_LEN);
        let tail: String = chars[start..].iter().collect();
        write!(f, "AccessToken(…{})", tail)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
