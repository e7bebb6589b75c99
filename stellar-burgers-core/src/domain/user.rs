//! User fixture and the payloads derived from it

use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "***";

/// Registration payload and the source of login credentials
///
/// Fields are public so a scenario can corrupt an otherwise valid fixture
/// (blank the email, drop the password) before submitting it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Email as the server stores and echoes it
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Login payload
///
/// Never edited after construction.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl From<&User> for Credentials {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Profile update touching only the email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailUpdate {
    pub email: String,
}

impl EmailUpdate {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Profile update touching only the name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameUpdate {
    pub name: String,
}

impl NameUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
