//! Credential types.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Username and password presented in response to a challenge.
///
/// Both fields are always populated together.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            username: username.into(),
            password: SecretString::from(password),
        }
    }

    pub fn from_secret(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Exposes the password for the caller performing the exchange.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for Credentials {}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accessors() {
        let creds = Credentials::new("svc", "secret");
        assert_eq!(creds.username(), "svc");
        assert_eq!(creds.expose_password(), "secret");
        assert_eq!(creds.password().expose_secret(), "secret");
    }

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("svc", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("svc"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_equality() {
        assert_eq!(Credentials::new("a", "b"), Credentials::new("a", "b"));
        assert_ne!(Credentials::new("a", "b"), Credentials::new("a", "c"));
        assert_eq!(
            Credentials::from_secret("a", SecretString::from("b".to_string())),
            Credentials::new("a", "b")
        );
    }
}
