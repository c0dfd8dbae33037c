//! HTTP authentication schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keys::SchemeKeys;
use crate::config::ConfigError;

/// Challenge-response scheme used against the REST auth service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    Basic,
    Digest,
}

impl AuthScheme {
    /// All schemes, in the order they are reported.
    pub const ALL: [AuthScheme; 2] = [AuthScheme::Basic, AuthScheme::Digest];

    /// Canonical scheme token as used in `WWW-Authenticate`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::Digest => "Digest",
        }
    }

    /// Configuration keys for this scheme.
    pub fn keys(&self) -> SchemeKeys {
        SchemeKeys::of(*self)
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScheme {
    type Err = ConfigError;

    /// Scheme tokens are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        AuthScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "scheme".to_string(),
                message: format!("unsupported authentication scheme '{}'", s),
            })
    }
}
