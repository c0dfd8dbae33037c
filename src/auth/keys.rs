//! Configuration key names.

use super::AuthScheme;

pub const SERVICE_URL: &str = "service-url";
pub const AUTHORIZATION_URI: &str = "authorization-uri";

pub const BASIC_ENABLED: &str = "basic-enabled";
pub const BASIC_USERNAME: &str = "basic-username";
pub const BASIC_PASSWORD: &str = "basic-password";

pub const DIGEST_ENABLED: &str = "digest-enabled";
pub const DIGEST_USERNAME: &str = "digest-username";
pub const DIGEST_PASSWORD: &str = "digest-password";

/// Keys describing one authentication scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeKeys {
    pub enabled: &'static str,
    pub username: &'static str,
    pub password: &'static str,
}

impl SchemeKeys {
    pub const fn of(scheme: AuthScheme) -> Self {
        match scheme {
            AuthScheme::Basic => Self {
                enabled: BASIC_ENABLED,
                username: BASIC_USERNAME,
                password: BASIC_PASSWORD,
            },
            AuthScheme::Digest => Self {
                enabled: DIGEST_ENABLED,
                username: DIGEST_USERNAME,
                password: DIGEST_PASSWORD,
            },
        }
    }
}
