//! Resolver contract consumed by the REST auth client.

use secrecy::SecretString;

use super::{AuthScheme, Credentials};
use crate::config::{ConfigError, ConfigResult};

/// Typed, independently failable view of the REST auth service configuration.
///
/// Callers are expected to check `is_<scheme>_configured()` before asking
/// for that scheme's credentials. The order is not enforced: each getter
/// reports a missing value as an error regardless of the flag.
pub trait AuthConfigResolver: Send + Sync {
    /// Base URL of the REST auth service.
    fn service_url(&self) -> ConfigResult<String>;

    /// Authorization path appended to the service URL. May be empty.
    fn authorization_uri(&self) -> ConfigResult<String>;

    /// Whether Basic is in use. Absence is `Ok(false)`, never an error.
    fn is_basic_configured(&self) -> ConfigResult<bool>;

    /// Username presented to a Basic challenge.
    fn basic_username(&self) -> ConfigResult<String>;

    /// Password presented to a Basic challenge.
    fn basic_password(&self) -> ConfigResult<SecretString>;

    /// Whether Digest is in use. Absence is `Ok(false)`, never an error.
    fn is_digest_configured(&self) -> ConfigResult<bool>;

    /// Username presented to a Digest challenge.
    fn digest_username(&self) -> ConfigResult<String>;

    /// Password presented to a Digest challenge.
    fn digest_password(&self) -> ConfigResult<SecretString>;

    /// Whether `scheme` is in use.
    fn is_configured(&self, scheme: AuthScheme) -> ConfigResult<bool> {
        match scheme {
            AuthScheme::Basic => self.is_basic_configured(),
            AuthScheme::Digest => self.is_digest_configured(),
        }
    }

    /// Username for `scheme`.
    fn username(&self, scheme: AuthScheme) -> ConfigResult<String> {
        match scheme {
            AuthScheme::Basic => self.basic_username(),
            AuthScheme::Digest => self.digest_username(),
        }
    }

    /// Password for `scheme`.
    fn password(&self, scheme: AuthScheme) -> ConfigResult<SecretString> {
        match scheme {
            AuthScheme::Basic => self.basic_password(),
            AuthScheme::Digest => self.digest_password(),
        }
    }

    /// Credentials for `scheme`, or `None` when the scheme is not in use.
    ///
    /// A configured scheme with a missing username or password fails with
    /// [`ConfigError::Incomplete`]; other errors propagate unchanged.
    fn credentials(&self, scheme: AuthScheme) -> ConfigResult<Option<Credentials>> {
        if !self.is_configured(scheme)? {
            return Ok(None);
        }
        let incomplete = move |err: ConfigError| match err {
            ConfigError::NotFound { key } => {
                tracing::warn!(%scheme, %key, "Scheme enabled with incomplete credentials");
                ConfigError::Incomplete { scheme, key }
            }
            other => other,
        };
        let username = self.username(scheme).map_err(incomplete)?;
        let password = self.password(scheme).map_err(incomplete)?;
        Ok(Some(Credentials::from_secret(username, password)))
    }

    /// Schemes currently configured, in [`AuthScheme::ALL`] order.
    fn configured_schemes(&self) -> ConfigResult<Vec<AuthScheme>> {
        let mut schemes = Vec::new();
        for scheme in AuthScheme::ALL {
            if self.is_configured(scheme)? {
                schemes.push(scheme);
            }
        }
        Ok(schemes)
    }
}
