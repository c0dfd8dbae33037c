//! Immutable snapshot of the REST auth service configuration.

use secrecy::SecretString;
use url::Url;

use super::keys;
use super::provider::validate_service_url;
use super::{AuthConfigResolver, AuthScheme, Credentials};
use crate::config::{ConfigError, ConfigResult};

/// Configuration of one REST auth service endpoint, read once.
///
/// Building one guarantees a non-empty absolute service URL, a non-empty
/// authorization URI, and complete credentials for every configured scheme.
/// The snapshot also implements [`AuthConfigResolver`], which makes it a
/// fixed-value resolver for clients under test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthServiceConfig {
    service_url: String,
    authorization_uri: String,
    basic: Option<Credentials>,
    digest: Option<Credentials>,
}

impl AuthServiceConfig {
    /// Start a snapshot from the two required values.
    pub fn builder(
        service_url: impl Into<String>,
        authorization_uri: impl Into<String>,
    ) -> AuthServiceConfigBuilder {
        AuthServiceConfigBuilder {
            service_url: service_url.into(),
            authorization_uri: authorization_uri.into(),
            basic: None,
            digest: None,
        }
    }

    /// Reads every value from `resolver` once.
    pub fn resolve<R: AuthConfigResolver + ?Sized>(resolver: &R) -> ConfigResult<Self> {
        let service_url = resolver.service_url()?;
        let authorization_uri = resolver.authorization_uri()?;
        let basic = resolver.credentials(AuthScheme::Basic)?;
        let digest = resolver.credentials(AuthScheme::Digest)?;

        let config = Self {
            service_url,
            authorization_uri,
            basic,
            digest,
        }
        .validated()?;

        tracing::debug!(
            service_url = %config.service_url,
            schemes = ?config.schemes(),
            "Resolved REST auth service configuration"
        );
        Ok(config)
    }

    fn validated(self) -> ConfigResult<Self> {
        validate_service_url(keys::SERVICE_URL, &self.service_url)?;
        if self.authorization_uri.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: keys::AUTHORIZATION_URI.to_string(),
                message: "authorization URI is empty".to_string(),
            });
        }
        Ok(self)
    }

    /// Base URL of the REST auth service, as configured.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Authorization path, as configured.
    pub fn authorization_uri(&self) -> &str {
        &self.authorization_uri
    }

    /// Basic credentials, if Basic is configured.
    pub fn basic(&self) -> Option<&Credentials> {
        self.basic.as_ref()
    }

    /// Digest credentials, if Digest is configured.
    pub fn digest(&self) -> Option<&Credentials> {
        self.digest.as_ref()
    }

    /// Credentials to present for `scheme`, if it is configured.
    pub fn credentials_for(&self, scheme: AuthScheme) -> Option<&Credentials> {
        match scheme {
            AuthScheme::Basic => self.basic(),
            AuthScheme::Digest => self.digest(),
        }
    }

    /// Configured schemes, in [`AuthScheme::ALL`] order.
    pub fn schemes(&self) -> Vec<AuthScheme> {
        AuthScheme::ALL
            .into_iter()
            .filter(|scheme| self.credentials_for(*scheme).is_some())
            .collect()
    }

    /// The authorization endpoint: the segments of the authorization URI
    /// appended to the service URL's path. Query and fragment of the service
    /// URL are kept.
    pub fn authorization_url(&self) -> ConfigResult<Url> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: keys::SERVICE_URL.to_string(),
            message,
        };
        let mut url = Url::parse(&self.service_url)
            .map_err(|e| invalid(format!("not an absolute URL: {}", e)))?;

        let path = self.authorization_uri.trim_start_matches('/');
        if !path.is_empty() {
            url.path_segments_mut()
                .map_err(|()| invalid("service URL cannot carry a path".to_string()))?
                .pop_if_empty()
                .extend(path.split('/'));
        }
        Ok(url)
    }
}

fn not_found(key: &str) -> ConfigError {
    ConfigError::NotFound {
        key: key.to_string(),
    }
}

impl AuthConfigResolver for AuthServiceConfig {
    fn service_url(&self) -> ConfigResult<String> {
        Ok(self.service_url.clone())
    }

    fn authorization_uri(&self) -> ConfigResult<String> {
        Ok(self.authorization_uri.clone())
    }

    fn is_basic_configured(&self) -> ConfigResult<bool> {
        Ok(self.basic.is_some())
    }

    fn basic_username(&self) -> ConfigResult<String> {
        self.basic
            .as_ref()
            .map(|c| c.username().to_string())
            .ok_or_else(|| not_found(keys::BASIC_USERNAME))
    }

    fn basic_password(&self) -> ConfigResult<SecretString> {
        self.basic
            .as_ref()
            .map(|c| c.password().clone())
            .ok_or_else(|| not_found(keys::BASIC_PASSWORD))
    }

    fn is_digest_configured(&self) -> ConfigResult<bool> {
        Ok(self.digest.is_some())
    }

    fn digest_username(&self) -> ConfigResult<String> {
        self.digest
            .as_ref()
            .map(|c| c.username().to_string())
            .ok_or_else(|| not_found(keys::DIGEST_USERNAME))
    }

    fn digest_password(&self) -> ConfigResult<SecretString> {
        self.digest
            .as_ref()
            .map(|c| c.password().clone())
            .ok_or_else(|| not_found(keys::DIGEST_PASSWORD))
    }
}

/// Builder for [`AuthServiceConfig`].
#[derive(Debug)]
pub struct AuthServiceConfigBuilder {
    service_url: String,
    authorization_uri: String,
    basic: Option<Credentials>,
    digest: Option<Credentials>,
}

impl AuthServiceConfigBuilder {
    /// Configure Basic with these credentials.
    pub fn basic(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic = Some(Credentials::new(username, password));
        self
    }

    /// Configure Digest with these credentials.
    pub fn digest(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.digest = Some(Credentials::new(username, password));
        self
    }

    /// Configure `scheme` with prepared credentials.
    pub fn credentials(mut self, scheme: AuthScheme, credentials: Credentials) -> Self {
        match scheme {
            AuthScheme::Basic => self.basic = Some(credentials),
            AuthScheme::Digest => self.digest = Some(credentials),
        }
        self
    }

    /// Validate and build the snapshot.
    pub fn build(self) -> ConfigResult<AuthServiceConfig> {
        AuthServiceConfig {
            service_url: self.service_url,
            authorization_uri: self.authorization_uri,
            basic: self.basic,
            digest: self.digest,
        }
        .validated()
    }
}
