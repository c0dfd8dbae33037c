//! Resolver backed by a [`ConfigProvider`].

use secrecy::SecretString;
use url::Url;

use super::keys::{self, SchemeKeys};
use super::{AuthConfigResolver, AuthScheme};
use crate::config::{ConfigError, ConfigProvider, ConfigProviderExt, ConfigResult};

/// Reads the REST auth service configuration from a configuration source.
///
/// Nothing is cached: every call goes back to the provider. Keys may be
/// namespaced with a prefix so several services can share one source
/// (`rest-auth-` turns `service-url` into `rest-auth-service-url`).
///
/// A scheme counts as configured when its `<scheme>-enabled` flag says so.
/// Without a flag, it is configured when a username or password is present.
#[derive(Debug)]
pub struct ProviderAuthConfig<P> {
    provider: P,
    key_prefix: String,
}

impl<P: ConfigProvider> ProviderAuthConfig<P> {
    /// Resolve from `provider` using the bare key names.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            key_prefix: String::new(),
        }
    }

    /// Namespace every key with `prefix`.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// The underlying configuration source.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Prefix applied to every key; empty by default.
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.key_prefix, name)
    }

    fn required(&self, name: &str) -> ConfigResult<String> {
        let key = self.key(name);
        self.provider
            .get_string(&key)?
            .ok_or(ConfigError::NotFound { key })
    }

    fn scheme_configured(&self, scheme: AuthScheme) -> ConfigResult<bool> {
        let SchemeKeys {
            enabled,
            username,
            password,
        } = scheme.keys();

        if let Some(flag) = self.provider.get_bool(&self.key(enabled))? {
            tracing::debug!(%scheme, flag, "Scheme configured by flag");
            return Ok(flag);
        }
        let present = self.provider.contains(&self.key(username))?
            || self.provider.contains(&self.key(password))?;
        tracing::debug!(%scheme, present, "Scheme configured by credential presence");
        Ok(present)
    }
}

impl<P: ConfigProvider> AuthConfigResolver for ProviderAuthConfig<P> {
    fn service_url(&self) -> ConfigResult<String> {
        let url = self.required(keys::SERVICE_URL)?;
        validate_service_url(&self.key(keys::SERVICE_URL), &url)?;
        Ok(url)
    }

    fn authorization_uri(&self) -> ConfigResult<String> {
        self.required(keys::AUTHORIZATION_URI)
    }

    fn is_basic_configured(&self) -> ConfigResult<bool> {
        self.scheme_configured(AuthScheme::Basic)
    }

    fn basic_username(&self) -> ConfigResult<String> {
        self.required(keys::BASIC_USERNAME)
    }

    fn basic_password(&self) -> ConfigResult<SecretString> {
        self.required(keys::BASIC_PASSWORD).map(SecretString::from)
    }

    fn is_digest_configured(&self) -> ConfigResult<bool> {
        self.scheme_configured(AuthScheme::Digest)
    }

    fn digest_username(&self) -> ConfigResult<String> {
        self.required(keys::DIGEST_USERNAME)
    }

    fn digest_password(&self) -> ConfigResult<SecretString> {
        self.required(keys::DIGEST_PASSWORD).map(SecretString::from)
    }
}

/// A service URL must be a non-empty absolute URL.
pub(crate) fn validate_service_url(key: &str, url: &str) -> ConfigResult<()> {
    if url.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "service URL is empty".to_string(),
        });
    }
    Url::parse(url).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("not an absolute URL: {}", e),
    })?;
    Ok(())
}
