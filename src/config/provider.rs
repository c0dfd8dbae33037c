//! Configuration Provider Trait

use std::sync::Arc;

use super::{ConfigError, ConfigResult};

/// Read-only source of raw configuration values.
///
/// `Ok(None)` means the key is absent. `Err` is reserved for genuine
/// retrieval failures of the backing store.
pub trait ConfigProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Get a raw configuration value
    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get_raw(key)
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get_raw(key)
    }
}

/// Extension methods for typed configuration access
pub trait ConfigProviderExt: ConfigProvider {
    /// Get a string value exactly as stored
    fn get_string(&self, key: &str) -> ConfigResult<Option<String>> {
        let value = self.get_raw(key)?;
        tracing::debug!(
            provider = self.name(),
            key,
            present = value.is_some(),
            "Configuration value looked up"
        );
        Ok(value)
    }

    /// Get a boolean flag (`true`/`false`, case-insensitive)
    fn get_bool(&self, key: &str) -> ConfigResult<Option<bool>> {
        match self.get_string(key)? {
            Some(raw) => parse_bool(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Check whether a key is present without interpreting its value
    fn contains(&self, key: &str) -> ConfigResult<bool> {
        Ok(self.get_raw(key)?.is_some())
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProviderExt for P {}

fn parse_bool(key: &str, raw: &str) -> ConfigResult<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true or false, got '{}'", raw),
        })
    }
}
