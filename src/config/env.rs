//! Environment Variable Configuration Provider
//!
//! Provides read-only access to configuration via environment variables.
//! Environment variables are immutable at runtime for thread-safety.

use super::provider::ConfigProvider;
use super::{ConfigError, ConfigResult};

/// Read-only environment variable configuration provider.
///
/// Keys are mapped to variable names by upper-casing them and replacing
/// `-` and `.` with `_`, so `basic-username` is read from `BASIC_USERNAME`
/// (or `<PREFIX>BASIC_USERNAME` when a prefix is set).
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    prefix: Option<String>,
}

impl EnvConfigProvider {
    /// Create a new environment provider with no prefix
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create an environment provider with a prefix
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Get the full environment variable name
    fn env_key(&self, key: &str) -> String {
        let name = key.to_uppercase().replace(['-', '.'], "_");
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name,
        }
    }
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        let env_key = self.env_key(key);
        match std::env::var(&env_key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env(e)),
        }
    }
}
