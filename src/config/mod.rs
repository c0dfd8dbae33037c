//! Pluggable configuration sources.
//!
//! The resolver only needs [`ConfigProvider`]. The environment and composite
//! providers are optional adapters for hosts that have no source of their own.
//!
//! ```rust
//! use rest_auth_config::config::{ConfigBuilder, ConfigProvider, MemoryConfigProvider};
//!
//! let defaults = MemoryConfigProvider::named("defaults")
//!     .value("authorization-uri", "/authorize");
//!
//! let source = ConfigBuilder::new()
//!     .env_with_prefix("REST_AUTH_")
//!     .memory(defaults)
//!     .build();
//!
//! assert_eq!(source.provider_names(), vec!["env", "defaults"]);
//! ```

pub mod composite;
pub mod env;
pub mod memory;
pub mod provider;

pub use composite::CompositeConfigProvider;
pub use env::EnvConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::{ConfigProvider, ConfigProviderExt};

use thiserror::Error;

use crate::auth::AuthScheme;

/// Errors raised while resolving configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Key not found
    #[error("Key not found: {key}")]
    NotFound {
        /// The key that was not found
        key: String,
    },

    /// Invalid configuration value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The key with invalid value
        key: String,
        /// Error message
        message: String,
    },

    /// A scheme is in use but one of its credentials is missing
    #[error("{scheme} authentication is configured but {key} is missing")]
    Incomplete {
        /// The scheme with partial credentials
        scheme: AuthScheme,
        /// The missing key
        key: String,
    },

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),

    /// Provider error
    #[error("Provider error: {message}")]
    Provider {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// The configuration key this error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { key }
            | ConfigError::InvalidValue { key, .. }
            | ConfigError::Incomplete { key, .. } => Some(key),
            ConfigError::Env(_) | ConfigError::Provider { .. } => None,
        }
    }

    /// Whether the error only reports an absent value
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration builder for fluent API
pub struct ConfigBuilder {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add environment variable provider
    pub fn env(mut self) -> Self {
        self.providers.push(Box::new(EnvConfigProvider::new()));
        self
    }

    /// Add environment variable provider with prefix
    pub fn env_with_prefix(mut self, prefix: &str) -> Self {
        self.providers
            .push(Box::new(EnvConfigProvider::prefixed(prefix)));
        self
    }

    /// Add memory provider
    pub fn memory(mut self, provider: MemoryConfigProvider) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a custom provider
    pub fn provider(mut self, provider: Box<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Build the composite configuration
    pub fn build(self) -> CompositeConfigProvider {
        let mut composite = CompositeConfigProvider::new();
        for provider in self.providers {
            composite.add_provider(provider);
        }
        composite
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
