//! # rest-auth-config
//!
//! Configuration contract for clients of a REST authentication service that
//! answer HTTP Basic or Digest challenges.
//!
//! The crate decides which scheme is in use and which credentials to present.
//! It does not issue requests, parse `WWW-Authenticate` headers or compute
//! Digest responses; those belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use rest_auth_config::{
//!     AuthConfigResolver, AuthScheme, AuthServiceConfig, MemoryConfigProvider,
//!     ProviderAuthConfig,
//! };
//!
//! # fn main() -> Result<(), rest_auth_config::ConfigError> {
//! let source = MemoryConfigProvider::new()
//!     .value("service-url", "https://auth.example.com")
//!     .value("authorization-uri", "/authorize")
//!     .value("basic-enabled", "true")
//!     .value("basic-username", "svc")
//!     .value("basic-password", "secret");
//!
//! let resolver = ProviderAuthConfig::new(source);
//! assert!(resolver.is_basic_configured()?);
//! assert!(!resolver.is_digest_configured()?);
//!
//! let config = AuthServiceConfig::resolve(&resolver)?;
//! let basic = config.credentials_for(AuthScheme::Basic).unwrap();
//! assert_eq!(basic.username(), "svc");
//! assert_eq!(
//!     config.authorization_url()?.as_str(),
//!     "https://auth.example.com/authorize"
//! );
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;

pub use auth::{
    AuthConfigResolver, AuthScheme, AuthServiceConfig, AuthServiceConfigBuilder, Credentials,
    ProviderAuthConfig,
};
pub use config::{
    CompositeConfigProvider, ConfigBuilder, ConfigError, ConfigProvider, ConfigProviderExt,
    ConfigResult, EnvConfigProvider, MemoryConfigProvider,
};
