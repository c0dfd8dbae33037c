//! Credential resolution and authentication-scheme selection.

mod credential;
pub mod keys;
mod provider;
mod resolver;
mod scheme;
mod service;

pub use credential::Credentials;
pub use provider::ProviderAuthConfig;
pub use resolver::AuthConfigResolver;
pub use scheme::AuthScheme;
pub use service::{AuthServiceConfig, AuthServiceConfigBuilder};
