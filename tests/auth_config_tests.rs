//! REST auth configuration tests
//!
//! End-to-end resolution against in-memory, environment and layered sources.
//!
//! Run: cargo nextest run --test auth_config_tests

use std::sync::Arc;

use rest_auth_config::auth::keys;
use rest_auth_config::{
    AuthConfigResolver, AuthScheme, AuthServiceConfig, ConfigBuilder, ConfigError, ConfigProvider,
    ConfigResult, Credentials, MemoryConfigProvider, ProviderAuthConfig,
};
use secrecy::ExposeSecret;

const SERVICE_URL: &str = "https://auth.example.com";
const AUTHORIZATION_URI: &str = "/authorize";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn base_source() -> MemoryConfigProvider {
    MemoryConfigProvider::named("test")
        .value(keys::SERVICE_URL, SERVICE_URL)
        .value(keys::AUTHORIZATION_URI, AUTHORIZATION_URI)
}

// =============================================================================
// Scenarios
// =============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_no_scheme_configured() {
        init_tracing();
        let config = ProviderAuthConfig::new(base_source());

        assert_eq!(config.service_url().unwrap(), SERVICE_URL);
        assert_eq!(config.authorization_uri().unwrap(), AUTHORIZATION_URI);
        assert!(!config.is_basic_configured().unwrap());
        assert!(!config.is_digest_configured().unwrap());

        for scheme in AuthScheme::ALL {
            assert!(config.username(scheme).unwrap_err().is_not_found());
            assert!(config.password(scheme).unwrap_err().is_not_found());
            assert!(config.credentials(scheme).unwrap().is_none());
        }
        assert!(config.configured_schemes().unwrap().is_empty());

        let snapshot = AuthServiceConfig::resolve(&config).unwrap();
        assert_eq!(snapshot.basic(), None);
        assert_eq!(snapshot.digest(), None);
    }

    #[test]
    fn test_basic_only() {
        init_tracing();
        let config = ProviderAuthConfig::new(
            base_source()
                .value(keys::BASIC_ENABLED, "true")
                .value(keys::BASIC_USERNAME, "svc")
                .value(keys::BASIC_PASSWORD, "secret"),
        );

        assert!(config.is_basic_configured().unwrap());
        assert_eq!(config.basic_username().unwrap(), "svc");
        assert_eq!(config.basic_password().unwrap().expose_secret(), "secret");
        assert!(!config.is_digest_configured().unwrap());

        let snapshot = AuthServiceConfig::resolve(&config).unwrap();
        assert_eq!(snapshot.schemes(), vec![AuthScheme::Basic]);
        assert_eq!(
            snapshot.credentials_for(AuthScheme::Basic),
            Some(&Credentials::new("svc", "secret"))
        );
    }

    #[test]
    fn test_basic_enabled_without_password() {
        init_tracing();
        let config = ProviderAuthConfig::new(
            base_source()
                .value(keys::BASIC_ENABLED, "true")
                .value(keys::BASIC_USERNAME, "svc"),
        );

        assert!(config.is_basic_configured().unwrap());
        assert_eq!(config.basic_username().unwrap(), "svc");
        assert!(matches!(
            config.basic_password(),
            Err(ConfigError::NotFound { key }) if key == keys::BASIC_PASSWORD
        ));

        assert!(matches!(
            AuthServiceConfig::resolve(&config),
            Err(ConfigError::Incomplete { scheme: AuthScheme::Basic, key }) if key == keys::BASIC_PASSWORD
        ));
    }

    #[test]
    fn test_missing_service_url_leaves_others_unaffected() {
        init_tracing();
        let source = base_source()
            .value(keys::DIGEST_USERNAME, "svc")
            .value(keys::DIGEST_PASSWORD, "pw");
        source.remove(keys::SERVICE_URL);
        let config = ProviderAuthConfig::new(source);

        assert!(matches!(
            config.service_url(),
            Err(ConfigError::NotFound { key }) if key == keys::SERVICE_URL
        ));
        assert_eq!(config.authorization_uri().unwrap(), AUTHORIZATION_URI);
        assert!(!config.is_basic_configured().unwrap());
        assert!(config.is_digest_configured().unwrap());
        assert_eq!(config.digest_username().unwrap(), "svc");
        assert_eq!(config.digest_password().unwrap().expose_secret(), "pw");

        assert!(AuthServiceConfig::resolve(&config).is_err());
    }
}

// =============================================================================
// Properties
// =============================================================================

mod property_tests {
    use super::*;

    #[test]
    fn test_schemes_are_independent() {
        let digest_only = ProviderAuthConfig::new(
            base_source()
                .value(keys::DIGEST_ENABLED, "true")
                .value(keys::DIGEST_USERNAME, "d")
                .value(keys::DIGEST_PASSWORD, "dp"),
        );
        assert!(!digest_only.is_basic_configured().unwrap());
        assert!(digest_only.is_digest_configured().unwrap());

        let both = ProviderAuthConfig::new(
            base_source()
                .value(keys::BASIC_USERNAME, "b")
                .value(keys::BASIC_PASSWORD, "bp")
                .value(keys::DIGEST_USERNAME, "d")
                .value(keys::DIGEST_PASSWORD, "dp"),
        );
        let snapshot = AuthServiceConfig::resolve(&both).unwrap();
        assert_eq!(snapshot.basic(), Some(&Credentials::new("b", "bp")));
        assert_eq!(snapshot.digest(), Some(&Credentials::new("d", "dp")));
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let config = ProviderAuthConfig::new(base_source().value(keys::BASIC_ENABLED, "true"));

        assert_eq!(config.service_url().unwrap(), config.service_url().unwrap());
        assert_eq!(
            config.is_basic_configured().unwrap(),
            config.is_basic_configured().unwrap()
        );

        let first = config.basic_username().unwrap_err();
        let second = config.basic_username().unwrap_err();
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn test_snapshot_survives_source_changes() {
        let source = Arc::new(
            base_source()
                .value(keys::BASIC_USERNAME, "svc")
                .value(keys::BASIC_PASSWORD, "secret"),
        );
        let config = ProviderAuthConfig::new(Arc::clone(&source));
        let snapshot = AuthServiceConfig::resolve(&config).unwrap();

        source.clear();

        assert!(config.service_url().is_err());
        assert!(!config.is_basic_configured().unwrap());
        assert_eq!(snapshot.service_url(), SERVICE_URL);
        assert_eq!(snapshot.basic_username().unwrap(), "svc");
    }

    #[test]
    fn test_concurrent_reads() {
        let config = Arc::new(ProviderAuthConfig::new(
            base_source()
                .value(keys::BASIC_USERNAME, "svc")
                .value(keys::BASIC_PASSWORD, "secret"),
        ));

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let config = Arc::clone(&config);
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(config.service_url().unwrap(), SERVICE_URL);
                        assert!(config.is_basic_configured().unwrap());
                        assert_eq!(config.basic_username().unwrap(), "svc");
                    }
                });
            }
        });
    }

    #[test]
    fn test_client_sees_resolver_as_trait_object() {
        fn pick(resolver: &dyn AuthConfigResolver, offered: &str) -> ConfigResult<Option<Credentials>> {
            let scheme: AuthScheme = offered.parse()?;
            resolver.credentials(scheme)
        }

        let fixed = AuthServiceConfig::builder(SERVICE_URL, AUTHORIZATION_URI)
            .digest("svc", "pw")
            .build()
            .unwrap();

        assert_eq!(pick(&fixed, "digest").unwrap(), Some(Credentials::new("svc", "pw")));
        assert_eq!(pick(&fixed, "Basic").unwrap(), None);
        assert!(pick(&fixed, "Negotiate").is_err());
    }
}

// =============================================================================
// Sources
// =============================================================================

mod source_tests {
    use super::*;

    struct UnavailableProvider;

    impl ConfigProvider for UnavailableProvider {
        fn name(&self) -> &str {
            "unavailable"
        }

        fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
            Err(ConfigError::Provider {
                message: format!("cannot read {}", key),
            })
        }
    }

    #[test]
    fn test_retrieval_errors_propagate_from_flags() {
        let config = ProviderAuthConfig::new(UnavailableProvider);

        assert!(matches!(
            config.is_basic_configured(),
            Err(ConfigError::Provider { .. })
        ));
        assert!(matches!(
            config.is_digest_configured(),
            Err(ConfigError::Provider { .. })
        ));
        assert!(matches!(config.service_url(), Err(ConfigError::Provider { .. })));
    }

    #[test]
    fn test_env_layer_overrides_defaults() {
        // SAFETY: Test-only environment setup, variable names are unique to this test
        unsafe {
            std::env::set_var("TEST_RESTAUTH_IT_BASIC_USERNAME", "from-env");
            std::env::set_var("TEST_RESTAUTH_IT_BASIC_PASSWORD", "env-secret");
            std::env::set_var("TEST_RESTAUTH_IT_BASIC_ENABLED", "True");
        }

        let source = ConfigBuilder::new()
            .env_with_prefix("TEST_RESTAUTH_IT_")
            .memory(base_source().value(keys::BASIC_USERNAME, "from-memory"))
            .build();
        let config = ProviderAuthConfig::new(source);

        assert_eq!(config.service_url().unwrap(), SERVICE_URL);
        assert!(config.is_basic_configured().unwrap());
        assert_eq!(config.basic_username().unwrap(), "from-env");
        assert_eq!(config.basic_password().unwrap().expose_secret(), "env-secret");
        assert!(!config.is_digest_configured().unwrap());

        unsafe {
            std::env::remove_var("TEST_RESTAUTH_IT_BASIC_USERNAME");
            std::env::remove_var("TEST_RESTAUTH_IT_BASIC_PASSWORD");
            std::env::remove_var("TEST_RESTAUTH_IT_BASIC_ENABLED");
        }
    }
}
