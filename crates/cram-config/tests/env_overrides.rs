//! Integration tests for `CRAM_*` environment variable mapping.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use cram_config::{CramConfig, DEFAULT_BASE_URL};

fn extract_with_env() -> Result<CramConfig, figment::Error> {
    Figment::from(Serialized::defaults(CramConfig::default()))
        .merge(Env::prefixed("CRAM_").split("__"))
        .extract()
}

#[test]
fn base_url_override_fills_config_value() {
    Jail::expect_with(|jail| {
        jail.set_env("CRAM_API__BASE_URL", "http://localhost:5050/api");

        let config = extract_with_env()?;
        assert_eq!(config.api.base_url, "http://localhost:5050/api");
        Ok(())
    });
}

#[test]
fn timeout_override_parses_as_number() {
    Jail::expect_with(|jail| {
        jail.set_env("CRAM_API__TIMEOUT_SECS", "5");

        let config = extract_with_env()?;
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn auth_section_maps_through_double_underscore() {
    Jail::expect_with(|jail| {
        jail.set_env("CRAM_AUTH__KEYRING_SERVICE", "cram-dev");
        jail.set_env("CRAM_AUTH__CREDENTIALS_FILE", "/tmp/cram-creds");

        let config = extract_with_env()?;
        assert_eq!(config.auth.keyring_service, "cram-dev");
        assert_eq!(config.auth.credentials_file, "/tmp/cram-creds");
        Ok(())
    });
}

#[test]
fn unset_vars_leave_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("CRAM_AUTH__KEYRING_SERVICE", "cram-dev");

        let config = extract_with_env()?;
        // Only the auth service was overridden; the API section keeps defaults.
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 60);
        Ok(())
    });
}
