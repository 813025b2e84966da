//! Integration tests for configuration loading and validation
//!
//! All tests share ENV_MUTEX because load_config reads RAFIQ_* environment
//! variables; without the lock, override tests running in parallel would
//! bleed into each other.

use rafiq::config::{load_config, BackendTarget, Environment};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("RAFIQ_APPLICATION_LOG_LEVEL");
    std::env::remove_var("RAFIQ_ENVIRONMENT");
    std::env::remove_var("RAFIQ_BACKEND");
    std::env::remove_var("RAFIQ_REST_BASE_URL");
    std::env::remove_var("RAFIQ_REST_API_KEY");
    std::env::remove_var("RAFIQ_REST_TLS_VERIFY");
    std::env::remove_var("RAFIQ_REST_REQUEST_TIMEOUT_SECONDS");
    std::env::remove_var("RAFIQ_STORAGE_PATH");
    std::env::remove_var("RAFIQ_SESSION_USERS_COLLECTION");
    std::env::remove_var("RAFIQ_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("RAFIQ_LOGGING_LOCAL_PATH");
    std::env::remove_var("TEST_RAFIQ_API_KEY");
}

fn write_temp_config(toml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
environment = "staging"
backend = "rest"

[application]
log_level = "debug"

[rest]
base_url = "https://api.staging.rafiq.example"
api_key = "staging-key-12345"
tls_verify = true
request_timeout_seconds = 120

[rest.retry]
max_retries = 5
initial_delay_ms = 500
max_delay_ms = 8000
backoff_multiplier = 2.0

[storage]
path = "/var/lib/rafiq/state.json"

[session]
users_collection = "staging_users"

[logging]
local_enabled = false
local_path = "/tmp/rafiq"
local_rotation = "size"
local_max_size_mb = 50
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify top-level selection
    assert_eq!(config.environment, Environment::Staging);
    assert_eq!(config.backend, BackendTarget::Rest);

    // Verify application config
    assert_eq!(config.application.log_level, "debug");

    // Verify REST config
    let rest = config.rest.as_ref().expect("rest section missing");
    assert_eq!(rest.base_url, "https://api.staging.rafiq.example");
    assert_eq!(
        rest.api_key.as_ref().map(|k| k.expose_secret().to_string()),
        Some("staging-key-12345".to_string())
    );
    assert!(rest.tls_verify);
    assert_eq!(rest.request_timeout_seconds, 120);
    assert_eq!(rest.retry.max_retries, 5);
    assert_eq!(rest.retry.initial_delay_ms, 500);
    assert_eq!(rest.retry.max_delay_ms, 8000);

    // Verify storage and session config
    assert_eq!(config.storage.path, "/var/lib/rafiq/state.json");
    assert_eq!(config.session.users_collection, "staging_users");

    // Verify logging config
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/rafiq");
    assert_eq!(config.logging.local_rotation, "size");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
backend = "memory"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.backend, BackendTarget::Memory);
    assert_eq!(config.application.log_level, "info");
    assert!(config.rest.is_none());
    assert_eq!(config.storage.path, ".rafiq/state.json");
    assert_eq!(config.session.users_collection, "users");
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
    assert_eq!(config.logging.local_max_size_mb, 100);
}

#[test]
fn test_rest_defaults_fill_unset_fields() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
backend = "rest"

[rest]
base_url = "https://api.rafiq.example"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    let rest = config.rest.as_ref().expect("rest section missing");
    assert!(rest.api_key.is_none());
    assert!(rest.tls_verify);
    assert_eq!(rest.request_timeout_seconds, 30);
    assert_eq!(rest.retry.max_retries, 3);
    assert_eq!(rest.retry.initial_delay_ms, 1000);
    assert_eq!(rest.retry.max_delay_ms, 30000);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_RAFIQ_API_KEY", "secret_key");

    let toml_content = r#"
backend = "rest"

[rest]
base_url = "https://api.rafiq.example"
api_key = "${TEST_RAFIQ_API_KEY}"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    let rest = config.rest.as_ref().expect("rest section missing");
    assert_eq!(
        rest.api_key.as_ref().map(|k| k.expose_secret().to_string()),
        Some("secret_key".to_string())
    );

    std::env::remove_var("TEST_RAFIQ_API_KEY");
}

#[test]
fn test_env_var_substitution_missing_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
backend = "rest"

[rest]
base_url = "https://api.rafiq.example"
api_key = "${TEST_RAFIQ_API_KEY}"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("RAFIQ_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("RAFIQ_REST_BASE_URL", "https://api.override.rafiq.example");
    std::env::set_var("RAFIQ_SESSION_USERS_COLLECTION", "override_users");

    let toml_content = r#"
backend = "rest"

[application]
log_level = "info"

[rest]
base_url = "https://api.rafiq.example"

[session]
users_collection = "users"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(
        config.rest.as_ref().map(|r| r.base_url.as_str()),
        Some("https://api.override.rafiq.example")
    );
    assert_eq!(config.session.users_collection, "override_users");

    cleanup_env_vars();
}

#[test]
fn test_backend_override_rejects_unknown_value() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("RAFIQ_BACKEND", "sqlite");

    let toml_content = r#"
backend = "memory"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
backend = "memory"

[application]
log_level = "invalid_level"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_production_requires_api_key() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
environment = "production"
backend = "rest"

[rest]
base_url = "https://api.rafiq.example"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_production_rejects_memory_backend() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
environment = "production"
backend = "memory"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}
