// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
service_uri = "https://media.example.test/api/"
oauth_uri = "https://auth.example.test/token"
oauth_client_id = "harness"
"#
    )
    .unwrap();

    let config = HarnessConfig::load(file.path()).unwrap();
    assert_eq!(config.service_uri, "https://media.example.test/api/");
    assert_eq!(config.oauth_uri, "https://auth.example.test/token");
    assert_eq!(config.oauth_client_id, "harness");
    // Unset keys stay empty
    assert_eq!(config.oauth_client_secret, "");
}

#[test]
fn test_missing_file_errors() {
    let err = HarnessConfig::load(std::path::Path::new("/no/such/config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_toml_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "service_uri = [not toml").unwrap();
    let err = HarnessConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_env_overrides_loaded_value() {
    // OAUTH_SCOPE is only touched by this test
    std::env::set_var(OAUTH_SCOPE, "urn:test-scope");
    let config = HarnessConfig {
        oauth_scope: "urn:file-scope".to_string(),
        ..HarnessConfig::default()
    }
    .overridden_from_env();
    std::env::remove_var(OAUTH_SCOPE);

    assert_eq!(config.oauth_scope, "urn:test-scope");
}

#[test]
fn test_env_leaves_unset_keys_alone() {
    let config = HarnessConfig {
        oauth_client_id: "from-file".to_string(),
        ..HarnessConfig::default()
    }
    .overridden_from_env();
    assert_eq!(config.oauth_client_id, "from-file");
}

#[test]
fn test_debug_redacts_secret() {
    let config = HarnessConfig {
        oauth_client_secret: "hunter2".to_string(),
        ..HarnessConfig::default()
    };
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}
