//! Tests for config loading and precedence.

use super::*;
use serial_test::serial;
use std::fs;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn missing_file_is_none_not_error() {
    let result = load_config_file("/definitely/missing/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn valid_file_parses() {
    let path = temp_config(
        "invdash_loader_valid.toml",
        "page_size = 10\npresence_ttl_secs = 60\n",
    );
    let config = load_config_file(&path).expect("load").expect("some");
    let _ = fs::remove_file(&path);

    assert_eq!(config.page_size, Some(10));
    assert_eq!(config.presence_ttl_secs, Some(60));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn invalid_toml_is_parse_error() {
    let path = temp_config("invdash_loader_invalid.toml", "page_size = [not toml");
    let err = load_config_file(&path).unwrap_err();
    let _ = fs::remove_file(&path);
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_field_is_rejected() {
    let path = temp_config("invdash_loader_unknown.toml", "theme = \"dark\"\n");
    let err = load_config_file(&path).unwrap_err();
    let _ = fs::remove_file(&path);
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn merge_uses_defaults_for_missing_fields() {
    let merged = merge_config(Some(ConfigFile {
        page_size: Some(7),
        ..Default::default()
    }));
    assert_eq!(merged.page_size, 7);
    assert_eq!(
        merged.presence_ttl_secs,
        ResolvedConfig::default().presence_ttl_secs
    );
}

#[test]
fn merge_none_is_all_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
#[serial(invdash_env)]
fn env_overrides_page_size() {
    std::env::set_var("INVDASH_PAGE_SIZE", "99");
    let config = apply_env_overrides(ResolvedConfig::default());
    std::env::remove_var("INVDASH_PAGE_SIZE");
    assert_eq!(config.page_size, 99);
}

#[test]
#[serial(invdash_env)]
fn env_override_ignores_garbage() {
    std::env::set_var("INVDASH_PAGE_SIZE", "lots");
    let config = apply_env_overrides(ResolvedConfig::default());
    std::env::remove_var("INVDASH_PAGE_SIZE");
    assert_eq!(config.page_size, ResolvedConfig::default().page_size);
}

#[test]
fn cli_overrides_beat_everything() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(3),
        Some(PathBuf::from("/tmp/custom.log")),
    );
    assert_eq!(config.page_size, 3);
    assert_eq!(config.log_file_path, PathBuf::from("/tmp/custom.log"));
}

#[test]
fn cli_none_leaves_config_unchanged() {
    let config = apply_cli_overrides(ResolvedConfig::default(), None, None);
    assert_eq!(config, ResolvedConfig::default());
}
