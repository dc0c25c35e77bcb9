//! Configuration system tests
//!
//! Tests for config paths and editor config loading.

use vdata_nav::config::{EditorConfig, DEFAULT_DECLARATION_KEY, DEFAULT_DOCS_BASE_URL};
use vdata_nav::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("vdata-nav"));
    }
}

#[test]
fn test_files_live_under_config_dir() {
    let Some(dir) = config_paths::config_dir() else {
        return;
    };
    assert_eq!(config_paths::config_file(), Some(dir.join("config.yaml")));
    assert_eq!(config_paths::schema_file(), Some(dir.join("schema.json")));
    assert_eq!(config_paths::logs_dir(), Some(dir.join("logs")));
}

// ========================================================================
// EditorConfig Tests
// ========================================================================

#[test]
fn test_empty_yaml_is_all_defaults() {
    let config = EditorConfig::from_yaml("{}").unwrap();
    assert_eq!(config, EditorConfig::default());
    assert_eq!(config.docs_base_url, DEFAULT_DOCS_BASE_URL);
    assert_eq!(config.declaration_key, DEFAULT_DECLARATION_KEY);
}

#[test]
fn test_full_yaml() {
    let yaml = r#"
debounce_ms: 150
docs_base_url: "https://docs.example.com/schema"
declaration_key: generic_data_type
schema_ttl_hours: 24
"#;
    let config = EditorConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.debounce_ms, 150);
    assert_eq!(config.docs_base_url, "https://docs.example.com/schema");
    assert_eq!(config.declaration_key, "generic_data_type");
    assert_eq!(config.schema_ttl_hours, 24);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = EditorConfig::from_yaml("theme: dark\ndebounce_ms: 10\n").unwrap();
    assert_eq!(config.debounce_ms, 10);
}

#[test]
fn test_load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nav.yaml");
    std::fs::write(&path, "declaration_key: m_class\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.declaration_key, "m_class");
    assert_eq!(config.debounce_ms, 300);
}
