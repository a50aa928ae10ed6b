//! Configuration system tests
//!
//! Tests for config paths and widget config loading, saving and overrides.

use search_select::config::{DomainOverride, WidgetConfig};
use search_select::config_paths;
use search_select::registry::{EntityDomain, StaticRegistry};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("search-select"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_and_registries_live_under_config_dir() {
    if let (Some(dir), Some(logs), Some(registries)) = (
        config_paths::config_dir(),
        config_paths::logs_dir(),
        config_paths::registries_dir(),
    ) {
        assert!(logs.starts_with(&dir));
        assert!(registries.starts_with(&dir));
    }
}

// ========================================================================
// WidgetConfig Tests
// ========================================================================

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = WidgetConfig::load_from(&dir.path().join("missing.yaml"));
    assert_eq!(config, WidgetConfig::default());
    assert_eq!(config.debounce_ms, 250);
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "debounce_ms: [not a number").unwrap();
    assert_eq!(WidgetConfig::load_from(&path), WidgetConfig::default());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "domains:\n  item_type:\n    noun: item type\n    placeholder: Find a type\n",
    )
    .unwrap();

    let config = WidgetConfig::load_from(&path);
    assert_eq!(config.debounce_ms, 250);

    let field = config.field_config(EntityDomain::ItemType);
    assert_eq!(field.noun.as_deref(), Some("item type"));
    assert_eq!(field.placeholder, "Find a type");

    // Other domains keep their presets
    let supplier = config.field_config(EntityDomain::Supplier);
    assert_eq!(supplier.noun.as_deref(), Some("supplier"));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = WidgetConfig {
        debounce_ms: 120,
        ..WidgetConfig::default()
    };
    config.domains.insert(
        EntityDomain::UseCase,
        DomainOverride {
            noun: None,
            placeholder: Some("What is it for?".to_string()),
        },
    );
    config.save_to(&path).unwrap();

    let loaded = WidgetConfig::load_from(&path);
    assert_eq!(loaded, config);
    assert_eq!(loaded.field_config(EntityDomain::UseCase).debounce_ms, 120);
    assert_eq!(
        loaded.field_config(EntityDomain::UseCase).noun.as_deref(),
        Some("use case")
    );
}

// ========================================================================
// Registry Files
// ========================================================================

#[test]
fn test_load_registry_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("facility.csv");
    std::fs::write(&path, "North Warehouse\nsouth warehouse,closed\n\nNORTH WAREHOUSE\n").unwrap();

    let registry = StaticRegistry::load(&path).unwrap();
    assert_eq!(registry.names(), &["North Warehouse", "south warehouse"]);
}

#[test]
fn test_load_missing_registry_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(StaticRegistry::load(&dir.path().join("none.csv")).is_err());
}
