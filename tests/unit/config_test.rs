//! Tests for configuration loading

use std::fs;
use std::path::Path;

use bugform::config::{Config, ConfigError};
use bugform::core::models::{AnchorError, DEFAULT_ANCHORS, Field};
use tempfile::TempDir;

#[test]
fn test_default_config_uses_template_anchors() {
    let anchors = Config::default().anchors().unwrap();
    assert_eq!(anchors.as_slice(), DEFAULT_ANCHORS);
    assert_eq!(anchors.get(Field::AffectedVersions), "#### 5. Affected versions");
}

#[test]
fn test_custom_anchors_from_toml() {
    let content = r###"
[template]
anchors = ["## A", "## B", "## C", "## D", "## E", "## F"]
"###;
    let config = Config::from_toml(content, Path::new("inline.toml")).unwrap();
    let anchors = config.anchors().unwrap();
    assert_eq!(anchors.get(Field::RootCause), "## A");
    assert_eq!(anchors.get(Field::FixedVersions), "## F");
}

#[test]
fn test_missing_template_table_uses_defaults() {
    let config = Config::from_toml("", Path::new("empty.toml")).unwrap();
    assert_eq!(config.template.anchors, DEFAULT_ANCHORS);
}

#[test]
fn test_wrong_anchor_count_is_rejected() {
    let content = "[template]\nanchors = [\"## A\", \"## B\"]\n";
    let err = Config::from_toml(content, Path::new("short.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Anchors(AnchorError::WrongCount(2))));
}

#[test]
fn test_duplicate_anchor_is_rejected() {
    let content = r###"
[template]
anchors = ["## A", "## B", "## C", "## D", "## E", "## A"]
"###;
    let err = Config::from_toml(content, Path::new("dup.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Anchors(AnchorError::Duplicate(_))));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = Config::from_toml("[template\n", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load_from(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_explicit_path_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[template]\nanchors = [\"1\", \"2\", \"3\", \"4\", \"5\", \"6\"]\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.anchors().unwrap().get(Field::Workaround), "4");
}

#[test]
fn test_written_config_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, Config::default().to_toml().unwrap()).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.template.anchors, DEFAULT_ANCHORS);
}
