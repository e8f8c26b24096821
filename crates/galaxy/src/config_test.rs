use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::{BuilderConfig, GalaxyError};

#[test]
fn test_defaults() {
    let config = BuilderConfig::default();
    assert_eq!(config.store_path, PathBuf::from("./data/galaxy.json"));
    assert_eq!(config.default_galaxy_name, "Default");
    assert_eq!(config.report_path, None);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = BuilderConfig::load_or_default(dir.path().join("missing.toml"));
    assert_eq!(config, BuilderConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("builder.toml");
    fs::write(&path, "default_galaxy_name = \"andromeda\"\n").unwrap();

    let config = BuilderConfig::load(&path).unwrap();
    assert_eq!(config.default_galaxy_name, "andromeda");
    assert_eq!(config.store_path, PathBuf::from("./data/galaxy.json"));
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("builder.toml");
    fs::write(&path, "store_path = [not toml").unwrap();

    assert!(matches!(
        BuilderConfig::load(&path),
        Err(GalaxyError::Config { .. })
    ));
    assert_eq!(BuilderConfig::load_or_default(&path), BuilderConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("builder.toml");
    let config = BuilderConfig {
        store_path: dir.path().join("saves").join("galaxy.json"),
        default_galaxy_name: "triangulum".to_string(),
        report_path: Some(dir.path().join("events.log")),
    };

    config.save(&path).unwrap();
    assert_eq!(BuilderConfig::load(&path).unwrap(), config);
}
