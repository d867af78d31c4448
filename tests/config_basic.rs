//! Integration tests for configuration loading and the seed-dir hookup.

use std::fs;

use buncafe::catalog::{loader, Catalog};
use buncafe::config::Config;

#[test]
fn starter_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    Config::create_default(&path).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.cafe.name, "Bun & Bean Cafe");
    assert!(config.cafe.seed_dir.is_none());
}

#[test]
fn invalid_log_level_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[cafe]\nname = \"Test Cafe\"\n\n[logging]\nlevel = \"shouting\"\n",
    )
    .unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn configured_seed_dir_feeds_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let seeds = dir.path().join("seeds");

    // Export the built-in catalog, then point a config at it
    let catalog = Catalog::load().unwrap();
    loader::export_to_dir(&catalog, &seeds).unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[cafe]\nname = \"Test Cafe\"\nseed_dir = {:?}\n",
            seeds.to_string_lossy()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let seed_dir = config.cafe.seed_dir.expect("seed_dir should be set");
    let reloaded = Catalog::from_tables(loader::load_from_dir(seed_dir).unwrap()).unwrap();
    assert_eq!(reloaded.drinks().len(), catalog.drinks().len());
}
