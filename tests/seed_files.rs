//! Integration tests for JSON seed export and reload.

use std::fs;

use buncafe::catalog::{loader, seed, BunToy, Catalog, Price};

#[test]
fn export_then_load_round_trips_losslessly() {
    let dir = tempfile::tempdir().unwrap();
    let original = Catalog::load().unwrap();

    loader::export_to_dir(&original, dir.path()).unwrap();
    let reloaded = Catalog::from_tables(loader::load_from_dir(dir.path()).unwrap()).unwrap();

    assert!(original.drinks().iter().eq(reloaded.drinks().iter()));
    assert!(original.snacks().iter().eq(reloaded.snacks().iter()));
    assert!(original.bun_treats().iter().eq(reloaded.bun_treats().iter()));
    assert!(original.bun_toys().iter().eq(reloaded.bun_toys().iter()));
    assert_eq!(original.friendship_levels(), reloaded.friendship_levels());
    assert!(original.rabbits().iter().eq(reloaded.rabbits().iter()));
    assert!(original.reward_tiers().iter().eq(reloaded.reward_tiers().iter()));
    assert!(original.shop_items().iter().eq(reloaded.shop_items().iter()));
    assert_eq!(original.daily_messages(), reloaded.daily_messages());
    assert_eq!(original.stamp_icons(), reloaded.stamp_icons());
}

#[test]
fn export_writes_one_file_per_table() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::load().unwrap();
    loader::export_to_dir(&catalog, dir.path()).unwrap();

    for file in [
        "drinks.json",
        "snacks.json",
        "bun_treats.json",
        "bun_toys.json",
        "friendship_levels.json",
        "rabbits.json",
        "reward_tiers.json",
        "shop_items.json",
        "daily_messages.json",
        "stamp_icons.json",
    ] {
        assert!(dir.path().join(file).exists(), "missing {file}");
    }
}

#[test]
fn single_table_override_keeps_the_rest_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let toys = vec![
        BunToy::new("paper-bag", "Paper Bag", Price::cents(50), "🛍️", 12)
            .with_description("Free with purchase, and somehow the most popular toy we have."),
    ];
    fs::write(
        dir.path().join("bun_toys.json"),
        serde_json::to_string_pretty(&toys).unwrap(),
    )
    .unwrap();

    let tables = loader::load_from_dir(dir.path()).unwrap();
    assert_eq!(tables.bun_toys.len(), 1);
    assert_eq!(tables.bun_toys[0].id, "paper-bag");
    assert_eq!(tables.drinks.len(), seed::seed_drinks().len());

    // Toys have no cross-table references, so the catalog still loads
    let catalog = Catalog::from_tables(tables).unwrap();
    assert_eq!(catalog.bun_toys().len(), 1);
}

#[test]
fn override_with_dangling_reference_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut rabbits = seed::seed_rabbits();
    rabbits[0].signature_drink = "espresso-tonic".to_string();
    fs::write(
        dir.path().join("rabbits.json"),
        serde_json::to_string_pretty(&rabbits).unwrap(),
    )
    .unwrap();

    let tables = loader::load_from_dir(dir.path()).unwrap();
    assert!(Catalog::from_tables(tables).is_err());
}

#[test]
fn malformed_seed_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rabbits.json"), "{ not json").unwrap();
    let err = loader::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("rabbits.json"));
}
