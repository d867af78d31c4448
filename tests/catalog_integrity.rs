//! Integration tests for load-time integrity enforcement over the catalog.

use std::collections::HashSet;

use buncafe::catalog::{
    integrity, seed, BunTreat, Catalog, CatalogError, Keyed, Price, Violation,
};

#[test]
fn builtin_catalog_passes_the_full_check() {
    let catalog = Catalog::load().unwrap();
    assert!(integrity::violations(&catalog).is_empty());
}

#[test]
fn ids_are_unique_within_every_keyed_table() {
    let catalog = Catalog::load().unwrap();

    fn assert_unique<T: Keyed>(records: impl Iterator<Item = T>)
    where
        T: std::fmt::Debug,
    {
        let mut seen = HashSet::new();
        for record in records {
            assert!(seen.insert(record.key().to_string()), "duplicate {record:?}");
        }
    }

    assert_unique(catalog.drinks().iter().cloned());
    assert_unique(catalog.snacks().iter().cloned());
    assert_unique(catalog.bun_treats().iter().cloned());
    assert_unique(catalog.bun_toys().iter().cloned());
    assert_unique(catalog.rabbits().iter().cloned());
    assert_unique(catalog.reward_tiers().iter().cloned());
    assert_unique(catalog.shop_items().iter().cloned());
}

#[test]
fn every_soft_reference_resolves() {
    let catalog = Catalog::load().unwrap();

    for drink in catalog.drinks().iter() {
        catalog.rabbit_for_drink(drink).unwrap();
    }
    for snack in catalog.snacks().iter() {
        catalog.rabbit_for_snack(snack).unwrap();
    }
    for rabbit in catalog.rabbits().iter() {
        catalog.signature_drink(rabbit).unwrap();
        catalog.signature_snack(rabbit).unwrap();
    }
    for message in catalog.daily_messages() {
        catalog.rabbit_for_message(message).unwrap();
    }
}

#[test]
fn ladder_is_monotonic_from_zero() {
    let catalog = Catalog::load().unwrap();
    let levels = catalog.friendship_levels();
    assert_eq!(levels[0].level, 0);
    assert_eq!(levels[0].min_points, 0);
    for pair in levels.windows(2) {
        assert!(pair[1].min_points >= pair[0].min_points);
        assert_eq!(pair[1].level, pair[0].level + 1);
    }
}

#[test]
fn stats_and_point_grants_are_in_range() {
    let catalog = Catalog::load().unwrap();
    for rabbit in catalog.rabbits().iter() {
        for value in [
            rabbit.stats.fluffiness,
            rabbit.stats.biteyness,
            rabbit.stats.friendliness,
            rabbit.stats.chaos,
        ] {
            assert!(value <= 100, "{} stat out of range", rabbit.id);
        }
    }
    for treat in catalog.bun_treats().iter() {
        assert!(treat.friendship_points > 0);
    }
    for toy in catalog.bun_toys().iter() {
        assert!(toy.friendship_points > 0);
    }
    for tier in catalog.reward_tiers().iter() {
        assert!(tier.stamps_required > 0);
    }
}

#[test]
fn reward_tiers_cost_strictly_more_as_they_go() {
    let catalog = Catalog::load().unwrap();
    let tiers: Vec<_> = catalog.reward_tiers().iter().collect();
    for pair in tiers.windows(2) {
        assert!(pair[1].stamps_required > pair[0].stamps_required);
    }
}

#[test]
fn duplicate_id_is_fatal_at_load() {
    let mut tables = seed::builtin_tables();
    tables.bun_treats.push(BunTreat::new(
        "carrot-chip",
        "Carrot Chips, Again",
        Price::cents(150),
        "🥕",
        5,
    ));
    let err = Catalog::from_tables(tables).unwrap_err();
    match err {
        CatalogError::Integrity(violations) => {
            assert!(violations.iter().any(|v| matches!(
                v,
                Violation::DuplicateId { id, .. } if id == "carrot-chip"
            )));
        }
        other => panic!("expected Integrity, got {other}"),
    }
}

#[test]
fn dangling_reference_is_fatal_at_load() {
    let mut tables = seed::builtin_tables();
    tables.rabbits[0].signature_drink = "discontinued-latte".to_string();
    let err = Catalog::from_tables(tables).unwrap_err();
    match err {
        CatalogError::Integrity(violations) => {
            assert_eq!(violations.len(), 1);
            assert!(matches!(
                &violations[0],
                Violation::DanglingReference { field: "signature_drink", .. }
            ));
        }
        other => panic!("expected Integrity, got {other}"),
    }
}

#[test]
fn load_reports_every_violation_at_once() {
    let mut tables = seed::builtin_tables();
    tables.rabbits[0].signature_drink = "discontinued-latte".to_string();
    tables.rabbits[1].signature_snack = "discontinued-snack".to_string();
    tables.friendship_levels[0].min_points = 1;
    let err = Catalog::from_tables(tables).unwrap_err();
    match err {
        CatalogError::Integrity(violations) => assert_eq!(violations.len(), 3),
        other => panic!("expected Integrity, got {other}"),
    }
}
