//! Whole-catalog integrity checks, run once at load time.
//!
//! Hard invariants (dangling references, ladder defects, stat ranges,
//! zero-point grants) fail the load with every violation listed. Duplicate
//! ids are caught earlier, during table construction. Design-intent
//! observations are logged as warnings and never block startup: the content
//! gets flagged, not silently "fixed".

use log::warn;

use super::errors::{CatalogError, Violation};
use super::types::TableKind;
use super::Catalog;

/// Validate the catalog; `Err(Integrity)` carries every violation found.
pub fn check(catalog: &Catalog) -> Result<(), CatalogError> {
    warn_design_intents(catalog);
    let found = violations(catalog);
    if found.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Integrity(found))
    }
}

/// Collect every hard-invariant violation in the catalog.
pub fn violations(catalog: &Catalog) -> Vec<Violation> {
    let mut found = Vec::new();

    // Soft cross-table references
    for drink in catalog.drinks().iter() {
        if let Some(rabbit_id) = &drink.rabbit_id {
            if !catalog.rabbits().contains(rabbit_id) {
                found.push(Violation::DanglingReference {
                    table: TableKind::Drinks,
                    id: drink.id.clone(),
                    field: "rabbit_id",
                    target_table: TableKind::Rabbits,
                    target_id: rabbit_id.clone(),
                });
            }
        }
    }

    for snack in catalog.snacks().iter() {
        if !catalog.rabbits().contains(&snack.rabbit_id) {
            found.push(Violation::DanglingReference {
                table: TableKind::Snacks,
                id: snack.id.clone(),
                field: "rabbit_id",
                target_table: TableKind::Rabbits,
                target_id: snack.rabbit_id.clone(),
            });
        }
    }

    for rabbit in catalog.rabbits().iter() {
        if !catalog.drinks().contains(&rabbit.signature_drink) {
            found.push(Violation::DanglingReference {
                table: TableKind::Rabbits,
                id: rabbit.id.clone(),
                field: "signature_drink",
                target_table: TableKind::Drinks,
                target_id: rabbit.signature_drink.clone(),
            });
        }
        if !catalog.snacks().contains(&rabbit.signature_snack) {
            found.push(Violation::DanglingReference {
                table: TableKind::Rabbits,
                id: rabbit.id.clone(),
                field: "signature_snack",
                target_table: TableKind::Snacks,
                target_id: rabbit.signature_snack.clone(),
            });
        }
    }

    for (pos, message) in catalog.daily_messages().iter().enumerate() {
        if !catalog.rabbits().contains(&message.rabbit_id) {
            found.push(Violation::DanglingReference {
                table: TableKind::DailyMessages,
                id: format!("#{pos}"),
                field: "rabbit_id",
                target_table: TableKind::Rabbits,
                target_id: message.rabbit_id.clone(),
            });
        }
    }

    // Friendship ladder shape
    let levels = catalog.friendship_levels();
    if let Some(base) = levels.first() {
        if base.level != 0 {
            found.push(Violation::LadderOrdinal {
                expected: 0,
                found: base.level,
            });
        }
        if base.min_points != 0 {
            found.push(Violation::LadderBase {
                min_points: base.min_points,
            });
        }
    }
    for pair in levels.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.level != prev.level + 1 {
            found.push(Violation::LadderOrdinal {
                expected: prev.level + 1,
                found: next.level,
            });
        }
        if next.min_points < prev.min_points {
            found.push(Violation::LadderOrder {
                level: next.level,
                min_points: next.min_points,
                prev_level: prev.level,
                prev_min_points: prev.min_points,
            });
        }
    }

    // Rabbit stat ranges (0-100; the lower bound holds by construction)
    for rabbit in catalog.rabbits().iter() {
        let stats = [
            ("fluffiness", rabbit.stats.fluffiness),
            ("biteyness", rabbit.stats.biteyness),
            ("friendliness", rabbit.stats.friendliness),
            ("chaos", rabbit.stats.chaos),
        ];
        for (stat, value) in stats {
            if value > 100 {
                found.push(Violation::StatOutOfRange {
                    rabbit: rabbit.id.clone(),
                    stat,
                    value,
                });
            }
        }
    }

    // Point grants and stamp thresholds must be positive
    for treat in catalog.bun_treats().iter() {
        if treat.friendship_points == 0 {
            found.push(Violation::NonPositivePoints {
                table: TableKind::BunTreats,
                id: treat.id.clone(),
            });
        }
    }
    for toy in catalog.bun_toys().iter() {
        if toy.friendship_points == 0 {
            found.push(Violation::NonPositivePoints {
                table: TableKind::BunToys,
                id: toy.id.clone(),
            });
        }
    }
    for tier in catalog.reward_tiers().iter() {
        if tier.stamps_required == 0 {
            found.push(Violation::ZeroStampThreshold {
                id: tier.id.clone(),
            });
        }
    }

    found
}

/// Design-intent observations: worth flagging, not worth refusing to serve.
fn warn_design_intents(catalog: &Catalog) {
    let tiers: Vec<_> = catalog.reward_tiers().iter().collect();
    for pair in tiers.windows(2) {
        if pair[1].stamps_required <= pair[0].stamps_required {
            warn!(
                "reward tier '{}' ({} stamps) does not cost more than '{}' ({} stamps)",
                pair[1].id, pair[1].stamps_required, pair[0].id, pair[0].stamps_required
            );
        }
    }

    if let Some(best_treat) = catalog
        .bun_treats()
        .iter()
        .map(|t| t.friendship_points)
        .max()
    {
        for toy in catalog.bun_toys().iter() {
            if toy.friendship_points <= best_treat {
                warn!(
                    "toy '{}' grants {} friendship points, no more than the best treat ({})",
                    toy.id, toy.friendship_points, best_treat
                );
            }
        }
    }

    for pair in catalog.friendship_levels().windows(2) {
        if pair[1].min_points == pair[0].min_points {
            warn!(
                "friendship levels {} and {} share the threshold {} points",
                pair[0].level, pair[1].level, pair[0].min_points
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::catalog::types::{
        DailyMessage, FriendshipLevel, Rabbit, RabbitStats, Rarity, Snack, SnackCategory, Price,
    };

    #[test]
    fn builtin_content_is_clean() {
        let catalog = Catalog::load().unwrap();
        assert!(violations(&catalog).is_empty());
    }

    #[test]
    fn dangling_snack_rabbit_is_reported() {
        let mut tables = seed::builtin_tables();
        tables.snacks.push(Snack::new(
            "phantom",
            "Phantom Snack",
            SnackCategory::Savory,
            Price::cents(100),
            "👻",
            "ghost-rabbit",
        ));
        let catalog = Catalog::from_tables_unchecked(tables).unwrap();
        let found = violations(&catalog);
        assert_eq!(found.len(), 1);
        assert!(matches!(
            &found[0],
            Violation::DanglingReference { id, target_id, .. }
                if id == "phantom" && target_id == "ghost-rabbit"
        ));
    }

    #[test]
    fn dangling_signature_references_are_reported() {
        let mut tables = seed::builtin_tables();
        tables.rabbits.push(
            Rabbit::new("nibbles", "Nibbles", "🐇", Rarity::Common)
                .with_signatures("no-such-drink", "no-such-snack"),
        );
        let catalog = Catalog::from_tables_unchecked(tables).unwrap();
        let found = violations(&catalog);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn dangling_daily_message_is_reported() {
        let mut tables = seed::builtin_tables();
        tables
            .daily_messages
            .push(DailyMessage::new("retired-rabbit", "Gone but not forgotten.", "🕊️"));
        let catalog = Catalog::from_tables_unchecked(tables).unwrap();
        assert_eq!(violations(&catalog).len(), 1);
    }

    #[test]
    fn broken_ladder_is_reported() {
        let mut tables = seed::builtin_tables();
        tables.friendship_levels = vec![
            FriendshipLevel::new(0, "Stranger", 10, "🌱", ""),
            FriendshipLevel::new(2, "Friend", 5, "🍀", ""),
        ];
        let catalog = Catalog::from_tables_unchecked(tables).unwrap();
        let found = violations(&catalog);
        assert!(found.contains(&Violation::LadderBase { min_points: 10 }));
        assert!(found.contains(&Violation::LadderOrdinal { expected: 1, found: 2 }));
        assert!(found.iter().any(|v| matches!(v, Violation::LadderOrder { .. })));
    }

    #[test]
    fn out_of_range_stat_is_reported() {
        let mut tables = seed::builtin_tables();
        tables.rabbits.push(
            Rabbit::new("maximum", "Maximum", "🐇", Rarity::Legendary)
                .with_stats(RabbitStats::new(200, 0, 50, 50))
                .with_signatures("taro-dream", "dango"),
        );
        let catalog = Catalog::from_tables_unchecked(tables).unwrap();
        let found = violations(&catalog);
        assert!(found.iter().any(|v| matches!(
            v,
            Violation::StatOutOfRange { stat: "fluffiness", value: 200, .. }
        )));
    }

    #[test]
    fn check_fails_loudly_with_all_violations() {
        let mut tables = seed::builtin_tables();
        tables.snacks.push(Snack::new(
            "phantom",
            "Phantom Snack",
            SnackCategory::Savory,
            Price::cents(100),
            "👻",
            "ghost-rabbit",
        ));
        tables.friendship_levels[0].min_points = 3;
        let err = Catalog::from_tables(tables).unwrap_err();
        match err {
            CatalogError::Integrity(violations) => assert_eq!(violations.len(), 2),
            other => panic!("expected Integrity, got {other}"),
        }
    }
}
