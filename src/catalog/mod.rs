//! The static cafe catalog: loader, accessor, and lookup surface.
//!
//! All ten tables are built exactly once, integrity-checked, and never
//! mutated afterwards. Consumers read records by id, by category filter, or
//! by following a soft cross-table reference through a typed resolver.
//!
//! Lookups go through an id index built at load time rather than repeated
//! linear scans. Construction fails fast on duplicate ids and dangling
//! references so a content authoring mistake surfaces at startup, not at
//! first render.

pub mod errors;
pub mod integrity;
pub mod loader;
pub mod seed;
pub mod types;

use std::collections::HashMap;
use std::sync::OnceLock;

use log::info;

pub use errors::{CatalogError, Violation};
pub use types::{
    BunToy, BunTreat, DailyMessage, Drink, DrinkCategory, DrinkTheme, FriendshipLevel, Keyed,
    Price, Rabbit, RabbitStats, Rarity, RewardTier, ShopItem, Snack, SnackCategory, TableKind,
};

/// One read-only catalog table: records in declaration order plus an id
/// index. Duplicate ids are rejected at construction.
#[derive(Debug, Clone)]
pub struct Table<T: Keyed> {
    kind: TableKind,
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Table<T> {
    pub fn from_records(kind: TableKind, records: Vec<T>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.key().to_string(), pos).is_some() {
                duplicates.push(Violation::DuplicateId {
                    table: kind,
                    id: record.key().to_string(),
                });
            }
        }
        if !duplicates.is_empty() {
            return Err(CatalogError::Integrity(duplicates));
        }
        Ok(Self {
            kind,
            records,
            index,
        })
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Lookup by id; `NotFound` when no record matches.
    pub fn get(&self, id: &str) -> Result<&T, CatalogError> {
        self.find(id).ok_or_else(|| CatalogError::NotFound {
            table: self.kind,
            id: id.to_string(),
        })
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All records, in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Raw table content ready to be assembled into a [`Catalog`]. Produced by
/// the built-in seeds or the JSON seed loader.
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub drinks: Vec<Drink>,
    pub snacks: Vec<Snack>,
    pub bun_treats: Vec<BunTreat>,
    pub bun_toys: Vec<BunToy>,
    pub friendship_levels: Vec<FriendshipLevel>,
    pub rabbits: Vec<Rabbit>,
    pub reward_tiers: Vec<RewardTier>,
    pub shop_items: Vec<ShopItem>,
    pub daily_messages: Vec<DailyMessage>,
    pub stamp_icons: Vec<String>,
}

/// The assembled cafe catalog. Immutable after load; any number of readers
/// may use it concurrently without synchronization.
#[derive(Debug)]
pub struct Catalog {
    drinks: Table<Drink>,
    snacks: Table<Snack>,
    bun_treats: Table<BunTreat>,
    bun_toys: Table<BunToy>,
    friendship_levels: Vec<FriendshipLevel>,
    rabbits: Table<Rabbit>,
    reward_tiers: Table<RewardTier>,
    shop_items: Table<ShopItem>,
    daily_messages: Vec<DailyMessage>,
    stamp_icons: Vec<String>,
}

static SHARED: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build the catalog from the built-in seed content and integrity-check
    /// it. This is the normal entry point.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_tables(seed::builtin_tables())
    }

    /// Build a catalog from caller-supplied tables, then run the full
    /// integrity check. A catalog that fails the check is never returned.
    pub fn from_tables(tables: CatalogTables) -> Result<Self, CatalogError> {
        let catalog = Self::from_tables_unchecked(tables)?;
        integrity::check(&catalog)?;
        info!(
            "catalog loaded: {} drinks, {} snacks, {} rabbits, {} reward tiers",
            catalog.drinks.len(),
            catalog.snacks.len(),
            catalog.rabbits.len(),
            catalog.reward_tiers.len()
        );
        Ok(catalog)
    }

    /// Assemble tables without the cross-table integrity pass. Duplicate ids
    /// are still rejected. Callers that skip the check trade fail-fast
    /// startup errors for query-time `DanglingReference` errors; prefer
    /// [`Catalog::from_tables`].
    pub fn from_tables_unchecked(tables: CatalogTables) -> Result<Self, CatalogError> {
        Ok(Self {
            drinks: Table::from_records(TableKind::Drinks, tables.drinks)?,
            snacks: Table::from_records(TableKind::Snacks, tables.snacks)?,
            bun_treats: Table::from_records(TableKind::BunTreats, tables.bun_treats)?,
            bun_toys: Table::from_records(TableKind::BunToys, tables.bun_toys)?,
            friendship_levels: tables.friendship_levels,
            rabbits: Table::from_records(TableKind::Rabbits, tables.rabbits)?,
            reward_tiers: Table::from_records(TableKind::RewardTiers, tables.reward_tiers)?,
            shop_items: Table::from_records(TableKind::ShopItems, tables.shop_items)?,
            daily_messages: tables.daily_messages,
            stamp_icons: tables.stamp_icons,
        })
    }

    /// Process-wide handle, loaded on first access. The catalog never
    /// changes after load, so the handle can be shared freely across
    /// threads.
    pub fn shared() -> Result<&'static Catalog, CatalogError> {
        if let Some(catalog) = SHARED.get() {
            return Ok(catalog);
        }
        let catalog = Catalog::load()?;
        Ok(SHARED.get_or_init(|| catalog))
    }

    // ------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------

    pub fn drinks(&self) -> &Table<Drink> {
        &self.drinks
    }

    pub fn snacks(&self) -> &Table<Snack> {
        &self.snacks
    }

    pub fn bun_treats(&self) -> &Table<BunTreat> {
        &self.bun_treats
    }

    pub fn bun_toys(&self) -> &Table<BunToy> {
        &self.bun_toys
    }

    /// The friendship ladder, level 0 upward in declaration order.
    pub fn friendship_levels(&self) -> &[FriendshipLevel] {
        &self.friendship_levels
    }

    pub fn rabbits(&self) -> &Table<Rabbit> {
        &self.rabbits
    }

    pub fn reward_tiers(&self) -> &Table<RewardTier> {
        &self.reward_tiers
    }

    pub fn shop_items(&self) -> &Table<ShopItem> {
        &self.shop_items
    }

    pub fn daily_messages(&self) -> &[DailyMessage] {
        &self.daily_messages
    }

    /// Stamp icons in display rotation order.
    pub fn stamp_icons(&self) -> &[String] {
        &self.stamp_icons
    }

    // ------------------------------------------------------------------
    // Category filters (declaration order preserved; empty is not an error)
    // ------------------------------------------------------------------

    pub fn drinks_by_category(&self, category: DrinkCategory) -> Vec<&Drink> {
        self.drinks.iter().filter(|d| d.category == category).collect()
    }

    pub fn snacks_by_category(&self, category: SnackCategory) -> Vec<&Snack> {
        self.snacks.iter().filter(|s| s.category == category).collect()
    }

    pub fn rabbits_by_rarity(&self, rarity: Rarity) -> Vec<&Rabbit> {
        self.rabbits.iter().filter(|r| r.rarity == rarity).collect()
    }

    // ------------------------------------------------------------------
    // Soft reference resolvers. Each fails with `DanglingReference` rather
    // than silently returning nothing.
    // ------------------------------------------------------------------

    /// Follow a drink's rabbit reference. `Ok(None)` for unsigned drinks.
    pub fn rabbit_for_drink(&self, drink: &Drink) -> Result<Option<&Rabbit>, CatalogError> {
        match &drink.rabbit_id {
            None => Ok(None),
            Some(rabbit_id) => self.rabbits.find(rabbit_id).map(Some).ok_or_else(|| {
                CatalogError::DanglingReference {
                    table: TableKind::Drinks,
                    id: drink.id.clone(),
                    field: "rabbit_id",
                    target_table: TableKind::Rabbits,
                    target_id: rabbit_id.clone(),
                }
            }),
        }
    }

    pub fn rabbit_for_snack(&self, snack: &Snack) -> Result<&Rabbit, CatalogError> {
        self.rabbits.find(&snack.rabbit_id).ok_or_else(|| {
            CatalogError::DanglingReference {
                table: TableKind::Snacks,
                id: snack.id.clone(),
                field: "rabbit_id",
                target_table: TableKind::Rabbits,
                target_id: snack.rabbit_id.clone(),
            }
        })
    }

    pub fn signature_drink(&self, rabbit: &Rabbit) -> Result<&Drink, CatalogError> {
        self.drinks.find(&rabbit.signature_drink).ok_or_else(|| {
            CatalogError::DanglingReference {
                table: TableKind::Rabbits,
                id: rabbit.id.clone(),
                field: "signature_drink",
                target_table: TableKind::Drinks,
                target_id: rabbit.signature_drink.clone(),
            }
        })
    }

    pub fn signature_snack(&self, rabbit: &Rabbit) -> Result<&Snack, CatalogError> {
        self.snacks.find(&rabbit.signature_snack).ok_or_else(|| {
            CatalogError::DanglingReference {
                table: TableKind::Rabbits,
                id: rabbit.id.clone(),
                field: "signature_snack",
                target_table: TableKind::Snacks,
                target_id: rabbit.signature_snack.clone(),
            }
        })
    }

    pub fn rabbit_for_message(&self, message: &DailyMessage) -> Result<&Rabbit, CatalogError> {
        self.rabbits.find(&message.rabbit_id).ok_or_else(|| {
            CatalogError::DanglingReference {
                table: TableKind::DailyMessages,
                id: message.rabbit_id.clone(),
                field: "rabbit_id",
                target_table: TableKind::Rabbits,
                target_id: message.rabbit_id.clone(),
            }
        })
    }

    // ------------------------------------------------------------------
    // Friendship ladder queries
    // ------------------------------------------------------------------

    /// The highest rung reached with `points`. A well-formed ladder starts
    /// at 0 points, so this only returns `None` on an empty ladder.
    pub fn level_for_points(&self, points: u32) -> Option<&FriendshipLevel> {
        self.friendship_levels
            .iter()
            .rev()
            .find(|l| points >= l.min_points)
    }

    /// The next rung above `points`, or `None` at the top of the ladder.
    pub fn next_level_after(&self, points: u32) -> Option<&FriendshipLevel> {
        self.friendship_levels.iter().find(|l| l.min_points > points)
    }

    // ------------------------------------------------------------------
    // Loyalty queries
    // ------------------------------------------------------------------

    /// The cheapest reward tier still out of reach at `stamps`.
    pub fn next_reward_tier(&self, stamps: u32) -> Option<&RewardTier> {
        self.reward_tiers.iter().find(|t| t.stamps_required > stamps)
    }

    /// Every tier redeemable at `stamps`, in declaration order.
    pub fn redeemable_tiers(&self, stamps: u32) -> Vec<&RewardTier> {
        self.reward_tiers
            .iter()
            .filter(|t| t.stamps_required <= stamps)
            .collect()
    }

    /// Shop items unlocked at `stamps`, in declaration order.
    pub fn unlocked_shop_items(&self, stamps: u32) -> Vec<&ShopItem> {
        self.shop_items
            .iter()
            .filter(|i| i.stamps_required <= stamps)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rejects_duplicate_ids() {
        let records = vec![
            Drink::new("taro-dream", "Taro Dream", DrinkCategory::Signature, Price::cents(650)),
            Drink::new("taro-dream", "Taro Dream Again", DrinkCategory::Classic, Price::cents(400)),
        ];
        let err = Table::from_records(TableKind::Drinks, records).unwrap_err();
        match err {
            CatalogError::Integrity(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(matches!(
                    &violations[0],
                    Violation::DuplicateId { id, .. } if id == "taro-dream"
                ));
            }
            other => panic!("expected Integrity, got {other}"),
        }
    }

    #[test]
    fn get_reports_not_found_with_table_name() {
        let catalog = Catalog::load().unwrap();
        let err = catalog.drinks().get("espresso-tonic").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound { table: TableKind::Drinks, .. }
        ));
    }

    #[test]
    fn ladder_queries_walk_the_rungs() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.level_for_points(0).unwrap().level, 0);
        assert_eq!(catalog.level_for_points(59).unwrap().level, 1);
        assert_eq!(catalog.level_for_points(60).unwrap().level, 2);
        assert_eq!(catalog.level_for_points(9999).unwrap().level, 5);
        assert_eq!(catalog.next_level_after(60).unwrap().level, 3);
        assert!(catalog.next_level_after(9999).is_none());
    }

    #[test]
    fn loyalty_queries_respect_thresholds() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.next_reward_tier(0).unwrap().id, "free-topping");
        assert_eq!(catalog.redeemable_tiers(15).len(), 3);
        let unlocked = catalog.unlocked_shop_items(0);
        assert!(unlocked.iter().all(|i| i.stamps_required == 0));
    }

    #[test]
    fn shared_handle_returns_the_same_catalog() {
        let first = Catalog::shared().unwrap();
        let second = Catalog::shared().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn unchecked_catalog_surfaces_dangling_reference_on_resolve() {
        let mut tables = seed::builtin_tables();
        tables.snacks.push(Snack::new(
            "mystery-snack",
            "Mystery Snack",
            SnackCategory::Sweets,
            Price::cents(100),
            "❓",
            "no-such-rabbit",
        ));
        let catalog = Catalog::from_tables_unchecked(tables).unwrap();
        let snack = catalog.snacks().get("mystery-snack").unwrap();
        let err = catalog.rabbit_for_snack(snack).unwrap_err();
        assert!(matches!(err, CatalogError::DanglingReference { .. }));
    }
}
