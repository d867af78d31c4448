//! Seed data loaders for data-driven catalog content.
//!
//! Every table can be overridden by a JSON file in a seed directory; tables
//! without a file fall back to the built-in content. [`export_to_dir`]
//! writes the same files, so an export followed by a load round-trips the
//! catalog losslessly. Loaded content passes through the same integrity
//! check as the built-in seeds.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::CatalogError;
use super::types::{
    BunToy, BunTreat, DailyMessage, Drink, FriendshipLevel, Rabbit, RewardTier, ShopItem, Snack,
};
use super::{seed, Catalog, CatalogTables};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("failed to parse {}: {e}", path.display()),
        ))
    })
}

fn write_json<T: Serialize>(path: &Path, records: &T) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_drinks_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Drink>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_snacks_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Snack>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_bun_treats_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<BunTreat>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_bun_toys_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<BunToy>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_friendship_levels_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<FriendshipLevel>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_rabbits_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Rabbit>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_reward_tiers_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<RewardTier>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_shop_items_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<ShopItem>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_daily_messages_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<DailyMessage>, CatalogError> {
    read_json(path.as_ref())
}

pub fn load_stamp_icons_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CatalogError> {
    read_json(path.as_ref())
}

fn load_if_present<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    into: &mut Vec<T>,
) -> Result<(), CatalogError> {
    let path = dir.join(file);
    if path.exists() {
        *into = read_json(&path)?;
        debug!("seed override: {}", path.display());
    }
    Ok(())
}

/// Build catalog tables from a seed directory. Each table comes from its
/// JSON file when present and from the built-in seeds otherwise.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<CatalogTables, CatalogError> {
    let dir = dir.as_ref();
    let mut tables = seed::builtin_tables();
    load_if_present(dir, "drinks.json", &mut tables.drinks)?;
    load_if_present(dir, "snacks.json", &mut tables.snacks)?;
    load_if_present(dir, "bun_treats.json", &mut tables.bun_treats)?;
    load_if_present(dir, "bun_toys.json", &mut tables.bun_toys)?;
    load_if_present(dir, "friendship_levels.json", &mut tables.friendship_levels)?;
    load_if_present(dir, "rabbits.json", &mut tables.rabbits)?;
    load_if_present(dir, "reward_tiers.json", &mut tables.reward_tiers)?;
    load_if_present(dir, "shop_items.json", &mut tables.shop_items)?;
    load_if_present(dir, "daily_messages.json", &mut tables.daily_messages)?;
    load_if_present(dir, "stamp_icons.json", &mut tables.stamp_icons)?;
    Ok(tables)
}

/// Write every table as a JSON seed file under `dir` (created if missing).
/// The output loads back through [`load_from_dir`] without loss.
pub fn export_to_dir<P: AsRef<Path>>(catalog: &Catalog, dir: P) -> Result<(), CatalogError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    write_json(&dir.join("drinks.json"), &catalog.drinks().iter().collect::<Vec<_>>())?;
    write_json(&dir.join("snacks.json"), &catalog.snacks().iter().collect::<Vec<_>>())?;
    write_json(
        &dir.join("bun_treats.json"),
        &catalog.bun_treats().iter().collect::<Vec<_>>(),
    )?;
    write_json(&dir.join("bun_toys.json"), &catalog.bun_toys().iter().collect::<Vec<_>>())?;
    write_json(&dir.join("friendship_levels.json"), &catalog.friendship_levels())?;
    write_json(&dir.join("rabbits.json"), &catalog.rabbits().iter().collect::<Vec<_>>())?;
    write_json(
        &dir.join("reward_tiers.json"),
        &catalog.reward_tiers().iter().collect::<Vec<_>>(),
    )?;
    write_json(
        &dir.join("shop_items.json"),
        &catalog.shop_items().iter().collect::<Vec<_>>(),
    )?;
    write_json(&dir.join("daily_messages.json"), &catalog.daily_messages())?;
    write_json(&dir.join("stamp_icons.json"), &catalog.stamp_icons())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_nonexistent_file_errors() {
        let result = load_drinks_from_json("nonexistent.json");
        assert!(result.is_err());
    }

    #[test]
    fn empty_dir_falls_back_to_builtin_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let tables = load_from_dir(dir.path()).unwrap();
        assert_eq!(tables.drinks.len(), seed::seed_drinks().len());
        assert_eq!(tables.rabbits.len(), seed::seed_rabbits().len());
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drinks.json");
        fs::write(&path, "not json").unwrap();
        let err = load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("drinks.json"));
    }
}
