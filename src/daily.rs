//! Daily flavor text from the rabbit roster, plus the stamp icon rotation.
//!
//! The message of the day is deterministic: the catalog's message table is
//! walked in rotation, one entry per calendar day, so every guest sees the
//! same message and the sequence survives restarts. A random variant exists
//! for the "surprise me" path. All functions are read-only over the shared
//! catalog and safe to call concurrently.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::catalog::{Catalog, DailyMessage};

/// Message of the day for `date`: rotates through the daily-message table in
/// declaration order, one entry per day. `None` only if the table is empty.
pub fn message_for_date(catalog: &Catalog, date: NaiveDate) -> Option<&DailyMessage> {
    let messages = catalog.daily_messages();
    if messages.is_empty() {
        return None;
    }
    let day = date.num_days_from_ce();
    let pos = day.rem_euclid(messages.len() as i32) as usize;
    Some(&messages[pos])
}

/// A uniformly random message from the table.
pub fn random_message(catalog: &Catalog) -> Option<&DailyMessage> {
    let messages = catalog.daily_messages();
    if messages.is_empty() {
        return None;
    }
    let pos = rand::thread_rng().gen_range(0..messages.len());
    Some(&messages[pos])
}

/// Icon stamped at `position` on a loyalty card (0-based), following the
/// fixed rotation sequence.
pub fn stamp_icon_at(catalog: &Catalog, position: u32) -> Option<&str> {
    let icons = catalog.stamp_icons();
    if icons.is_empty() {
        return None;
    }
    Some(icons[position as usize % icons.len()].as_str())
}

/// Single-line display form, with the speaking rabbit named when the
/// reference resolves.
pub fn format_daily(catalog: &Catalog, message: &DailyMessage) -> String {
    match catalog.rabbit_for_message(message) {
        Ok(rabbit) => format!("{} {} {}: {}", message.emoji, rabbit.emoji, rabbit.name, message.message),
        Err(_) => format!("{} {}", message.emoji, message.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rotation_is_deterministic_and_sequential() {
        let catalog = Catalog::load().unwrap();
        let today = message_for_date(&catalog, date(2026, 8, 6)).unwrap();
        let same_day = message_for_date(&catalog, date(2026, 8, 6)).unwrap();
        assert_eq!(today, same_day);

        let messages = catalog.daily_messages();
        let a = message_for_date(&catalog, date(2026, 8, 6)).unwrap();
        let b = message_for_date(&catalog, date(2026, 8, 7)).unwrap();
        let pos_a = messages.iter().position(|m| m == a).unwrap();
        let pos_b = messages.iter().position(|m| m == b).unwrap();
        assert_eq!((pos_a + 1) % messages.len(), pos_b);
    }

    #[test]
    fn rotation_covers_the_whole_table() {
        let catalog = Catalog::load().unwrap();
        let len = catalog.daily_messages().len() as u32;
        let start = date(2026, 1, 1);
        let mut seen = std::collections::HashSet::new();
        for offset in 0..len {
            let day = start + chrono::Days::new(offset as u64);
            let message = message_for_date(&catalog, day).unwrap();
            seen.insert(message.message.clone());
        }
        assert_eq!(seen.len(), len as usize);
    }

    #[test]
    fn stamp_icons_rotate() {
        let catalog = Catalog::load().unwrap();
        let len = catalog.stamp_icons().len() as u32;
        assert_eq!(stamp_icon_at(&catalog, 0), stamp_icon_at(&catalog, len));
        assert_ne!(stamp_icon_at(&catalog, 0), stamp_icon_at(&catalog, 1));
    }

    #[test]
    fn format_names_the_rabbit() {
        let catalog = Catalog::load().unwrap();
        let message = message_for_date(&catalog, date(2026, 8, 6)).unwrap();
        let rabbit = catalog.rabbit_for_message(message).unwrap();
        let line = format_daily(&catalog, message);
        assert!(line.contains(&rabbit.name));
        assert!(line.contains(&message.message));
    }

    #[test]
    fn random_message_comes_from_the_table() {
        let catalog = Catalog::load().unwrap();
        let message = random_message(&catalog).unwrap();
        assert!(catalog.daily_messages().contains(message));
    }
}
