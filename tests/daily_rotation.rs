//! Integration tests for daily message rotation and stamp icons.

use buncafe::catalog::Catalog;
use buncafe::daily;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn same_date_always_gives_the_same_message() {
    let catalog = Catalog::load().unwrap();
    let first = daily::message_for_date(&catalog, date(2026, 3, 14)).unwrap();
    for _ in 0..10 {
        assert_eq!(daily::message_for_date(&catalog, date(2026, 3, 14)).unwrap(), first);
    }
}

#[test]
fn rotation_wraps_after_one_full_cycle() {
    let catalog = Catalog::load().unwrap();
    let len = catalog.daily_messages().len() as u64;
    let start = date(2026, 1, 1);
    let a = daily::message_for_date(&catalog, start).unwrap();
    let b = daily::message_for_date(&catalog, start + chrono::Days::new(len)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_message_speaks_through_a_real_rabbit() {
    let catalog = Catalog::load().unwrap();
    for message in catalog.daily_messages() {
        let rabbit = catalog.rabbit_for_message(message).unwrap();
        let line = daily::format_daily(&catalog, message);
        assert!(line.contains(&rabbit.name));
    }
}

#[test]
fn stamp_icons_follow_the_rotation_sequence() {
    let catalog = Catalog::load().unwrap();
    let icons = catalog.stamp_icons();
    for position in 0..(icons.len() as u32 * 2) {
        let expected = &icons[position as usize % icons.len()];
        assert_eq!(daily::stamp_icon_at(&catalog, position).unwrap(), expected);
    }
}
