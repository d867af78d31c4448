//! Text rendering for the catalog: menus, profile cards, ladders, and the
//! string-addressed `show`/`list` surface used by the CLI.

use crate::catalog::{
    BunToy, BunTreat, Catalog, CatalogError, Drink, DrinkCategory, Rabbit, RewardTier, ShopItem,
    Snack, SnackCategory, TableKind,
};

fn stat_bar(value: u8) -> String {
    "█".repeat((value / 10) as usize)
}

pub fn drink_line(drink: &Drink) -> String {
    format!(
        "{} — {} [{}] {}",
        drink.id, drink.name, drink.category, drink.price
    )
}

pub fn snack_line(snack: &Snack) -> String {
    format!(
        "{} — {} {} [{}] {}",
        snack.id, snack.icon, snack.name, snack.category, snack.price
    )
}

pub fn treat_line(treat: &BunTreat) -> String {
    format!(
        "{} — {} {} {} (+{} pts)",
        treat.id, treat.icon, treat.name, treat.price, treat.friendship_points
    )
}

pub fn toy_line(toy: &BunToy) -> String {
    format!(
        "{} — {} {} {} (+{} pts)",
        toy.id, toy.icon, toy.name, toy.price, toy.friendship_points
    )
}

pub fn rabbit_line(rabbit: &Rabbit) -> String {
    format!(
        "{} — {} {} ({}) {}",
        rabbit.id, rabbit.emoji, rabbit.name, rabbit.rarity, rabbit.title
    )
}

pub fn tier_line(tier: &RewardTier) -> String {
    format!(
        "{} — {} {} ({} stamps)",
        tier.id, tier.icon, tier.name, tier.stamps_required
    )
}

pub fn shop_line(item: &ShopItem) -> String {
    let gate = if item.stamps_required > 0 {
        format!(" (unlocks at {} stamps)", item.stamps_required)
    } else {
        String::new()
    };
    format!("{} — {} {} {}{}", item.id, item.icon, item.name, item.price, gate)
}

/// The full drink menu grouped by category, or a single category.
pub fn format_drink_menu(catalog: &Catalog, category: Option<DrinkCategory>) -> String {
    let mut output = String::from("=== DRINKS ===\n");
    let categories: &[DrinkCategory] = match &category {
        Some(c) => std::slice::from_ref(c),
        None => &DrinkCategory::ALL,
    };
    for category in categories {
        let drinks = catalog.drinks_by_category(*category);
        if drinks.is_empty() {
            continue;
        }
        output.push_str(&format!("\n[{category}]\n"));
        for drink in drinks {
            output.push_str(&format!("  {} — {}\n", drink.name, drink.price));
            if !drink.description.is_empty() {
                output.push_str(&format!("      {}\n", drink.description));
            }
        }
    }
    output
}

/// The snack menu grouped by category, or a single category.
pub fn format_snack_menu(catalog: &Catalog, category: Option<SnackCategory>) -> String {
    let mut output = String::from("=== SNACKS ===\n");
    let categories: &[SnackCategory] = match &category {
        Some(c) => std::slice::from_ref(c),
        None => &SnackCategory::ALL,
    };
    for category in categories {
        let snacks = catalog.snacks_by_category(*category);
        if snacks.is_empty() {
            continue;
        }
        output.push_str(&format!("\n[{category}]\n"));
        for snack in snacks {
            output.push_str(&format!("  {} {} — {}\n", snack.icon, snack.name, snack.price));
            if !snack.description.is_empty() {
                output.push_str(&format!("      {}\n", snack.description));
            }
        }
    }
    output
}

/// A rabbit's profile card with resolved signature items.
pub fn format_rabbit_profile(catalog: &Catalog, rabbit: &Rabbit) -> Result<String, CatalogError> {
    let drink = catalog.signature_drink(rabbit)?;
    let snack = catalog.signature_snack(rabbit)?;

    let mut output = format!("=== {} {} ===\n", rabbit.emoji, rabbit.name);
    output.push_str(&format!("{} ({})\n", rabbit.title, rabbit.rarity));
    if !rabbit.bio.is_empty() {
        output.push_str(&format!("{}\n", rabbit.bio));
    }
    output.push('\n');
    output.push_str(&format!(
        "Fluffiness:   {:>3}/100 {}\n",
        rabbit.stats.fluffiness,
        stat_bar(rabbit.stats.fluffiness)
    ));
    output.push_str(&format!(
        "Biteyness:    {:>3}/100 {}\n",
        rabbit.stats.biteyness,
        stat_bar(rabbit.stats.biteyness)
    ));
    output.push_str(&format!(
        "Friendliness: {:>3}/100 {}\n",
        rabbit.stats.friendliness,
        stat_bar(rabbit.stats.friendliness)
    ));
    output.push_str(&format!(
        "Chaos:        {:>3}/100 {}\n",
        rabbit.stats.chaos,
        stat_bar(rabbit.stats.chaos)
    ));
    if !rabbit.likes.is_empty() {
        output.push_str(&format!("Likes: {}\n", rabbit.likes.join(", ")));
    }
    if !rabbit.dislikes.is_empty() {
        output.push_str(&format!("Dislikes: {}\n", rabbit.dislikes.join(", ")));
    }
    output.push_str(&format!("Signature drink: {} ({})\n", drink.name, drink.price));
    output.push_str(&format!(
        "Signature snack: {} {} ({})\n",
        snack.icon, snack.name, snack.price
    ));
    Ok(output)
}

pub fn format_friendship_ladder(catalog: &Catalog) -> String {
    let mut output = String::from("=== FRIENDSHIP LADDER ===\n");
    for level in catalog.friendship_levels() {
        output.push_str(&format!(
            "{} Level {} — {} ({}+ pts)\n   {}\n",
            level.icon, level.level, level.name, level.min_points, level.perk
        ));
    }
    output
}

pub fn format_reward_tiers(catalog: &Catalog) -> String {
    let mut output = String::from("=== STAMP REWARDS ===\n");
    for tier in catalog.reward_tiers().iter() {
        output.push_str(&format!(
            "{} {} — {} stamps\n   {}\n",
            tier.icon, tier.name, tier.stamps_required, tier.description
        ));
    }
    output
}

pub fn format_shop(catalog: &Catalog) -> String {
    let mut output = String::from("=== SHOP ===\n");
    for item in catalog.shop_items().iter() {
        output.push_str(&shop_line(item));
        output.push('\n');
    }
    output
}

/// One line per record for the named table, in declaration order.
pub fn list_lines(catalog: &Catalog, kind: TableKind) -> Vec<String> {
    match kind {
        TableKind::Drinks => catalog.drinks().iter().map(drink_line).collect(),
        TableKind::Snacks => catalog.snacks().iter().map(snack_line).collect(),
        TableKind::BunTreats => catalog.bun_treats().iter().map(treat_line).collect(),
        TableKind::BunToys => catalog.bun_toys().iter().map(toy_line).collect(),
        TableKind::FriendshipLevels => catalog
            .friendship_levels()
            .iter()
            .map(|l| format!("{} — {} {} ({}+ pts)", l.level, l.icon, l.name, l.min_points))
            .collect(),
        TableKind::Rabbits => catalog.rabbits().iter().map(rabbit_line).collect(),
        TableKind::RewardTiers => catalog.reward_tiers().iter().map(tier_line).collect(),
        TableKind::ShopItems => catalog.shop_items().iter().map(shop_line).collect(),
        TableKind::DailyMessages => catalog
            .daily_messages()
            .iter()
            .enumerate()
            .map(|(pos, m)| format!("{pos} — {} [{}] {}", m.emoji, m.rabbit_id, m.message))
            .collect(),
        TableKind::StampIcons => catalog
            .stamp_icons()
            .iter()
            .enumerate()
            .map(|(pos, icon)| format!("{pos} — {icon}"))
            .collect(),
    }
}

/// String-addressed record detail: the CLI's `show <table> <id>`. Tables
/// keyed by ordinal (the ladder) or position (daily messages, stamp icons)
/// accept the number as the id.
pub fn describe(catalog: &Catalog, kind: TableKind, id: &str) -> Result<String, CatalogError> {
    let not_found = || CatalogError::NotFound {
        table: kind,
        id: id.to_string(),
    };

    match kind {
        TableKind::Drinks => {
            let drink = catalog.drinks().get(id)?;
            let mut output = format!(
                "{} [{}] {}\n{}\n",
                drink.name, drink.category, drink.price, drink.description
            );
            if let Some(rabbit) = catalog.rabbit_for_drink(drink)? {
                output.push_str(&format!("Signature of {} {}\n", rabbit.emoji, rabbit.name));
            }
            output.push_str(&format!(
                "Theme: {} → {} (accent {})\n",
                drink.theme.gradient_from, drink.theme.gradient_to, drink.theme.accent
            ));
            Ok(output)
        }
        TableKind::Snacks => {
            let snack = catalog.snacks().get(id)?;
            let rabbit = catalog.rabbit_for_snack(snack)?;
            Ok(format!(
                "{} {} [{}] {}\n{}\nFavorite of {} {}\n",
                snack.icon,
                snack.name,
                snack.category,
                snack.price,
                snack.description,
                rabbit.emoji,
                rabbit.name
            ))
        }
        TableKind::BunTreats => {
            let treat = catalog.bun_treats().get(id)?;
            Ok(format!(
                "{} {} — {} (+{} friendship pts)\n{}\n",
                treat.icon, treat.name, treat.price, treat.friendship_points, treat.description
            ))
        }
        TableKind::BunToys => {
            let toy = catalog.bun_toys().get(id)?;
            Ok(format!(
                "{} {} — {} (+{} friendship pts)\n{}\n",
                toy.icon, toy.name, toy.price, toy.friendship_points, toy.description
            ))
        }
        TableKind::FriendshipLevels => {
            let ordinal: u32 = id.parse().map_err(|_| not_found())?;
            let level = catalog
                .friendship_levels()
                .iter()
                .find(|l| l.level == ordinal)
                .ok_or_else(not_found)?;
            Ok(format!(
                "{} Level {} — {} ({}+ pts)\n{}\n",
                level.icon, level.level, level.name, level.min_points, level.perk
            ))
        }
        TableKind::Rabbits => {
            let rabbit = catalog.rabbits().get(id)?;
            format_rabbit_profile(catalog, rabbit)
        }
        TableKind::RewardTiers => {
            let tier = catalog.reward_tiers().get(id)?;
            Ok(format!(
                "{} {} — {} stamps\n{}\n",
                tier.icon, tier.name, tier.stamps_required, tier.description
            ))
        }
        TableKind::ShopItems => {
            let item = catalog.shop_items().get(id)?;
            Ok(format!("{}\n{}\n", shop_line(item), item.description))
        }
        TableKind::DailyMessages => {
            let pos: usize = id.parse().map_err(|_| not_found())?;
            let message = catalog.daily_messages().get(pos).ok_or_else(not_found)?;
            Ok(format!("{}\n", crate::daily::format_daily(catalog, message)))
        }
        TableKind::StampIcons => {
            let pos: usize = id.parse().map_err(|_| not_found())?;
            let icon = catalog.stamp_icons().get(pos).ok_or_else(not_found)?;
            Ok(format!("{icon}\n"))
        }
    }
}
