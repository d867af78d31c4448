use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of drink menu categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrinkCategory {
    Signature,
    Classic,
    Yogurt,
    Seasonal,
}

impl DrinkCategory {
    pub const ALL: [DrinkCategory; 4] = [
        DrinkCategory::Signature,
        DrinkCategory::Classic,
        DrinkCategory::Yogurt,
        DrinkCategory::Seasonal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DrinkCategory::Signature => "signature",
            DrinkCategory::Classic => "classic",
            DrinkCategory::Yogurt => "yogurt",
            DrinkCategory::Seasonal => "seasonal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "signature" => Some(DrinkCategory::Signature),
            "classic" => Some(DrinkCategory::Classic),
            "yogurt" => Some(DrinkCategory::Yogurt),
            "seasonal" => Some(DrinkCategory::Seasonal),
            _ => None,
        }
    }
}

impl fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of snack menu categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SnackCategory {
    Sweets,
    Savory,
}

impl SnackCategory {
    pub const ALL: [SnackCategory; 2] = [SnackCategory::Sweets, SnackCategory::Savory];

    pub fn label(&self) -> &'static str {
        match self {
            SnackCategory::Sweets => "sweets",
            SnackCategory::Savory => "savory",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sweets" => Some(SnackCategory::Sweets),
            "savory" => Some(SnackCategory::Savory),
            _ => None,
        }
    }
}

impl fmt::Display for SnackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rarity tier for the rabbit roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A menu price in 2-decimal currency, stored as integer minor units (cents).
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Price {
    pub minor_units: u32,
}

impl Price {
    /// Create a price from minor units (650 => 6.50).
    pub const fn cents(minor_units: u32) -> Self {
        Self { minor_units }
    }

    pub fn is_free(&self) -> bool {
        self.minor_units == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.minor_units / 100, self.minor_units % 100)
    }
}

/// Visual theme for a drink card: two gradient stops plus an accent color,
/// consumed as-is by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrinkTheme {
    pub gradient_from: String,
    pub gradient_to: String,
    pub accent: String,
}

impl DrinkTheme {
    pub fn new(gradient_from: &str, gradient_to: &str, accent: &str) -> Self {
        Self {
            gradient_from: gradient_from.to_string(),
            gradient_to: gradient_to.to_string(),
            accent: accent.to_string(),
        }
    }
}

impl Default for DrinkTheme {
    fn default() -> Self {
        // House cream: used until a drink gets its own card colors
        Self::new("#fdf6ec", "#f3e4cf", "#a98a68")
    }
}

/// A drink on the cafe menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: DrinkCategory,
    #[serde(default)]
    pub theme: DrinkTheme,
    /// Rabbit this drink is named after (signature drinks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rabbit_id: Option<String>,
}

impl Drink {
    pub fn new(id: &str, name: &str, category: DrinkCategory, price: Price) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            category,
            theme: DrinkTheme::default(),
            rabbit_id: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_theme(mut self, gradient_from: &str, gradient_to: &str, accent: &str) -> Self {
        self.theme = DrinkTheme::new(gradient_from, gradient_to, accent);
        self
    }

    pub fn for_rabbit(mut self, rabbit_id: &str) -> Self {
        self.rabbit_id = Some(rabbit_id.to_string());
        self
    }
}

/// A snack on the cafe menu. Every snack has a rabbit that favors it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snack {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: SnackCategory,
    pub icon: String,
    pub rabbit_id: String,
}

impl Snack {
    pub fn new(
        id: &str,
        name: &str,
        category: SnackCategory,
        price: Price,
        icon: &str,
        rabbit_id: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            category,
            icon: icon.to_string(),
            rabbit_id: rabbit_id.to_string(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// A treat guests can buy to feed the rabbits. Feeding grants friendship points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BunTreat {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub icon: String,
    pub friendship_points: u32,
}

impl BunTreat {
    pub fn new(id: &str, name: &str, price: Price, icon: &str, friendship_points: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            icon: icon.to_string(),
            friendship_points,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// A toy guests can buy for playtime with the rabbits. Play grants more
/// friendship points than feeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BunToy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub icon: String,
    pub friendship_points: u32,
}

impl BunToy {
    pub fn new(id: &str, name: &str, price: Price, icon: &str, friendship_points: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            icon: icon.to_string(),
            friendship_points,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// One rung of the friendship ladder. Levels form an ordered ladder keyed by
/// ordinal; level 0 starts at 0 points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendshipLevel {
    pub level: u32,
    pub name: String,
    pub min_points: u32,
    pub icon: String,
    pub perk: String,
}

impl FriendshipLevel {
    pub fn new(level: u32, name: &str, min_points: u32, icon: &str, perk: &str) -> Self {
        Self {
            level,
            name: name.to_string(),
            min_points,
            icon: icon.to_string(),
            perk: perk.to_string(),
        }
    }
}

/// Temperament stats shown on a rabbit's profile card, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RabbitStats {
    pub fluffiness: u8,
    pub biteyness: u8,
    pub friendliness: u8,
    pub chaos: u8,
}

impl RabbitStats {
    pub const fn new(fluffiness: u8, biteyness: u8, friendliness: u8, chaos: u8) -> Self {
        Self {
            fluffiness,
            biteyness,
            friendliness,
            chaos,
        }
    }
}

/// A resident rabbit on the cafe roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rabbit {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub personality: String,
    pub title: String,
    pub rarity: Rarity,
    pub bio: String,
    pub stats: RabbitStats,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    /// Signature drink on the menu, by drink id
    pub signature_drink: String,
    /// Signature snack on the menu, by snack id
    pub signature_snack: String,
}

impl Rabbit {
    pub fn new(id: &str, name: &str, emoji: &str, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            personality: String::new(),
            title: String::new(),
            rarity,
            bio: String::new(),
            stats: RabbitStats::default(),
            likes: Vec::new(),
            dislikes: Vec::new(),
            signature_drink: String::new(),
            signature_snack: String::new(),
        }
    }

    pub fn with_personality(mut self, personality: &str) -> Self {
        self.personality = personality.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = bio.to_string();
        self
    }

    pub fn with_stats(mut self, stats: RabbitStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn likes(mut self, likes: &[&str]) -> Self {
        self.likes = likes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn dislikes(mut self, dislikes: &[&str]) -> Self {
        self.dislikes = dislikes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_signatures(mut self, drink_id: &str, snack_id: &str) -> Self {
        self.signature_drink = drink_id.to_string();
        self.signature_snack = snack_id.to_string();
        self
    }
}

/// A loyalty reward unlocked by collecting stamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardTier {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub stamps_required: u32,
    pub description: String,
}

impl RewardTier {
    pub fn new(id: &str, name: &str, icon: &str, stamps_required: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            stamps_required,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Merchandise in the cafe shop. Some items are gated behind a stamp count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub price: Price,
    /// Stamps a guest must hold before the item unlocks (0 = always available)
    #[serde(default)]
    pub stamps_required: u32,
    pub description: String,
}

impl ShopItem {
    pub fn new(id: &str, name: &str, icon: &str, price: Price) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            price,
            stamps_required: 0,
            description: String::new(),
        }
    }

    pub fn requires_stamps(mut self, stamps: u32) -> Self {
        self.stamps_required = stamps;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// A daily flavor-text message spoken by one of the rabbits. Several messages
/// per rabbit are fine; the table has no unique key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMessage {
    pub rabbit_id: String,
    pub message: String,
    pub emoji: String,
}

impl DailyMessage {
    pub fn new(rabbit_id: &str, message: &str, emoji: &str) -> Self {
        Self {
            rabbit_id: rabbit_id.to_string(),
            message: message.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Records addressable by a stable string id, unique within their table.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Drink {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Snack {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for BunTreat {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for BunToy {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Rabbit {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for RewardTier {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for ShopItem {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Names of the catalog tables, for the string-addressed lookup surface
/// (CLI `show`/`list` arguments and error messages).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Drinks,
    Snacks,
    BunTreats,
    BunToys,
    FriendshipLevels,
    Rabbits,
    RewardTiers,
    ShopItems,
    DailyMessages,
    StampIcons,
}

impl TableKind {
    pub const ALL: [TableKind; 10] = [
        TableKind::Drinks,
        TableKind::Snacks,
        TableKind::BunTreats,
        TableKind::BunToys,
        TableKind::FriendshipLevels,
        TableKind::Rabbits,
        TableKind::RewardTiers,
        TableKind::ShopItems,
        TableKind::DailyMessages,
        TableKind::StampIcons,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Drinks => "drinks",
            TableKind::Snacks => "snacks",
            TableKind::BunTreats => "bun_treats",
            TableKind::BunToys => "bun_toys",
            TableKind::FriendshipLevels => "friendship_levels",
            TableKind::Rabbits => "rabbits",
            TableKind::RewardTiers => "reward_tiers",
            TableKind::ShopItems => "shop_items",
            TableKind::DailyMessages => "daily_messages",
            TableKind::StampIcons => "stamp_icons",
        }
    }

    /// Parse a table name as typed on the command line. Hyphens and
    /// underscores are interchangeable.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        TableKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalized)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
