//! Built-in catalog content for the Bun & Bean cafe.
//!
//! Every table the catalog serves is declared here, in menu order. The JSON
//! seed loader can override any table file-by-file; whatever the source, the
//! result goes through the same integrity check before it is served.

use super::types::{
    BunToy, BunTreat, DailyMessage, Drink, DrinkCategory, FriendshipLevel, Price, Rabbit,
    RabbitStats, Rarity, RewardTier, ShopItem, Snack, SnackCategory,
};
use super::CatalogTables;

/// Stamp card icons, in display rotation order. The sequence is
/// presentation-significant: stamp N on a card shows icon N % len.
pub const STAMP_ICONS: [&str; 6] = ["🐾", "🥕", "🍵", "🌸", "⭐", "🧋"];

/// The drink menu, in declaration order.
pub fn seed_drinks() -> Vec<Drink> {
    let mut drinks = Vec::new();

    // Signature drinks, one per resident rabbit
    drinks.push(
        Drink::new("taro-dream", "Taro Dream Latte", DrinkCategory::Signature, Price::cents(650))
            .with_description(
                "Velvety taro root folded into steamed oat milk, topped with a lavender cloud \
of cream. Mochi naps under the counter while it steeps.",
            )
            .with_theme("#b39ddb", "#7e57c2", "#5e35b1")
            .for_rabbit("mochi"),
    );

    drinks.push(
        Drink::new(
            "strawberry-bun",
            "Strawberry Bun Latte",
            DrinkCategory::Signature,
            Price::cents(625),
        )
        .with_description(
            "Fresh strawberry puree swirled through warm milk, crowned with a bunny-shaped \
dollop of whipped cream. Megumi's favorite thing to supervise.",
        )
        .with_theme("#f8bbd0", "#ec407a", "#c2185b")
        .for_rabbit("megumi"),
    );

    drinks.push(
        Drink::new("matcha-cloud", "Matcha Cloud", DrinkCategory::Signature, Price::cents(675))
            .with_description(
                "Ceremonial matcha whisked to a standing foam over lightly sweetened milk. \
Kuro insists on watching the whisking from a safe, judgmental distance.",
            )
            .with_theme("#c5e1a5", "#7cb342", "#558b2f")
            .for_rabbit("kuro"),
    );

    drinks.push(
        Drink::new(
            "honey-carrot",
            "Honey Carrot Frappe",
            DrinkCategory::Signature,
            Price::cents(650),
        )
        .with_description(
            "Carrot juice, wildflower honey, and crushed ice blended until it glows. \
Ginger has strong opinions about the garnish.",
        )
        .with_theme("#ffe0b2", "#fb8c00", "#ef6c00")
        .for_rabbit("ginger"),
    );

    drinks.push(
        Drink::new(
            "black-sesame-moon",
            "Black Sesame Moon",
            DrinkCategory::Signature,
            Price::cents(675),
        )
        .with_description(
            "Toasted black sesame paste in silky milk under a crescent of cream. \
Best ordered after dark, when Luna deigns to appear.",
        )
        .with_theme("#b0bec5", "#455a64", "#263238")
        .for_rabbit("luna"),
    );

    drinks.push(
        Drink::new(
            "kinako-whisper",
            "Kinako Whisper",
            DrinkCategory::Signature,
            Price::cents(625),
        )
        .with_description(
            "Roasted soybean flour and brown sugar syrup in gently steamed milk, \
quiet and warm. Hana approves of quiet things.",
        )
        .with_theme("#d7ccc8", "#8d6e63", "#5d4037")
        .for_rabbit("hana"),
    );

    // Classics
    drinks.push(
        Drink::new("house-drip", "House Drip Coffee", DrinkCategory::Classic, Price::cents(350))
            .with_description("A clean, medium roast brewed by the pot. No fuss, no foam.")
            .with_theme("#bcaaa4", "#6d4c41", "#4e342e"),
    );

    drinks.push(
        Drink::new("cafe-latte", "Cafe Latte", DrinkCategory::Classic, Price::cents(475))
            .with_description("Double espresso under a deep pour of microfoam.")
            .with_theme("#d7ccc8", "#a1887f", "#6d4c41"),
    );

    drinks.push(
        Drink::new("cappuccino", "Cappuccino", DrinkCategory::Classic, Price::cents(475))
            .with_description("Equal parts espresso, steamed milk, and foam, dusted with cocoa.")
            .with_theme("#efebe9", "#a1887f", "#5d4037"),
    );

    drinks.push(
        Drink::new("hojicha-latte", "Hojicha Latte", DrinkCategory::Classic, Price::cents(525))
            .with_description("Roasted green tea with a toasty, caramel edge, steamed into milk.")
            .with_theme("#d7ccc8", "#8d6e63", "#4e342e"),
    );

    drinks.push(
        Drink::new(
            "royal-milk-tea",
            "Royal Milk Tea",
            DrinkCategory::Classic,
            Price::cents(495),
        )
        .with_description("Assam simmered directly in milk the old kissaten way.")
        .with_theme("#ffe0b2", "#bf8f5f", "#8d6e63"),
    );

    drinks.push(
        Drink::new("yuzu-soda", "Yuzu Soda", DrinkCategory::Classic, Price::cents(450))
            .with_description("Sparkling water over yuzu marmalade and a ribbon of peel.")
            .with_theme("#fff9c4", "#fdd835", "#f9a825"),
    );

    // Yogurt drinks
    drinks.push(
        Drink::new(
            "strawberry-yogurt",
            "Strawberry Yogurt Smoothie",
            DrinkCategory::Yogurt,
            Price::cents(575),
        )
        .with_description("Cultured yogurt blended with ripe strawberries, tart then sweet.")
        .with_theme("#fce4ec", "#f06292", "#ad1457"),
    );

    drinks.push(
        Drink::new(
            "mango-yogurt",
            "Mango Yogurt Smoothie",
            DrinkCategory::Yogurt,
            Price::cents(575),
        )
        .with_description("Alphonso mango and yogurt over ice, thick enough to need the wide straw.")
        .with_theme("#ffecb3", "#ffb300", "#ff8f00"),
    );

    drinks.push(
        Drink::new(
            "blueberry-yogurt",
            "Blueberry Yogurt Smoothie",
            DrinkCategory::Yogurt,
            Price::cents(575),
        )
        .with_description("Wild blueberries and honeyed yogurt, purple to the last sip.")
        .with_theme("#d1c4e9", "#5c6bc0", "#283593"),
    );

    // Seasonal rotation
    drinks.push(
        Drink::new(
            "sakura-blossom",
            "Sakura Blossom Latte",
            DrinkCategory::Seasonal,
            Price::cents(695),
        )
        .with_description(
            "Salted cherry blossom syrup in steamed milk, petals on the foam. Spring only.",
        )
        .with_theme("#fce4ec", "#f48fb1", "#ec407a"),
    );

    drinks.push(
        Drink::new(
            "pumpkin-hutch",
            "Pumpkin Hutch Latte",
            DrinkCategory::Seasonal,
            Price::cents(650),
        )
        .with_description("Roasted kabocha and warm spices; the hutch smells like autumn for weeks."),
    );

    drinks.push(
        Drink::new(
            "peppermint-snowdrift",
            "Peppermint Snowdrift",
            DrinkCategory::Seasonal,
            Price::cents(625),
        )
        .with_description("White chocolate and peppermint under a drift of shaved cream. Winter.")
        .with_theme("#e0f7fa", "#80deea", "#00838f"),
    );

    drinks.push(
        Drink::new(
            "apple-cinnamon-burrow",
            "Apple Cinnamon Burrow",
            DrinkCategory::Seasonal,
            Price::cents(625),
        )
        .with_description("Mulled apple cider with cinnamon bark, served hot in a stoneware mug.")
        .with_theme("#ffccbc", "#e64a19", "#bf360c"),
    );

    drinks
}

/// The snack menu, in declaration order.
pub fn seed_snacks() -> Vec<Snack> {
    let mut snacks = Vec::new();

    snacks.push(
        Snack::new("taiyaki", "Taiyaki", SnackCategory::Sweets, Price::cents(450), "🐟", "megumi")
            .with_description("Fish-shaped waffle filled with red bean, crisp at the fins."),
    );

    snacks.push(
        Snack::new("dango", "Hanami Dango", SnackCategory::Sweets, Price::cents(375), "🍡", "mochi")
            .with_description("Three chewy rice dumplings on a skewer, pink, white, and green."),
    );

    snacks.push(
        Snack::new("onigiri", "Onigiri", SnackCategory::Savory, Price::cents(350), "🍙", "kuro")
            .with_description("Hand-pressed rice ball with salted salmon, wrapped in crisp nori."),
    );

    snacks.push(
        Snack::new(
            "melon-pan",
            "Melon Pan",
            SnackCategory::Sweets,
            Price::cents(425),
            "🍈",
            "hana",
        )
        .with_description("Soft bun under a crackled cookie crust, no melon harmed."),
    );

    snacks.push(
        Snack::new("takoyaki", "Takoyaki", SnackCategory::Savory, Price::cents(550), "🐙", "ginger")
            .with_description("Six griddled octopus puffs under dancing bonito flakes."),
    );

    snacks.push(
        Snack::new("edamame", "Salted Edamame", SnackCategory::Savory, Price::cents(325), "🫛", "luna")
            .with_description("Steamed soybeans with flaky salt. Luna watches every pod."),
    );

    snacks.push(
        Snack::new(
            "strawberry-daifuku",
            "Strawberry Daifuku",
            SnackCategory::Sweets,
            Price::cents(475),
            "🍓",
            "megumi",
        )
        .with_description("A whole strawberry tucked into white bean paste and soft mochi."),
    );

    snacks.push(
        Snack::new("karaage", "Karaage", SnackCategory::Savory, Price::cents(575), "🍗", "ginger")
            .with_description("Twice-fried chicken, ginger-soy marinade, lemon on the side."),
    );

    snacks.push(
        Snack::new("castella", "Castella Slice", SnackCategory::Sweets, Price::cents(400), "🍰", "luna")
            .with_description("Honey sponge cake aged overnight so the crumb turns velvet."),
    );

    snacks.push(
        Snack::new("purin", "Custard Purin", SnackCategory::Sweets, Price::cents(450), "🍮", "mochi")
            .with_description("Steamed custard pudding with a dark caramel cap."),
    );

    snacks
}

/// Treats guests can buy to feed the rabbits.
pub fn seed_bun_treats() -> Vec<BunTreat> {
    let mut treats = Vec::new();

    treats.push(
        BunTreat::new("carrot-chip", "Carrot Chips", Price::cents(150), "🥕", 5)
            .with_description("Oven-dried carrot coins. The classic for a reason."),
    );

    treats.push(
        BunTreat::new("timothy-cookie", "Timothy Hay Cookie", Price::cents(200), "🍪", 8)
            .with_description("Pressed timothy hay in a biscuit the buns take seriously."),
    );

    treats.push(
        BunTreat::new("oat-sprig", "Oat Sprig", Price::cents(175), "🌾", 6)
            .with_description("A whole sprig of oats, stem and all, for leisurely nibbling."),
    );

    treats.push(
        BunTreat::new("dried-apple", "Dried Apple Rings", Price::cents(225), "🍎", 8)
            .with_description("Chewy apple rings, cut thin. Ration carefully or be mobbed."),
    );

    treats.push(
        BunTreat::new("herb-bundle", "Fresh Herb Bundle", Price::cents(250), "🌿", 10)
            .with_description("Cilantro, basil, and dill tied with twine. Peak luxury."),
    );

    treats.push(
        BunTreat::new("banana-coin", "Banana Coins", Price::cents(200), "🍌", 9)
            .with_description("Three small slices. Any more and the chaos stat applies."),
    );

    treats
}

/// Toys guests can buy for playtime. Play earns more friendship than food,
/// which surprises everyone except the rabbits.
pub fn seed_bun_toys() -> Vec<BunToy> {
    let mut toys = Vec::new();

    toys.push(
        BunToy::new("willow-ball", "Willow Ball", Price::cents(650), "🧶", 18)
            .with_description("A woven willow sphere, equal parts toy and snack."),
    );

    toys.push(
        BunToy::new("tunnel-maze", "Tunnel Maze", Price::cents(1200), "🕳️", 30)
            .with_description("Collapsible fabric tunnels. Thumping from inside means joy."),
    );

    toys.push(
        BunToy::new("chew-castle", "Cardboard Chew Castle", Price::cents(975), "🏰", 25)
            .with_description("A castle to remodel, one bite at a time."),
    );

    toys.push(
        BunToy::new("forage-mat", "Forage Mat", Price::cents(850), "🧺", 22)
            .with_description("A snuffle mat with treats hidden in the folds."),
    );

    toys.push(
        BunToy::new("jingle-keys", "Jingle Keys", Price::cents(525), "🔔", 15)
            .with_description("Plastic keys to toss around. Loud, beloved, frequently lost."),
    );

    toys
}

/// The friendship ladder, level 0 upward.
pub fn seed_friendship_levels() -> Vec<FriendshipLevel> {
    vec![
        FriendshipLevel::new(0, "Stranger", 0, "🌱", "The rabbits notice you exist."),
        FriendshipLevel::new(1, "Acquaintance", 20, "🌿", "A bun may hop within arm's reach."),
        FriendshipLevel::new(2, "Friend", 60, "🍀", "Hand-feeding unlocked at the counter."),
        FriendshipLevel::new(
            3,
            "Good Friend",
            140,
            "🌸",
            "Your bun greets you at the door. 10% off their signature drink.",
        ),
        FriendshipLevel::new(
            4,
            "Best Friend",
            280,
            "💮",
            "Lap visits permitted. Birthday card signed with a paw stamp.",
        ),
        FriendshipLevel::new(
            5,
            "Bun's Beloved",
            500,
            "💖",
            "Your name goes on their hutch plaque. The highest honor we offer.",
        ),
    ]
}

/// The resident rabbit roster.
pub fn seed_rabbits() -> Vec<Rabbit> {
    let mut rabbits = Vec::new();

    rabbits.push(
        Rabbit::new("mochi", "Mochi", "🐇", Rarity::Common)
            .with_personality("sleepy")
            .with_title("The Counter Napper")
            .with_bio(
                "Mochi was the first rabbit through the door and has moved roughly four \
meters since. He sleeps through the lunch rush and wakes precisely when \
the purin comes out of the steamer.",
            )
            .with_stats(RabbitStats::new(85, 10, 80, 15))
            .likes(&["warm spots", "purin lids", "being a paperweight"])
            .dislikes(&["vacuum cleaners", "mondays"])
            .with_signatures("taro-dream", "dango"),
    );

    rabbits.push(
        Rabbit::new("megumi", "Megumi", "🐰", Rarity::Rare)
            .with_personality("nurturing")
            .with_title("The Gentle Baker")
            .with_bio(
                "Megumi oversees the pastry case from a cushion with an unobstructed view. \
Regulars swear the taiyaki comes out better when she watches the batter \
being poured. She has never once been wrong about a timer.",
            )
            .with_stats(RabbitStats::new(90, 5, 95, 10))
            .likes(&["strawberries", "warm laps", "the 6am bake"])
            .dislikes(&["burnt sugar", "loud phones"])
            .with_signatures("strawberry-bun", "taiyaki"),
    );

    rabbits.push(
        Rabbit::new("kuro", "Kuro", "🐈‍⬛", Rarity::Uncommon)
            .with_personality("aloof")
            .with_title("The Quality Inspector")
            .with_bio(
                "Jet black and perpetually unimpressed, Kuro patrols the seating area \
auditing crumb management. Approval is rare and conveyed by a single \
slow blink. Do not touch the tail.",
            )
            .with_stats(RabbitStats::new(70, 45, 40, 35))
            .likes(&["order", "nori", "high shelves"])
            .dislikes(&["sticky tables", "being perceived"])
            .with_signatures("matcha-cloud", "onigiri"),
    );

    rabbits.push(
        Rabbit::new("ginger", "Ginger", "🐹", Rarity::Common)
            .with_personality("boisterous")
            .with_title("The Taste Tester")
            .with_bio(
                "Ginger has opinions about everything on the menu and volunteers them by \
standing on the order counter. Fast, loud, and impossible to dislike, \
she once ate a whole herb bundle in eleven seconds. Staff keep the tally.",
            )
            .with_stats(RabbitStats::new(60, 30, 85, 75))
            .likes(&["takoyaki smells", "sprints", "an audience"])
            .dislikes(&["closed doors", "waiting"])
            .with_signatures("honey-carrot", "takoyaki"),
    );

    rabbits.push(
        Rabbit::new("luna", "Luna", "🌙", Rarity::Legendary)
            .with_personality("mysterious")
            .with_title("The Night Shift")
            .with_bio(
                "Nobody remembers adopting Luna. She appears at dusk, accepts exactly one \
edamame pod, and vanishes behind the bookshelf that does not have a gap \
behind it. The security camera has never captured her arrival.",
            )
            .with_stats(RabbitStats::new(95, 20, 55, 60))
            .likes(&["dusk", "edamame", "unexplained noises"])
            .dislikes(&["flash photography", "schedules"])
            .with_signatures("black-sesame-moon", "edamame"),
    );

    rabbits.push(
        Rabbit::new("hana", "Hana", "🌸", Rarity::Uncommon)
            .with_personality("shy")
            .with_title("The Window Gardener")
            .with_bio(
                "Hana lives among the window planters and is easy to mistake for a very \
soft decoration. Sit quietly with a book for twenty minutes and she will \
relocate to the chair beside you, one hop at a time.",
            )
            .with_stats(RabbitStats::new(88, 8, 70, 5))
            .likes(&["sunbeams", "page-turning sounds", "basil flowers"])
            .dislikes(&["sudden movement", "crowds"])
            .with_signatures("kinako-whisper", "melon-pan"),
    );

    rabbits
}

/// Loyalty reward tiers, ordered by stamps required.
pub fn seed_reward_tiers() -> Vec<RewardTier> {
    let mut tiers = Vec::new();

    tiers.push(
        RewardTier::new("free-topping", "Free Topping", "✨", 5)
            .with_description("Any one topping on any drink, on the house."),
    );

    tiers.push(
        RewardTier::new("free-snack", "Free Snack", "🍡", 10)
            .with_description("One snack from the case, sweets or savory."),
    );

    tiers.push(
        RewardTier::new("free-drink", "Free Drink", "🧋", 15)
            .with_description("Any drink on the menu, signature drinks included."),
    );

    tiers.push(
        RewardTier::new("bun-meet-greet", "Bun Meet & Greet", "🐰", 25)
            .with_description("Fifteen minutes in the hutch room with a rabbit of your choice."),
    );

    tiers.push(
        RewardTier::new("golden-carrot", "Golden Carrot", "🥕", 40)
            .with_description("Our highest tier: a month of free drip and your photo on the wall."),
    );

    tiers
}

/// Shop merchandise. Stamp-gated items unlock once a guest holds enough stamps.
pub fn seed_shop_items() -> Vec<ShopItem> {
    let mut items = Vec::new();

    items.push(
        ShopItem::new("bun-plush", "Resident Bun Plush", "🧸", Price::cents(1800))
            .with_description("A hand-sewn plush of any resident rabbit. Mochi is the bestseller."),
    );

    items.push(
        ShopItem::new("enamel-pin", "Enamel Pin", "📌", Price::cents(650))
            .with_description("Rotating designs; this season it's Luna mid-vanish."),
    );

    items.push(
        ShopItem::new("sticker-sheet", "Sticker Sheet", "🌟", Price::cents(450))
            .with_description("Twelve stickers of the roster doing their signature moves."),
    );

    items.push(
        ShopItem::new("cafe-tote", "Canvas Tote", "👜", Price::cents(1400))
            .requires_stamps(5)
            .with_description("Heavy canvas with the hutch blueprint printed inside."),
    );

    items.push(
        ShopItem::new("keyring", "Paw Stamp Keyring", "🔑", Price::cents(750))
            .requires_stamps(5)
            .with_description("Brass keyring stamped with a real (washable-ink) paw print."),
    );

    items.push(
        ShopItem::new("art-postcards", "Art Postcard Set", "💌", Price::cents(800))
            .with_description("Six watercolor postcards painted by a regular, sold at cost."),
    );

    items.push(
        ShopItem::new("ceramic-mug", "Stoneware Mug", "☕", Price::cents(1650))
            .requires_stamps(10)
            .with_description("The same mugs we serve in, glazed with a hidden paw at the bottom."),
    );

    items
}

/// Daily flavor text, one message shown per day in rotation.
pub fn seed_daily_messages() -> Vec<DailyMessage> {
    vec![
        DailyMessage::new("mochi", "Mochi moved to a different warm spot today. Historic.", "☀️"),
        DailyMessage::new("megumi", "Megumi approved this morning's taiyaki batch on the first try.", "✅"),
        DailyMessage::new("kuro", "Kuro found a crumb under table four. The shame is yours, table four.", "🔎"),
        DailyMessage::new("ginger", "Ginger attempted the counter jump again. Seven out of ten.", "🏅"),
        DailyMessage::new("luna", "Luna was spotted at 6:42 pm. Allegedly.", "🌙"),
        DailyMessage::new("hana", "Hana relocated two chairs closer to the reading corner.", "📖"),
        DailyMessage::new("mochi", "Do not wake Mochi. This message is the whole update.", "😴"),
        DailyMessage::new("ginger", "Ginger's herb bundle record stands at eleven seconds.", "⏱️"),
        DailyMessage::new("megumi", "Megumi is accepting lap reservations near the pastry case.", "🧁"),
        DailyMessage::new("kuro", "Kuro blinked slowly at a customer today. They cried. Understandable.", "🖤"),
        DailyMessage::new("hana", "A sunbeam reached the window planter at 3 pm. Hana was ready.", "🌤️"),
        DailyMessage::new("luna", "The bookshelf gap remains unexplained. Luna declined to comment.", "🗄️"),
        DailyMessage::new("mochi", "Purin day. Mochi has been awake for a record forty minutes.", "🍮"),
        DailyMessage::new("ginger", "Ginger greeted every single customer before noon. All of them.", "👋"),
    ]
}

/// Bundle every built-in table into load-ready form.
pub fn builtin_tables() -> CatalogTables {
    CatalogTables {
        drinks: seed_drinks(),
        snacks: seed_snacks(),
        bun_treats: seed_bun_treats(),
        bun_toys: seed_bun_toys(),
        friendship_levels: seed_friendship_levels(),
        rabbits: seed_rabbits(),
        reward_tiers: seed_reward_tiers(),
        shop_items: seed_shop_items(),
        daily_messages: seed_daily_messages(),
        stamp_icons: STAMP_ICONS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drink_menu_has_nineteen_entries() {
        assert_eq!(seed_drinks().len(), 19);
    }

    #[test]
    fn every_signature_drink_names_a_rabbit() {
        for drink in seed_drinks() {
            match drink.category {
                DrinkCategory::Signature => {
                    assert!(drink.rabbit_id.is_some(), "{} has no rabbit", drink.id)
                }
                _ => assert!(drink.rabbit_id.is_none(), "{} should be unsigned", drink.id),
            }
        }
    }

    #[test]
    fn toys_outgrant_every_treat() {
        let best_treat = seed_bun_treats()
            .iter()
            .map(|t| t.friendship_points)
            .max()
            .unwrap();
        for toy in seed_bun_toys() {
            assert!(toy.friendship_points > best_treat, "{} undercuts treats", toy.id);
        }
    }

    #[test]
    fn ladder_starts_at_zero() {
        let levels = seed_friendship_levels();
        assert_eq!(levels[0].level, 0);
        assert_eq!(levels[0].min_points, 0);
    }

    #[test]
    fn every_rabbit_has_signatures() {
        for rabbit in seed_rabbits() {
            assert!(!rabbit.signature_drink.is_empty(), "{}", rabbit.id);
            assert!(!rabbit.signature_snack.is_empty(), "{}", rabbit.id);
        }
    }
}
