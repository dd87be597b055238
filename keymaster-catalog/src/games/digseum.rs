use crate::error::CatalogError;
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;

const IDENTITY: GameIdentity = GameIdentity {
    name: "Digseum",
    platform: Platform::Pc,
    platforms_other: &[],
    is_adult_only_or_unrated: false,
};

pub mod pools {
    pub const RELICS: &str = "relics";
    pub const ZONES: &str = "zones";
    pub const UPGRADES: &str = "upgrades";
    pub const ABILITIES: &str = "abilities";
    pub const PRESTIGE: &str = "prestige";
    pub const SMALL_NUMBER: &str = "small_number";
    pub const NUMBER: &str = "number";
    pub const LARGE_NUMBER: &str = "large_number";

    pub const ALL: &[&str] = &[
        RELICS,
        ZONES,
        UPGRADES,
        ABILITIES,
        PRESTIGE,
        SMALL_NUMBER,
        NUMBER,
        LARGE_NUMBER,
    ];
}

const RELICS: &[&str] = &[
    "Ancient Tablet",
    "Angel Teardrop",
    "Bottled Fairy",
    "Ceremonial Mask",
    "Cosmic Staff",
    "Cosmic Sword",
    "Crescent Charm",
    "Crown of Thorns",
    "Decorated Spear",
    "Doomsday Hourglass",
    "Dragon Fang",
    "Dragon Scale",
    "Ember Essence",
    "Eternal Lantern",
    "Fairy Wings",
    "Fleeting Flute",
    "Giant Feather",
    "Glistening Ruby",
    "Goddess Crown",
    "Golden Monocle",
    "Heavy Coin",
    "Huge Banana",
    "Ice Mirror",
    "Iridescent Flower",
    "Key To Heaven",
    "Lightning in a Bottle",
    "Lil Cloudy",
    "Monster Skull",
    "Mr. Fun Guy",
    "Mummified Body",
    "Obsidian Sword",
    "Petrified Snake",
    "Petrified Squirrel",
    "Pharaoh Mask",
    "Rainbow Cat",
    "Rainbow Feather",
    "Runic Scroll",
    "Sacrificial Dagger",
    "Scarab Shell",
    "Snowcaller Horn",
    "Sparkling Emerald",
    "Spiritual Totem",
    "Staff of the Shaman",
    "Star Piece",
    "Stone Idol",
    "Tall Mask",
    "Tempest Staff",
    "Unbreaking Cobweb",
    "Unmelting Icicle",
    "World Tree Acorn",
    "Yeti-Fur Hood",
];

const ZONES: &[&str] = &[
    "Astral Plane",
    "Brink of Reality",
    "Cloudtop Castle",
    "Echo Cave",
    "Forest of Secrets",
    "Jungle Temple",
    "Lost Pyramids",
    "Mount Stone",
    "Mucky Marsh",
    "Mud Pit",
    "Mushroom Grotto",
    "Rainbow Bridge",
    "Snowy Summit",
    "Volcanic Wasteland",
];

const UPGRADES: &[&str] = &["Marketing", "Pickaxe Area", "Pickaxe Strength", "Stamina"];

/// Dream Tree nodes.
const ABILITIES: &[&str] = &[
    "Analyzer",
    "Ascended Relics",
    "Astrology",
    "Collapsing Dreams",
    "Daydreaming",
    "Deep Sleep",
    "Dream Fragmentation",
    "Dream Pocket",
    "Dreaming of Relics",
    "Endless Dreams",
    "Familiarity",
    "Fan Club",
    "From the Ashes",
    "Ghost Digger",
    "Godlike Relics",
    "Going Viral",
    "Gold Pocket",
    "Gone Caving",
    "Ice Cold",
    "Inspector",
    "Jungling",
    "Lost Riches",
    "Magic Mushrooms",
    "Muck Money",
    "Muddy Treasures",
    "Mystic Radar",
    "Mystic Scope",
    "Mystic Spirit",
    "One-Time",
    "Parallel Dreams",
    "Popularity",
    "Prior Expertise",
    "Prior Knowledge",
    "Prior Mastery",
    "Resilience",
    "Retain Knowledge",
    "Rock Solid",
    "Secret Sauce",
    "Semblance",
    "Spirit Pickaxe",
    "Third Eye",
    "Unchanged",
    "Understander",
    "Unyielding",
    "Valuable",
    "Where Am I?",
    "World Wonders",
];

const PRESTIGE: NumericRange = NumericRange::span(1, 5);
const SMALL_NUMBER: NumericRange = NumericRange::new(1, 21, 5);
const NUMBER: NumericRange = NumericRange::new(100, 1001, 10);
const LARGE_NUMBER: NumericRange = NumericRange::new(1000, 5001, 100);

#[derive(Debug, Clone, Copy, Default)]
pub struct Digseum;

impl Digseum {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub const fn relics(&self) -> &'static [&'static str] {
        RELICS
    }

    #[must_use]
    pub const fn zones(&self) -> &'static [&'static str] {
        ZONES
    }

    #[must_use]
    pub const fn upgrades(&self) -> &'static [&'static str] {
        UPGRADES
    }

    #[must_use]
    pub const fn abilities(&self) -> &'static [&'static str] {
        ABILITIES
    }

    #[must_use]
    pub const fn prestige(&self) -> NumericRange {
        PRESTIGE
    }

    #[must_use]
    pub const fn small_number(&self) -> NumericRange {
        SMALL_NUMBER
    }

    #[must_use]
    pub const fn number(&self) -> NumericRange {
        NUMBER
    }

    #[must_use]
    pub const fn large_number(&self) -> NumericRange {
        LARGE_NUMBER
    }
}

impl CatalogProvider for Digseum {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Find a(n) RELIC")
                .bind("RELIC", pools::RELICS, 1)
                .weight(5),
            ObjectiveTemplate::new("Find a(n) RELIC NUMBER times")
                .bind("RELIC", pools::RELICS, 1)
                .bind("NUMBER", pools::SMALL_NUMBER, 1)
                .weight(5),
            ObjectiveTemplate::new("Reach level LEVEL with RELIC")
                .bind("LEVEL", pools::SMALL_NUMBER, 1)
                .bind("RELIC", pools::RELICS, 1)
                .weight(5),
            ObjectiveTemplate::new("Reach level LEVEL with RELIC")
                .bind("LEVEL", pools::NUMBER, 1)
                .bind("RELIC", pools::RELICS, 1)
                .weight(3),
            ObjectiveTemplate::new("Reach level LEVEL with RELIC")
                .bind("LEVEL", pools::LARGE_NUMBER, 1)
                .bind("RELIC", pools::RELICS, 1)
                .time_consuming()
                .weight(1),
            ObjectiveTemplate::new("Excavate ZONE NUMBER times")
                .bind("ZONE", pools::ZONES, 1)
                .bind("NUMBER", pools::SMALL_NUMBER, 1)
                .weight(5),
            ObjectiveTemplate::new("Reach level LEVEL in ZONE")
                .bind("LEVEL", pools::SMALL_NUMBER, 1)
                .bind("ZONE", pools::ZONES, 1)
                .weight(5),
            ObjectiveTemplate::new("Reach level LEVEL in ZONE")
                .bind("LEVEL", pools::NUMBER, 1)
                .bind("ZONE", pools::ZONES, 1)
                .time_consuming()
                .weight(3),
            ObjectiveTemplate::new("Reach level LEVEL in ZONE")
                .bind("LEVEL", pools::LARGE_NUMBER, 1)
                .bind("ZONE", pools::ZONES, 1)
                .time_consuming()
                .weight(1),
            ObjectiveTemplate::new("Upgrade UPGRADE once")
                .bind("UPGRADE", pools::UPGRADES, 1)
                .weight(5),
            ObjectiveTemplate::new("Unlock ABILITY in the Dream Tree")
                .bind("ABILITY", pools::ABILITIES, 1)
                .weight(5),
            ObjectiveTemplate::new("Prestige NUMBER times")
                .bind("NUMBER", pools::PRESTIGE, 1)
                .weight(5),
            ObjectiveTemplate::new("Collect NUMBER dream fragments")
                .bind("NUMBER", pools::SMALL_NUMBER, 1)
                .weight(5),
            ObjectiveTemplate::new("Collect NUMBER dream fragments")
                .bind("NUMBER", pools::NUMBER, 1)
                .weight(3),
            ObjectiveTemplate::new("Collect NUMBER dream fragments")
                .bind("NUMBER", pools::LARGE_NUMBER, 1)
                .time_consuming()
                .weight(1),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::RELICS => Pool::from_slice(self.relics()),
            pools::ZONES => Pool::from_slice(self.zones()),
            pools::UPGRADES => Pool::from_slice(self.upgrades()),
            pools::ABILITIES => Pool::from_slice(self.abilities()),
            pools::PRESTIGE => self.prestige().into(),
            pools::SMALL_NUMBER => self.small_number().into(),
            pools::NUMBER => self.number().into(),
            pools::LARGE_NUMBER => self.large_number().into(),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }
}
