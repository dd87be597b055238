use crate::error::CatalogError;
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;

const IDENTITY: GameIdentity = GameIdentity {
    name: "Magic the Gathering",
    platform: Platform::Pc,
    platforms_other: &[Platform::And, Platform::Ios, Platform::Card],
    is_adult_only_or_unrated: false,
};

pub mod pools {
    pub const LARGE_AMOUNT: &str = "large_amount";
    pub const MEDIUM_AMOUNT: &str = "medium_amount";
    pub const SMALL_AMOUNT: &str = "small_amount";
    pub const COLORS: &str = "colors";
    pub const CARD_TYPES: &str = "card_types";
    pub const ALL_TYPES: &str = "all_types";
    pub const COMMON_CREATURE_TYPES: &str = "common_creature_types";
    pub const RARE_CREATURE_TYPES: &str = "rare_creature_types";
    pub const CREATURE_TYPES: &str = "creature_types";
    pub const ARTIFACT_TYPES: &str = "artifact_types";
    pub const ENCHANTMENT_TYPES: &str = "enchantment_types";
    pub const BASIC_LAND_TYPES: &str = "basic_land_types";
    pub const LAND_TYPES: &str = "land_types";
    pub const ALL_LAND_TYPES: &str = "all_land_types";
    pub const ALL_SUB_TYPES: &str = "all_sub_types";
    pub const ALTERNATIVE_WIN_TYPES: &str = "alternative_win_types";
    pub const ALTERNATIVE_WIN_CARDS: &str = "alternative_win_cards";
    pub const ACORN_WIN_CONDITIONS: &str = "acorn_win_conditions";
    pub const ALTERNATIVE_WIN_CONDITIONS: &str = "alternative_win_conditions";
    pub const BAD_CARDS: &str = "bad_cards";

    pub const ALL: &[&str] = &[
        LARGE_AMOUNT,
        MEDIUM_AMOUNT,
        SMALL_AMOUNT,
        COLORS,
        CARD_TYPES,
        ALL_TYPES,
        COMMON_CREATURE_TYPES,
        RARE_CREATURE_TYPES,
        CREATURE_TYPES,
        ARTIFACT_TYPES,
        ENCHANTMENT_TYPES,
        BASIC_LAND_TYPES,
        LAND_TYPES,
        ALL_LAND_TYPES,
        ALL_SUB_TYPES,
        ALTERNATIVE_WIN_TYPES,
        ALTERNATIVE_WIN_CARDS,
        ACORN_WIN_CONDITIONS,
        ALTERNATIVE_WIN_CONDITIONS,
        BAD_CARDS,
    ];
}

const LARGE_AMOUNT: NumericRange = NumericRange::new(5, 41, 5);
const MEDIUM_AMOUNT: NumericRange = NumericRange::new(5, 21, 5);
const SMALL_AMOUNT: NumericRange = NumericRange::span(1, 6);

const COLORS: &[&str] = &["White", "Blue", "Black", "Red", "Green", "Colorless"];

const CARD_TYPES: &[&str] = &[
    "Artifact",
    "Battle",
    "Creature",
    "Enchantment",
    "Instant",
    "Kindred",
    "Planeswalker",
    "Sorcery",
];

const LAND: &[&str] = &["Land"];

const COMMON_CREATURE_TYPES: &[&str] = &[
    "Angel",
    "Beast",
    "Bird",
    "Cat",
    "Cleric",
    "Demon",
    "Dinosaur",
    "Dragon",
    "Druid",
    "Eldrazi",
    "Elemental",
    "Elf",
    "Goblin",
    "Human",
    "Hydra",
    "Knight",
    "Merfolk",
    "Ninja",
    "Phoenix",
    "Pirate",
    "Rogue",
    "Skeleton",
    "Shaman",
    "Sliver",
    "Snake",
    "Soldier",
    "Sphinx",
    "Spirit",
    "Vampire",
    "Warrior",
    "Wizard",
    "Zombie",
];

const RARE_CREATURE_TYPES: &[&str] = &[
    "Advisor",
    "Aetherborn",
    "Alien",
    "Ally",
    "Antelope",
    "Ape",
    "Archer",
    "Archon",
    "Armadillo",
    "Army",
    "Artificer",
    "Assassin",
    "Assembly-Worker",
    "Astartes",
    "Atog",
    "Aurochs",
    "Avatar",
    "Azra",
    "Badger",
    "Balloon",
    "Barbarian",
    "Bard",
    "Basilisk",
    "Bat",
    "Bear",
    "Beaver",
    "Beeble",
    "Beholder",
    "Berserker",
    "Blinkmoth",
    "Boar",
    "Bringer",
    "Brushwagg",
    "Camarid",
    "Camel",
    "Capybara",
    "Caribou",
    "Carrier",
    "Centaur",
    "Child",
    "Chimera",
    "Citizen",
    "Clown",
    "Cockatrice",
    "Construct",
    "Coward",
    "Coyote",
    "Crab",
    "Crocodile",
    "C’tan",
    "Custodes",
    "Cyberman",
    "Cyclops",
    "Dalek",
    "Dauthi",
    "Demigod",
    "Deserter",
    "Detective",
    "Devil",
    "Djinn",
    "Doctor",
    "Dog",
    "Drake",
    "Dreadnought",
    "Drone",
    "Dryad",
    "Dwarf",
    "Efreet",
    "Egg",
    "Elder",
    "Elephant",
    "Elk",
    "Employee",
    "Eye",
    "Faerie",
    "Ferret",
    "Fish",
    "Flagbearer",
    "Fox",
    "Fractal",
    "Frog",
    "Fungus",
    "Gamer",
    "Gargoyle",
    "Germ",
    "Giant",
    "Gith",
    "Glimmer",
    "Gnoll",
    "Gnome",
    "Goat",
    "God",
    "Golem",
    "Gorgon",
    "Graveborn",
    "Gremlin",
    "Griffin",
    "Guest",
    "Hag",
    "Halfling",
    "Hamster",
    "Harpy",
    "Hellion",
    "Hippo",
    "Hippogriff",
    "Homarid",
    "Homunculus",
    "Horror",
    "Horse",
    "Hyena",
    "Illusion",
    "Imp",
    "Incarnation",
    "Inkling",
    "Inquisitor",
    "Insect",
    "Jackal",
    "Jellyfish",
    "Juggernaut",
    "Kavu",
    "Kirin",
    "Kithkin",
    "Kobold",
    "Kor",
    "Kraken",
    "Llama",
    "Lamia",
    "Lammasu",
    "Leech",
    "Leviathan",
    "Lhurgoyf",
    "Licid",
    "Lizard",
    "Manticore",
    "Masticore",
    "Mercenary",
    "Metathran",
    "Minion",
    "Minotaur",
    "Mite",
    "Mole",
    "Monger",
    "Mongoose",
    "Monk",
    "Monkey",
    "Moonfolk",
    "Mount",
    "Mouse",
    "Mutant",
    "Myr",
    "Mystic",
    "Nautilus",
    "Necron",
    "Nephilim",
    "Nightmare",
    "Nightstalker",
    "Noble",
    "Noggle",
    "Nomad",
    "Nymph",
    "Octopus",
    "Ogre",
    "Ooze",
    "Orb",
    "Orc",
    "Orgg",
    "Otter",
    "Ouphe",
    "Ox",
    "Oyster",
    "Pangolin",
    "Peasant",
    "Pegasus",
    "Pentavite",
    "Performer",
    "Pest",
    "Phelddagrif",
    "Phyrexian",
    "Pilot",
    "Pincher",
    "Plant",
    "Porcupine",
    "Possum",
    "Praetor",
    "Primarch",
    "Prism",
    "Processor",
    "Rabbit",
    "Raccoon",
    "Ranger",
    "Rat",
    "Rebel",
    "Reflection",
    "Rhino",
    "Rigger",
    "Robot",
    "Sable",
    "Salamander",
    "Samurai",
    "Sand",
    "Saproling",
    "Satyr",
    "Scarecrow",
    "Scientist",
    "Scion",
    "Scorpion",
    "Scout",
    "Sculpture",
    "Seal",
    "Serf",
    "Serpent",
    "Servo",
    "Shade",
    "Shapeshifter",
    "Shark",
    "Sheep",
    "Siren",
    "Skunk",
    "Slith",
    "Sloth",
    "Slug",
    "Snail",
    "Soltari",
    "Spawn",
    "Specter",
    "Spellshaper",
    "Spider",
    "Spike",
    "Splinter",
    "Sponge",
    "Squid",
    "Squirrel",
    "Starfish",
    "Surrakar",
    "Survivor",
    "Synth",
    "Tentacle",
    "Tetravite",
    "Thalakos",
    "Thopter",
    "Thrull",
    "Tiefling",
    "Toy",
    "Treefolk",
    "Trilobite",
    "Triskelavite",
    "Troll",
    "Turtle",
    "Tyranid",
    "Unicorn",
    "Varmint",
    "Vedalken",
    "Volver",
    "Wall",
    "Walrus",
    "Warlock",
    "Weasel",
    "Weird",
    "Werewolf",
    "Whale",
    "Wolf",
    "Wolverine",
    "Wombat",
    "Worm",
    "Wraith",
    "Wurm",
    "Yeti",
    "Zubera",
];

const ARTIFACT_TYPES: &[&str] = &[
    "Blood",
    "Clue",
    "Equipment",
    "Food",
    "Gold",
    "Incubator",
    "Map",
    "Powerstone",
    "Treasure",
    "Vehicle",
];

const ENCHANTMENT_TYPES: &[&str] = &[
    "Aura",
    "Background",
    "Cartouche",
    "Case",
    "Class",
    "Curse",
    "Role",
    "Room",
    "Rune",
    "Saga",
    "Shrine",
];

const BASIC_LAND_TYPES: &[&str] = &["Plains", "Island", "Swamp", "Mountain", "Forest"];

const LAND_TYPES: &[&str] = &[
    "Cave",
    "Desert",
    "Gate",
    "Lair",
    "Locus",
    "Mine",
    "Power-Plant",
    "Sphere",
    "Tower",
    "Urza's",
];

const ALTERNATIVE_WIN_TYPES: &[&str] = &["Life Loss", "Mill", "Poison", "Commander Damage"];

const ALTERNATIVE_WIN_CARDS: &[&str] = &[
    "Approach of the Second Sun",
    "Azor's Elocutors",
    "Barren Glory",
    "Battle of Wits",
    "Biovisionary",
    "Call the Spirit Dragons",
    "Central Elevator // Promising Stairs",
    "Chance Encounter",
    "Coalition Victory",
    "Darksteel Reactor",
    "Epic Struggle",
    "Felidar Sovereign",
    "Gallifrey Stands",
    "Halo Fountain",
    "Happily Ever After",
    "Hedron Alignment",
    "Helix Pinnacle",
    "Hellkite Tyrant",
    "Jace, Wielder of Mysteries",
    "Laboratory Maniac",
    "Liliana's Contract",
    "Luck Bobblehead",
    "Mayael's Aria",
    "Maze's End",
    "Mechanized Production",
    "Mortal Combat",
    "Near-Death Experience",
    "Ramses, Assassin Lord",
    "Revel in Riches",
    "Simic Ascendancy",
    "Test of Endurance",
    "Thassa's Oracle",
    "Triskaidekaphile",
    "Twenty-Toed Toad",
    "Zenos yae Galvus // Shinryu, Transcendent Rival",
];

const ACORN_WIN_CONDITIONS: &[&str] = &[
    "As Luck Would Have It",
    "Form of the Approach of the Second Sun",
    "Now I Know My ABC's",
    "The Cheese Stands Alone",
];

const BAD_CARDS: &[&str] = &[
    "Alabaster Leech",
    "Apocalypse Chime",
    "Bargain",
    "Blood Funnel",
    "Break Open",
    "Great Wall",
    "Juju Bubble",
    "Mudhole",
    "Obelisk of Undoing",
    "One with Nothing",
    "Rakalite",
    "Razor Boomerang",
    "Razor Pendulum",
    "Sorrow's Path",
    "Wood Elemental",
    "Zephyr Spirit",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MagicTheGathering;

impl MagicTheGathering {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub const fn large_amount(&self) -> NumericRange {
        LARGE_AMOUNT
    }

    #[must_use]
    pub const fn medium_amount(&self) -> NumericRange {
        MEDIUM_AMOUNT
    }

    #[must_use]
    pub const fn small_amount(&self) -> NumericRange {
        SMALL_AMOUNT
    }

    #[must_use]
    pub const fn colors(&self) -> &'static [&'static str] {
        COLORS
    }

    #[must_use]
    pub const fn card_types(&self) -> &'static [&'static str] {
        CARD_TYPES
    }

    /// Card types plus `Land`.
    #[must_use]
    pub fn all_types(&self) -> Vec<&'static str> {
        [CARD_TYPES, LAND].concat()
    }

    #[must_use]
    pub const fn common_creature_types(&self) -> &'static [&'static str] {
        COMMON_CREATURE_TYPES
    }

    #[must_use]
    pub const fn rare_creature_types(&self) -> &'static [&'static str] {
        RARE_CREATURE_TYPES
    }

    #[must_use]
    pub fn creature_types(&self) -> Vec<&'static str> {
        [COMMON_CREATURE_TYPES, RARE_CREATURE_TYPES].concat()
    }

    #[must_use]
    pub const fn artifact_types(&self) -> &'static [&'static str] {
        ARTIFACT_TYPES
    }

    #[must_use]
    pub const fn enchantment_types(&self) -> &'static [&'static str] {
        ENCHANTMENT_TYPES
    }

    #[must_use]
    pub const fn basic_land_types(&self) -> &'static [&'static str] {
        BASIC_LAND_TYPES
    }

    #[must_use]
    pub const fn land_types(&self) -> &'static [&'static str] {
        LAND_TYPES
    }

    #[must_use]
    pub fn all_land_types(&self) -> Vec<&'static str> {
        [BASIC_LAND_TYPES, LAND_TYPES].concat()
    }

    /// Creature, artifact and enchantment subtypes in that order.
    #[must_use]
    pub fn all_sub_types(&self) -> Vec<&'static str> {
        [
            COMMON_CREATURE_TYPES,
            RARE_CREATURE_TYPES,
            ARTIFACT_TYPES,
            ENCHANTMENT_TYPES,
        ]
        .concat()
    }

    #[must_use]
    pub const fn alternative_win_types(&self) -> &'static [&'static str] {
        ALTERNATIVE_WIN_TYPES
    }

    #[must_use]
    pub const fn alternative_win_cards(&self) -> &'static [&'static str] {
        ALTERNATIVE_WIN_CARDS
    }

    #[must_use]
    pub const fn acorn_win_conditions(&self) -> &'static [&'static str] {
        ACORN_WIN_CONDITIONS
    }

    #[must_use]
    pub fn alternative_win_conditions(&self) -> Vec<&'static str> {
        [ALTERNATIVE_WIN_TYPES, ALTERNATIVE_WIN_CARDS].concat()
    }

    #[must_use]
    pub const fn bad_cards(&self) -> &'static [&'static str] {
        BAD_CARDS
    }
}

impl CatalogProvider for MagicTheGathering {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Attack with NUMBER creatures")
                .bind("NUMBER", pools::LARGE_AMOUNT, 1)
                .weight(4),
            ObjectiveTemplate::new("Attack with NUMBER creatures at once")
                .bind("NUMBER", pools::SMALL_AMOUNT, 1)
                .weight(2),
            ObjectiveTemplate::new("Cast NUMBER TYPE spells")
                .bind("NUMBER", pools::LARGE_AMOUNT, 1)
                .bind("TYPE", pools::CARD_TYPES, 1)
                .weight(4),
            ObjectiveTemplate::new("Kill NUMBER of your opponent's creatures")
                .bind("NUMBER", pools::LARGE_AMOUNT, 1)
                .weight(3),
            ObjectiveTemplate::new("Play NUMBER lands")
                .bind("NUMBER", pools::LARGE_AMOUNT, 1)
                .weight(3),
            ObjectiveTemplate::new("Cast NUMBER COLOR_1 or COLOR_2 spells")
                .bind("NUMBER", pools::LARGE_AMOUNT, 1)
                .bind("COLOR_1", pools::COLORS, 1)
                .bind("COLOR_2", pools::COLORS, 1)
                .weight(5),
            ObjectiveTemplate::new("Cast your commander NUMBER times")
                .bind("NUMBER", pools::SMALL_AMOUNT, 1)
                .weight(1),
            ObjectiveTemplate::new("Cast a(n) TYPE NUMBER times")
                .bind("TYPE", pools::COMMON_CREATURE_TYPES, 1)
                .bind("NUMBER", pools::MEDIUM_AMOUNT, 1)
                .weight(3),
            ObjectiveTemplate::new("Cast a(n) TYPE NUMBER times")
                .bind("TYPE", pools::RARE_CREATURE_TYPES, 1)
                .bind("NUMBER", pools::SMALL_AMOUNT, 1)
                .weight(2),
            ObjectiveTemplate::new("Create NUMBER tokens")
                .bind("NUMBER", pools::LARGE_AMOUNT, 1)
                .weight(3),
            ObjectiveTemplate::new("Play NUMBER TYPE lands")
                .bind("NUMBER", pools::SMALL_AMOUNT, 1)
                .bind("TYPE", pools::LAND_TYPES, 1)
                .weight(2),
            ObjectiveTemplate::new("Win using ALT_WIN_CON")
                .bind("ALT_WIN_CON", pools::ALTERNATIVE_WIN_CONDITIONS, 1)
                .time_consuming()
                .difficult()
                .weight(2),
            ObjectiveTemplate::new("Win a game via ALT_WIN_CON")
                .bind("ALT_WIN_CON", pools::ALTERNATIVE_WIN_TYPES, 1)
                .weight(5),
            ObjectiveTemplate::new("Play a game using BAD_CARDS")
                .bind("BAD_CARDS", pools::BAD_CARDS, 3)
                .weight(1),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::LARGE_AMOUNT => self.large_amount().into(),
            pools::MEDIUM_AMOUNT => self.medium_amount().into(),
            pools::SMALL_AMOUNT => self.small_amount().into(),
            pools::COLORS => Pool::from_slice(self.colors()),
            pools::CARD_TYPES => Pool::from_slice(self.card_types()),
            pools::ALL_TYPES => Pool::from_slice(&self.all_types()),
            pools::COMMON_CREATURE_TYPES => Pool::from_slice(self.common_creature_types()),
            pools::RARE_CREATURE_TYPES => Pool::from_slice(self.rare_creature_types()),
            pools::CREATURE_TYPES => Pool::from_slice(&self.creature_types()),
            pools::ARTIFACT_TYPES => Pool::from_slice(self.artifact_types()),
            pools::ENCHANTMENT_TYPES => Pool::from_slice(self.enchantment_types()),
            pools::BASIC_LAND_TYPES => Pool::from_slice(self.basic_land_types()),
            pools::LAND_TYPES => Pool::from_slice(self.land_types()),
            pools::ALL_LAND_TYPES => Pool::from_slice(&self.all_land_types()),
            pools::ALL_SUB_TYPES => Pool::from_slice(&self.all_sub_types()),
            pools::ALTERNATIVE_WIN_TYPES => Pool::from_slice(self.alternative_win_types()),
            pools::ALTERNATIVE_WIN_CARDS => Pool::from_slice(self.alternative_win_cards()),
            pools::ACORN_WIN_CONDITIONS => Pool::from_slice(self.acorn_win_conditions()),
            pools::ALTERNATIVE_WIN_CONDITIONS => {
                Pool::from_slice(&self.alternative_win_conditions())
            }
            pools::BAD_CARDS => Pool::from_slice(self.bad_cards()),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_lists_keep_component_order() {
        let game = MagicTheGathering::new();
        assert_eq!(game.all_types().last(), Some(&"Land"));
        assert_eq!(game.all_types().len(), 9);
        let creatures = game.creature_types();
        assert_eq!(creatures.len(), 32 + 268);
        assert!(creatures.starts_with(game.common_creature_types()));
        assert!(creatures.ends_with(game.rare_creature_types()));
        assert_eq!(game.all_land_types().len(), 15);
        assert_eq!(game.all_sub_types().len(), 300 + 10 + 11);
        assert_eq!(game.alternative_win_conditions().len(), 4 + 35);
    }

    #[test]
    fn bad_card_template_draws_three_cards() {
        let templates = MagicTheGathering::new().list_objective_templates();
        let bad = templates
            .iter()
            .find(|template| template.label == "Play a game using BAD_CARDS")
            .unwrap();
        assert_eq!(bad.binding("BAD_CARDS").map(|binding| binding.arity), Some(3));
        assert_eq!(templates.len(), 14);
    }

    #[test]
    fn amounts_step_as_declared() {
        let game = MagicTheGathering::new();
        assert_eq!(
            game.large_amount().iter().collect::<Vec<_>>(),
            vec![5, 10, 15, 20, 25, 30, 35, 40]
        );
        assert_eq!(game.medium_amount().len(), 4);
        assert_eq!(game.small_amount().last(), Some(5));
    }
}
