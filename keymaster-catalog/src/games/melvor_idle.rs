//! Melvor Idle, with content gated on the DLC the player owns.
//!
//! Gated pools are the base table followed by each owned expansion in
//! release order: Atlas of Discovery, Throne of the Herald, Into the Abyss.

use crate::buckets::{Bucket, WeightedBuckets};
use crate::error::CatalogError;
use crate::options::{ContentPack, GameOptions, PackSet};
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;
use log::trace;
use rand::{Rng, RngCore};

const IDENTITY: GameIdentity = GameIdentity {
    name: "Melvor Idle",
    platform: Platform::Pc,
    platforms_other: &[Platform::And, Platform::Ios],
    is_adult_only_or_unrated: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MelvorDlc {
    AtlasOfDiscovery,
    ThroneOfTheHerald,
    IntoTheAbyss,
}

impl ContentPack for MelvorDlc {
    const OPTION_KEY: &'static str = "melvor_idle_dlc_owned";
    const DISPLAY_NAME: &'static str = "Melvor Idle DLC Owned";
    const ALL: &'static [Self] = &[
        Self::AtlasOfDiscovery,
        Self::ThroneOfTheHerald,
        Self::IntoTheAbyss,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::AtlasOfDiscovery => "Atlas of Discovery",
            Self::ThroneOfTheHerald => "Throne of the Herald",
            Self::IntoTheAbyss => "Into the Abyss",
        }
    }
}

pub mod pools {
    pub const GAME_MODES: &str = "game_modes";
    pub const LEVELS: &str = "levels";
    pub const EARLY_SKILL_LEVELS: &str = "early_skill_levels";
    pub const LATE_SKILL_LEVELS: &str = "late_skill_levels";
    pub const ABYSSAL_LEVELS: &str = "abyssal_levels";
    pub const EARLY_ABYSSAL_LEVELS: &str = "early_abyssal_levels";
    pub const LATE_ABYSSAL_LEVELS: &str = "late_abyssal_levels";
    pub const LOW_NUMBERS: &str = "low_numbers";
    pub const MEDIUM_NUMBERS: &str = "medium_numbers";
    pub const HIGH_NUMBERS: &str = "high_numbers";
    /// Re-drawn on every resolution; see [`super::MelvorIdle::random_range`].
    pub const RANDOM_RANGE: &str = "random_range";
    pub const MASTERY: &str = "mastery";
    pub const BASE_SKILLS: &str = "base_skills";
    pub const COMBAT_SKILLS: &str = "combat_skills";
    pub const NON_COMBAT_SKILLS: &str = "non_combat_skills";
    pub const SKILLS: &str = "skills";
    pub const INTO_THE_ABYSS_SKILLS: &str = "into_the_abyss_skills";
    pub const BOSSES: &str = "bosses";
    pub const DUNGEONS: &str = "dungeons";
    pub const EVENTS: &str = "events";
    pub const MONSTERS: &str = "monsters";

    pub const ALL: &[&str] = &[
        GAME_MODES,
        LEVELS,
        EARLY_SKILL_LEVELS,
        LATE_SKILL_LEVELS,
        ABYSSAL_LEVELS,
        EARLY_ABYSSAL_LEVELS,
        LATE_ABYSSAL_LEVELS,
        LOW_NUMBERS,
        MEDIUM_NUMBERS,
        HIGH_NUMBERS,
        RANDOM_RANGE,
        MASTERY,
        BASE_SKILLS,
        COMBAT_SKILLS,
        NON_COMBAT_SKILLS,
        SKILLS,
        INTO_THE_ABYSS_SKILLS,
        BOSSES,
        DUNGEONS,
        EVENTS,
        MONSTERS,
    ];
}

const BASE_LEVELS: &[u32] = &[10, 20, 30, 40, 50, 60, 70, 80, 90, 99];
const THRONE_OF_THE_HERALD_LEVELS: &[u32] = &[110, 120];
const EARLY_LEVEL_COUNT: usize = 4;

const ABYSSAL_LEVELS: &[u32] = &[10, 20, 30, 40, 50, 60];
const EARLY_ABYSSAL_LEVEL_COUNT: usize = 2;

const LOW_NUMBERS: NumericRange = NumericRange::new(5, 101, 5);
const MEDIUM_NUMBERS: NumericRange = NumericRange::new(50, 301, 10);
const HIGH_NUMBERS: NumericRange = NumericRange::new(250, 1001, 50);
const MASTERY: NumericRange = NumericRange::span(2, 100);

/// Shares of the kill-count ranges, out of 100.
const LOW_SHARE: u32 = 25;
const MEDIUM_SHARE: u32 = 25;
const HIGH_SHARE: u32 = 50;

const GAME_MODES: &[&str] = &["Normal", "Hardcore", "Adventure", "Ancient Relics"];

const BASE_COMBAT_SKILLS: &[&str] = &[
    "Attack",
    "Defence",
    "Hitpoints",
    "Magic",
    "Prayer",
    "Ranged",
    "Slayer",
    "Strength",
];

const BASE_NON_COMBAT_SKILLS: &[&str] = &[
    "Agility",
    "Astrology",
    "Cooking",
    "Crafting",
    "Farming",
    "Firemaking",
    "Fishing",
    "Fletching",
    "Herblore",
    "Magic",
    "Mining",
    "Runecrafting",
    "Smithing",
    "Summoning",
    "Thieving",
    "Township",
    "Woodcutting",
];

const ATLAS_OF_DISCOVERY_SKILLS: &[&str] = &["Archaeology", "Cartography"];

const INTO_THE_ABYSS_COMBAT_SKILLS: &[&str] = &["Corruption"];

const INTO_THE_ABYSS_NON_COMBAT_SKILLS: &[&str] = &["Harvesting"];

const BASE_BOSSES: &[&str] = &[
    "Mumma Chicken",
    "Zombie Leader",
    "Bandit Leader",
    "Elder Wizard",
    "Spider King",
    "Miolite Monarch",
    "The Kraken",
    "Protector of Ice",
    "Elder Dragon",
    "Malcs, the Guardian of Melvor",
    "Malcs, the Leader of Dragons",
    "Aeris",
    "Glacia",
    "Terran",
    "Ragnar",
    "Ahrenia",
    "Bane, Instrument of Fear",
];

const ATLAS_OF_DISCOVERY_BOSSES: &[&str] = &[
    "Lava Golem",
    "Furious Mahogany",
    "Puppet Master",
    "Soul Taker Witch",
    "Nagaia",
];

const THRONE_OF_THE_HERALD_BOSSES: &[&str] = &[
    "Morellia",
    "Trogark",
    "RaZu, Lord of the Skies",
    "Spider Queen",
    "Lady Darkheart",
    "Fiozor, the Ancient Necromancer",
    "The Herald",
];

const INTO_THE_ABYSS_BOSSES: &[&str] = &[
    "Abyssara, the Abyssal Warden",
    "Felth, the Toxic Martyr",
    "Karn, the Fear Bringer",
    "Vruul, the Withering Devourer",
    "Anketh, the Silent Harbinger",
    "Za-Kul, the Tendril Nightmare",
    "Nihlus, the Void Gazer",
    "Xon, the Abussal King",
];

const BASE_DUNGEONS: &[&str] = &[
    "Chicken Coop",
    "Undead Graveyard",
    "Bandit Base",
    "Hall of Wizards",
    "Spider Forest",
    "Miolite Caves",
    "Deep Sea Ship",
    "Frozen Cove",
    "Dragons Den",
    "Volcanic Cave",
    "Infernal Stronghold",
    "Air God Dungeon",
    "Water God Dungeon",
    "Earth God Dungeon",
    "Fire God Dungeon",
    "Stronghold of the Undead",
    "Stronghold of Magic",
    "Stronghold of Dragons",
    "Stronghold of the Gods",
];

const ATLAS_OF_DISCOVERY_DUNGEONS: &[&str] = &[
    "Golem Territory",
    "Unholy Forest",
    "Trickery Temple",
    "Cult Grounds",
    "Underwater City",
];

const THRONE_OF_THE_HERALD_DUNGEONS: &[&str] = &[
    "Ancient Sanctuary",
    "Underground Lava Lake",
    "Lightning Region",
    "Lair of the Spider Queen",
    "Cursed Forest",
    "Necromancers Palace",
];

const INTO_THE_ABYSS_DUNGEONS: &[&str] = &[
    "The Abyssal Approach",
    "Into the Abyss",
    "Depths of Woe",
    "Depths of Decay",
    "Depths of Fear",
    "Depths of Ruin",
    "Depths of Isolation",
    "Depths of Dissolve",
    "Depths of Resolve",
    "Stronghold of Blight",
    "Stronghold of Fear",
    "Stronghold of Nightmares",
    "Stronghold of the Overlords",
];

const BASE_EVENTS: &[&str] = &["Into the Mist", "Impending Darkness Event"];

const THRONE_OF_THE_HERALD_EVENTS: &[&str] = &["Throne of the Herald"];

const INTO_THE_ABYSS_EVENTS: &[&str] = &["The Final Depth"];

const BASE_MONSTERS: &[&str] = &[
    "Adamant Knight",
    "Adult Farmer",
    "Aeris",
    "Ahrenia (Stronghold)",
    "Air Golem",
    "Air Guard",
    "Air Monster",
    "Aleron",
    "Angel",
    "Bandit Leader",
    "Bandit Trainee",
    "Bandit",
    "Bat",
    "Big Bat",
    "Black Dragon",
    "Black Knight",
    "Blue Dragon",
    "Bounty Hunter",
    "Brown Spider",
    "Cerberus",
    "Chaotic Greater Dragon",
    "Chick",
    "Chicken",
    "Confused Pirate",
    "Cow",
    "Cursed Lich",
    "Cursed Maiden",
    "Cursed Pirate Captain",
    "Dark Horned Elite",
    "Dark Wizard",
    "Druid",
    "Earth Golem",
    "Earth Guard",
    "Earth Monster",
    "Elder Dragon",
    "Elder Vampire",
    "Elder Wizard",
    "Elementalist (Stronghold)",
    "Elementalist",
    "Elerine Archer",
    "Elerine Mage",
    "Elerine Warrior",
    "Evil Spider",
    "Eye of Fear",
    "Eyes",
    "Fairy",
    "Fearful Eye",
    "Fierce Devil (Stronghold)",
    "Fire Golem",
    "Fire Guard",
    "Fire Monster",
    "Fire Spirit",
    "First Mate",
    "Frozen Archer",
    "Frozen Mammoth",
    "Furious Horned Elite",
    "Ghost Mercenary",
    "Ghost Sailor",
    "Ghost",
    "Giant Crab",
    "Giant Moth",
    "Glacia",
    "Golbin",
    "Goo Monster",
    "Greater Skeletal Dragon",
    "Green Dragon",
    "Green Goo Monster",
    "Green Slime",
    "Griffin",
    "Hill Giant",
    "Holy Archer",
    "Hunting Greater Dragon",
    "Ice Monster",
    "Ice Troll",
    "Ice",
    "Ignis",
    "Incendius",
    "Junior Farmer",
    "Ku-tul",
    "Leech",
    "Legaran Wurm",
    "Lissia",
    "Lots of Eyes",
    "Malcs, the Guardian of Melvor",
    "Malcs, the Leader of Dragons",
    "Many Eyed Monster",
    "Master Farmer",
    "Master Wizard",
    "Miolite Monarch",
    "Miolite Sprig",
    "Miolite Trio",
    "Miolite Warden",
    "Mistral",
    "Mithril Knight",
    "Moist Monster",
    "Moss Giant",
    "Mumma Chicken",
    "Murtia",
    "Necromancer",
    "Noxious Serpent",
    "Ophidia",
    "Paladin",
    "Pegasus",
    "Phoenix",
    "Pirate Captain",
    "Pirate",
    "Plant",
    "Prat, the Guardian of Secrets (Stronghold)",
    "Prat, the Guardian of Secrets",
    "Prat, the Protector of Secrets",
    "Priest",
    "Protector of Ice",
    "Purple Goo Monster",
    "Pyra",
    "Raging Horned Elite",
    "Ragnar",
    "Rancora Spider",
    "Ranged Golbin",
    "Red Devil",
    "Red Dragon",
    "Resurrected Eye",
    "Rokken",
    "Rune Knight",
    "Sand Beast",
    "Scattered Goo Monster",
    "Seagull",
    "Seething Horned Elite",
    "Shaman",
    "Shipwreck Beast",
    "Skeleton",
    "Slime Shooter",
    "Spider King",
    "Spider",
    "Spiked Red Claw",
    "Steel Knight",
    "Strange Eyed Monster",
    "Superior Eyed Monster",
    "Sweaty Monster",
    "Tentacle",
    "Terran",
    "The Eye",
    "The Kraken",
    "Thief",
    "Turkul Archers",
    "Turkul General",
    "Turkul Giant",
    "Turkul Riders",
    "Turkul Throwers",
    "Umbora",
    "Valkyrie",
    "Vampiric Bat",
    "Venomous Snake",
    "Vicious Serpent",
    "Voltaire",
    "Water Golem",
    "Water Guard",
    "Water Monster",
    "Wet Monster",
    "Wicked Greater Dragon",
    "Wizard",
    "Zombie Hand",
    "Zombie Leader",
    "Zombie",
];

const ATLAS_OF_DISCOVERY_MONSTERS: &[&str] = &[
    "Angry Teak",
    "Blind Archer",
    "Blind Ghost",
    "Blind Mage",
    "Blind Warrior",
    "Crystal Barrager",
    "Crystal Behemoth",
    "Crystal Manipulator",
    "Crystal Prowler",
    "Crystal Shatterer",
    "Crystal Smasher",
    "Cult Imp",
    "Cult Member",
    "Cult Monster",
    "Cursed Spirit",
    "Earth Golem",
    "Evil Oak",
    "Fake Door",
    "Furious Mahogany",
    "Granite Golem",
    "Grumpy Willow",
    "Illusive Roots",
    "Lady Darkheart",
    "Lava Golem",
    "Lich",
    "Magic Golem",
    "Magic Mirror",
    "Mermaid Archer",
    "Merman Guard",
    "Merman",
    "Nagaia",
    "Poison Bloater",
    "Poison Leecher",
    "Poison Roamer",
    "Poison Slime",
    "Possessed Barrel",
    "Puppet Master",
    "Raging Maple",
    "Ranged Golem",
    "Soul Taker Witch",
    "Treacherous Jellyfish",
    "Tree Giant",
    "Tree Spirit",
];

const THRONE_OF_THE_HERALD_MONSTERS: &[&str] = &[
    "Alraune",
    "Arctair",
    "Banshee",
    "Basher Spider",
    "Bel-Noth",
    "Burning Snake",
    "Cockatrice",
    "Conda",
    "Cursed Skeleton Warrior",
    "Dark Knight",
    "Enforcer Spider",
    "Fierce Devil",
    "Fiozor, the Ancient Necromancer",
    "Frost Golem",
    "Goliath Werewolf",
    "Gret-Yun",
    "Guardian Spider",
    "Guardian of the Herald",
    "Harkair",
    "Hungry Plant",
    "Ice Hydra",
    "Infernal Golem",
    "Kongamato",
    "Large Ice Troll",
    "Leviathan",
    "Lightning Golem",
    "Lightning Monkey",
    "Lightning Spirit",
    "Magic Fire Demon",
    "Manticore",
    "Monster Croc",
    "Morellia",
    "Mummy",
    "Phantom",
    "Plague Doctor",
    "Poison Toad",
    "Polar Bear",
    "RaZu, Lord of the Skies",
    "Scouter Spider",
    "Shadow Beast",
    "Siren",
    "Spectral Ice Wolf",
    "Spectre",
    "Spider Queen",
    "Statue",
    "Stone Snake",
    "Torvair",
    "Trapper Spider",
    "Trogark",
    "Twin Sea Dragon Serpent",
    "Undead Werewolf",
    "Vampire",
    "Vorloran Devastator",
    "Vorloran Protector",
    "Vorloran Watcher",
    "Wicked Spider",
];

const INTO_THE_ABYSS_MONSTERS: &[&str] = &[
    "Abyssal Bat",
    "Abyssal Chicken",
    "Abyssal Cow",
    "Abyssal Plant",
    "Abyssal Scarecrow",
    "Abyssal Swooper",
    "Abyssal Wallclimber",
    "Abyssara, the Abyssal Warden",
    "Anketh, the Silent Harbinger",
    "Blighted Mantis",
    "Blighted Maw",
    "Blighted Moth",
    "Blighted Shadewing",
    "Blighted Sprayer",
    "Blighted Wisp",
    "Catacomb Sporeslinger",
    "Catacomb Terror",
    "Catacomb Wraith",
    "Catacomb Wurm",
    "Crimson Hound",
    "Crimson Leech",
    "Crimson Viper",
    "Dreadwalker Ghoul",
    "Dreadwalker Revenant",
    "Dreadwalker Wight",
    "Echo Drifter",
    "Echo Horror",
    "Echo Specter",
    "Echo Walker",
    "Eldritch Aberration",
    "Eldritch Ghoul",
    "Eldritch Mindeater",
    "Eldritch Phantom",
    "Eldritch Seeker",
    "Eldritch Soulbinder",
    "Eldritch Stalker",
    "Felth, the Toxic Martyr",
    "Fractured Beast",
    "Fractured Manticore",
    "Fractured Wyvern",
    "Greater Void Artificer",
    "Greater Void Entity",
    "Greater Void Vagrant",
    "Hollow Harbinger",
    "Hollow Nightmare",
    "Hollow Reaper",
    "Karn, the Fear Bringer",
    "Murmuring Trapper",
    "Murmuring Treant",
    "Murmuring Wollowtails",
    "Mutating Chicken",
    "Mutating Cow",
    "Mutating Plant",
    "Mutating Scarecrow",
    "Nhilus, the Void Gazer",
    "Petrifying Basilisk",
    "Petrifying Behemoth",
    "Petrifying Drake",
    "Ravenous Dreadwing",
    "Ravenous Razortalon",
    "Ravenous Shadowfang",
    "Shadow Illusion",
    "Shadow Tormentor",
    "Shadow Trickster",
    "Silentsnap Giantcrab",
    "Silentsnap Siren",
    "Silentsnap Tortoise",
    "Smog Fiend",
    "Smog Golem",
    "Smog Slime",
    "Smog Virefang",
    "Tangled Serpent",
    "Tangled Thornbeast",
    "Tangled Thorns",
    "Tangled Weaver",
    "Toxic Bloom",
    "Toxic Serpent",
    "Toxic Swarm",
    "Void Apostle",
    "Void Doppelganger",
    "Void Dweller",
    "Void Gargantuan",
    "Void Harbinger",
    "Void Nightstalker",
    "Vruul, the Withering Devourer",
    "Wailing Ambusher",
    "Wailing Poltergeist",
    "Wailing Shade",
    "Whispering Drifter",
    "Whispering Manta",
    "Whispering Octopus",
    "Withering Bonearcher",
    "Withering Boneguard",
    "Withering Bonemage",
    "Za-Kul, the Tendril Nightmare",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MelvorIdle {
    dlc: PackSet<MelvorDlc>,
}

impl Default for MelvorIdle {
    fn default() -> Self {
        Self::new(PackSet::all())
    }
}

impl MelvorIdle {
    #[must_use]
    pub const fn new(dlc: PackSet<MelvorDlc>) -> Self {
        Self { dlc }
    }

    /// Bind `melvor_idle_dlc_owned` from host options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPack`] when the option names a DLC
    /// outside [`MelvorDlc::ALL`].
    pub fn from_options(options: &GameOptions) -> Result<Self, CatalogError> {
        Ok(Self::new(options.pack_set()?))
    }

    #[must_use]
    pub const fn dlc_owned(&self) -> &PackSet<MelvorDlc> {
        &self.dlc
    }

    #[must_use]
    pub fn has_dlc_atlas_of_discovery(&self) -> bool {
        self.dlc.contains(MelvorDlc::AtlasOfDiscovery)
    }

    #[must_use]
    pub fn has_dlc_throne_of_the_herald(&self) -> bool {
        self.dlc.contains(MelvorDlc::ThroneOfTheHerald)
    }

    #[must_use]
    pub fn has_dlc_into_the_abyss(&self) -> bool {
        self.dlc.contains(MelvorDlc::IntoTheAbyss)
    }

    /// Base table followed by the table of every owned DLC, in release order.
    fn gated<T: Copy>(&self, base: &[T], extensions: [&[T]; 3]) -> Vec<T> {
        let mut list = base.to_vec();
        for (dlc, extension) in MelvorDlc::ALL.iter().zip(extensions) {
            if self.dlc.contains(*dlc) {
                list.extend_from_slice(extension);
            }
        }
        list
    }

    #[must_use]
    pub const fn game_modes(&self) -> &'static [&'static str] {
        GAME_MODES
    }

    #[must_use]
    pub fn levels(&self) -> Vec<u32> {
        self.gated(BASE_LEVELS, [&[], THRONE_OF_THE_HERALD_LEVELS, &[]])
    }

    #[must_use]
    pub fn early_skill_levels(&self) -> Vec<u32> {
        let mut levels = self.levels();
        levels.truncate(EARLY_LEVEL_COUNT);
        levels
    }

    #[must_use]
    pub fn late_skill_levels(&self) -> Vec<u32> {
        self.levels().split_off(EARLY_LEVEL_COUNT)
    }

    #[must_use]
    pub const fn abyssal_levels(&self) -> &'static [u32] {
        ABYSSAL_LEVELS
    }

    #[must_use]
    pub fn early_abyssal_levels(&self) -> &'static [u32] {
        &ABYSSAL_LEVELS[..EARLY_ABYSSAL_LEVEL_COUNT]
    }

    #[must_use]
    pub fn late_abyssal_levels(&self) -> &'static [u32] {
        &ABYSSAL_LEVELS[EARLY_ABYSSAL_LEVEL_COUNT..]
    }

    #[must_use]
    pub const fn low_numbers(&self) -> NumericRange {
        LOW_NUMBERS
    }

    #[must_use]
    pub const fn medium_numbers(&self) -> NumericRange {
        MEDIUM_NUMBERS
    }

    #[must_use]
    pub const fn high_numbers(&self) -> NumericRange {
        HIGH_NUMBERS
    }

    /// Low, medium and high kill-count ranges with their shares.
    ///
    /// # Errors
    ///
    /// Only fails if every share is zero.
    pub fn range_buckets(&self) -> Result<WeightedBuckets<NumericRange>, CatalogError> {
        WeightedBuckets::new(vec![
            Bucket {
                share: LOW_SHARE,
                value: LOW_NUMBERS,
            },
            Bucket {
                share: MEDIUM_SHARE,
                value: MEDIUM_NUMBERS,
            },
            Bucket {
                share: HIGH_SHARE,
                value: HIGH_NUMBERS,
            },
        ])
    }

    /// Pick one of the kill-count ranges using the thread-local RNG.
    ///
    /// This is the one non-deterministic pool in the catalog: repeated calls
    /// may return different ranges for the same configuration.
    #[must_use]
    pub fn random_range(&self) -> NumericRange {
        self.random_range_with(&mut rand::thread_rng())
    }

    pub fn random_range_with<R>(&self, rng: &mut R) -> NumericRange
    where
        R: Rng + ?Sized,
    {
        let range = self
            .range_buckets()
            .map_or(HIGH_NUMBERS, |buckets| *buckets.choose(rng));
        trace!("melvor random_range drew {range:?}");
        range
    }

    #[must_use]
    pub const fn mastery(&self) -> NumericRange {
        MASTERY
    }

    #[must_use]
    pub const fn base_combat_skills(&self) -> &'static [&'static str] {
        BASE_COMBAT_SKILLS
    }

    #[must_use]
    pub const fn base_non_combat_skills(&self) -> &'static [&'static str] {
        BASE_NON_COMBAT_SKILLS
    }

    /// Combat and non-combat skills, sorted, with Magic listed once.
    #[must_use]
    pub fn base_skills(&self) -> Vec<&'static str> {
        let mut skills = [BASE_COMBAT_SKILLS, BASE_NON_COMBAT_SKILLS].concat();
        skills.sort_unstable();
        skills.dedup();
        skills
    }

    fn into_the_abyss_only_skills() -> Vec<&'static str> {
        [INTO_THE_ABYSS_COMBAT_SKILLS, INTO_THE_ABYSS_NON_COMBAT_SKILLS].concat()
    }

    /// Into the Abyss skills followed by every base skill, for abyssal levels.
    #[must_use]
    pub fn into_the_abyss_skills(&self) -> Vec<&'static str> {
        let mut skills = Self::into_the_abyss_only_skills();
        skills.extend(self.base_skills());
        skills
    }

    #[must_use]
    pub fn combat_skills(&self) -> Vec<&'static str> {
        self.gated(BASE_COMBAT_SKILLS, [&[], &[], INTO_THE_ABYSS_COMBAT_SKILLS])
    }

    #[must_use]
    pub fn non_combat_skills(&self) -> Vec<&'static str> {
        self.gated(
            BASE_NON_COMBAT_SKILLS,
            [
                ATLAS_OF_DISCOVERY_SKILLS,
                &[],
                INTO_THE_ABYSS_NON_COMBAT_SKILLS,
            ],
        )
    }

    #[must_use]
    pub fn skills(&self) -> Vec<&'static str> {
        let into_the_abyss = Self::into_the_abyss_only_skills();
        self.gated(
            &self.base_skills(),
            [ATLAS_OF_DISCOVERY_SKILLS, &[], into_the_abyss.as_slice()],
        )
    }

    #[must_use]
    pub fn bosses(&self) -> Vec<&'static str> {
        self.gated(
            BASE_BOSSES,
            [
                ATLAS_OF_DISCOVERY_BOSSES,
                THRONE_OF_THE_HERALD_BOSSES,
                INTO_THE_ABYSS_BOSSES,
            ],
        )
    }

    #[must_use]
    pub fn dungeons(&self) -> Vec<&'static str> {
        self.gated(
            BASE_DUNGEONS,
            [
                ATLAS_OF_DISCOVERY_DUNGEONS,
                THRONE_OF_THE_HERALD_DUNGEONS,
                INTO_THE_ABYSS_DUNGEONS,
            ],
        )
    }

    #[must_use]
    pub fn events(&self) -> Vec<&'static str> {
        self.gated(
            BASE_EVENTS,
            [&[], THRONE_OF_THE_HERALD_EVENTS, INTO_THE_ABYSS_EVENTS],
        )
    }

    #[must_use]
    pub fn monsters(&self) -> Vec<&'static str> {
        self.gated(
            BASE_MONSTERS,
            [
                ATLAS_OF_DISCOVERY_MONSTERS,
                THRONE_OF_THE_HERALD_MONSTERS,
                INTO_THE_ABYSS_MONSTERS,
            ],
        )
    }
}

impl CatalogProvider for MelvorIdle {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        let mut templates = vec![
            ObjectiveTemplate::new("Reach level LEVEL in SKILL")
                .bind("SKILL", pools::BASE_SKILLS, 1)
                .bind("LEVEL", pools::EARLY_SKILL_LEVELS, 1)
                .weight(5),
            ObjectiveTemplate::new("Reach level LEVEL in SKILL")
                .bind("SKILL", pools::SKILLS, 1)
                .bind("LEVEL", pools::LATE_SKILL_LEVELS, 1)
                .time_consuming()
                .weight(2),
        ];
        if self.has_dlc_into_the_abyss() {
            templates.extend([
                ObjectiveTemplate::new("Reach level LEVEL in SKILL")
                    .bind("SKILL", pools::INTO_THE_ABYSS_SKILLS, 1)
                    .bind("LEVEL", pools::EARLY_ABYSSAL_LEVELS, 1)
                    .time_consuming()
                    .weight(2),
                ObjectiveTemplate::new("Reach level LEVEL in SKILL")
                    .bind("SKILL", pools::INTO_THE_ABYSS_SKILLS, 1)
                    .bind("LEVEL", pools::LATE_ABYSSAL_LEVELS, 1)
                    .time_consuming()
                    .weight(1),
            ]);
        }
        templates.extend([
            ObjectiveTemplate::new("Kill NUMBER MONSTER")
                .bind("NUMBER", pools::RANDOM_RANGE, 1)
                .bind("MONSTER", pools::MONSTERS, 1)
                .time_consuming()
                .weight(5),
            ObjectiveTemplate::new("Kill NUMBER BOSS")
                .bind("NUMBER", pools::RANDOM_RANGE, 1)
                .bind("BOSS", pools::BOSSES, 1)
                .time_consuming()
                .difficult()
                .weight(4),
            ObjectiveTemplate::new(
                "Reach mastery level in MASTERY in an item of your choice in SKILL",
            )
            .bind("MASTERY", pools::MASTERY, 1)
            .bind("SKILL", pools::NON_COMBAT_SKILLS, 1)
            .time_consuming()
            .difficult()
            .weight(1),
            ObjectiveTemplate::new("Complete DUNGEON NUMBER times")
                .bind("DUNGEON", pools::DUNGEONS, 1)
                .bind("NUMBER", pools::LOW_NUMBERS, 1)
                .time_consuming()
                .difficult()
                .weight(3),
            ObjectiveTemplate::new("Complete EVENT once")
                .bind("EVENT", pools::EVENTS, 1)
                .time_consuming()
                .difficult()
                .weight(1),
        ]);
        templates
    }

    fn list_constraint_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Create a new save file with the game mode MODE")
                .bind("MODE", pools::GAME_MODES, 1),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::GAME_MODES => Pool::from_slice(self.game_modes()),
            pools::LEVELS => Pool::from_numbers(&self.levels()),
            pools::EARLY_SKILL_LEVELS => Pool::from_numbers(&self.early_skill_levels()),
            pools::LATE_SKILL_LEVELS => Pool::from_numbers(&self.late_skill_levels()),
            pools::ABYSSAL_LEVELS => Pool::from_numbers(self.abyssal_levels()),
            pools::EARLY_ABYSSAL_LEVELS => Pool::from_numbers(self.early_abyssal_levels()),
            pools::LATE_ABYSSAL_LEVELS => Pool::from_numbers(self.late_abyssal_levels()),
            pools::LOW_NUMBERS => self.low_numbers().into(),
            pools::MEDIUM_NUMBERS => self.medium_numbers().into(),
            pools::HIGH_NUMBERS => self.high_numbers().into(),
            pools::RANDOM_RANGE => self.random_range().into(),
            pools::MASTERY => self.mastery().into(),
            pools::BASE_SKILLS => Pool::from_slice(&self.base_skills()),
            pools::COMBAT_SKILLS => Pool::from_slice(&self.combat_skills()),
            pools::NON_COMBAT_SKILLS => Pool::from_slice(&self.non_combat_skills()),
            pools::SKILLS => Pool::from_slice(&self.skills()),
            pools::INTO_THE_ABYSS_SKILLS => Pool::from_slice(&self.into_the_abyss_skills()),
            pools::BOSSES => Pool::from_slice(&self.bosses()),
            pools::DUNGEONS => Pool::from_slice(&self.dungeons()),
            pools::EVENTS => Pool::from_slice(&self.events()),
            pools::MONSTERS => Pool::from_slice(&self.monsters()),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }

    fn resolve_pool_with(&self, name: &str, rng: &mut dyn RngCore) -> Result<Pool, CatalogError> {
        if name == pools::RANDOM_RANGE {
            return Ok(self.random_range_with(rng).into());
        }
        self.resolve_pool(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn without_dlc() -> MelvorIdle {
        MelvorIdle::new(PackSet::none())
    }

    #[test]
    fn levels_extend_with_throne_of_the_herald() {
        let base = without_dlc();
        assert_eq!(base.early_skill_levels(), vec![10, 20, 30, 40]);
        assert_eq!(base.late_skill_levels(), vec![50, 60, 70, 80, 90, 99]);

        let full = MelvorIdle::default();
        assert_eq!(
            full.late_skill_levels(),
            vec![50, 60, 70, 80, 90, 99, 110, 120]
        );
        assert_eq!(full.early_skill_levels(), base.early_skill_levels());
    }

    #[test]
    fn abyssal_levels_split_after_twenty() {
        let game = MelvorIdle::default();
        assert_eq!(game.early_abyssal_levels(), &[10, 20]);
        assert_eq!(game.late_abyssal_levels(), &[30, 40, 50, 60]);
    }

    #[test]
    fn base_skills_are_sorted_and_unique() {
        let skills = without_dlc().base_skills();
        assert_eq!(skills.len(), 24);
        assert!(skills.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(skills.iter().filter(|skill| **skill == "Magic").count(), 1);
    }

    #[test]
    fn combat_skills_compose_from_base_list() {
        assert_eq!(without_dlc().combat_skills(), BASE_COMBAT_SKILLS);
        let full = MelvorIdle::default().combat_skills();
        assert_eq!(full.last(), Some(&"Corruption"));
        assert_eq!(full.len(), BASE_COMBAT_SKILLS.len() + 1);
    }

    #[test]
    fn non_combat_skills_exclude_combat_only_skills() {
        let skills = MelvorIdle::default().non_combat_skills();
        assert!(!skills.contains(&"Attack"));
        assert!(skills.contains(&"Cartography"));
        assert_eq!(skills.last(), Some(&"Harvesting"));
    }

    #[test]
    fn skills_gain_abyss_skills_only_with_into_the_abyss() {
        let throne_only = MelvorIdle::new(PackSet::of(&[MelvorDlc::ThroneOfTheHerald]));
        assert!(!throne_only.skills().contains(&"Corruption"));

        let abyss_only = MelvorIdle::new(PackSet::of(&[MelvorDlc::IntoTheAbyss]));
        let skills = abyss_only.skills();
        assert!(skills.ends_with(&["Corruption", "Harvesting"]));
        assert!(!skills.contains(&"Archaeology"));
    }

    #[test]
    fn abyssal_templates_require_into_the_abyss() {
        let base = without_dlc().list_objective_templates();
        let abyssal = |template: &ObjectiveTemplate| {
            template
                .binding("SKILL")
                .is_some_and(|binding| binding.pool == pools::INTO_THE_ABYSS_SKILLS)
        };
        assert!(!base.iter().any(abyssal));
        assert_eq!(base.len(), 7);
        assert_eq!(MelvorIdle::default().list_objective_templates().len(), 9);
    }

    #[test]
    fn bosses_start_with_base_game() {
        let bosses = MelvorIdle::default().bosses();
        assert!(bosses.starts_with(BASE_BOSSES));
        assert_eq!(
            bosses.len(),
            BASE_BOSSES.len()
                + ATLAS_OF_DISCOVERY_BOSSES.len()
                + THRONE_OF_THE_HERALD_BOSSES.len()
                + INTO_THE_ABYSS_BOSSES.len()
        );
    }

    #[test]
    fn event_template_binds_its_label_token() {
        let templates = MelvorIdle::default().list_objective_templates();
        let event = templates
            .iter()
            .find(|template| template.label == "Complete EVENT once")
            .unwrap();
        assert_eq!(event.tokens(), vec!["EVENT"]);
        assert!(event.binding("EVENT").is_some());
    }

    #[test]
    fn random_range_returns_one_of_three_ranges() {
        let game = MelvorIdle::default();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let range = game.random_range_with(&mut rng);
            assert!([LOW_NUMBERS, MEDIUM_NUMBERS, HIGH_NUMBERS].contains(&range));
        }
        assert_eq!(game.range_buckets().unwrap().total(), 100);
    }

    #[test]
    fn seeded_random_range_pool_follows_the_rng() {
        let game = MelvorIdle::default();
        let mut pooled = SmallRng::seed_from_u64(7);
        let mut direct = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let pool = game
                .resolve_pool_with(pools::RANDOM_RANGE, &mut pooled)
                .unwrap();
            assert_eq!(pool.as_range(), Some(game.random_range_with(&mut direct)));
        }
        assert_eq!(
            game.resolve_pool_with(pools::MASTERY, &mut pooled).unwrap(),
            game.resolve_pool(pools::MASTERY).unwrap()
        );
    }

    #[test]
    fn unknown_dlc_is_rejected() {
        let options =
            GameOptions::new().with(MelvorDlc::OPTION_KEY, ["Atlas of Discovery", "Township II"]);
        assert!(matches!(
            MelvorIdle::from_options(&options),
            Err(CatalogError::UnknownPack { .. })
        ));
    }
}
