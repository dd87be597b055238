use crate::error::CatalogError;
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;

const IDENTITY: GameIdentity = GameIdentity {
    name: "Abyssus",
    platform: Platform::Pc,
    platforms_other: &[],
    is_adult_only_or_unrated: false,
};

pub mod pools {
    pub const WEAPONS: &str = "weapons";
    pub const LOCKED_WEAPONS: &str = "locked_weapons";
    pub const ABILITIES: &str = "abilities";
    pub const LOCKED_ABILITIES: &str = "locked_abilities";
    pub const UPGRADES: &str = "upgrades";
    pub const BOSSES: &str = "bosses";
    pub const BRINE_CANISTERS: &str = "brine_canisters";
    pub const MAX_BRINE_CANISTERS: &str = "max_brine_canisters";

    pub const ALL: &[&str] = &[
        WEAPONS,
        LOCKED_WEAPONS,
        ABILITIES,
        LOCKED_ABILITIES,
        UPGRADES,
        BOSSES,
        BRINE_CANISTERS,
        MAX_BRINE_CANISTERS,
    ];
}

const LOCKED_WEAPONS: &[&str] = &[
    "Brine Revolver",
    "Combat Bow",
    "Disc Thrower",
    "Fish Deity",
    "Plasma Launcher",
    "Shotgun",
    "Tesla Gun",
];

const STARTING_WEAPONS: &[&str] = &["Engine Rifle"];

const LOCKED_ABILITIES: &[&str] = &["Anchor", "Ancient Core", "Brine Field", "Turret"];

const STARTING_ABILITIES: &[&str] = &["Frag Grenade"];

/// Soul wheel upgrades, one table per tier.
const UPGRADE_TIERS: [&[&str]; 7] = [
    &[
        "Enhanced Weapons",
        "Upgraded Inventions",
        "Bountiful Bottles",
        "Picky Worship",
        "Bartering",
    ],
    &[
        "Abyssal Stamina",
        "Ability Abundance",
        "Temple's Rest",
        "Starting Funds",
        "Ancient Forge",
    ],
    &[
        "Keen Vision",
        "Magazine Madness",
        "Gardens' Rest",
        "Ascended Blessings",
        "Gambler",
    ],
    &["Ability Abundance II", "Bountiful Bottles II", "Abundance"],
    &[
        "Rapid Fire",
        "Second Wind",
        "Sanctuary's Rest",
        "Beginner's Charm",
        "Timely Reward",
    ],
    &["Execution", "Finer Charms", "Picky Worship II"],
    &["Charm Power"],
];

const BOSSES: &[&str] = &[
    "the Overseer",
    "Miphina, the Golemancer",
    "Gardens Elite",
    "Gardens Boss",
    "Sanctuary Elite",
    "Sanctuary Boss",
    "The First Herald",
    "The Second Herald",
    "The Third Herald",
    "Final Boss",
];

const BRINE_CANISTERS: NumericRange = NumericRange::span(1, 5);
const MAX_BRINE_CANISTERS: NumericRange = NumericRange::span(1, 35);

#[derive(Debug, Clone, Copy, Default)]
pub struct Abyssus;

impl Abyssus {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub const fn locked_weapons(&self) -> &'static [&'static str] {
        LOCKED_WEAPONS
    }

    #[must_use]
    pub fn weapons(&self) -> Vec<&'static str> {
        [LOCKED_WEAPONS, STARTING_WEAPONS].concat()
    }

    #[must_use]
    pub const fn locked_abilities(&self) -> &'static [&'static str] {
        LOCKED_ABILITIES
    }

    #[must_use]
    pub fn abilities(&self) -> Vec<&'static str> {
        [LOCKED_ABILITIES, STARTING_ABILITIES].concat()
    }

    #[must_use]
    pub fn upgrades(&self) -> Vec<&'static str> {
        UPGRADE_TIERS.concat()
    }

    #[must_use]
    pub const fn bosses(&self) -> &'static [&'static str] {
        BOSSES
    }

    #[must_use]
    pub const fn brine_canisters(&self) -> NumericRange {
        BRINE_CANISTERS
    }

    #[must_use]
    pub const fn max_brine_canisters(&self) -> NumericRange {
        MAX_BRINE_CANISTERS
    }
}

impl CatalogProvider for Abyssus {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Play a depth using WEAPON")
                .bind("WEAPON", pools::WEAPONS, 1)
                .weight(5),
            ObjectiveTemplate::new("Complete a depth using WEAPON")
                .bind("WEAPON", pools::WEAPONS, 1)
                .time_consuming()
                .difficult()
                .weight(5),
            ObjectiveTemplate::new("Play a depth using ABILITY")
                .bind("ABILITY", pools::ABILITIES, 1)
                .weight(5),
            ObjectiveTemplate::new("Complete a depth using ABILITY")
                .bind("ABILITY", pools::ABILITIES, 1)
                .time_consuming()
                .difficult()
                .weight(5),
            ObjectiveTemplate::new("Play a depth using WEAPON and ABILITY")
                .bind("WEAPON", pools::WEAPONS, 1)
                .bind("ABILITY", pools::ABILITIES, 1)
                .weight(5),
            ObjectiveTemplate::new("Complete a depth using WEAPON and ABILITY")
                .bind("WEAPON", pools::WEAPONS, 1)
                .bind("ABILITY", pools::ABILITIES, 1)
                .time_consuming()
                .difficult()
                .weight(5),
            ObjectiveTemplate::new("Unlock UPGRADE on the soul wheel")
                .bind("UPGRADE", pools::UPGRADES, 1)
                .weight(5),
            ObjectiveTemplate::new("Max UPGRADE on the soul wheel")
                .bind("UPGRADE", pools::UPGRADES, 1)
                .weight(5),
            ObjectiveTemplate::new("Play a depth using CANISTERS or more brine canisters")
                .bind("CANISTERS", pools::BRINE_CANISTERS, 1)
                .time_consuming()
                .difficult()
                .weight(3),
            ObjectiveTemplate::new("Play a depth using CANISTERS or more brine canisters")
                .bind("CANISTERS", pools::MAX_BRINE_CANISTERS, 1)
                .time_consuming()
                .difficult()
                .weight(1),
            ObjectiveTemplate::new("Unlock WEAPON")
                .bind("WEAPON", pools::LOCKED_WEAPONS, 1)
                .time_consuming()
                .difficult()
                .weight(3),
            ObjectiveTemplate::new("Unlock ABILITY")
                .bind("ABILITY", pools::LOCKED_ABILITIES, 1)
                .time_consuming()
                .difficult()
                .weight(3),
            ObjectiveTemplate::new("Unlock a mod for the WEAPON")
                .bind("WEAPON", pools::WEAPONS, 1)
                .time_consuming()
                .difficult()
                .weight(3),
            ObjectiveTemplate::new("Unlock a charm")
                .time_consuming()
                .difficult()
                .weight(1),
            ObjectiveTemplate::new("Defeat BOSS")
                .bind("BOSS", pools::BOSSES, 1)
                .time_consuming()
                .difficult()
                .weight(1),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::WEAPONS => Pool::from_slice(&self.weapons()),
            pools::LOCKED_WEAPONS => Pool::from_slice(self.locked_weapons()),
            pools::ABILITIES => Pool::from_slice(&self.abilities()),
            pools::LOCKED_ABILITIES => Pool::from_slice(self.locked_abilities()),
            pools::UPGRADES => Pool::from_slice(&self.upgrades()),
            pools::BOSSES => Pool::from_slice(self.bosses()),
            pools::BRINE_CANISTERS => self.brine_canisters().into(),
            pools::MAX_BRINE_CANISTERS => self.max_brine_canisters().into(),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapons_extend_locked_weapons_with_starter() {
        let game = Abyssus::new();
        let weapons = game.weapons();
        assert_eq!(weapons.len(), LOCKED_WEAPONS.len() + 1);
        assert_eq!(weapons.last(), Some(&"Engine Rifle"));
        assert!(weapons.starts_with(game.locked_weapons()));
    }

    #[test]
    fn upgrades_flatten_every_tier_in_order() {
        let upgrades = Abyssus::new().upgrades();
        assert_eq!(upgrades.len(), 27);
        assert_eq!(upgrades.first(), Some(&"Enhanced Weapons"));
        assert_eq!(upgrades.last(), Some(&"Charm Power"));
    }

    #[test]
    fn canister_ranges_are_half_open() {
        let game = Abyssus::new();
        assert_eq!(game.brine_canisters().last(), Some(4));
        assert_eq!(game.max_brine_canisters().last(), Some(34));
    }

    #[test]
    fn unknown_pool_is_reported() {
        let err = Abyssus::new().resolve_pool("charms").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownPool {
                game: "Abyssus",
                pool: "charms".to_string(),
            }
        );
    }
}
