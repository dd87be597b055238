use crate::error::CatalogError;
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;

const IDENTITY: GameIdentity = GameIdentity {
    name: "Splitgate",
    platform: Platform::Pc,
    platforms_other: &[Platform::Xone, Platform::Ps4, Platform::Ps5],
    is_adult_only_or_unrated: false,
};

pub mod pools {
    pub const GAME_MODES: &str = "game_modes";
    pub const WEAPONS: &str = "weapons";
    pub const MAPS: &str = "maps";
    pub const DIFFICULTY: &str = "difficulty";
    pub const SMALL_NUMBER: &str = "small_number";
    pub const NUMBER: &str = "number";
    pub const LARGE_NUMBER: &str = "large_number";

    pub const ALL: &[&str] = &[
        GAME_MODES,
        WEAPONS,
        MAPS,
        DIFFICULTY,
        SMALL_NUMBER,
        NUMBER,
        LARGE_NUMBER,
    ];
}

const GAME_MODES: &[&str] = &[
    "Team Deathmatch",
    "Team Fiesta",
    "Sniper Frenzy",
    "Team Objective",
    "No Portals",
    "Team Rumble",
    "SWAT",
    "Search and Survive",
    "FFA Brawl",
    "Ranked",
];

const WEAPONS: &[&str] = &[
    "Assault Rifle",
    "BFB",
    "Battle Rifle",
    "Carbine",
    "Pistol",
    "Plasma Rifle",
    "Railgun",
    "Rocket Launcher",
    "Shotgun",
    "SMG",
    "Sniper",
    "Splitball",
];

const MAPS: &[&str] = &[
    "Abyss",
    "Atlantis",
    "Club Silo",
    "Crag",
    "Foregone Destruction",
    "Helix",
    "Highwind",
    "Impact",
    "Karman Station",
    "Lavawell",
    "Oasis",
    "Olympus",
    "Pantheon",
    "Stadium",
];

const DIFFICULTY: &[&str] = &["Easy", "Medium", "Hard"];

const SMALL_NUMBER: NumericRange = NumericRange::span(1, 6);
const NUMBER: NumericRange = NumericRange::span(1, 11);
const LARGE_NUMBER: NumericRange = NumericRange::span(1, 31);

#[derive(Debug, Clone, Copy, Default)]
pub struct Splitgate;

impl Splitgate {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub const fn game_modes(&self) -> &'static [&'static str] {
        GAME_MODES
    }

    #[must_use]
    pub const fn weapons(&self) -> &'static [&'static str] {
        WEAPONS
    }

    #[must_use]
    pub const fn maps(&self) -> &'static [&'static str] {
        MAPS
    }

    /// Race difficulties.
    #[must_use]
    pub const fn difficulty(&self) -> &'static [&'static str] {
        DIFFICULTY
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

impl CatalogProvider for Splitgate {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Win a game").weight(3),
            ObjectiveTemplate::new("Play a game").weight(5),
            ObjectiveTemplate::new("Win a game of GAME")
                .bind("GAME", pools::GAME_MODES, 1)
                .weight(3),
            ObjectiveTemplate::new("Play a game of GAME")
                .bind("GAME", pools::GAME_MODES, 1)
                .weight(5),
            ObjectiveTemplate::new("Get KILLS kills with WEAPON")
                .bind("KILLS", pools::NUMBER, 1)
                .bind("WEAPON", pools::WEAPONS, 1)
                .weight(4),
            ObjectiveTemplate::new("Get KILLS kills with WEAPON")
                .bind("KILLS", pools::LARGE_NUMBER, 1)
                .bind("WEAPON", pools::WEAPONS, 1)
                .time_consuming()
                .difficult()
                .weight(2),
            ObjectiveTemplate::new("Get KILLS melee kills")
                .bind("KILLS", pools::SMALL_NUMBER, 1)
                .weight(4),
            ObjectiveTemplate::new("Get NUMBER headshots")
                .bind("NUMBER", pools::NUMBER, 1)
                .weight(4),
            ObjectiveTemplate::new("Get NUMBER headshots")
                .bind("NUMBER", pools::LARGE_NUMBER, 1)
                .difficult()
                .weight(3),
            ObjectiveTemplate::new("Play a game on MAP")
                .bind("MAP", pools::MAPS, 1)
                .weight(3),
            ObjectiveTemplate::new("Complete a race on MAP on DIFFICULTY difficulty")
                .bind("MAP", pools::MAPS, 1)
                .bind("DIFFICULTY", pools::DIFFICULTY, 1)
                .weight(4),
            ObjectiveTemplate::new("Score highest on your team in a match").weight(2),
            ObjectiveTemplate::new("Get a killing spree").weight(4),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::GAME_MODES => Pool::from_slice(self.game_modes()),
            pools::WEAPONS => Pool::from_slice(self.weapons()),
            pools::MAPS => Pool::from_slice(self.maps()),
            pools::DIFFICULTY => Pool::from_slice(self.difficulty()),
            pools::SMALL_NUMBER => self.small_number().into(),
            pools::NUMBER => self.number().into(),
            pools::LARGE_NUMBER => self.large_number().into(),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        let game = Splitgate::new();
        assert_eq!(game.game_modes().len(), 10);
        assert_eq!(game.weapons().len(), 12);
        assert_eq!(game.maps().len(), 14);
        assert_eq!(game.difficulty().len(), 3);
    }

    #[test]
    fn kill_counts_start_at_one() {
        let game = Splitgate::new();
        for range in [game.small_number(), game.number(), game.large_number()] {
            assert_eq!(range.first(), Some(1));
        }
        assert_eq!(game.large_number().len(), 30);
    }

    #[test]
    fn race_template_binds_map_and_difficulty() {
        let templates = Splitgate::new().list_objective_templates();
        let race = templates
            .iter()
            .find(|template| template.label.starts_with("Complete a race"))
            .unwrap();
        assert_eq!(race.tokens(), vec!["MAP", "DIFFICULTY"]);
        assert_eq!(
            race.binding("DIFFICULTY").map(|binding| binding.pool),
            Some(pools::DIFFICULTY)
        );
    }
}
