use crate::error::CatalogError;
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;

const IDENTITY: GameIdentity = GameIdentity {
    name: "Pokemon Go",
    platform: Platform::And,
    platforms_other: &[Platform::Ios],
    is_adult_only_or_unrated: false,
};

pub mod pools {
    pub const CATCHES: &str = "catches";
    pub const LOW_RANGE: &str = "low_range";
    pub const POKEMON_TYPES: &str = "pokemon_types";
    pub const THROW_TYPES: &str = "throw_types";

    pub const ALL: &[&str] = &[CATCHES, LOW_RANGE, POKEMON_TYPES, THROW_TYPES];
}

const CATCHES: NumericRange = NumericRange::new(5, 31, 5);
const LOW_RANGE: NumericRange = NumericRange::span(1, 6);

const POKEMON_TYPES: &[&str] = &[
    "Bug",
    "Dark",
    "Dragon",
    "Electric",
    "Fairy",
    "Fighting",
    "Fire",
    "Flying",
    "Ghost",
    "Grass",
    "Ground",
    "Ice",
    "Normal",
    "Poison",
    "Psychic",
    "Rock",
    "Steel",
    "Water",
];

const THROW_TYPES: &[&str] = &["Nice", "Great", "Excellent", "Curveball"];

#[derive(Debug, Clone, Copy, Default)]
pub struct PokemonGo;

impl PokemonGo {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub const fn catches(&self) -> NumericRange {
        CATCHES
    }

    #[must_use]
    pub const fn low_range(&self) -> NumericRange {
        LOW_RANGE
    }

    #[must_use]
    pub const fn pokemon_types(&self) -> &'static [&'static str] {
        POKEMON_TYPES
    }

    #[must_use]
    pub const fn throw_types(&self) -> &'static [&'static str] {
        THROW_TYPES
    }
}

impl CatalogProvider for PokemonGo {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Catch NUMBER TYPE")
                .bind("NUMBER", pools::CATCHES, 1)
                .bind("TYPE", pools::POKEMON_TYPES, 1)
                .weight(4),
            ObjectiveTemplate::new("Use NUMBER berries to catch Pokémon")
                .bind("NUMBER", pools::CATCHES, 1)
                .weight(4),
            ObjectiveTemplate::new("Spin NUMBER PokéStops")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(4),
            ObjectiveTemplate::new("Catch NUMBER different species of Pokémon")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(4),
            ObjectiveTemplate::new("Hatch NUMBER eggs")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(4),
            ObjectiveTemplate::new("Make NUMBER THROW_TYPE throws")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .bind("THROW_TYPE", pools::THROW_TYPES, 1)
                .weight(4),
            ObjectiveTemplate::new("Win a raid").weight(1),
            ObjectiveTemplate::new("Participate in a raid").weight(3),
            ObjectiveTemplate::new("Explore NUMBER km")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(3),
            ObjectiveTemplate::new("Evolve a Pokémon").weight(3),
            ObjectiveTemplate::new("Power up Pokémon NUMBER times")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(3),
            ObjectiveTemplate::new("Earn NUMBER Candies walking with your buddy")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(3),
            ObjectiveTemplate::new("Defeat NUMBER Team Rocket Grunts")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(3),
            ObjectiveTemplate::new("Send NUMBER gifts to friends")
                .bind("NUMBER", pools::LOW_RANGE, 1)
                .weight(3),
            ObjectiveTemplate::new("Trade a Pokémon").weight(3),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::CATCHES => self.catches().into(),
            pools::LOW_RANGE => self.low_range().into(),
            pools::POKEMON_TYPES => Pool::from_slice(self.pokemon_types()),
            pools::THROW_TYPES => Pool::from_slice(self.throw_types()),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_on_phones_only() {
        let identity = PokemonGo::new().identity().clone();
        assert_eq!(identity.all_platforms(), vec![Platform::And, Platform::Ios]);
        assert!(!identity.runs_on(Platform::Pc));
    }

    #[test]
    fn accented_words_are_not_placeholders() {
        let templates = PokemonGo::new().list_objective_templates();
        let spin = templates
            .iter()
            .find(|template| template.label == "Spin NUMBER PokéStops")
            .unwrap();
        assert_eq!(spin.tokens(), vec!["NUMBER"]);
    }

    #[test]
    fn catches_step_by_five() {
        assert_eq!(
            PokemonGo::new().catches().iter().collect::<Vec<_>>(),
            vec![5, 10, 15, 20, 25, 30]
        );
    }
}
