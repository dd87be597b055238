//! Wingspan, with food types gated on the expansions the player owns.
//!
//! Most goal lists are generated from the habitat and nest tables, so they
//! are built on each call rather than declared literally.

use crate::error::CatalogError;
use crate::options::{ContentPack, GameOptions, PackSet};
use crate::platform::{GameIdentity, Platform};
use crate::pool::{NumericRange, Pool};
use crate::provider::{CatalogProvider, unknown_pool};
use crate::template::ObjectiveTemplate;

const IDENTITY: GameIdentity = GameIdentity {
    name: "Wingspan",
    platform: Platform::Board,
    platforms_other: &[
        Platform::Pc,
        Platform::And,
        Platform::Ios,
        Platform::Xone,
        Platform::Ps4,
        Platform::Ps5,
        Platform::Sw,
    ],
    is_adult_only_or_unrated: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WingspanExpansion {
    Asia,
    European,
    Oceania,
}

impl ContentPack for WingspanExpansion {
    const OPTION_KEY: &'static str = "wingspan_expansions_owned";
    const DISPLAY_NAME: &'static str = "Wingspan Expansions Owned";
    const ALL: &'static [Self] = &[Self::Asia, Self::European, Self::Oceania];

    fn key(self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::European => "European",
            Self::Oceania => "Oceania",
        }
    }
}

pub mod pools {
    pub const BOARD_COLUMNS: &str = "board_columns";
    pub const FOOD_RANGE: &str = "food_range";
    pub const BONUS_RANGE: &str = "bonus_range";
    pub const FOOD_TYPES: &str = "food_types";
    pub const HABITATS: &str = "habitats";
    pub const NEST_TYPES: &str = "nest_types";
    pub const END_OF_ROUND_GOALS: &str = "end_of_round_goals";
    pub const GAME_END_POINTS: &str = "game_end_points";
    pub const BONUS_OBJECTIVES: &str = "bonus_objectives";

    pub const ALL: &[&str] = &[
        BOARD_COLUMNS,
        FOOD_RANGE,
        BONUS_RANGE,
        FOOD_TYPES,
        HABITATS,
        NEST_TYPES,
        END_OF_ROUND_GOALS,
        GAME_END_POINTS,
        BONUS_OBJECTIVES,
    ];
}

const BOARD_COLUMNS: NumericRange = NumericRange::span(1, 6);
const FOOD_RANGE: NumericRange = NumericRange::span(3, 7);
const BONUS_RANGE: NumericRange = NumericRange::span(1, 7);

const BASE_FOOD_TYPES: &[&str] = &["invertebrate", "seed", "fish", "fruit", "rodent"];
const OCEANIA_FOOD_TYPES: &[&str] = &["nectar"];

const HABITATS: &[&str] = &["forest", "grassland", "wetland"];
const NEST_TYPES: &[&str] = &["bowl", "cavity", "ground", "platform", "wild"];
const BEAK_DIRECTIONS: &[&str] = &["left", "right"];
const ACTIONS: &[&str] = &["Play a Bird", "Gather Food", "Lay Eggs", "Draw Cards"];

const FIXED_ROUND_GOALS: &[&str] = &[
    "Most birds",
    "Most sets of eggs (1 in each habitat type)",
    "Most food in your personal supply",
    "Most bird cards in hand",
    "Most birds worth over 4 points",
    "Most birds with no eggs",
    "Most birds in one row",
    "Most filled columns",
    "Most birds with a brown 'when activated' power",
    "Most birds with either no power or a 'when played' power",
    "Most birds with a tucked card",
    "Most food cost on birds",
];

const GAME_END_POINTS: &[&str] = &[
    "most points from birds",
    "most points from bonus cards",
    "most points from end of round goals",
    "most eggs on birds",
    "most food cached on birds",
    "most tucked cards",
];

const FIXED_BONUS_OBJECTIVES: &[&str] = &[
    "Birds with colors in their names",
    "Birds with body parts in their names",
    "Birds with geography terms in their names",
    "Birds named after a person",
    "Birds with a specific type of nest",
    "Birds with at least 4 eggs laid on them",
    "Birds that have at least 1 egg laid on them",
    "Birds that can only live in one specific habitat",
    "Birds with wingspans over 65cm",
    "Birds with wingspans 30cm or less",
    "Birds worth less than 4 points",
    "Birds in your hand at end of game",
    "Sets of 4 nest types (1 of each type)",
    "Columns with a pair or trio of nest types",
    "Consecutive birds with ascending or descending wingspans",
    "Birds with completely full nests",
    "Birds with an egg limit of 2 or less",
    "Birds with a food cost of 2 or less",
    "Food remaining in your personal supply",
    "Fish and rodent tokens cached on birds",
    "Birds that allow you to score or draw more bonus cards",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wingspan {
    expansions: PackSet<WingspanExpansion>,
}

impl Default for Wingspan {
    fn default() -> Self {
        Self::new(PackSet::all())
    }
}

impl Wingspan {
    #[must_use]
    pub const fn new(expansions: PackSet<WingspanExpansion>) -> Self {
        Self { expansions }
    }

    /// Bind `wingspan_expansions_owned` from host options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPack`] for an expansion outside
    /// [`WingspanExpansion::ALL`].
    pub fn from_options(options: &GameOptions) -> Result<Self, CatalogError> {
        Ok(Self::new(options.pack_set()?))
    }

    #[must_use]
    pub const fn expansions_owned(&self) -> &PackSet<WingspanExpansion> {
        &self.expansions
    }

    #[must_use]
    pub fn has_asia_expansion(&self) -> bool {
        self.expansions.contains(WingspanExpansion::Asia)
    }

    #[must_use]
    pub fn has_european_expansion(&self) -> bool {
        self.expansions.contains(WingspanExpansion::European)
    }

    #[must_use]
    pub fn has_oceania_expansion(&self) -> bool {
        self.expansions.contains(WingspanExpansion::Oceania)
    }

    #[must_use]
    pub const fn board_columns(&self) -> NumericRange {
        BOARD_COLUMNS
    }

    #[must_use]
    pub const fn food_range(&self) -> NumericRange {
        FOOD_RANGE
    }

    #[must_use]
    pub const fn bonus_range(&self) -> NumericRange {
        BONUS_RANGE
    }

    #[must_use]
    pub fn food_types(&self) -> Vec<&'static str> {
        let mut food = BASE_FOOD_TYPES.to_vec();
        if self.has_oceania_expansion() {
            food.extend_from_slice(OCEANIA_FOOD_TYPES);
        }
        food
    }

    #[must_use]
    pub const fn habitats(&self) -> &'static [&'static str] {
        HABITATS
    }

    #[must_use]
    pub const fn nest_types(&self) -> &'static [&'static str] {
        NEST_TYPES
    }

    #[must_use]
    pub fn end_of_round_goals(&self) -> Vec<String> {
        let mut goals = Vec::new();
        goals.extend(
            NEST_TYPES
                .iter()
                .map(|nest| format!("Most birds with {nest} nest type with an egg")),
        );
        goals.extend(HABITATS.iter().map(|habitat| format!("Most birds in {habitat}")));
        goals.extend(NEST_TYPES.iter().map(|nest| format!("Most eggs in {nest}")));
        goals.extend(HABITATS.iter().map(|habitat| format!("Most eggs in {habitat}")));
        goals.extend(
            BEAK_DIRECTIONS
                .iter()
                .map(|direction| format!("Most birds with a beak pointing {direction}")),
        );
        goals.extend(
            ACTIONS
                .iter()
                .map(|action| format!("Most cubes on '{action}' action")),
        );
        goals.extend(FIXED_ROUND_GOALS.iter().map(ToString::to_string));
        goals
    }

    #[must_use]
    pub const fn game_end_points(&self) -> &'static [&'static str] {
        GAME_END_POINTS
    }

    #[must_use]
    pub fn bonus_objectives(&self) -> Vec<String> {
        let mut objectives: Vec<String> = FIXED_BONUS_OBJECTIVES
            .iter()
            .map(ToString::to_string)
            .collect();
        objectives.extend(
            HABITATS
                .iter()
                .map(|habitat| format!("Different nest types in {habitat}")),
        );
        objectives.extend(HABITATS.iter().map(|habitat| {
            format!("Consecutive birds in {habitat} with ascending or descending scores")
        }));
        objectives
    }
}

impl CatalogProvider for Wingspan {
    fn identity(&self) -> &GameIdentity {
        &IDENTITY
    }

    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Win a game of Wingspan")
                .time_consuming()
                .weight(4),
            ObjectiveTemplate::new("Win a round with 'GOAL' as your goal")
                .bind("GOAL", pools::END_OF_ROUND_GOALS, 1)
                .weight(4),
            ObjectiveTemplate::new("At the end of game, have the GOAL")
                .bind("GOAL", pools::GAME_END_POINTS, 1)
                .weight(4),
            ObjectiveTemplate::new("Collect NUMBER FOOD")
                .bind("NUMBER", pools::FOOD_RANGE, 1)
                .bind("FOOD", pools::FOOD_TYPES, 1)
                .weight(4),
            ObjectiveTemplate::new("Achieve one additional bonus objective: BONUS")
                .bind("BONUS", pools::BONUS_OBJECTIVES, 3)
                .time_consuming()
                .weight(4),
        ]
    }

    fn list_constraint_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Starting goals: GOALS")
                .bind("GOALS", pools::END_OF_ROUND_GOALS, 4),
        ]
    }

    fn pool_names(&self) -> &'static [&'static str] {
        pools::ALL
    }

    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError> {
        let pool = match name {
            pools::BOARD_COLUMNS => self.board_columns().into(),
            pools::FOOD_RANGE => self.food_range().into(),
            pools::BONUS_RANGE => self.bonus_range().into(),
            pools::FOOD_TYPES => Pool::from_slice(&self.food_types()),
            pools::HABITATS => Pool::from_slice(self.habitats()),
            pools::NEST_TYPES => Pool::from_slice(self.nest_types()),
            pools::END_OF_ROUND_GOALS => self.end_of_round_goals().into(),
            pools::GAME_END_POINTS => Pool::from_slice(self.game_end_points()),
            pools::BONUS_OBJECTIVES => self.bonus_objectives().into(),
            _ => return Err(unknown_pool(&IDENTITY, name)),
        };
        Ok(pool)
    }
}
