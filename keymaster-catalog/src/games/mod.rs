//! Per-game catalogs.

pub mod abyssus;
pub mod digseum;
pub mod magic_the_gathering;
pub mod melvor_idle;
pub mod pokemon_go;
pub mod splitgate;
pub mod wingspan;

pub use abyssus::Abyssus;
pub use digseum::Digseum;
pub use magic_the_gathering::MagicTheGathering;
pub use melvor_idle::{MelvorDlc, MelvorIdle};
pub use pokemon_go::PokemonGo;
pub use splitgate::Splitgate;
pub use wingspan::{Wingspan, WingspanExpansion};

use crate::error::CatalogError;
use crate::options::{ContentPack, GameOptions};
use crate::provider::CatalogProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameId {
    Abyssus,
    Digseum,
    MagicTheGathering,
    MelvorIdle,
    PokemonGo,
    Splitgate,
    Wingspan,
}

/// Every option key some catalog binds.
pub const OPTION_KEYS: &[&str] = &[MelvorDlc::OPTION_KEY, WingspanExpansion::OPTION_KEY];

impl GameId {
    pub const ALL: [Self; 7] = [
        Self::Abyssus,
        Self::Digseum,
        Self::MagicTheGathering,
        Self::MelvorIdle,
        Self::PokemonGo,
        Self::Splitgate,
        Self::Wingspan,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Abyssus => "abyssus",
            Self::Digseum => "digseum",
            Self::MagicTheGathering => "magic_the_gathering",
            Self::MelvorIdle => "melvor_idle",
            Self::PokemonGo => "pokemon_go",
            Self::Splitgate => "splitgate",
            Self::Wingspan => "wingspan",
        }
    }

    /// Display name, matching the provider's identity.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abyssus => "Abyssus",
            Self::Digseum => "Digseum",
            Self::MagicTheGathering => "Magic the Gathering",
            Self::MelvorIdle => "Melvor Idle",
            Self::PokemonGo => "Pokemon Go",
            Self::Splitgate => "Splitgate",
            Self::Wingspan => "Wingspan",
        }
    }

    /// Construct the provider for this game, binding any options it
    /// recognises. Options for other games are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPack`] when a recognised option names
    /// a pack outside its closed list.
    pub fn build(self, options: &GameOptions) -> Result<Box<dyn CatalogProvider>, CatalogError> {
        let provider: Box<dyn CatalogProvider> = match self {
            Self::Abyssus => Box::new(Abyssus::new()),
            Self::Digseum => Box::new(Digseum::new()),
            Self::MagicTheGathering => Box::new(MagicTheGathering::new()),
            Self::MelvorIdle => Box::new(MelvorIdle::from_options(options)?),
            Self::PokemonGo => Box::new(PokemonGo::new()),
            Self::Splitgate => Box::new(Splitgate::new()),
            Self::Wingspan => Box::new(Wingspan::from_options(options)?),
        };
        Ok(provider)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameId {
    type Err = CatalogError;

    /// Accepts either the slug or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| {
                id.slug().eq_ignore_ascii_case(wanted) || id.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CatalogError::UnknownGame(wanted.to_string()))
    }
}

/// Build every provider in [`GameId::ALL`] order, warning about option
/// keys no catalog binds.
///
/// # Errors
///
/// Fails on the first provider whose options do not bind.
pub fn build_all(options: &GameOptions) -> Result<Vec<Box<dyn CatalogProvider>>, CatalogError> {
    let _ = options.unrecognized_keys(OPTION_KEYS);
    GameId::ALL.into_iter().map(|id| id.build(options)).collect()
}
