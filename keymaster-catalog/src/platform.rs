use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms a game can be played on, as understood by the host generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    /// Android
    And,
    Board,
    Card,
    /// iOS
    Ios,
    Pc,
    Ps4,
    Ps5,
    /// Nintendo Switch
    Sw,
    /// Xbox One
    Xone,
}

impl Platform {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Board => "BOARD",
            Self::Card => "CARD",
            Self::Ios => "IOS",
            Self::Pc => "PC",
            Self::Ps4 => "PS4",
            Self::Ps5 => "PS5",
            Self::Sw => "SW",
            Self::Xone => "XONE",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identity block every catalog provider exposes to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameIdentity {
    pub name: &'static str,
    pub platform: Platform,
    pub platforms_other: &'static [Platform],
    pub is_adult_only_or_unrated: bool,
}

impl GameIdentity {
    /// Primary platform followed by the alternates, in declaration order.
    #[must_use]
    pub fn all_platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::with_capacity(self.platforms_other.len() + 1);
        platforms.push(self.platform);
        platforms.extend_from_slice(self.platforms_other);
        platforms
    }

    #[must_use]
    pub fn runs_on(&self, platform: Platform) -> bool {
        self.platform == platform || self.platforms_other.contains(&platform)
    }
}
