//! Host-supplied configuration and content-pack ownership.
//!
//! Options arrive as a flat map of option key to selected members, usually
//! from JSON. Providers that recognise an option bind it into a typed
//! [`PackSet`] once at construction; unknown members are rejected there.

use crate::error::CatalogError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// A closed enumeration of optional content packs (DLC, expansions).
pub trait ContentPack: Copy + Ord + Debug + 'static {
    /// Option key the host uses for this set, e.g. `melvor_idle_dlc_owned`.
    const OPTION_KEY: &'static str;
    /// Human readable option name.
    const DISPLAY_NAME: &'static str;
    /// Every legal member, in extension order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    #[must_use]
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|pack| pack.key() == key)
    }

    #[must_use]
    fn valid_keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|pack| pack.key()).collect()
    }
}

/// Immutable set of owned packs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSet<P: ContentPack> {
    owned: BTreeSet<P>,
}

impl<P: ContentPack> PackSet<P> {
    #[must_use]
    pub fn all() -> Self {
        Self {
            owned: P::ALL.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            owned: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn of(packs: &[P]) -> Self {
        Self {
            owned: packs.iter().copied().collect(),
        }
    }

    /// Bind a list of pack identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPack`] for the first identifier outside
    /// the closed list.
    pub fn from_keys<I, S>(keys: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut owned = BTreeSet::new();
        for key in keys {
            let key = key.as_ref();
            let Some(pack) = P::from_key(key) else {
                return Err(CatalogError::UnknownPack {
                    option: P::OPTION_KEY,
                    key: key.to_string(),
                    valid: P::valid_keys(),
                });
            };
            owned.insert(pack);
        }
        Ok(Self { owned })
    }

    #[must_use]
    pub fn contains(&self, pack: P) -> bool {
        self.owned.contains(&pack)
    }

    /// Owned packs in extension order, which is the order of `P::ALL`.
    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        P::ALL
            .iter()
            .copied()
            .filter(|pack| self.owned.contains(pack))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.iter().map(ContentPack::key).collect()
    }
}

impl<P: ContentPack> Default for PackSet<P> {
    fn default() -> Self {
        Self::all()
    }
}

/// Option values handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameOptions {
    values: BTreeMap<String, Vec<String>>,
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load option values from a JSON object of `key -> [members]`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Options`] when the JSON does not have that shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with<I, S>(mut self, key: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(key.to_string(), members.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// Option keys present in these options, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Keys no option in `known` accounts for, each logged with `warn!`.
    ///
    /// Hosts call this once after binding: a misspelt key would otherwise
    /// fall back to its option's default without notice.
    #[must_use]
    pub fn unrecognized_keys(&self, known: &[&str]) -> Vec<String> {
        let unknown: Vec<String> = self
            .keys()
            .filter(|key| !known.contains(key))
            .map(str::to_string)
            .collect();
        for key in &unknown {
            warn!("ignoring unrecognized option \"{key}\" (known: {})", known.join(", "));
        }
        unknown
    }

    /// Bind the pack set for `P`, defaulting to every pack when the host
    /// supplied nothing for its key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPack`] for members outside the closed list.
    pub fn pack_set<P: ContentPack>(&self) -> Result<PackSet<P>, CatalogError> {
        let packs = match self.get(P::OPTION_KEY) {
            Some(members) => PackSet::from_keys(members)?,
            None => PackSet::all(),
        };
        debug!("bound {} = [{}]", P::OPTION_KEY, packs.keys().join(", "));
        Ok(packs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Flavor {
        Salted,
        Sweet,
    }

    impl ContentPack for Flavor {
        const OPTION_KEY: &'static str = "flavors_owned";
        const DISPLAY_NAME: &'static str = "Flavors Owned";
        const ALL: &'static [Self] = &[Self::Salted, Self::Sweet];

        fn key(self) -> &'static str {
            match self {
                Self::Salted => "Salted",
                Self::Sweet => "Sweet",
            }
        }
    }

    #[test]
    fn missing_option_defaults_to_everything() {
        let packs = GameOptions::new().pack_set::<Flavor>().unwrap();
        assert_eq!(packs, PackSet::all());
        assert_eq!(packs.keys(), vec!["Salted", "Sweet"]);
    }

    #[test]
    fn explicit_empty_selection_owns_nothing() {
        let options = GameOptions::new().with("flavors_owned", Vec::<String>::new());
        let packs = options.pack_set::<Flavor>().unwrap();
        assert!(packs.is_empty());
        assert!(!packs.contains(Flavor::Sweet));
    }

    #[test]
    fn unknown_member_is_rejected_with_valid_list() {
        let options = GameOptions::new().with("flavors_owned", ["Sweet", "Sour"]);
        let err = options.pack_set::<Flavor>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownPack {
                option: "flavors_owned",
                key: "Sour".to_string(),
                valid: vec!["Salted", "Sweet"],
            }
        );
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let packs = PackSet::<Flavor>::from_keys(["Sweet", "Salted", "Sweet"]).unwrap();
        assert_eq!(packs.iter().collect::<Vec<_>>(), vec![Flavor::Salted, Flavor::Sweet]);
        assert_eq!(packs.len(), 2);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Wave {
        Second,
        First,
    }

    impl ContentPack for Wave {
        const OPTION_KEY: &'static str = "waves_owned";
        const DISPLAY_NAME: &'static str = "Waves Owned";
        const ALL: &'static [Self] = &[Self::First, Self::Second];

        fn key(self) -> &'static str {
            match self {
                Self::First => "First",
                Self::Second => "Second",
            }
        }
    }

    #[test]
    fn iteration_follows_all_table_not_variant_order() {
        let packs = PackSet::<Wave>::from_keys(["Second", "First"]).unwrap();
        assert_eq!(packs.iter().collect::<Vec<_>>(), vec![Wave::First, Wave::Second]);
        assert_eq!(packs.keys(), vec!["First", "Second"]);
        assert_eq!(PackSet::<Wave>::of(&[Wave::Second]).keys(), vec!["Second"]);
    }

    #[test]
    fn misspelt_option_keys_are_reported() {
        let options = GameOptions::new()
            .with("flavors_owned", ["Sweet"])
            .with("flavors_onwed", Vec::<String>::new());
        assert_eq!(
            options.unrecognized_keys(&[Flavor::OPTION_KEY]),
            vec!["flavors_onwed".to_string()]
        );
        assert!(
            GameOptions::new()
                .with("flavors_owned", ["Sweet"])
                .unrecognized_keys(&[Flavor::OPTION_KEY])
                .is_empty()
        );
    }

    #[test]
    fn options_parse_from_json() {
        let options = GameOptions::from_json(r#"{ "flavors_owned": ["Salted"] }"#).unwrap();
        assert_eq!(options.get("flavors_owned"), Some(&["Salted".to_string()][..]));
        assert_eq!(
            options.pack_set::<Flavor>().unwrap(),
            PackSet::of(&[Flavor::Salted])
        );
        assert!(matches!(
            GameOptions::from_json("[1, 2]"),
            Err(CatalogError::Options(_))
        ));
    }
}
