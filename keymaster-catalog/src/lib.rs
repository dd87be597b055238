//! Keymaster Catalog
//!
//! Per-game objective template catalogs for Keymaster's Keep style
//! randomizers. Each game implements [`CatalogProvider`]: a list of
//! parameterized challenge templates plus the named pools that fill their
//! placeholders. Selection, weighting and rendering belong to the host.

pub mod buckets;
pub mod error;
pub mod games;
pub mod options;
pub mod platform;
pub mod pool;
pub mod provider;
pub mod template;
pub mod validate;

// Re-export commonly used types
pub use buckets::{Bucket, WeightedBuckets};
pub use error::CatalogError;
pub use games::{
    Abyssus, Digseum, GameId, MagicTheGathering, MelvorDlc, MelvorIdle, PokemonGo, Splitgate,
    OPTION_KEYS, Wingspan, WingspanExpansion, build_all,
};
pub use options::{ContentPack, GameOptions, PackSet};
pub use platform::{GameIdentity, Platform};
pub use pool::{NumericRange, Pool, RangeIter};
pub use provider::{CatalogProvider, catalog_fingerprint};
pub use template::{BindingSet, ObjectiveTemplate, PoolBinding, placeholder_tokens};
pub use validate::{ValidationReport, ValidationSummary, validate_provider};
