use crate::error::CatalogError;
use crate::platform::GameIdentity;
use crate::pool::Pool;
use crate::template::ObjectiveTemplate;
use rand::RngCore;
use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Capability set every game catalog implements.
///
/// Providers are immutable once built: the same configuration always yields
/// the same template lists in the same order. Pool resolution is
/// deterministic too, with the documented exception of Melvor Idle's
/// `random_range`.
pub trait CatalogProvider: Send + Sync {
    fn identity(&self) -> &GameIdentity;

    /// Gameplay objectives the host draws from.
    fn list_objective_templates(&self) -> Vec<ObjectiveTemplate>;

    /// Setup-time constraints applied once before objective selection.
    fn list_constraint_templates(&self) -> Vec<ObjectiveTemplate> {
        Vec::new()
    }

    /// Every pool name `resolve_pool` accepts.
    fn pool_names(&self) -> &'static [&'static str];

    /// Resolve a named pool to its candidates.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPool`] when `name` is not one of
    /// [`CatalogProvider::pool_names`].
    fn resolve_pool(&self, name: &str) -> Result<Pool, CatalogError>;

    /// Resolve a named pool, drawing any randomized pool from `rng`.
    ///
    /// Providers without randomized pools resolve exactly as
    /// [`CatalogProvider::resolve_pool`] does.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogProvider::resolve_pool`].
    fn resolve_pool_with(&self, name: &str, _rng: &mut dyn RngCore) -> Result<Pool, CatalogError> {
        self.resolve_pool(name)
    }
}

pub(crate) fn unknown_pool(identity: &GameIdentity, name: &str) -> CatalogError {
    CatalogError::UnknownPool {
        game: identity.name,
        pool: name.to_string(),
    }
}

#[derive(Serialize)]
struct CatalogSnapshot<'a> {
    identity: &'a GameIdentity,
    objectives: Vec<ObjectiveTemplate>,
    constraints: Vec<ObjectiveTemplate>,
}

/// Stable digest of a provider's identity and template lists.
///
/// Hosts can compare fingerprints to notice catalog changes between
/// sessions. Pools are not included, so randomized pools never perturb it.
///
/// # Panics
///
/// Never in practice: the snapshot has no maps with non-string keys and no
/// fallible `Serialize` impls.
#[must_use]
pub fn catalog_fingerprint(provider: &dyn CatalogProvider) -> u64 {
    let snapshot = CatalogSnapshot {
        identity: provider.identity(),
        objectives: provider.list_objective_templates(),
        constraints: provider.list_constraint_templates(),
    };
    let bytes = serde_json::to_vec(&snapshot)
        .expect("catalog snapshots hold only strings, integers and flags");
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&bytes);
    hasher.finish()
}
