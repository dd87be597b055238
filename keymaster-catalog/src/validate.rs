//! Static content checks run before a host draws from a catalog.

use crate::error::CatalogError;
use crate::provider::CatalogProvider;
use crate::template::{ObjectiveTemplate, placeholder_tokens};
use log::debug;
use serde::Serialize;

/// Every content problem found in one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub game: &'static str,
    pub templates_checked: usize,
    pub pools_checked: usize,
    pub issues: Vec<CatalogError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] carrying every issue when the
    /// report is not clean.
    pub fn into_result(self) -> Result<(), CatalogError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation {
                game: self.game,
                issues: self.issues,
            })
        }
    }

    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            game: self.game,
            templates_checked: self.templates_checked,
            pools_checked: self.pools_checked,
            issues: self.issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Serializable view of a [`ValidationReport`] for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub game: &'static str,
    pub templates_checked: usize,
    pub pools_checked: usize,
    pub issues: Vec<String>,
}

/// Check every template and named pool a provider exposes.
#[must_use]
pub fn validate_provider(provider: &dyn CatalogProvider) -> ValidationReport {
    let game = provider.identity().name;
    let objectives = provider.list_objective_templates();
    let constraints = provider.list_constraint_templates();
    let mut issues = Vec::new();

    for template in objectives.iter().chain(&constraints) {
        check_template(provider, template, &mut issues);
    }

    for &name in provider.pool_names() {
        match provider.resolve_pool(name) {
            Ok(pool) if pool.is_empty() => issues.push(CatalogError::EmptyPool {
                game,
                label: String::new(),
                token: String::new(),
                pool: name,
            }),
            Ok(_) => {}
            Err(err) => issues.push(err),
        }
    }

    debug!(
        "validated {game}: {} templates, {} pools, {} issue(s)",
        objectives.len() + constraints.len(),
        provider.pool_names().len(),
        issues.len()
    );

    ValidationReport {
        game,
        templates_checked: objectives.len() + constraints.len(),
        pools_checked: provider.pool_names().len(),
        issues,
    }
}

fn check_template(
    provider: &dyn CatalogProvider,
    template: &ObjectiveTemplate,
    issues: &mut Vec<CatalogError>,
) {
    let game = provider.identity().name;
    let label = template.label;

    if template.weight == 0 {
        issues.push(CatalogError::ZeroWeight {
            game,
            label: label.to_string(),
        });
    }

    let tokens = placeholder_tokens(label);
    for token in &tokens {
        if template.binding(token).is_none() {
            issues.push(CatalogError::UnboundPlaceholder {
                game,
                label: label.to_string(),
                token: (*token).to_string(),
            });
        }
    }

    for binding in &template.bindings {
        if !tokens.contains(&binding.token) {
            issues.push(CatalogError::UnusedBinding {
                game,
                label: label.to_string(),
                token: binding.token.to_string(),
            });
        }

        let pool = match provider.resolve_pool(binding.pool) {
            Ok(pool) => pool,
            Err(err) => {
                issues.push(err);
                continue;
            }
        };

        if pool.is_empty() {
            issues.push(CatalogError::EmptyPool {
                game,
                label: label.to_string(),
                token: binding.token.to_string(),
                pool: binding.pool,
            });
        } else if binding.arity == 0 || usize::from(binding.arity) > pool.len() {
            issues.push(CatalogError::InsufficientCandidates {
                game,
                label: label.to_string(),
                token: binding.token.to_string(),
                pool: binding.pool,
                arity: binding.arity,
                available: pool.len(),
            });
        }
    }
}
