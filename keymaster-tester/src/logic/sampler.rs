//! A minimal stand-in for the host generator: pick a template by weight,
//! draw distinct values for each binding and substitute them into the label.

use anyhow::{Context, Result, bail};
use keymaster_catalog::{Bucket, CatalogProvider, ObjectiveTemplate, Pool, WeightedBuckets};
use rand::Rng;
use rand::seq::index;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampledObjective {
    pub label: String,
    pub rendered: String,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
    pub weight: u32,
}

/// Choose one template with probability proportional to its weight.
pub fn choose_template<'t, R>(
    templates: &'t [ObjectiveTemplate],
    rng: &mut R,
) -> Result<&'t ObjectiveTemplate>
where
    R: Rng + ?Sized,
{
    let buckets = WeightedBuckets::new(
        templates
            .iter()
            .map(|template| Bucket {
                share: template.weight,
                value: template,
            })
            .collect(),
    )
    .context("no template carries a positive weight")?;
    Ok(*buckets.choose(rng))
}

/// Draw `arity` distinct candidates from `pool`, in draw order.
pub fn draw_distinct<R>(pool: &Pool, arity: u8, rng: &mut R) -> Result<Vec<String>>
where
    R: Rng + ?Sized,
{
    let wanted = usize::from(arity);
    if wanted > pool.len() {
        bail!(
            "cannot draw {wanted} distinct values from a pool of {}",
            pool.len()
        );
    }
    index::sample(rng, pool.len(), wanted)
        .into_iter()
        .map(|i| {
            pool.get(i)
                .with_context(|| format!("pool index {i} out of bounds"))
        })
        .collect()
}

/// Fill every binding of `template` and render the label.
///
/// Randomized pools draw from `rng` too, so a seeded stream reproduces the
/// whole objective.
pub fn fill_template<R>(
    provider: &dyn CatalogProvider,
    template: &ObjectiveTemplate,
    rng: &mut R,
) -> Result<SampledObjective>
where
    R: Rng,
{
    let mut values = HashMap::new();
    for binding in &template.bindings {
        let pool = provider.resolve_pool_with(binding.pool, &mut *rng)?;
        let drawn = draw_distinct(&pool, binding.arity, rng).with_context(|| {
            format!(
                "{}: filling {} in \"{}\"",
                provider.identity().name,
                binding.token,
                template.label
            )
        })?;
        values.insert(binding.token, drawn.join(", "));
    }
    Ok(SampledObjective {
        label: template.label.to_string(),
        rendered: template.render(&values),
        is_time_consuming: template.is_time_consuming,
        is_difficult: template.is_difficult,
        weight: template.weight,
    })
}

/// Sample `count` objectives, plus one fill of every constraint template.
pub fn sample_provider<R>(
    provider: &dyn CatalogProvider,
    count: usize,
    rng: &mut R,
) -> Result<(Vec<SampledObjective>, Vec<SampledObjective>)>
where
    R: Rng,
{
    let constraints = provider
        .list_constraint_templates()
        .iter()
        .map(|template| fill_template(provider, template, rng))
        .collect::<Result<Vec<_>>>()?;

    let templates = provider.list_objective_templates();
    let mut objectives = Vec::with_capacity(count);
    for _ in 0..count {
        let template = choose_template(&templates, rng)?;
        objectives.push(fill_template(provider, template, rng)?);
    }
    Ok((constraints, objectives))
}
