use keymaster_catalog::{
    CatalogProvider, ContentPack, GameId, GameOptions, MelvorDlc, ObjectiveTemplate, PackSet,
    WingspanExpansion, build_all, catalog_fingerprint, placeholder_tokens, validate_provider,
};

fn providers() -> Vec<Box<dyn CatalogProvider>> {
    build_all(&GameOptions::new()).unwrap()
}

fn without_packs() -> GameOptions {
    GameOptions::new()
        .with(MelvorDlc::OPTION_KEY, Vec::<String>::new())
        .with(WingspanExpansion::OPTION_KEY, Vec::<String>::new())
}

fn all_templates(provider: &dyn CatalogProvider) -> Vec<ObjectiveTemplate> {
    let mut templates = provider.list_objective_templates();
    templates.extend(provider.list_constraint_templates());
    templates
}

#[test]
fn every_provider_passes_validation() {
    for options in [GameOptions::new(), without_packs()] {
        for provider in build_all(&options).unwrap() {
            let report = validate_provider(provider.as_ref());
            assert!(
                report.is_clean(),
                "{} has content issues: {:#?}",
                report.game,
                report.issues
            );
        }
    }
}

#[test]
fn labels_and_bindings_match_in_both_directions() {
    for provider in providers() {
        for template in all_templates(provider.as_ref()) {
            let tokens = placeholder_tokens(template.label);
            for token in &tokens {
                assert!(
                    template.binding(token).is_some(),
                    "{}: \"{}\" leaves {token} unbound",
                    provider.identity().name,
                    template.label
                );
            }
            for binding in &template.bindings {
                assert!(
                    tokens.contains(&binding.token),
                    "{}: \"{}\" binds unused {}",
                    provider.identity().name,
                    template.label,
                    binding.token
                );
            }
        }
    }
}

#[test]
fn every_named_pool_is_non_empty_by_default() {
    for provider in providers() {
        for name in provider.pool_names() {
            let pool = provider.resolve_pool(name).unwrap();
            assert!(
                !pool.is_empty(),
                "{} pool {name} is empty",
                provider.identity().name
            );
        }
    }
}

#[test]
fn template_weights_are_positive() {
    for provider in providers() {
        for template in provider.list_objective_templates() {
            assert!(template.weight > 0, "{}", template.label);
        }
        for template in provider.list_constraint_templates() {
            assert_eq!(template.weight, 1);
            assert!(!template.is_time_consuming);
            assert!(!template.is_difficult);
        }
    }
}

#[test]
fn template_lists_are_idempotent() {
    for provider in providers() {
        assert_eq!(
            provider.list_objective_templates(),
            provider.list_objective_templates()
        );
        assert_eq!(
            provider.list_constraint_templates(),
            provider.list_constraint_templates()
        );
    }
}

#[test]
fn fingerprints_are_stable_across_builds() {
    let first: Vec<u64> = providers()
        .iter()
        .map(|provider| catalog_fingerprint(provider.as_ref()))
        .collect();
    let second: Vec<u64> = providers()
        .iter()
        .map(|provider| catalog_fingerprint(provider.as_ref()))
        .collect();
    assert_eq!(first, second);

    let mut unique = first.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), GameId::ALL.len());
}

#[test]
fn fingerprint_tracks_gated_templates() {
    let full = GameId::MelvorIdle.build(&GameOptions::new()).unwrap();
    let bare = GameId::MelvorIdle.build(&without_packs()).unwrap();
    assert_ne!(
        catalog_fingerprint(full.as_ref()),
        catalog_fingerprint(bare.as_ref())
    );
    // Wingspan only gates a pool, which the fingerprint leaves out.
    let full = GameId::Wingspan.build(&GameOptions::new()).unwrap();
    let bare = GameId::Wingspan.build(&without_packs()).unwrap();
    assert_eq!(
        catalog_fingerprint(full.as_ref()),
        catalog_fingerprint(bare.as_ref())
    );
}

#[test]
fn unknown_pool_names_are_rejected() {
    for provider in providers() {
        assert!(provider.resolve_pool("no_such_pool").is_err());
    }
}

#[test]
fn pack_sets_default_to_everything() {
    assert_eq!(
        GameOptions::new().pack_set::<MelvorDlc>().unwrap(),
        PackSet::all()
    );
    assert_eq!(
        GameOptions::new()
            .pack_set::<WingspanExpansion>()
            .unwrap()
            .len(),
        3
    );
}
