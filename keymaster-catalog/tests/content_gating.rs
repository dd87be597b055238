use keymaster_catalog::games::{digseum, melvor_idle, wingspan};
use keymaster_catalog::{
    CatalogProvider, ContentPack, Digseum, MelvorDlc, MelvorIdle, PackSet, Pool, Wingspan,
    WingspanExpansion,
};

const MELVOR_DLC_SKILLS: &[&str] = &["Archaeology", "Cartography", "Corruption", "Harvesting"];

fn values(provider: &dyn CatalogProvider, pool: &str) -> Vec<String> {
    match provider.resolve_pool(pool).unwrap() {
        Pool::Values(values) => values,
        Pool::Range(range) => panic!("{pool} resolved to range {range:?}"),
    }
}

/// Asserts that the full configuration is the base list followed by each
/// pack's extension in declaration order.
fn assert_ordered_extension<P, F>(pool: &str, build: F)
where
    P: ContentPack,
    F: Fn(PackSet<P>) -> Box<dyn CatalogProvider>,
{
    let base = values(build(PackSet::none()).as_ref(), pool);
    let full = values(build(PackSet::all()).as_ref(), pool);
    assert!(full.starts_with(&base), "{pool}: base is not a prefix");

    let mut expected = base.clone();
    for pack in P::ALL {
        let single = values(build(PackSet::of(&[*pack])).as_ref(), pool);
        assert!(single.starts_with(&base), "{pool}: {pack:?} drops base entries");
        expected.extend_from_slice(&single[base.len()..]);
    }
    assert_eq!(full, expected, "{pool}: extensions out of order");
}

fn melvor_with(dlc: PackSet<MelvorDlc>) -> Box<dyn CatalogProvider> {
    Box::new(MelvorIdle::new(dlc))
}

fn wingspan_with(expansions: PackSet<WingspanExpansion>) -> Box<dyn CatalogProvider> {
    Box::new(Wingspan::new(expansions))
}

#[test]
fn melvor_gated_pools_extend_in_release_order() {
    for pool in [
        melvor_idle::pools::LEVELS,
        melvor_idle::pools::LATE_SKILL_LEVELS,
        melvor_idle::pools::COMBAT_SKILLS,
        melvor_idle::pools::NON_COMBAT_SKILLS,
        melvor_idle::pools::SKILLS,
        melvor_idle::pools::BOSSES,
        melvor_idle::pools::DUNGEONS,
        melvor_idle::pools::EVENTS,
        melvor_idle::pools::MONSTERS,
    ] {
        assert_ordered_extension(pool, melvor_with);
    }
}

#[test]
fn wingspan_food_extends_with_oceania() {
    assert_ordered_extension(wingspan::pools::FOOD_TYPES, wingspan_with);
}

#[test]
fn melvor_without_dlc_has_no_dlc_content_in_late_game() {
    let game = MelvorIdle::new(PackSet::none());
    let late = values(&game, melvor_idle::pools::LATE_SKILL_LEVELS);
    assert_eq!(late, ["50", "60", "70", "80", "90", "99"]);
    assert!(!late.iter().any(|level| level == "110" || level == "120"));

    let skills = values(&game, melvor_idle::pools::SKILLS);
    for dlc_skill in MELVOR_DLC_SKILLS {
        assert!(!skills.iter().any(|skill| skill == dlc_skill));
    }

    let late_templates: Vec<_> = game
        .list_objective_templates()
        .into_iter()
        .filter(|template| template.is_time_consuming)
        .collect();
    assert!(late_templates.iter().all(|template| {
        template
            .bindings
            .iter()
            .all(|binding| binding.pool != melvor_idle::pools::INTO_THE_ABYSS_SKILLS)
    }));
}

#[test]
fn melvor_pools_reflect_each_call() {
    let abyss = MelvorIdle::new(PackSet::of(&[MelvorDlc::IntoTheAbyss]));
    let first = values(&abyss, melvor_idle::pools::COMBAT_SKILLS);
    let second = values(&abyss, melvor_idle::pools::COMBAT_SKILLS);
    assert_eq!(first, second);
    assert_eq!(first.last().map(String::as_str), Some("Corruption"));
}

#[test]
fn digseum_prestige_is_one_through_four() {
    let pool = Digseum::new()
        .resolve_pool(digseum::pools::PRESTIGE)
        .unwrap();
    let range = pool.as_range().unwrap();
    assert_eq!((range.start, range.stop, range.step), (1, 5, 1));
    assert_eq!(pool.candidates(), ["1", "2", "3", "4"]);
}
