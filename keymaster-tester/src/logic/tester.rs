use anyhow::{Context, Result};
use colored::Colorize;
use keymaster_catalog::{
    GameId, GameOptions, ValidationSummary, catalog_fingerprint, validate_provider,
};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

use super::sampler::{SampledObjective, sample_provider};

#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub game: String,
    pub slug: String,
    pub passed: bool,
    pub fingerprint: String,
    pub objective_templates: usize,
    pub constraint_templates: usize,
    pub validation: ValidationSummary,
    pub constraints: Vec<SampledObjective>,
    pub samples: Vec<SampledObjective>,
    /// Sampling failures, empty when every draw succeeded.
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// Run settings shared by every game.
#[derive(Debug, Clone, Serialize)]
pub struct TesterSettings {
    pub seed: u64,
    pub samples: usize,
    pub verbose: bool,
}

pub struct CatalogTester {
    options: GameOptions,
    settings: TesterSettings,
}

impl CatalogTester {
    pub const fn new(options: GameOptions, settings: TesterSettings) -> Self {
        Self { options, settings }
    }

    pub fn run(&self, games: &[GameId]) -> Result<Vec<GameResult>> {
        games.iter().map(|&game| self.run_game(game)).collect()
    }

    pub fn run_game(&self, game: GameId) -> Result<GameResult> {
        let start = Instant::now();
        let provider = game
            .build(&self.options)
            .with_context(|| format!("building the {game} catalog"))?;

        if self.settings.verbose {
            println!("🧪 Checking {}", game.name().bright_white());
        }

        let report = validate_provider(provider.as_ref());
        for issue in &report.issues {
            warn!("{game}: {issue}");
        }

        let mut rng = ChaCha20Rng::seed_from_u64(self.settings.seed);
        rng.set_stream(stream_for(game));

        let mut failures = Vec::new();
        let (constraints, samples) = if report.is_clean() {
            match sample_provider(provider.as_ref(), self.settings.samples, &mut rng) {
                Ok(drawn) => drawn,
                Err(err) => {
                    failures.push(format!("{err:#}"));
                    (Vec::new(), Vec::new())
                }
            }
        } else {
            (Vec::new(), Vec::new())
        };

        let passed = report.is_clean() && failures.is_empty();
        info!(
            "{game}: {} issue(s), {} sample(s)",
            report.issues.len(),
            samples.len()
        );

        Ok(GameResult {
            game: game.name().to_string(),
            slug: game.slug().to_string(),
            passed,
            fingerprint: format!("{:016x}", catalog_fingerprint(provider.as_ref())),
            objective_templates: provider.list_objective_templates().len(),
            constraint_templates: provider.list_constraint_templates().len(),
            validation: report.summary(),
            constraints,
            samples,
            failures,
            duration: start.elapsed(),
        })
    }
}

/// Each game draws from its own ChaCha stream so selecting a subset of games
/// leaves the other games' samples unchanged.
fn stream_for(game: GameId) -> u64 {
    GameId::ALL
        .iter()
        .position(|candidate| *candidate == game)
        .and_then(|index| u64::try_from(index).ok())
        .unwrap_or_default()
}

mod duration_serde {
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymaster_catalog::{ContentPack, MelvorDlc};

    fn settings(samples: usize) -> TesterSettings {
        TesterSettings {
            seed: 1337,
            samples,
            verbose: false,
        }
    }

    #[test]
    fn every_game_passes_with_default_options() {
        let tester = CatalogTester::new(GameOptions::default(), settings(5));
        let results = tester.run(&GameId::ALL).unwrap();
        assert_eq!(results.len(), GameId::ALL.len());
        for result in &results {
            assert!(result.passed, "{} failed: {:?}", result.game, result.failures);
            assert_eq!(result.samples.len(), 5);
            assert_eq!(result.fingerprint.len(), 16);
        }
    }

    #[test]
    fn subset_runs_keep_per_game_streams() {
        let tester = CatalogTester::new(GameOptions::default(), settings(8));
        let all = tester.run(&GameId::ALL).unwrap();
        let single = tester.run(&[GameId::Splitgate]).unwrap();
        let from_all = all
            .iter()
            .find(|result| result.slug == "splitgate")
            .unwrap();
        assert_eq!(from_all.samples, single[0].samples);
    }

    #[test]
    fn melvor_reruns_repeat_with_the_same_seed() {
        let tester = CatalogTester::new(GameOptions::default(), settings(40));
        let first = tester.run(&[GameId::MelvorIdle]).unwrap();
        assert!(first[0].passed);
        for _ in 0..5 {
            let again = tester.run(&[GameId::MelvorIdle]).unwrap();
            assert_eq!(again[0].samples, first[0].samples);
            assert_eq!(again[0].constraints, first[0].constraints);
        }
    }

    #[test]
    fn subset_runs_match_full_runs_for_every_game() {
        let tester = CatalogTester::new(GameOptions::default(), settings(8));
        let all = tester.run(&GameId::ALL).unwrap();
        for (game, from_all) in GameId::ALL.iter().zip(&all) {
            let single = tester.run(&[*game]).unwrap();
            assert_eq!(from_all.samples, single[0].samples, "{game}");
        }
    }

    #[test]
    fn bad_options_abort_the_run() {
        let options = GameOptions::default().with(MelvorDlc::OPTION_KEY, ["Season Pass"]);
        let tester = CatalogTester::new(options, settings(1));
        assert!(tester.run(&[GameId::MelvorIdle]).is_err());
        assert!(tester.run(&[GameId::Digseum]).is_ok());
    }
}
