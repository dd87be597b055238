mod common;
mod logic;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use keymaster_catalog::{ContentPack, GameId, MelvorDlc, WingspanExpansion};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::{load_options, split_csv};
use logic::{CatalogTester, GameResult, TesterSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary with sampled objectives
    Console,
    /// Machine-readable array of per-game results
    Json,
    /// Markdown tables for pasting into reviews
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "keymaster-tester", version)]
#[command(about = "Validates Keymaster catalogs and samples objectives the way a host would")]
struct Args {
    /// Games to check (comma-separated slugs or names, or "all")
    #[arg(long, default_value = "all")]
    games: String,

    /// List all available games and their options, then exit
    #[arg(long)]
    list_games: bool,

    /// JSON file of host options, e.g. {"melvor_idle_dlc_owned": ["Into the Abyss"]}
    #[arg(long)]
    options: Option<PathBuf>,

    /// Objectives to sample per game
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Seed for template and value draws
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_games(&args)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console || args.output.is_some() {
        announce_banner();
    }

    let start_time = Instant::now();
    let games = expand_games(&args.games)?;
    let options = load_options(args.options.as_deref())?;
    let tester = CatalogTester::new(
        options,
        TesterSettings {
            seed: args.seed,
            samples: args.samples,
            verbose: args.verbose,
        },
    );

    let results = tester.run(&games)?;
    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_games(args: &Args) -> Result<bool> {
    if !args.list_games {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available games:")?;
    for game in GameId::ALL {
        writeln!(output_target.writer(), "  {:22} - {}", game.slug(), game.name())?;
    }
    writeln!(output_target.writer())?;
    writeln!(output_target.writer(), "Options:")?;
    write_option_help::<MelvorDlc>(output_target.writer())?;
    write_option_help::<WingspanExpansion>(output_target.writer())?;
    output_target.flush_inner()?;
    Ok(true)
}

fn write_option_help<P: ContentPack>(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "  {:28} - {} [{}]",
        P::OPTION_KEY,
        P::DISPLAY_NAME,
        P::valid_keys().join(", ")
    )
}

fn announce_banner() {
    println!("{}", "🗝️  Keymaster Catalog Tester".bright_cyan().bold());
    println!("{}", "============================".cyan());
}

fn expand_games(games_arg: &str) -> Result<Vec<GameId>> {
    let tokens = split_csv(games_arg);
    if tokens.is_empty() {
        bail!("no games selected");
    }
    if tokens.iter().any(|token| token.eq_ignore_ascii_case("all")) {
        return Ok(GameId::ALL.to_vec());
    }
    let mut games = Vec::new();
    for token in tokens {
        let game: GameId = token
            .parse()
            .with_context(|| format!("unknown game {token:?}, try --list-games"))?;
        if !games.contains(&game) {
            games.push(game);
        }
    }
    Ok(games)
}

fn write_reports(args: &Args, results: &[GameResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(&mut output_target, results)?;
        }
        ReportFormat::Console => {
            logic::reports::generate_console_report(
                &mut output_target,
                results,
                start_time.elapsed(),
            )?;
            let duration = start_time.elapsed();
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
