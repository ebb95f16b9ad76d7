use anyhow::Context;
use clap::{Parser, Subcommand};
use game_matcher::{Candidate, ConfigOverride, MatchResult, MatchingEngine};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game-match")]
#[command(about = "Fuzzy game matcher CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with a partial matching config
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Match one or more queries against a candidate list
    Search {
        /// Search queries
        #[arg(required = true)]
        queries: Vec<String>,

        /// JSON array of candidates ({"id", "title", "description"?, "tags"?})
        #[arg(short = 'g', long, default_value = "games.json")]
        candidates: PathBuf,

        /// Minimum similarity (0.0 - 1.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum results per query
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Compare text without lower-casing
        #[arg(long)]
        case_sensitive: bool,

        /// Exact matching only
        #[arg(long)]
        exact: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

fn load_override(path: Option<&Path>) -> anyhow::Result<ConfigOverride> {
    let Some(path) = path else {
        return Ok(ConfigOverride::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ConfigOverride::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
}

fn load_candidates(path: &Path) -> anyhow::Result<Vec<Candidate>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading candidates {}", path.display()))?;
    Candidate::list_from_json(&json)
        .with_context(|| format!("parsing candidates {}", path.display()))
}

fn print_matches(query: &str, matches: &[MatchResult]) {
    println!("\n🔍 {}", query);

    if matches.is_empty() {
        println!("   No match");
        return;
    }

    for (i, m) in matches.iter().enumerate() {
        println!("   {}. {}", i + 1, m.display());
        for (field, score) in m.matched_fields.iter() {
            println!("      {:<12} {:.3}", field, score);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let base = load_override(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            queries,
            candidates,
            threshold,
            max_results,
            case_sensitive,
            exact,
            json,
        } => {
            let mut config_override = base;
            if let Some(threshold) = threshold {
                config_override = config_override.with_threshold(threshold);
            }
            if let Some(max_results) = max_results {
                config_override = config_override.with_max_results(max_results);
            }
            if case_sensitive {
                config_override = config_override.with_case_sensitive(true);
            }
            if exact {
                config_override = config_override.with_fuzzy_match(false);
            }

            let engine = MatchingEngine::with_override(&config_override)?;
            let games = load_candidates(&candidates)?;
            tracing::info!("Loaded {} candidates from {}", games.len(), candidates.display());

            let batch = engine.batch_match_games(&queries, &games);

            if json {
                println!("{}", serde_json::to_string_pretty(&batch)?);
            } else {
                println!("📋 {} candidates, {}", games.len(), engine.config());
                for entry in &batch {
                    print_matches(&entry.query, &entry.matches);
                }
                println!(
                    "\n✅ {} matches across {} queries",
                    batch.total_matches(),
                    batch.len()
                );
            }
        }

        Commands::Config => {
            let engine = MatchingEngine::with_override(&base)?;
            println!("{}", serde_json::to_string_pretty(engine.config())?);
        }
    }

    Ok(())
}
