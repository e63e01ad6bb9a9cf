//! rpick command-line front end.
//!
//! Runs the GA until Ctrl-C (or `--max-generations`), or the brute-force
//! search with `--brute-force`.

use anyhow::{Context, Result};
use clap::Parser;
use rpick::brute_force;
use rpick::config::RpickConfig;
use rpick::ga::{GaRunner, GenerationStats};
use rpick::network::Network;
use rpick::problem::ResistorProblem;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "rpick",
    about = "Pick catalog resistors whose series/parallel combination approximates a target value"
)]
struct Cli {
    /// JSON configuration file (catalog, population size, mutation rate)
    config: PathBuf,

    /// Target resistance in Ohms
    target: u32,

    /// Random seed for a reproducible GA run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the GA after this many generations instead of waiting for Ctrl-C
    #[arg(long)]
    max_generations: Option<usize>,

    /// Run the exhaustive 2/3-resistor search instead of the GA
    #[arg(long)]
    brute_force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = RpickConfig::from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let catalog = config.catalog()?;
    info!(
        parts = catalog.len(),
        population = config.population_size,
        mutation_rate = config.mutation_rate,
        "loaded configuration"
    );
    info!("Targeting {} Ohm", cli.target);

    if cli.brute_force {
        let result = brute_force::search(cli.target, &catalog.values())?;
        println!("{result}");
        return Ok(());
    }

    let mut ga_config = config.ga_config();
    ga_config.seed = cli.seed;
    ga_config.max_generations = cli.max_generations;

    let cancel = Arc::new(AtomicBool::new(false));
    let listener = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupted, finishing current generation");
            listener.store(true, Ordering::Relaxed);
        }
    });

    let problem = ResistorProblem::new(catalog, cli.target);
    let result = tokio::task::spawn_blocking(move || {
        GaRunner::run_with_progress(
            &problem,
            &ga_config,
            Some(cancel),
            |stats: &GenerationStats<Network>| {
                info!(
                    "Generation {} | {:.1}% duplicates | {}",
                    stats.generation, stats.duplicate_ratio, stats.best
                );
            },
        )
    })
    .await
    .context("GA worker panicked")??;

    println!("Stopped at generation {}", result.generations);
    println!("Duplicates: {:.1}%", result.duplicate_ratio);
    for (idx, network) in result.population.iter().enumerate() {
        println!("{idx} {network}");
    }
    println!("Best result is: {}", result.best);

    Ok(())
}
