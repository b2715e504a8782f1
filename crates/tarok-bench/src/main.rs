use std::path::PathBuf;

use clap::Parser;

use tarok_bench::config::{ResolvedOutputs, SimulationConfig};
use tarok_bench::logging::init_logging;
use tarok_bench::simulation::SimulationRunner;

/// Random-play simulation harness for the tarok round engine.
#[derive(Debug, Parser)]
#[command(
    name = "tarok-bench",
    author,
    version,
    about = "Deterministic random-play tarok simulations"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/simulate.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of rounds to play.
    #[arg(long, value_name = "ROUNDS")]
    rounds: Option<usize>,

    /// Override the RNG seed the per-round seeds are drawn from.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the table size (3 or 4).
    #[arg(long, value_name = "PLAYERS")]
    players: Option<usize>,

    /// Exit after validating the configuration (no rounds are played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SimulationConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(rounds) = cli.rounds {
        config.rounds.count = rounds;
    }

    if let Some(seed) = cli.seed {
        config.rounds.seed = Some(seed);
    }

    if let Some(players) = cli.players {
        config.rounds.players = players;
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let rounds = config.rounds.count;
    let players = config.rounds.players;

    println!("Loaded configuration '{run_id}' ({rounds} rounds, {players} players)");

    if cli.validate_only {
        println!("Validation-only mode: simulation skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs, &run_id)?;
    let runner = SimulationRunner::new(config, outputs)?;
    let summary = runner.run()?;

    println!(
        "Simulation complete for '{run_id}': {} rounds → {} rows at {}",
        summary.rounds_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Trace log: {}", guard.trace_path.display());
    }

    Ok(())
}
