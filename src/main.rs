use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use war_sim::core::{SimConfig, DEFAULT_CARD_COUNT, DEFAULT_GAMES, DEFAULT_TURN_THRESHOLD};
use war_sim::sim::BatchRunner;

#[derive(Parser, Debug)]
#[command(name = "war-sim")]
#[command(about = "Simulate many games of War and report how long they take")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    games: u32,

    /// Number of distinct card ranks (must be even)
    #[arg(short, long, default_value_t = DEFAULT_CARD_COUNT)]
    cards: u32,

    /// Games still running after this many turns are classified as too long
    #[arg(short, long, default_value_t = DEFAULT_TURN_THRESHOLD)]
    threshold: u32,

    /// Master seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log every turn of every game at debug level
    #[arg(long)]
    trace: bool,

    /// Spread games across all cores
    #[arg(long)]
    parallel: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // --trace is useless below debug, so raise the default level for it
    let default_level = if args.trace { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("invalid log level {default_level:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = SimConfig::new()
        .with_games(args.games)
        .with_card_count(args.cards)
        .with_turn_threshold(args.threshold)
        .with_seed(seed)
        .with_trace(args.trace)
        .with_parallel(args.parallel);

    let runner = BatchRunner::new(config).context("invalid simulation config")?;
    let summary = runner.run();
    info!(seed, "Simulation complete");

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        println!();
        println!("{summary}");
    }

    Ok(())
}
