use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rl_snake::game::{load_config, GameConfig};
use rl_snake::modes::{EvaluateConfig, EvaluateMode};
use rl_snake::rl::{GreedyPolicy, Policy, RandomPolicy};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rl_snake")]
#[command(version, about = "Evaluate policies on the RL Snake environment")]
struct Cli {
    /// Policy that picks the actions
    #[arg(long, default_value = "greedy")]
    policy: PolicyKind,

    /// Number of episodes to play
    #[arg(long, default_value = "100")]
    episodes: usize,

    /// JSON file with a game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Seed for food placement and the random policy
    #[arg(long)]
    seed: Option<u64>,

    /// Cut episodes short after this many steps
    #[arg(long, default_value = "200")]
    max_steps: u32,

    /// Milliseconds between ticks (0 runs unpaced)
    #[arg(long, default_value = "0")]
    tick_ms: u64,
}

#[derive(Clone, ValueEnum)]
enum PolicyKind {
    /// Move toward the best observed neighbour
    Greedy,
    /// Uniformly random actions
    Random,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let game_config = load_game_config(&cli)?;

    let mut eval_config = EvaluateConfig::new(cli.episodes, game_config);
    eval_config.max_steps = (cli.max_steps > 0).then_some(cli.max_steps);
    eval_config.tick_interval = (cli.tick_ms > 0).then(|| Duration::from_millis(cli.tick_ms));

    match cli.policy {
        PolicyKind::Greedy => evaluate(eval_config, GreedyPolicy).await,
        PolicyKind::Random => evaluate(eval_config, RandomPolicy::new(cli.seed)).await,
    }
}

async fn evaluate<P: Policy>(config: EvaluateConfig, policy: P) -> Result<()> {
    let mut mode = EvaluateMode::new(config, policy)?;

    // Ctrl+C stops the run after the current step
    let stop = mode.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop.store(true, Ordering::Relaxed);
        }
    });

    let metrics = mode.run().await?;
    println!("{}", metrics.format_summary());

    Ok(())
}

fn load_game_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}
